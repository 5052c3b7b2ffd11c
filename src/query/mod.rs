//! Filter specification, predicate evaluation, URL-state codec, and result
//! ordering.

pub mod codec;
pub mod predicate;
pub mod sort;
pub mod spec;

pub use codec::{decode, encode, SearchState};
pub use predicate::matches;
pub use sort::sort_listings;
pub use spec::{FilterSpec, PriceBracket};
