//! Attribute storage and the filters evaluated against it.

pub mod attribute_map;
pub mod filter;

pub use attribute_map::AttributeMap;
pub use filter::{Condition, Filter, Matcher};
