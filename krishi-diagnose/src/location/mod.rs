//! Location hierarchy and the cascading State → District → City selector

mod hierarchy;
mod selector;

pub use hierarchy::{DistrictEntry, LocationHierarchy, StateEntry};
pub use selector::{CascadingSelector, LocationLevel, LocationSelection};
