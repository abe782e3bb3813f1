pub mod descriptor;
pub mod selector;

pub use descriptor::{ActionTag, AffordanceKind, Badge, Descriptor, Icon};
pub use selector::select;
