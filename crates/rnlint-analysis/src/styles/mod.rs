//! Style analysis: matchers over single nodes, the per-file style registry,
//! reference resolution, and the helpers the style rules share.

pub mod constants;
pub mod inspect;
pub mod matchers;
pub mod references;
pub mod registry;
pub mod shorthand;

pub use constants::ConstantTable;
pub use inspect::{InspectValue, InspectedObject};
pub use matchers::{CollectionName, StyleSettings};
pub use references::{AliasTable, Reference, ReferenceCollector};
pub use registry::{CollectionOrigin, StyleDeclaration, StyleRegistry, UnusedCollection};
pub use shorthand::{SortOrder, SHORTHAND_PROPERTIES};
