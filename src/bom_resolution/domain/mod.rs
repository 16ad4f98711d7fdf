pub mod identifiers;
pub mod product_record;
pub mod resolution_cache;
pub mod view_node;

pub use identifiers::{Barcode, TenantId};
pub use product_record::{display_name, ComponentEdge, LocalizedName, ProductRecord};
pub use resolution_cache::{CachedSubtree, ResolutionCache};
pub use view_node::ViewNode;
