mod depth_guard;

pub use depth_guard::{DepthGuard, MAX_COMPOSITION_DEPTH};
