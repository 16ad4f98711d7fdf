mod bom_expander;
mod composition_resolver;
mod view_assembler;

#[cfg(test)]
pub(crate) mod test_support;

pub use bom_expander::BomExpander;
pub use composition_resolver::{CompositionResolver, DEFAULT_RESOLUTION_TIMEOUT};
pub use view_assembler::ViewAssembler;
