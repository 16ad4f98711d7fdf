//! Read models for presenting resolved compositions
//!
//! These structs flatten and annotate the resolved trees so formatters do
//! not have to walk them again.

mod composition_read_model;
mod composition_read_model_builder;

pub use composition_read_model::{
    ComponentRowView, CompositionReadModel, CompositionView, ResolutionMetadataView,
};
pub use composition_read_model_builder::CompositionReadModelBuilder;
