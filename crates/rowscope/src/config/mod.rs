//! Display configuration: types, built-in presets, inference, persistence.

mod builtin;
mod display;
mod infer;
mod persistence;

pub use builtin::builtin_config;
pub use display::{DisplayConfig, FilterField, MetadataField, StatDefinition, StatKind};
pub use infer::{format_label, generate_default_config};
