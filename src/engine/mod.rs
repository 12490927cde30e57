// ============================================================================
// Engine Module
// Configured converters built on the numeral and display modules
// ============================================================================

mod converter;

pub mod factory;

pub use converter::AmountConverter;
pub use factory::{create_from_config, ConverterBuilder};
