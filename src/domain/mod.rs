// ============================================================================
// Domain Models Module
// Configuration value objects shared by converters
// ============================================================================

pub mod config;

pub use config::{
    ConverterConfig, FormatOptions, UpperCaseOptions, DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES,
};
