// ============================================================================
// Converter Factory
// Creates amount converters with validated configuration
// ============================================================================

use crate::domain::{ConverterConfig, UpperCaseOptions};
use crate::engine::AmountConverter;
use crate::interfaces::EventHandler;
use crate::numeric::AmountResult;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates an amount converter from configuration
///
/// # Arguments
/// * `config` - Converter configuration
/// * `event_handler` - Event handler for conversion events
///
/// # Returns
/// * `AmountResult<AmountConverter>` - Configured converter or `InvalidScale`
///
/// # Example
/// ```
/// use rmb_numerals::prelude::*;
/// use std::sync::Arc;
///
/// let config = ConverterConfig::invoice();
/// let converter = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// ```
pub fn create_from_config(
    config: ConverterConfig,
    event_handler: Arc<dyn EventHandler>,
) -> AmountResult<AmountConverter> {
    config.validate()?;
    Ok(AmountConverter::new(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating amount converters with fluent API
///
/// # Example
/// ```
/// use rmb_numerals::prelude::*;
/// use std::sync::Arc;
///
/// let converter = ConverterBuilder::new()
///     .need_even(false)
///     .with_zero_jiao(true)
///     .decimal_places(3)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConverterBuilder {
    config: ConverterConfig,
}

impl ConverterBuilder {
    /// Create a new builder with invoice defaults
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Numeral Options
    // ========================================================================

    /// Set whether 整 is appended to whole amounts
    pub fn need_even(mut self, need_even: bool) -> Self {
        self.config.upper.need_even = need_even;
        self
    }

    /// Set whether a zero jiao is written
    pub fn with_zero_jiao(mut self, with_zero_jiao: bool) -> Self {
        self.config.upper.with_zero_jiao = with_zero_jiao;
        self
    }

    /// Replace all numeral options
    pub fn upper_case_options(mut self, options: UpperCaseOptions) -> Self {
        self.config.upper = options;
        self
    }

    // ========================================================================
    // Display Options
    // ========================================================================

    /// Set display precision
    pub fn decimal_places(mut self, decimal_places: u32) -> Self {
        self.config.format.decimal_places = decimal_places;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Start from the check preset (整 suffix, explicit zero jiao)
    pub fn check_style() -> Self {
        Self {
            config: ConverterConfig::check(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the converter
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> AmountResult<AmountConverter> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ConverterConfig {
        &self.config
    }
}
