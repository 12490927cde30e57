// ============================================================================
// Amount Converter
// Configured facade over the encoder, decoder and formatter
// ============================================================================

use crate::display::format_amount;
use crate::domain::{ConverterConfig, FormatOptions, UpperCaseOptions};
use crate::interfaces::{ConversionEvent, EventHandler, Operation};
use crate::numeral::{decode, encode, surface};
use crate::numeric::{AmountError, AmountResult};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Amount converter with default options and an event sink.
///
/// Holds no mutable state; share it freely across threads through `Arc`.
pub struct AmountConverter {
    /// Defaults for calls that do not pass options
    config: ConverterConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl AmountConverter {
    /// Create a new converter. The configuration is not validated here;
    /// use [`create_from_config`](crate::engine::create_from_config) for that.
    pub fn new(config: ConverterConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    /// The converter's configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Write an amount as numerals with the configured options.
    ///
    /// Only `Overflow` is returned as an error; other failures are reported
    /// to the event handler and give `Ok(None)`.
    pub fn to_upper(&self, amount: impl Into<Option<Decimal>>) -> AmountResult<Option<String>> {
        self.to_upper_with(amount, self.config.upper)
    }

    /// Write an amount as numerals with explicit options.
    pub fn to_upper_with(
        &self,
        amount: impl Into<Option<Decimal>>,
        options: UpperCaseOptions,
    ) -> AmountResult<Option<String>> {
        let Some(amount) = amount.into() else {
            return Ok(None);
        };

        let result = encode(amount, options);
        match &result {
            Ok(numerals) => self.event_handler.on_event(ConversionEvent::Encoded {
                amount,
                numerals: numerals.clone(),
                timestamp: Utc::now(),
            }),
            Err(error) => self.reject(Operation::ToUpper, amount.to_string(), error.clone()),
        }

        surface(amount, result)
    }

    /// Read numerals back as an amount; `None` when unconvertible.
    pub fn to_lower<'a>(&self, text: impl Into<Option<&'a str>>) -> Option<Decimal> {
        let text = text.into()?;

        match decode(text) {
            Ok(amount) => {
                self.event_handler.on_event(ConversionEvent::Decoded {
                    numerals: text.to_string(),
                    amount,
                    timestamp: Utc::now(),
                });
                Some(amount)
            },
            Err(error) => {
                self.reject(Operation::ToLower, text.to_string(), error);
                None
            },
        }
    }

    /// Render an amount with the configured decimal places.
    pub fn format(&self, amount: impl Into<Option<Decimal>>) -> Option<String> {
        self.format_with_places(amount, self.config.format.decimal_places)
    }

    /// Render an amount with explicit decimal places.
    pub fn format_with_places(
        &self,
        amount: impl Into<Option<Decimal>>,
        decimal_places: u32,
    ) -> Option<String> {
        let amount = amount.into()?;

        match format_amount(amount, FormatOptions::new(decimal_places)) {
            Ok(text) => {
                self.event_handler.on_event(ConversionEvent::Formatted {
                    amount,
                    text: text.clone(),
                    timestamp: Utc::now(),
                });
                Some(text)
            },
            Err(error) => {
                self.reject(Operation::Format, amount.to_string(), error);
                None
            },
        }
    }

    fn reject(&self, operation: Operation, input: String, error: AmountError) {
        self.event_handler.on_event(ConversionEvent::Rejected {
            operation,
            input,
            error,
            timestamp: Utc::now(),
        });
    }
}

impl std::fmt::Debug for AmountConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmountConverter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
