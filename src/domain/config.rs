// ============================================================================
// Conversion Configuration
// Options for numeral encoding and amount display
// ============================================================================

use crate::numeric::{AmountError, AmountResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest fractional digit count the display formatter can render.
pub const MAX_DECIMAL_PLACES: u32 = 28;

/// Default fractional digit count for display.
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

// ============================================================================
// Upper-Case (Numeral) Options
// ============================================================================

/// Options controlling how an amount is written as numerals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UpperCaseOptions {
    /// Append 整 when the amount has no jiao or fen
    pub need_even: bool,

    /// Write a 零 in the jiao place when jiao is zero but fen is not
    /// (1.03 -> 壹元零叁分 rather than 壹元叁分)
    pub with_zero_jiao: bool,
}

impl UpperCaseOptions {
    /// Create options from both flags
    pub const fn new(need_even: bool, with_zero_jiao: bool) -> Self {
        Self {
            need_even,
            with_zero_jiao,
        }
    }

    /// Builder method: Set whether 整 is appended
    pub const fn with_need_even(mut self, need_even: bool) -> Self {
        self.need_even = need_even;
        self
    }

    /// Builder method: Set whether a zero jiao is written
    pub const fn with_zero_jiao(mut self, with_zero_jiao: bool) -> Self {
        self.with_zero_jiao = with_zero_jiao;
        self
    }

    /// Invoice style: 整 suffix, no zero jiao. This is the default.
    pub const fn invoice() -> Self {
        Self::new(true, false)
    }

    /// Check style: 整 suffix and an explicit zero jiao
    pub const fn check() -> Self {
        Self::new(true, true)
    }

    /// Bare numerals: no 整 suffix, no zero jiao
    pub const fn plain() -> Self {
        Self::new(false, false)
    }
}

impl Default for UpperCaseOptions {
    fn default() -> Self {
        Self::invoice()
    }
}

// ============================================================================
// Display Options
// ============================================================================

/// Options for grouped plain-digit display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatOptions {
    /// Exact number of fractional digits to render
    pub decimal_places: u32,
}

impl FormatOptions {
    pub const fn new(decimal_places: u32) -> Self {
        Self { decimal_places }
    }

    /// Validate the options
    pub fn validate(&self) -> AmountResult<()> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(AmountError::InvalidScale(self.decimal_places));
        }
        Ok(())
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::new(DEFAULT_DECIMAL_PLACES)
    }
}

// ============================================================================
// Complete Converter Configuration
// ============================================================================

/// Configuration for an [`AmountConverter`](crate::engine::AmountConverter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConverterConfig {
    /// Numeral options used when none are given per call
    pub upper: UpperCaseOptions,

    /// Display options used when none are given per call
    pub format: FormatOptions,
}

impl ConverterConfig {
    /// Create a new configuration
    pub const fn new(upper: UpperCaseOptions, format: FormatOptions) -> Self {
        Self { upper, format }
    }

    /// Builder method: Set numeral options
    pub const fn with_upper(mut self, upper: UpperCaseOptions) -> Self {
        self.upper = upper;
        self
    }

    /// Builder method: Set display precision
    pub const fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.format.decimal_places = decimal_places;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> AmountResult<()> {
        self.format.validate()
    }

    /// Invoice configuration: 整 suffix, two display places
    pub const fn invoice() -> Self {
        Self::new(UpperCaseOptions::invoice(), FormatOptions::new(2))
    }

    /// Check configuration: 整 suffix with explicit zero jiao
    pub const fn check() -> Self {
        Self::new(UpperCaseOptions::check(), FormatOptions::new(2))
    }
}
