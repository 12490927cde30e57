// ============================================================================
// Event Handler Interface
// Defines the contract for observing conversions
// ============================================================================

use crate::numeric::AmountError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Which conversion an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Amount -> numerals
    ToUpper,
    /// Numerals -> amount
    ToLower,
    /// Amount -> grouped digits
    Format,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::ToUpper => write!(f, "to_upper"),
            Operation::ToLower => write!(f, "to_lower"),
            Operation::Format => write!(f, "format"),
        }
    }
}

/// Events emitted by an amount converter
#[derive(Debug, Clone)]
pub enum ConversionEvent {
    /// Amount written as numerals
    Encoded {
        amount: Decimal,
        numerals: String,
        timestamp: DateTime<Utc>,
    },

    /// Numerals read back as an amount
    Decoded {
        numerals: String,
        amount: Decimal,
        timestamp: DateTime<Utc>,
    },

    /// Amount rendered as grouped digits
    Formatted {
        amount: Decimal,
        text: String,
        timestamp: DateTime<Utc>,
    },

    /// Conversion failed; `input` is the rendered input value
    Rejected {
        operation: Operation,
        input: String,
        error: AmountError,
        timestamp: DateTime<Utc>,
    },
}

impl ConversionEvent {
    /// When the event was produced.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            ConversionEvent::Encoded { timestamp, .. }
            | ConversionEvent::Decoded { timestamp, .. }
            | ConversionEvent::Formatted { timestamp, .. }
            | ConversionEvent::Rejected { timestamp, .. } => *timestamp,
        }
    }
}

/// Event handler trait for processing converter events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a conversion event
    fn on_event(&self, event: ConversionEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ConversionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ConversionEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        match &event {
            ConversionEvent::Rejected {
                operation,
                input,
                error,
                ..
            } => tracing::warn!("amount {} rejected {}: {}", operation, input, error),
            _ => tracing::debug!("amount converter event: {:?}", event),
        }
    }
}
