// ============================================================================
// Display Module
// Locale-style grouped rendering of amounts ("1,234.56")
// ============================================================================

mod formatter;

pub use formatter::{format, format_amount, format_with_places, GROUPING_SEPARATOR, GROUP_SIZE};
