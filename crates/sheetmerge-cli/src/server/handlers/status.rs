//! Service availability handler.

/// Plain-text availability message for the service root.
pub async fn availability() -> &'static str {
    "Sheetmerge service is running"
}
