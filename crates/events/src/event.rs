use chrono::{DateTime, Utc};

/// A domain-agnostic event.
///
/// Events are:
/// - **immutable** (treat them as facts about a committed mutation)
/// - **named** with a stable dotted identifier (e.g. `"book.patient.added"`)
/// - **timestamped** with the moment they were emitted
pub trait Event: Clone + core::fmt::Debug + Send + 'static {
    /// Stable event name/type identifier.
    fn event_type(&self) -> &'static str;

    /// When the event occurred.
    fn occurred_at(&self) -> DateTime<Utc>;
}
