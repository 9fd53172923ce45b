//! Stateful page session: event intake, runtime state and notifications.

/// Session lifecycle, input handling and queries.
pub mod page_session;
