//! User-visible notification channel for recoverable load errors.
//!
//! Configuration loading never aborts on bad input; it degrades to
//! defaults and reports what happened. The transient user-facing side
//! of that report (a toast on the host platform) goes through the
//! [`Notifier`] trait so the loader stays decoupled from the UI layer.

/// Sink for short, transient user-facing messages.
///
/// Implementations are expected to be cheap to call and must never
/// fail; every call site also writes a structured log entry.
pub trait Notifier {
    /// Surface a short message to the user.
    fn notify(&self, message: &str);
}

/// Notifier that only writes to the structured log.
///
/// Used in headless contexts and as the default when no toast channel
/// is wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        log::error!("{message}");
    }
}
