/// Receives messages that should be shown to the user, such as a failed login.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Writes notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}
