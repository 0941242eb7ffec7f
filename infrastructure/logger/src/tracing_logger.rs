use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by the global `tracing` subscriber.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "ishop", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "ishop", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "ishop", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "ishop", "{}", message);
    }
}
