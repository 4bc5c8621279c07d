use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "product_service";

/// Forwards domain log lines to whichever `tracing` subscriber is installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn should_be_usable_as_domain_logger_without_subscriber() {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        logger.info("info line");
        logger.warn("warn line");
        logger.error("error line");
        logger.debug("debug line");
    }
}
