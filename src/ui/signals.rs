use crate::error::{CauseListError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Ctrl+C flag checked between pipeline stages.
///
/// The handler only sets a flag; cancellation takes effect at the next
/// stage boundary so the browser session is still released through the
/// normal error path.
pub struct GracefulShutdown {
    running: Arc<AtomicBool>,
    shutdown_message_shown: Arc<AtomicBool>,
}

impl GracefulShutdown {
    pub fn new() -> Result<Self> {
        let running = Arc::new(AtomicBool::new(true));
        let shutdown_message_shown = Arc::new(AtomicBool::new(false));

        let running_clone = running.clone();
        let message_shown_clone = shutdown_message_shown.clone();

        ctrlc::set_handler(move || {
            running_clone.store(false, Ordering::SeqCst);

            if !message_shown_clone.swap(true, Ordering::SeqCst) {
                eprintln!("\nStopping after the current step... (press Ctrl+C again to force exit)");
            } else {
                eprintln!("\nForce stopping...");
                std::process::exit(1);
            }
        })
        .map_err(|e| CauseListError::Config {
            message: format!("Failed to set signal handler: {}", e),
        })?;

        Ok(Self {
            running,
            shutdown_message_shown,
        })
    }

    /// Create a GracefulShutdown instance for testing (no signal handler registration)
    pub fn new_for_test() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
            shutdown_message_shown: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn check_shutdown(&self) -> Result<()> {
        if !self.is_running() {
            return Err(CauseListError::Cancelled);
        }
        Ok(())
    }

    pub fn request_shutdown(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn reset(&self) {
        self.running.store(true, Ordering::SeqCst);
        self.shutdown_message_shown.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown_state_management() {
        let shutdown = GracefulShutdown::new_for_test();

        assert!(shutdown.is_running());
        assert!(shutdown.check_shutdown().is_ok());

        shutdown.request_shutdown();
        assert!(!shutdown.is_running());
        assert!(matches!(
            shutdown.check_shutdown(),
            Err(CauseListError::Cancelled)
        ));

        shutdown.reset();
        assert!(shutdown.is_running());
        assert!(shutdown.check_shutdown().is_ok());
    }
}
