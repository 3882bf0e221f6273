pub mod output;
pub mod progress;
pub mod prompt;
pub mod signals;

pub use output::{OutputFormatter, OutputMode};
pub use progress::ProgressManager;
pub use prompt::wait_for_operator;
pub use signals::GracefulShutdown;
