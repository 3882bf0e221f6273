use std::io::{self, Write};

/// Blocks until the operator presses Enter.
///
/// The form selection and captcha are manual steps in the browser, so
/// this read has no timeout: the process waits indefinitely and
/// readiness is signaled only by the operator. Callers in async code
/// run this through `tokio::task::spawn_blocking`.
pub fn wait_for_operator(message: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{message} ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}
