//! Process termination primitive

use std::io::Write;

/// Flush the standard streams and terminate the process with `code`.
///
/// Control never returns. Buffered output is flushed first so the message
/// emitted just before a `quit` is visible.
pub fn exit(code: i32) -> ! {
    tracing::debug!(code, "terminating process");
    let _ = std::io::stdout().flush();
    let _ = std::io::stderr().flush();
    std::process::exit(code)
}
