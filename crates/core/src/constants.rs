/// Constants shared across the clg crates

// Environment variable names
pub const CLG_LOG_VAR: &str = "CLG_LOG";
pub const CLG_LOG_FILE_VAR: &str = "CLG_LOG_FILE";

// Tracing targets
pub const LOG_TARGET: &str = "clg";
/// Events on this target are shown on the console but never reach a file sink.
pub const CONFIDENTIAL_TARGET: &str = "clg::confidential";

// Default filter when `CLG_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
