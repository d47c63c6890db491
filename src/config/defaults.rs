//! Default values for configuration options.

/// Default output path for `slackhook init`.
pub const CONFIG_FILE: &str = "slackhook.toml";

/// Payload path that reads from standard input.
pub const STDIN_PATH: &str = "-";
