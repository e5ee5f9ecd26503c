pub mod env;
pub mod logging;

pub use env::{env_flag, env_non_empty};
pub use logging::{LOG_PATH_ENV, init_file_tracing, init_stderr_tracing, resolve_log_path};
