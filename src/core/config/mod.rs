pub mod data;
pub mod io;

pub use data::{path_display, Config, ConfigKey, DEFAULT_BACKEND_URL};
pub use io::ConfigError;
