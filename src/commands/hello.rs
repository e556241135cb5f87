use crate::config::Config;

/// Returns the plain greeting for the configured default name.
pub fn message(config: &Config) -> String {
    format!("Hello, {}!\n", config.name)
}
