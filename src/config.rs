//! Process-wide configuration.
//!
//! Only [`to_native_path`](crate::to_native_path) reads this; [`convert`](crate::convert)
//! always takes its separator explicitly. Use [`ConfigBuilder`] at application
//! startup to override the platform default, e.g. when producing Windows paths
//! from a tool running on Linux.

use std::sync::OnceLock;

use crate::separator::Separator;

/// Global configuration, initialized via [`ConfigBuilder::init`].
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Separator used by [`to_native_path`](crate::to_native_path).
    /// Defaults to the separator of the current platform.
    pub separator: Separator,
}

/// Configuration builder for fluent API.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    separator: Option<Separator>,
}

impl ConfigBuilder {
    /// Create a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator for [`to_native_path`](crate::to_native_path).
    ///
    /// # Example
    ///
    /// ```
    /// use file_url_path::config::{self, ConfigBuilder};
    /// use file_url_path::Separator;
    ///
    /// ConfigBuilder::new().separator("\\").init();
    /// assert_eq!(config::get().separator, Separator::Windows);
    /// ```
    pub fn separator(mut self, separator: impl Into<Separator>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Build the configuration without installing it.
    pub fn build(self) -> Config {
        Config {
            separator: self.separator.unwrap_or_default(),
        }
    }

    /// Build and initialize the global configuration.
    ///
    /// This can only be called once. Subsequent calls are ignored.
    /// Returns `true` if configuration was set, `false` if already initialized.
    pub fn init(self) -> bool {
        CONFIG.set(self.build()).is_ok()
    }
}

/// Initialize with default configuration.
///
/// This is equivalent to `ConfigBuilder::new().init()`.
pub fn init_default() -> bool {
    ConfigBuilder::new().init()
}

/// Get the current configuration, or default if not initialized.
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}
