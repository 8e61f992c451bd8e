//! Configuration types for TypeScript emission.

/// Command printed in the banner of every generated file.
pub const DEFAULT_REGENERATE_COMMAND: &str = "ambient generate";

/// Configuration for TypeScript emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether to start every file with the generated-code banner
    pub(crate) banner: bool,
    /// Command the banner tells readers to run
    pub(crate) regenerate_command: String,
    /// Module (relative to the output directory, no extension) holding the shared tags
    pub(crate) base_config_module: String,
    /// Name of the per-identifier options interface
    pub(crate) record_type: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            banner: true,
            regenerate_command: DEFAULT_REGENERATE_COMMAND.to_string(),
            base_config_module: "base-config".to_string(),
            record_type: "ImplicitLibVariableOptions".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit the generated-code banner.
    pub fn banner(mut self, value: bool) -> Self {
        self.banner = value;
        self
    }

    /// Set the command shown in the banner.
    pub fn regenerate_command(mut self, value: impl Into<String>) -> Self {
        self.regenerate_command = value.into();
        self
    }

    /// Set the module name of the shared tags.
    pub fn base_config_module(mut self, value: impl Into<String>) -> Self {
        self.base_config_module = value.into();
        self
    }

    /// Set the options interface name.
    pub fn record_type(mut self, value: impl Into<String>) -> Self {
        self.record_type = value.into();
        self
    }

    /// File name of the shared tags module.
    pub fn base_config_file(&self) -> String {
        format!("{}.ts", self.base_config_module)
    }
}
