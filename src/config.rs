use leptos::prelude::*;

/// Shown in the footer when no application name is configured.
pub const DEFAULT_APP_NAME: &str = "Your SaaS";

/// Settings the shell reads at render time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    pub app_name: String,
}

impl ShellConfig {
    pub fn new(app_name: Option<&str>) -> Self {
        Self {
            app_name: display_name(app_name).to_string(),
        }
    }

    /// Reads `APP_NAME` from the environment at compile time, so the server and
    /// the WASM bundle agree on the value.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("APP_NAME"))
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Applies the fallback rule: unset or empty names become [`DEFAULT_APP_NAME`].
pub fn display_name(configured: Option<&str>) -> &str {
    match configured {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_APP_NAME,
    }
}

/// Overrides the build-time configuration for everything below this component.
#[inline(always)]
pub fn provide_shell_config(config: ShellConfig) {
    provide_context(config);
}

/// Returns the provided [`ShellConfig`], or the build-time one if none was provided.
pub fn use_shell_config() -> ShellConfig {
    use_context().unwrap_or_default()
}
