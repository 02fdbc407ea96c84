//! Configuration projections for operator-facing adapters.

/// Logging section of a configuration view.
#[derive(Debug, Clone)]
pub struct ConfigLogging {
    pub level: String,
    pub format: String,
}

/// Provider section of a configuration view.
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    pub name: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: usize,
    pub timeout_secs: u64,
    pub base_url: Option<String>,
    pub api_key_env: String,
    pub api_key_present: bool,
}

/// Full configuration projection for operator-facing output.
#[derive(Debug, Clone)]
pub struct ConfigView {
    /// Where the configuration came from, as shown to the operator.
    pub source: String,
    /// False when the file was missing and built-in defaults are in effect.
    pub source_found: bool,
    pub logging: ConfigLogging,
    pub provider: ConfigProvider,
}

/// Configuration use-cases for operator-facing adapters.
pub trait ConfigurationOperator: Send + Sync {
    /// Build a projection of the effective configuration for `config show`
    /// and `config validate`.
    fn config_view(&self) -> ConfigView;
}
