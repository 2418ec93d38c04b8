use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides (`CHUB__SERVER__PORT=9000`).
pub const ENV_PREFIX: &str = "CHUB";

/// Keys whose environment values are comma separated lists.
const LIST_KEYS: &[&str] = &["cors.allowed_origins"];

/// Custom error type for config loading.
#[chub_derive::chub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `server.toml`). If no path is provided,
///    it defaults to `"server"`; the extension may be omitted. The file is optional, so a bare
///    environment still yields the defaults of `T`.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `CHUB__`.
///    Nested structures are accessed using double underscores (e.g., `CHUB__DATABASE__URL` maps
///    to `database.url`). `CHUB__CORS__ALLOWED_ORIGINS` takes a comma separated list.
///
/// # Errors
/// This function will return an error if:
/// * The file exists but cannot be parsed.
/// * The merged values do not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use chub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, None)
}

/// Same as [`load_config`], reading overrides from `env` instead of the process environment.
///
/// Keys are full variable names, e.g. `CHUB__SERVER__PORT`.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Map<String, String>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, Some(env))
}

fn load_layered<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    let environment = LIST_KEYS
        .iter()
        .fold(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
            |env, key| env.with_list_parse_key(key),
        )
        .source(env);

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(environment);

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
