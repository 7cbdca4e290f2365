use crate::client::error::{config::ConfigError, Error};

pub const BACKEND_URL_VAR: &str = "COLLABLAB_BACKEND_URL";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub backend_url: String,
}

impl Config {
    /// Reads the backend URL from the environment
    ///
    /// Native builds read the variable at runtime and fall back to the value baked in at
    /// compile time; wasm builds only have the compile time value.
    pub fn from_env() -> Result<Self, Error> {
        #[cfg(not(target_arch = "wasm32"))]
        let value = std::env::var(BACKEND_URL_VAR)
            .ok()
            .or_else(|| option_env!("COLLABLAB_BACKEND_URL").map(str::to_string));

        #[cfg(target_arch = "wasm32")]
        let value = option_env!("COLLABLAB_BACKEND_URL").map(str::to_string);

        Self::from_value(value.as_deref())
    }

    /// Builds the config from an optional raw backend URL
    ///
    /// # Returns
    /// - `Ok(Config)` - Unset or blank values use [`DEFAULT_BACKEND_URL`], trailing slashes are trimmed
    /// - `Err(Error::ConfigError)` - The value is not an http(s) URL
    pub fn from_value(value: Option<&str>) -> Result<Self, Error> {
        let value = value.map(str::trim).filter(|v| !v.is_empty());

        let Some(url) = value else {
            return Ok(Self {
                backend_url: DEFAULT_BACKEND_URL.to_string(),
            });
        };

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvValue {
                var: BACKEND_URL_VAR.to_string(),
                reason: format!("expected an http:// or https:// URL, got {:?}", url),
            }
            .into());
        }

        Ok(Self {
            backend_url: url.trim_end_matches('/').to_string(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}
