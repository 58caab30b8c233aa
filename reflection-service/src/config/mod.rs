use secrecy::Secret;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_ANTHROPIC_API_BASE: &str = "https://api.anthropic.com";

#[derive(Debug, Clone, Deserialize)]
pub struct ReflectionConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub anthropic: AnthropicConfig,
    pub webhook: WebhookConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicConfig {
    pub api_key: Secret<String>,
    /// Overridable so tests can point the client at a local mock.
    pub base_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookConfig {
    /// Spreadsheet webhook. `None` disables contact forwarding.
    pub url: Option<String>,
}

impl ReflectionConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(ReflectionConfig {
            common: common_config,
            anthropic: AnthropicConfig {
                api_key: Secret::new(get_env("ANTHROPIC_API_KEY", None, is_prod)?),
                base_url: get_env(
                    "ANTHROPIC_API_BASE",
                    Some(DEFAULT_ANTHROPIC_API_BASE),
                    false,
                )?,
            },
            webhook: WebhookConfig {
                url: normalize_optional(env::var("GOOGLE_SHEET_WEBHOOK").ok()),
            },
        })
    }
}

/// Blank values count as unset.
fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        _ => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_webhook_is_disabled() {
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some("   ".to_string())), None);
        assert_eq!(
            normalize_optional(Some(" https://hooks.example/x ".to_string())),
            Some("https://hooks.example/x".to_string())
        );
    }

    #[test]
    fn get_env_uses_default_outside_prod() {
        let value = get_env(
            "REFLECTION_TEST_SURELY_UNSET_VAR",
            Some("fallback"),
            false,
        )
        .unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn get_env_requires_value_without_default() {
        let result = get_env("REFLECTION_TEST_SURELY_UNSET_VAR", None, false);
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn get_env_ignores_default_in_prod() {
        let result = get_env("REFLECTION_TEST_SURELY_UNSET_VAR", Some("fallback"), true);
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = AnthropicConfig {
            api_key: Secret::new("sk-live-123".to_string()),
            base_url: DEFAULT_ANTHROPIC_API_BASE.to_string(),
        };
        assert!(!format!("{:?}", config).contains("sk-live-123"));
    }
}
