// src/config/mod.rs

use once_cell::sync::Lazy;
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Groq Configuration
    pub groq_model: String,
    pub llm_temperature: f32,

    // ── Planner Tunables
    pub classify_max_chars: usize,
    pub hectic_threshold: usize,
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!("Config: {} = '{}' failed to parse, using default", key, raw);
                default
            }
        },
        Err(_) => default,
    }
}

impl PlannerConfig {
    pub fn from_env() -> Self {
        // Load .env first if present; the process environment wins otherwise.
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from {}", path.display()),
            Err(_) => warn!("No .env file found, using environment variables and defaults"),
        }

        Self {
            host: env_var_or("WELLPLAN_HOST", "0.0.0.0".to_string()),
            port: env_var_or("WELLPLAN_PORT", 5001),
            groq_model: env_var_or("GROQ_MODEL", "llama-3.1-8b-instant".to_string()),
            llm_temperature: env_var_or("WELLPLAN_LLM_TEMPERATURE", 0.4),
            classify_max_chars: env_var_or("WELLPLAN_CLASSIFY_MAX_CHARS", 500),
            hectic_threshold: env_var_or("WELLPLAN_HECTIC_THRESHOLD", 8),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<PlannerConfig> = Lazy::new(PlannerConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = PlannerConfig::from_env();

        assert_eq!(config.groq_model, "llama-3.1-8b-instant");
        assert_eq!(config.classify_max_chars, 500);
        assert_eq!(config.hectic_threshold, 8);
    }

    #[test]
    fn test_bind_address() {
        let config = PlannerConfig {
            host: "127.0.0.1".to_string(),
            port: 5001,
            groq_model: "llama-3.1-8b-instant".to_string(),
            llm_temperature: 0.4,
            classify_max_chars: 500,
            hectic_threshold: 8,
        };

        assert_eq!(config.bind_address(), "127.0.0.1:5001");
    }
}
