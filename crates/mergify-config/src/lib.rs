//! Config module.

use std::env;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub App ID of this integration.
    pub app_id: u64,
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Redis options.
    pub redis: CacheRedisConfig,
}

#[derive(Debug, Clone)]
pub struct CacheRedisConfig {
    /// Redis address.
    pub address: String,
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot username.
    pub name: String,
    /// Configuration file path, per repository.
    pub configuration_path: String,
    /// API options.
    pub api: ApiConfig,
    /// Cache options.
    pub cache: CacheConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            name: env_to_str("BOT_NAME", "mergify"),
            configuration_path: env_to_str("BOT_CONFIGURATION_PATH", ".mergify.yml"),
            api: ApiConfig {
                github: ApiGitHubConfig {
                    root_url: env_to_str("BOT_API_GITHUB_ROOT_URL", "https://api.github.com"),
                    app_id: env_to_u64("BOT_API_GITHUB_APP_ID", 0),
                },
            },
            cache: CacheConfig {
                redis: CacheRedisConfig {
                    address: env_to_str("BOT_CACHE_REDIS_ADDRESS", "redis://localhost"),
                },
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .trim()
        .to_string()
}
