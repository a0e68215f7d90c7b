//! Configuration management for the MongoDB MCP Server
//!
//! Reads the connection settings from the environment, after loading an
//! optional `.env` file.

use std::path::Path;

use crate::error::{ConfigError, MongoMcpError, Result};

/// Configuration for the MongoDB MCP Server
#[derive(Clone)]
pub struct Config {
    /// MongoDB connection string
    pub mongo_uri: String,

    /// Name of the database all tools operate on
    pub database_name: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// When `env_file` is given it must exist; otherwise a `.env` in the
    /// current directory is loaded if present. Variables already set in the
    /// process take precedence over the file.
    pub fn from_env(env_file: Option<&Path>) -> Result<Self> {
        load_env_file(env_file)?;
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| -> Result<String> {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    MongoMcpError::Config(ConfigError::MissingEnvVar {
                        var: var.to_string(),
                    })
                })
        };

        Ok(Self {
            mongo_uri: required(env::MONGO_URI)?,
            database_name: required(env::MONGO_DB_NAME)?,
        })
    }
}

// The URI can embed credentials, keep it out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("mongo_uri", &"<redacted>")
            .field("database_name", &self.database_name)
            .finish()
    }
}

fn load_env_file(env_file: Option<&Path>) -> Result<()> {
    match env_file {
        Some(path) => dotenvy::from_path(path).map_err(|e| {
            MongoMcpError::Config(ConfigError::EnvFile {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        }),
        None => match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!("Loaded environment from {}", path.display());
                Ok(())
            }
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(MongoMcpError::Config(ConfigError::EnvFile {
                path: ".env".to_string(),
                message: e.to_string(),
            })),
        },
    }
}

/// Environment variable names
pub mod env {
    pub const MONGO_URI: &str = "MONGO_URI";
    pub const MONGO_DB_NAME: &str = "MONGO_DB_NAME";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_config_creation() {
        let config = Config::from_lookup(lookup_from(&[
            ("MONGO_URI", "mongodb://localhost:27017"),
            ("MONGO_DB_NAME", "app"),
        ]))
        .unwrap();
        assert_eq!(config.mongo_uri, "mongodb://localhost:27017");
        assert_eq!(config.database_name, "app");
    }

    #[test]
    fn test_missing_uri_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[("MONGO_DB_NAME", "app")])).unwrap_err();
        match err {
            MongoMcpError::Config(ConfigError::MissingEnvVar { var }) => assert_eq!(var, "MONGO_URI"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_database_name_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[
            ("MONGO_URI", "mongodb://localhost:27017"),
            ("MONGO_DB_NAME", "   "),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("MONGO_DB_NAME"));
    }

    #[test]
    fn test_debug_redacts_uri() {
        let config = Config::from_lookup(lookup_from(&[
            ("MONGO_URI", "mongodb://admin:hunter2@db:27017"),
            ("MONGO_DB_NAME", "app"),
        ]))
        .unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("app"));
    }

    #[test]
    fn test_missing_explicit_env_file() {
        let err = Config::from_env(Some(Path::new("/nonexistent/mongo-mcp.env"))).unwrap_err();
        assert!(matches!(err, MongoMcpError::Config(ConfigError::EnvFile { .. })));
    }
}
