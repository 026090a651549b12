//! Server Configuration
//!
//! Resolution order for every setting: command-line flag, then environment
//! variable, then built-in default.
//!
//! | Setting        | Flag        | Environment    | Default            |
//! |----------------|-------------|----------------|--------------------|
//! | HTTP bind addr | `--bind`    | `SEARCH_BIND`  | `127.0.0.1:8080`   |
//! | Dataset file   | `--dataset` | `DATASET_PATH` | `data/dataset.xml` |

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_DATASET: &str = "data/dataset.xml";

pub const ENV_BIND: &str = "SEARCH_BIND";
pub const ENV_DATASET: &str = "DATASET_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub dataset_path: PathBuf,
}

impl ServerConfig {
    /// Reads the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args, |key| std::env::var(key).ok())
    }

    /// `args` excludes the program name.
    pub fn parse(args: &[String], env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut bind: Option<String> = None;
        let mut dataset: Option<String> = None;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    bind = Some(flag_value(args, i)?);
                    i += 2;
                }
                "--dataset" => {
                    dataset = Some(flag_value(args, i)?);
                    i += 2;
                }
                other => {
                    tracing::debug!("Ignoring unknown argument {}", other);
                    i += 1;
                }
            }
        }

        let bind = bind
            .or_else(|| env(ENV_BIND))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind
            .parse()
            .with_context(|| format!("invalid bind address {:?}", bind))?;

        let dataset_path = dataset
            .or_else(|| env(ENV_DATASET))
            .unwrap_or_else(|| DEFAULT_DATASET.to_string())
            .into();

        Ok(Self { bind, dataset_path })
    }
}

fn flag_value(args: &[String], i: usize) -> Result<String> {
    args.get(i + 1)
        .cloned()
        .with_context(|| format!("{} requires a value", args[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::parse(&[], no_env).unwrap();

        assert_eq!(config.bind, DEFAULT_BIND.parse().unwrap());
        assert_eq!(config.dataset_path, PathBuf::from(DEFAULT_DATASET));
    }

    #[test]
    fn test_flags_override_env() {
        let env = |key: &str| match key {
            ENV_BIND => Some("0.0.0.0:9000".to_string()),
            ENV_DATASET => Some("/env/dataset.xml".to_string()),
            _ => None,
        };

        let config = ServerConfig::parse(
            &args(&["--bind", "127.0.0.1:5000", "--dataset", "/tmp/users.xml"]),
            env,
        )
        .unwrap();

        assert_eq!(config.bind, "127.0.0.1:5000".parse().unwrap());
        assert_eq!(config.dataset_path, PathBuf::from("/tmp/users.xml"));
    }

    #[test]
    fn test_env_fallback() {
        let env = |key: &str| (key == ENV_BIND).then(|| "0.0.0.0:9000".to_string());

        let config = ServerConfig::parse(&[], env).unwrap();
        assert_eq!(config.bind, "0.0.0.0:9000".parse().unwrap());
    }

    #[test]
    fn test_unknown_flags_are_skipped() {
        let config = ServerConfig::parse(&args(&["--verbose", "--bind", "127.0.0.1:1"]), no_env)
            .unwrap();
        assert_eq!(config.bind.port(), 1);
    }

    #[test]
    fn test_missing_value_is_error() {
        assert!(ServerConfig::parse(&args(&["--bind"]), no_env).is_err());
    }

    #[test]
    fn test_invalid_address_is_error() {
        assert!(ServerConfig::parse(&args(&["--bind", "localhost"]), no_env).is_err());
    }
}
