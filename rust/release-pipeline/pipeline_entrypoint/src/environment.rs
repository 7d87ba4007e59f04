use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Name of the variable which selects the runtime [Environment]
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// The account a lambda binary is deployed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production account
    Production,
    /// Shared development account
    Develop,
    /// A developer machine, e.g. through `cargo lambda watch`
    Local,
}

/// How log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One flattened json object per event, for CloudWatch
    Json,
    /// Multi line, colored output for a terminal
    Pretty,
}

/// A value of [ENVIRONMENT_VAR] which names no [Environment]
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{ENVIRONMENT_VAR} must be one of prod, dev or local, got {0}")]
pub struct UnknownValue(String);

impl Environment {
    /// Reads [ENVIRONMENT_VAR] from the process environment
    pub fn from_env() -> Result<Option<Self>, UnknownValue> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads [ENVIRONMENT_VAR] through `lookup`. An unset variable yields [None].
    pub fn from_lookup<F>(lookup: F) -> Result<Option<Self>, UnknownValue>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        lookup(ENVIRONMENT_VAR).map(|v| v.parse()).transpose()
    }

    /// The log format used by binaries running in this environment
    pub fn log_format(&self) -> LogFormat {
        match self {
            Environment::Production | Environment::Develop => LogFormat::Json,
            Environment::Local => LogFormat::Pretty,
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Environment::Production => "prod",
            Environment::Develop => "dev",
            Environment::Local => "local",
        };
        f.write_str(name)
    }
}

impl FromStr for Environment {
    type Err = UnknownValue;

    fn from_str(environment: &str) -> Result<Self, UnknownValue> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}
