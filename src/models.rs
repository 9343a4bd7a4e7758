//! Data models and configuration
//!
//! Defines the tenant scope used to namespace stored icons and the
//! environment-driven service configuration.

use crate::{Error, Result};
use std::net::SocketAddr;

pub const DEFAULT_USECASE: &str = "app-icons";

/// Organization/project pair that namespaces stored objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeKey {
    pub organization_id: u64,
    pub project_id: u64,
}

impl ScopeKey {
    pub fn new(organization_id: u64, project_id: u64) -> Self {
        Self {
            organization_id,
            project_id,
        }
    }

    /// Full object key for `id` under this scope, e.g. `app-icons/1/42/abc`.
    pub fn object_key(&self, usecase: &str, id: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            usecase, self.organization_id, self.project_id, id
        )
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub objectstore_access_key_id: String,
    pub objectstore_secret_access_key: String,
    pub objectstore_endpoint: String,
    pub objectstore_region: String,
    pub objectstore_bucket: String,
    pub objectstore_force_path_style: bool,
    pub usecase: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| Error::Config(format!("{} not set", name)))
        };

        let force_path_style = match lookup("OBJECTSTORE_FORCE_PATH_STYLE") {
            Some(value) => parse_bool("OBJECTSTORE_FORCE_PATH_STYLE", &value)?,
            None => true,
        };

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse::<SocketAddr>()
            .map_err(|e| Error::Config(format!("BIND_ADDR is not a socket address: {}", e)))?;

        Ok(Self {
            objectstore_access_key_id: required("OBJECTSTORE_ACCESS_KEY_ID")?,
            objectstore_secret_access_key: required("OBJECTSTORE_SECRET_ACCESS_KEY")?,
            objectstore_endpoint: lookup("OBJECTSTORE_ENDPOINT")
                .unwrap_or_else(|| "http://localhost:9000".to_string()),
            objectstore_region: lookup("OBJECTSTORE_REGION")
                .unwrap_or_else(|| "us-east-1".to_string()),
            objectstore_bucket: lookup("OBJECTSTORE_BUCKET")
                .unwrap_or_else(|| "objectstore".to_string()),
            objectstore_force_path_style: force_path_style,
            usecase: lookup("APP_ICONS_USECASE").unwrap_or_else(|| DEFAULT_USECASE.to_string()),
            bind_addr,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(Error::Config(format!(
            "{} must be true/false, got '{}'",
            name, other
        ))),
    }
}
