//! Runtime configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use catalog_products::{Catalog, CatalogLoadError};

pub const BIND_ADDR_VAR: &str = "CATALOG_BIND_ADDR";
pub const DATA_PATH_VAR: &str = "CATALOG_DATA_PATH";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: `{value}`")]
    InvalidBindAddr { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// JSON file replacing the embedded seed catalog.
    pub data_path: Option<PathBuf>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source (tests pass a closure over a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(value) => value.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: value.clone(),
            })?,
            None => {
                tracing::info!("{BIND_ADDR_VAR} not set; using {DEFAULT_BIND_ADDR}");
                default_bind_addr()
            }
        };

        let data_path = lookup(DATA_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { bind_addr, data_path })
    }

    /// Load the catalog this configuration points at.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogLoadError> {
        match &self.data_path {
            Some(path) => Catalog::from_path(path),
            None => {
                tracing::warn!("{DATA_PATH_VAR} not set; serving the embedded seed catalog");
                Catalog::seed()
            }
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            data_path: None,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}
