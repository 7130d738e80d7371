use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scan: ScanConfig,
    pub engine: EngineConfig,
}

/// Settings for directory enumeration and file selection paging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory names that are never descended into
    pub exclude_dirs: Vec<String>,

    /// A directory with more direct files than this contributes no files
    pub max_files_per_folder: usize,

    /// Number of files offered per selection page
    pub page_size: usize,
}

/// Settings for the external container engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engine binary to invoke (any docker-compatible CLI)
    pub binary: String,

    /// First published host port; image `i` publishes on `host_port_base + i`
    pub host_port_base: u16,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: vec![
                "node_modules".to_string(),
                ".git".to_string(),
                "__pycache__".to_string(),
                "target".to_string(),
            ],
            max_files_per_folder: 15,
            page_size: 10,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            binary: "docker".to_string(),
            host_port_base: 8080,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            engine: EngineConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a JSON file
    pub fn from_file(path: &str) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open config file: {}", path))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader).context("Failed to parse config file")?;
        Ok(config)
    }
}
