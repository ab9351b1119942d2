use crate::error::DemoError;
use crate::params::TransformParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Startup settings for the demo. Every field is optional in JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub width: usize,
    pub height: usize,
    pub background_a: [u8; 4],
    pub background_b: [u8; 4],
    pub params: TransformParams,
    /// Pointer positions replayed through the drag handler in headless runs.
    pub stroke: Vec<[f64; 2]>,
    pub out_a: Option<PathBuf>,
    pub out_b: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            background_a: [240, 250, 240, 255],
            background_b: [240, 240, 250, 255],
            params: TransformParams::default(),
            stroke: Vec::new(),
            out_a: None,
            out_b: None,
        }
    }
}

impl DemoConfig {
    pub fn from_json_str(json: &str) -> Result<Self, DemoError> {
        let mut cfg: DemoConfig = serde_json::from_str(json)?;
        cfg.params = cfg.params.clamped();
        Ok(cfg)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DemoError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
