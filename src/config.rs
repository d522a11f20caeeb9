use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Job configuration: where the two datasets live and where the reconciled
/// file goes. Loadable from YAML; defaults match the layout the datasets
/// ship in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    pub dengue_path: PathBuf,
    pub rain_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            dengue_path: PathBuf::from("dataset/casos_dengue.txt"),
            rain_path: PathBuf::from("dataset/chuvas.csv"),
            output_path: PathBuf::from("output/dengue_rain.csv"),
        }
    }
}

impl JobConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))
    }
}
