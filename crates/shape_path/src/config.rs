// Generator tuning, loadable from a `shapes.toml` such as:
//
//   spirograph_step = 0.01
//   petal_count = 16
//   max_spirograph_points = 1000000

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ShapeError;

pub const DEFAULT_SPIROGRAPH_STEP: f32 = 0.01;
pub const DEFAULT_PETAL_COUNT: u32 = 16;
pub const DEFAULT_MAX_SPIROGRAPH_POINTS: u32 = 1_000_000;
pub const MAX_PETAL_COUNT: u32 = 1024;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Angle in radians between consecutive spirograph points. Governs how
    /// smooth the curve is.
    pub spirograph_step: f32,
    /// Petals in a full turn of the flower, at most [`MAX_PETAL_COUNT`].
    pub petal_count: u32,
    /// Upper bound on the points one spirograph may emit. Requests beyond it
    /// are rejected before anything is allocated.
    pub max_spirograph_points: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            spirograph_step: DEFAULT_SPIROGRAPH_STEP,
            petal_count: DEFAULT_PETAL_COUNT,
            max_spirograph_points: DEFAULT_MAX_SPIROGRAPH_POINTS,
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GeneratorConfig =
            toml::from_str(content).map_err(|e| ShapeError::Config(e.to_string()))?;
        config.validated()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read generator config {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.spirograph_step.is_finite() || self.spirograph_step <= 0.0 {
            return Err(ShapeError::Config(format!(
                "spirograph_step must be a positive number but was {}",
                self.spirograph_step
            ))
            .into());
        }
        if self.petal_count == 0 || self.petal_count > MAX_PETAL_COUNT {
            return Err(ShapeError::Config(format!(
                "petal_count must be between 1 and {} but was {}",
                MAX_PETAL_COUNT, self.petal_count
            ))
            .into());
        }
        if self.max_spirograph_points == 0 {
            return Err(
                ShapeError::Config("max_spirograph_points must be at least 1".to_string()).into(),
            );
        }
        Ok(())
    }

    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }
}
