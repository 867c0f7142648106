use crate::error::{ChartError, ChartResult};
use crate::theme::Palette;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What a known series receives on a tick whose sample does not mention it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MissingKeyPolicy {
    /// Record a gap (`null` on the wire).
    #[default]
    Gap,
    /// Repeat the series' most recent value.
    HoldLast,
}

/// What happens when more stacks are requested than the palette has colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaletteOverflow {
    #[default]
    Reject,
    Cycle,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartOptions {
    /// Expected seconds between updates. Informational, the caller drives the ticks.
    pub resolution: u64,
    /// Samples retained per series.
    pub window_size: usize,
    pub palette: Palette,
    pub missing_keys: MissingKeyPolicy,
    pub palette_overflow: PaletteOverflow,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            resolution: 1,
            window_size: 10,
            palette: Palette::default(),
            missing_keys: MissingKeyPolicy::default(),
            palette_overflow: PaletteOverflow::default(),
        }
    }
}

impl ChartOptions {
    /// Reads an override document and applies it over the defaults.
    pub fn from_json(json: &str) -> ChartResult<Self> {
        let overrides: ChartOptionsOverride = serde_json::from_str(json)?;
        let options = Self::default().merged(overrides);
        options.validate()?;
        Ok(options)
    }

    /// Returns a copy with every field set in `overrides` replaced.
    pub fn merged(&self, overrides: ChartOptionsOverride) -> Self {
        Self {
            resolution: overrides.resolution.unwrap_or(self.resolution),
            window_size: overrides.window_size.unwrap_or(self.window_size),
            palette: overrides.palette.unwrap_or_else(|| self.palette.clone()),
            missing_keys: overrides.missing_keys.unwrap_or(self.missing_keys),
            palette_overflow: overrides.palette_overflow.unwrap_or(self.palette_overflow),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.window_size == 0 {
            return Err(ChartError::Configuration(
                "window size must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.resolution)
    }
}

/// Partial [`ChartOptions`]; unset fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartOptionsOverride {
    pub resolution: Option<u64>,
    pub window_size: Option<usize>,
    pub palette: Option<Palette>,
    pub missing_keys: Option<MissingKeyPolicy>,
    pub palette_overflow: Option<PaletteOverflow>,
}

impl ChartOptionsOverride {
    pub fn window_size(window_size: usize) -> Self {
        Self {
            window_size: Some(window_size),
            ..Default::default()
        }
    }
}

/// Grouping of the caller's series, used only to size the color list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupConfig {
    pub stacks: usize,
    pub chains_per_stack: usize,
}

impl GroupConfig {
    pub fn new(stacks: usize, chains_per_stack: usize) -> Self {
        Self {
            stacks,
            chains_per_stack,
        }
    }

    /// Number of colors produced for this grouping.
    pub fn color_count(&self) -> usize {
        self.stacks * self.chains_per_stack
    }
}
