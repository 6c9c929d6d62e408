use crate::foundation::error::{CurveError, CurveResult};

/// Default preview/texture edge length in pixels.
pub const DEFAULT_TEXTURE_SIZE: u32 = 128;

/// Inclusive key-count window used by synthesis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KeyBounds {
    pub min_keys: u32,
    pub max_keys: u32,
}

impl Default for KeyBounds {
    fn default() -> Self {
        Self {
            min_keys: 2,
            max_keys: 100,
        }
    }
}

impl KeyBounds {
    pub fn new(min_keys: u32, max_keys: u32) -> CurveResult<Self> {
        let bounds = Self { min_keys, max_keys };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> CurveResult<()> {
        if self.min_keys == 0 {
            return Err(CurveError::validation("min_keys must be >= 1"));
        }
        if self.min_keys > self.max_keys {
            return Err(CurveError::validation("min_keys must be <= max_keys"));
        }
        Ok(())
    }

    pub fn contains(&self, n: usize) -> bool {
        (self.min_keys as usize..=self.max_keys as usize).contains(&n)
    }
}

/// Output shape of rasterization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RasterSettings {
    pub width: u32,
    pub height: u32,
    /// Skip the checkerboard matte and return straight RGBA.
    pub transparent_background: bool,
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_TEXTURE_SIZE,
            height: DEFAULT_TEXTURE_SIZE,
            transparent_background: false,
        }
    }
}

impl RasterSettings {
    pub fn transparent() -> Self {
        Self {
            transparent_background: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
