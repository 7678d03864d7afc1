use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// N-up composition configuration
///
/// Defaults: side-by-side arrangement on a portrait A4 sheet, grid cells
/// unrotated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComposeOptions {
    /// How the sheet is partitioned into slots
    pub mode: ArrangementMode,

    /// Output sheet size
    pub paper_size: PaperSize,

    /// Output sheet orientation
    pub orientation: Orientation,

    /// Turn all four grid cells 90 degrees (grid mode only; ignored elsewhere)
    pub rotate_grid: bool,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            mode: ArrangementMode::SideBySide,
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            rotate_grid: false,
        }
    }
}

impl ComposeOptions {
    /// Load options from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| NupError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| NupError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Output sheet dimensions in points, orientation applied
    pub fn sheet_dimensions_pt(&self) -> (f32, f32) {
        self.paper_size
            .dimensions_with_orientation(self.orientation)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let (width_pt, height_pt) = self.sheet_dimensions_pt();
        if width_pt <= 0.0 || height_pt <= 0.0 {
            return Err(NupError::Config(format!(
                "Sheet dimensions must be positive, got {}x{}",
                width_pt, height_pt
            )));
        }
        Ok(())
    }
}

/// Page duplication configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DuplicateOptions {
    /// Copies of each page in the output; 1 leaves the document unchanged
    pub copies: usize,
}

impl Default for DuplicateOptions {
    fn default() -> Self {
        Self { copies: 2 }
    }
}

impl DuplicateOptions {
    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.copies < 1 {
            return Err(NupError::InvalidArgument(
                "Copy count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
