use thiserror::Error;

use crate::constants::{
    A3_PORTRAIT_PT, A4_PORTRAIT_PT, LEGAL_PORTRAIT_PT, LETTER_PORTRAIT_PT, TABLOID_PORTRAIT_PT,
    mm_to_pt,
};

#[derive(Error, Debug)]
pub enum NupError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to process")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, NupError>;

/// Sheet orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for the whole paper palette)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Output paper sizes
///
/// The palette is fixed; `Custom` exists for library callers that need an
/// off-palette sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A4,
    Letter,
    Legal,
    A3,
    Tabloid,
    Custom { width_pt: f32, height_pt: f32 },
}

impl PaperSize {
    /// Get base dimensions in points (always portrait: width < height)
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PaperSize::A4 => A4_PORTRAIT_PT,
            PaperSize::Letter => LETTER_PORTRAIT_PT,
            PaperSize::Legal => LEGAL_PORTRAIT_PT,
            PaperSize::A3 => A3_PORTRAIT_PT,
            PaperSize::Tabloid => TABLOID_PORTRAIT_PT,
            PaperSize::Custom {
                width_pt,
                height_pt,
            } => (width_pt, height_pt),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_pt();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    /// Custom sheet given in millimeters
    pub fn custom_mm(width_mm: f32, height_mm: f32) -> Self {
        PaperSize::Custom {
            width_pt: mm_to_pt(width_mm),
            height_pt: mm_to_pt(height_mm),
        }
    }
}

/// Page arrangement on the output sheet
///
/// Each mode partitions the sheet into equal-area slots; every slot receives
/// one copy of the current source page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrangementMode {
    /// Two slots, left/right halves of the sheet
    SideBySide,
    /// Two slots, top/bottom halves of the sheet
    Stacked,
    /// Top/bottom halves with both copies turned 90 degrees
    RotatedTopBottom,
    /// Four slots in a 2x2 grid
    Grid,
}

impl ArrangementMode {
    /// Number of slots (source-page copies) per output sheet
    pub fn slot_count(self) -> usize {
        match self {
            ArrangementMode::SideBySide
            | ArrangementMode::Stacked
            | ArrangementMode::RotatedTopBottom => 2,
            ArrangementMode::Grid => 4,
        }
    }
}

/// Statistics for a duplication run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateStatistics {
    /// Pages in the source document
    pub source_pages: usize,
    /// Copies of each page in the output
    pub copies: usize,
    /// Pages in the output document (source_pages * copies)
    pub output_pages: usize,
}

/// Statistics for an N-up composition run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeStatistics {
    /// Pages in the source document
    pub source_pages: usize,
    /// Copies drawn onto each output sheet
    pub slots_per_sheet: usize,
    /// Sheets in the output document (one per source page)
    pub output_pages: usize,
}
