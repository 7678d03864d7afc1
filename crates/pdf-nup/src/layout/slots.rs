//! Slot partitioning and placement computation
//!
//! Every arrangement mode splits the sheet into 2 or 4 equal-area slots.
//! Each slot receives one copy of the current source page, scaled with a
//! contain fit (aspect preserved, never cropped) and centered on both axes.

use crate::types::{ArrangementMode, NupError, Result};

use super::{Placement, Rect};

/// Partition a sheet into the slots of an arrangement mode.
///
/// Slot order: left/right for side-by-side, top/bottom for the stacked
/// modes, row-major from top-left for the grid.
pub fn slot_rects(mode: ArrangementMode, sheet_width: f32, sheet_height: f32) -> Vec<Rect> {
    let half_w = sheet_width / 2.0;
    let half_h = sheet_height / 2.0;

    match mode {
        ArrangementMode::SideBySide => vec![
            Rect::new(0.0, 0.0, half_w, sheet_height),
            Rect::new(half_w, 0.0, half_w, sheet_height),
        ],
        ArrangementMode::Stacked | ArrangementMode::RotatedTopBottom => vec![
            Rect::new(0.0, half_h, sheet_width, half_h),
            Rect::new(0.0, 0.0, sheet_width, half_h),
        ],
        ArrangementMode::Grid => vec![
            Rect::new(0.0, half_h, half_w, half_h),
            Rect::new(half_w, half_h, half_w, half_h),
            Rect::new(0.0, 0.0, half_w, half_h),
            Rect::new(half_w, 0.0, half_w, half_h),
        ],
    }
}

/// Compute the placements for one output sheet.
///
/// Returns 2 or 4 records depending on the mode.
///
/// # Arguments
/// * `mode` - The arrangement mode
/// * `sheet_width` / `sheet_height` - Output sheet size in points
/// * `source_width` / `source_height` - Source page size in points
/// * `rotate_grid` - Turn all four grid cells 90 degrees (grid mode only)
pub fn compute_placements(
    mode: ArrangementMode,
    sheet_width: f32,
    sheet_height: f32,
    source_width: f32,
    source_height: f32,
    rotate_grid: bool,
) -> Result<Vec<Placement>> {
    if sheet_width <= 0.0 || sheet_height <= 0.0 {
        return Err(NupError::Config(format!(
            "Sheet dimensions must be positive, got {}x{}",
            sheet_width, sheet_height
        )));
    }
    if source_width <= 0.0 || source_height <= 0.0 {
        return Err(NupError::InvalidDocument(format!(
            "Source page has non-positive dimensions {}x{}",
            source_width, source_height
        )));
    }

    let rotated = match mode {
        ArrangementMode::RotatedTopBottom => true,
        ArrangementMode::Grid => rotate_grid,
        ArrangementMode::SideBySide | ArrangementMode::Stacked => false,
    };

    Ok(slot_rects(mode, sheet_width, sheet_height)
        .iter()
        .map(|slot| place_in_slot(slot, source_width, source_height, rotated))
        .collect())
}

/// Place one source-page copy within a slot.
///
/// Unrotated: contain-fit scale, centered offsets.
///
/// Rotated: the effective footprint after a 90° turn is (height, width), so
/// the fit uses the swapped dimensions. The copy is drawn with the content
/// stream matrix `[0 s -s 0 x y]` — a counter-clockwise quarter turn about
/// the content origin — which maps the source box to x ∈ [x − s·h, x],
/// y ∈ [y, y + s·w]. Advancing x by the rotated width keeps the content
/// inside the slot.
fn place_in_slot(slot: &Rect, source_width: f32, source_height: f32, rotated: bool) -> Placement {
    if rotated {
        let scale = (slot.width / source_height).min(slot.height / source_width);
        let rotated_width = source_height * scale;
        let rotated_height = source_width * scale;
        Placement {
            slot: *slot,
            scale,
            x: slot.x + (slot.width - rotated_width) / 2.0 + rotated_width,
            y: slot.y + (slot.height - rotated_height) / 2.0,
            rotation_degrees: 90.0,
        }
    } else {
        let scale = (slot.width / source_width).min(slot.height / source_height);
        Placement {
            slot: *slot,
            scale,
            x: slot.x + (slot.width - source_width * scale) / 2.0,
            y: slot.y + (slot.height - source_height * scale) / 2.0,
            rotation_degrees: 0.0,
        }
    }
}
