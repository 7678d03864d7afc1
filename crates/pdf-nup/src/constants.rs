//! Shared constants for page geometry
//!
//! This module centralizes the paper palette and unit conversions used
//! throughout duplication and composition.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Paper Palette (portrait, points)
// =============================================================================

pub const A4_PORTRAIT_PT: (f32, f32) = (595.28, 841.89);
pub const LETTER_PORTRAIT_PT: (f32, f32) = (612.0, 792.0);
pub const LEGAL_PORTRAIT_PT: (f32, f32) = (612.0, 1008.0);
pub const A3_PORTRAIT_PT: (f32, f32) = (841.89, 1190.55);
pub const TABLOID_PORTRAIT_PT: (f32, f32) = (792.0, 1224.0);

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Fallback page width in points when a source page carries no MediaBox
/// (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Fallback page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Fallback page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);
