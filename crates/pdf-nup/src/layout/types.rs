//! Layout data types

/// A rectangular area in points, y increasing upward
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Final placement of one source-page copy within its slot
///
/// `x`/`y` are the translation operands of the PDF `cm` operator that draws
/// the copy. For rotated placements they already account for the
/// rotate-about-origin convention (see `place_in_slot`), so the renderer can
/// emit them verbatim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// The slot this copy is assigned to, sheet-relative
    pub slot: Rect,
    /// Uniform scale applied to the source page
    pub scale: f32,
    /// X translation in points
    pub x: f32,
    /// Y translation in points
    pub y: f32,
    /// Rotation to apply in degrees (0.0 or 90.0)
    pub rotation_degrees: f32,
}

impl Placement {
    pub fn is_rotated(&self) -> bool {
        self.rotation_degrees.abs() > 0.1
    }

    /// Footprint of the drawn content on the sheet (width, height), points
    pub fn drawn_size(&self, source_width: f32, source_height: f32) -> (f32, f32) {
        if self.is_rotated() {
            (source_height * self.scale, source_width * self.scale)
        } else {
            (source_width * self.scale, source_height * self.scale)
        }
    }
}
