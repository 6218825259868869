/// Geometry primitives shared by the sim and the renderer.
///
/// World space is a fixed 1280x720 logical screen, y-up (y = 0 is the
/// bottom edge). The renderer maps world rectangles onto terminal cells;
/// the sim uses the same rectangles for hit-testing.

/// Logical screen width in world px.
pub const WORLD_W: f32 = 1280.0;
/// Logical screen height in world px.
pub const WORLD_H: f32 = 720.0;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    /// Point-in-rect test (edges inclusive on the min side).
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    /// Axis-aligned overlap test.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// What a draw rectangle refers to. The terminal renderer picks glyphs and
/// colors from this; a sprite-based renderer would map it to textures.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SpriteKind {
    Background,
    LevelArt,
    Hazard,
    Pickup,
    Hero,
    Card,
}

/// Unscaled sprite dimensions plus the reference the renderer draws with.
#[derive(Clone, Copy, Debug)]
pub struct SpriteDef {
    pub dim_x: f32,
    pub dim_y: f32,
    pub kind: SpriteKind,
}

impl SpriteDef {
    /// Project this sprite at a world position: width and height scale,
    /// the position passes through unchanged.
    pub fn rect_at(&self, x: f32, y: f32, scale: f32) -> Rect {
        Rect {
            x,
            y,
            w: self.dim_x * scale,
            h: self.dim_y * scale,
        }
    }
}

/// One drawable rectangle of the current frame, in world space.
#[derive(Clone, Copy, Debug)]
pub struct DrawCmd {
    pub rect: Rect,
    pub kind: SpriteKind,
    /// Overlay a collision border (debug aid for hazard/pickup rects).
    pub debug_border: bool,
}
