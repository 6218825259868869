/// Embedded level definition: sprite dimensions, scroll art scales, the
/// hazard/pickup tables, and the per-stage elevation rows.
///
/// Coordinates are world px with y-up. One level ships built in; the
/// struct keeps the door open for loading more.

use crate::domain::elevation::ElevationMap;
use crate::domain::geometry::{SpriteDef, SpriteKind};
use crate::domain::registry::RectPolicy;

pub struct LevelLayout {
    /// Foreground level art, translated by the world position offset.
    pub level_sprite: SpriteDef,
    pub level_scale: f32,

    /// One tiled background segment; `bg_segments` holds the initial x of
    /// each tile.
    pub bg_sprite: SpriteDef,
    pub bg_scale: f32,
    pub bg_segments: Vec<f32>,

    pub hazard_sprite: SpriteDef,
    pub hazard_policy: RectPolicy,
    pub pickup_sprite: SpriteDef,
    pub pickup_policy: RectPolicy,

    pub hazards: Vec<(f32, f32)>,
    pub pickups: Vec<(f32, f32)>,

    pub elevations: ElevationMap,
    /// Ground, second, third floor heights in px.
    pub floor_heights: [f32; 3],
    pub hero_spawn: (f32, f32),
}

/// The built-in first level.
pub fn level_one() -> LevelLayout {
    let bg_scale = 0.7032; // 1024px tile to 720px screen
    let bg_sprite = SpriteDef { dim_x: 1024.0, dim_y: 1024.0, kind: SpriteKind::Background };

    LevelLayout {
        level_sprite: SpriteDef { dim_x: 5120.0, dim_y: 1280.0, kind: SpriteKind::LevelArt },
        level_scale: 0.5625, // 1280px art to 720px screen

        bg_segments: (-1..=3).map(|i| i as f32 * bg_sprite.dim_x * bg_scale).collect(),
        bg_sprite,
        bg_scale,

        hazard_sprite: SpriteDef { dim_x: 128.0, dim_y: 64.0, kind: SpriteKind::Hazard },
        hazard_policy: RectPolicy { scale: 0.75, y_offset: -268.0 },
        pickup_sprite: SpriteDef { dim_x: 68.0, dim_y: 87.0, kind: SpriteKind::Pickup },
        pickup_policy: RectPolicy { scale: 0.75, y_offset: -515.0 },

        hazards: vec![
            // Stage 1
            (510.0, 338.0),
            (750.0, 554.0),
            // Stage 3
            (1380.0, 554.0),
            (1610.0, 554.0),
            // Stage 4
            (1660.0, 338.0),
            (1760.0, 338.0),
            (1810.0, 770.0),
            (2040.0, 770.0),
            (2060.0, 338.0),
            (2160.0, 338.0),
            // Stage 5
            (2240.0, 554.0),
            (2480.0, 770.0),
            (2470.0, 554.0),
        ],
        pickups: vec![(1060.0, 570.0), (1920.0, 136.0)],

        elevations: ElevationMap::new(vec![
            [true, false, false], // stage 0: start, not consulted
            [true, true, false],
            [true, false, true],
            [true, true, false],
            [true, false, true],
            [true, true, false],
            [true, false, false],
        ]),
        floor_heights: [88.0, 304.0, 520.0],
        hero_spawn: (189.0, 72.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_one_shape() {
        let layout = level_one();
        assert_eq!(layout.hazards.len(), 13);
        assert_eq!(layout.pickups.len(), 2);
        assert_eq!(layout.elevations.max_stage(), 6);
        assert_eq!(layout.bg_segments.len(), 5);
    }

    #[test]
    fn bg_segments_tile_edge_to_edge() {
        let layout = level_one();
        let step = layout.bg_sprite.dim_x * layout.bg_scale;
        for pair in layout.bg_segments.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < 1e-3);
        }
        // first tile starts one segment left of the screen
        assert!((layout.bg_segments[0] + step).abs() < 1e-3);
    }

    #[test]
    fn every_stage_keeps_the_ground_floor_open() {
        let layout = level_one();
        for s in 0..=layout.elevations.max_stage() {
            assert!(layout.elevations.reachable(s)[0]);
        }
    }
}
