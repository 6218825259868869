/// Owner of the mutable world-space positions for hazards and pickups.
///
/// Positions ride the scroll: the stage machine shifts every entry once
/// per advancing tick. Pickups can be collected (removed by index);
/// hazards are permanent. Rect projection applies a per-type policy
/// (draw scale + vertical offset baked into the sprite tuning).

use super::geometry::{Rect, SpriteDef};

/// Presentation tuning for one entity type: how its stored position maps
/// to a drawn/hit-tested rectangle.
#[derive(Clone, Copy, Debug)]
pub struct RectPolicy {
    pub scale: f32,
    pub y_offset: f32,
}

pub struct Registry {
    hazards: Vec<(f32, f32)>,
    pickups: Vec<(f32, f32)>,
    hazard_sprite: SpriteDef,
    hazard_policy: RectPolicy,
    pickup_sprite: SpriteDef,
    pickup_policy: RectPolicy,
}

impl Registry {
    pub fn new(
        hazards: Vec<(f32, f32)>,
        pickups: Vec<(f32, f32)>,
        hazard_sprite: SpriteDef,
        hazard_policy: RectPolicy,
        pickup_sprite: SpriteDef,
        pickup_policy: RectPolicy,
    ) -> Self {
        Registry {
            hazards,
            pickups,
            hazard_sprite,
            hazard_policy,
            pickup_sprite,
            pickup_policy,
        }
    }

    /// Translate every hazard and every pickup. O(n) per call, applied
    /// once per tick while a transition is in flight.
    pub fn shift(&mut self, dx: f32, dy: f32) {
        for (x, y) in &mut self.hazards {
            *x += dx;
            *y += dy;
        }
        for (x, y) in &mut self.pickups {
            *x += dx;
            *y += dy;
        }
    }

    /// Remove a collected pickup. Out-of-range indices are a silent no-op:
    /// the authoritative already-collected check lives in the caller, and
    /// a stale collection attempt must not be observable as an error.
    pub fn remove_pickup(&mut self, index: usize) {
        if index < self.pickups.len() {
            self.pickups.remove(index);
        }
    }

    #[allow(dead_code)]
    pub fn hazard_count(&self) -> usize {
        self.hazards.len()
    }

    pub fn pickup_count(&self) -> usize {
        self.pickups.len()
    }

    /// Current hazard rectangles under the hazard rect policy.
    pub fn hazard_rects(&self) -> Vec<Rect> {
        self.hazards
            .iter()
            .map(|&(x, y)| {
                self.hazard_sprite
                    .rect_at(x, y + self.hazard_policy.y_offset, self.hazard_policy.scale)
            })
            .collect()
    }

    /// Current pickup rectangles under the pickup rect policy.
    pub fn pickup_rects(&self) -> Vec<Rect> {
        self.pickups
            .iter()
            .map(|&(x, y)| {
                self.pickup_sprite
                    .rect_at(x, y + self.pickup_policy.y_offset, self.pickup_policy.scale)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::SpriteKind;

    fn registry() -> Registry {
        Registry::new(
            vec![(510.0, 338.0), (750.0, 554.0)],
            vec![(1060.0, 570.0), (1920.0, 136.0), (2500.0, 570.0)],
            SpriteDef { dim_x: 128.0, dim_y: 64.0, kind: SpriteKind::Hazard },
            RectPolicy { scale: 0.75, y_offset: -268.0 },
            SpriteDef { dim_x: 68.0, dim_y: 87.0, kind: SpriteKind::Pickup },
            RectPolicy { scale: 0.75, y_offset: -515.0 },
        )
    }

    #[test]
    fn shift_translates_both_lists() {
        let mut reg = registry();
        reg.shift(-3.555, 0.0);
        let hz = reg.hazard_rects();
        assert!((hz[0].x - (510.0 - 3.555)).abs() < 1e-4);
        let pk = reg.pickup_rects();
        assert!((pk[1].x - (1920.0 - 3.555)).abs() < 1e-4);
    }

    #[test]
    fn rect_policy_applies_scale_and_offset() {
        let reg = registry();
        let hz = reg.hazard_rects();
        assert_eq!(hz[0].y, 338.0 - 268.0);
        assert_eq!(hz[0].w, 128.0 * 0.75);
        let pk = reg.pickup_rects();
        assert_eq!(pk[0].y, 570.0 - 515.0);
        assert_eq!(pk[0].h, 87.0 * 0.75);
    }

    #[test]
    fn remove_pickup_keeps_order() {
        let mut reg = registry();
        reg.remove_pickup(1);
        assert_eq!(reg.pickup_count(), 2);
        let pk = reg.pickup_rects();
        assert_eq!(pk[0].x, 1060.0);
        assert_eq!(pk[1].x, 2500.0);
    }

    #[test]
    fn remove_pickup_out_of_range_is_noop() {
        let mut reg = registry();
        reg.remove_pickup(99);
        assert_eq!(reg.pickup_count(), 3);
        reg.remove_pickup(0);
        reg.remove_pickup(0);
        reg.remove_pickup(0);
        reg.remove_pickup(0); // empty now, still silent
        assert_eq!(reg.pickup_count(), 0);
    }

    #[test]
    fn hazards_are_never_removed() {
        let reg = registry();
        assert_eq!(reg.hazard_count(), 2);
        // no removal API exists for hazards; the count is fixed for the level
    }
}
