/// The hero entity: the concrete player collaborator.
///
/// The stage machine only sees it through `PlayerHooks`. Movement is
/// deliberately simple: the hero holds a target floor and eases its y
/// toward that floor's height each tick; horizontal motion is an illusion
/// produced by the world scrolling underneath.

use crate::domain::action::Action;
use crate::domain::geometry::{Rect, SpriteDef, SpriteKind};
use crate::sim::context::GameContext;
use crate::sim::hooks::PlayerHooks;

const MAX_HP: u32 = 3;
/// Vertical easing speed, px/tick.
const CLIMB_SPEED: f32 = 9.0;
/// Ticks of grace after taking a hit before the next one counts.
const HURT_GRACE: u64 = 60;

pub struct Hero {
    pub x: f32,
    pub y: f32,
    pub hp: u32,
    floor: usize,
    floor_heights: [f32; 3],
    dead: bool,
    hurt_until: u64,
    sprite: SpriteDef,
}

impl Hero {
    pub fn new(spawn: (f32, f32), floor_heights: [f32; 3]) -> Self {
        Hero {
            x: spawn.0,
            y: spawn.1,
            hp: MAX_HP,
            floor: 0,
            floor_heights,
            dead: false,
            hurt_until: 0,
            sprite: SpriteDef { dim_x: 96.0, dim_y: 128.0, kind: SpriteKind::Hero },
        }
    }

    pub fn rect(&self) -> Rect {
        self.sprite.rect_at(self.x, self.y, 1.0)
    }

    #[allow(dead_code)]
    pub fn floor(&self) -> usize {
        self.floor
    }

    /// Take a hit unless dead or inside the post-hit grace window.
    /// Returns whether the hit landed.
    pub fn hit(&mut self, now: u64) -> bool {
        if self.dead || now < self.hurt_until {
            return false;
        }
        self.hp = self.hp.saturating_sub(1);
        self.hurt_until = now + HURT_GRACE;
        if self.hp == 0 {
            self.dead = true;
        }
        true
    }

    pub fn heal(&mut self) {
        if !self.dead {
            self.hp = (self.hp + 1).min(MAX_HP);
        }
    }
}

impl PlayerHooks for Hero {
    fn tick(&mut self, _ctx: &GameContext) {
        let target = self.floor_heights[self.floor];
        let dy = target - self.y;
        if dy.abs() <= CLIMB_SPEED {
            self.y = target;
        } else {
            self.y += CLIMB_SPEED * dy.signum();
        }
    }

    fn dead(&self) -> bool {
        self.dead
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Walk => self.floor = 0,
            Action::Jump => self.floor = (self.floor + 1).min(self.floor_heights.len() - 1),
            Action::Concentrate => self.heal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Hero {
        Hero::new((189.0, 72.0), [88.0, 304.0, 520.0])
    }

    #[test]
    fn eases_toward_floor_height() {
        let ctx = GameContext::new();
        let mut h = hero();
        h.handle_action(Action::Jump);
        let before = h.y;
        h.tick(&ctx);
        assert!(h.y > before);
        for _ in 0..100 {
            h.tick(&ctx);
        }
        assert_eq!(h.y, 304.0);
    }

    #[test]
    fn jump_tops_out_at_third_floor() {
        let mut h = hero();
        h.handle_action(Action::Jump);
        h.handle_action(Action::Jump);
        h.handle_action(Action::Jump);
        assert_eq!(h.floor(), 2);
        h.handle_action(Action::Walk);
        assert_eq!(h.floor(), 0);
    }

    #[test]
    fn hits_respect_grace_window_and_kill_at_zero() {
        let mut h = hero();
        assert!(h.hit(100));
        assert_eq!(h.hp, 2);
        assert!(!h.hit(110)); // still in grace
        assert!(h.hit(100 + HURT_GRACE));
        assert!(h.hit(100 + 2 * HURT_GRACE));
        assert!(h.dead());
        assert!(!h.hit(1_000_000)); // dead heroes take no hits
    }

    #[test]
    fn concentrate_heals_up_to_cap() {
        let mut h = hero();
        h.hit(50);
        assert_eq!(h.hp, 2);
        h.handle_action(Action::Concentrate);
        assert_eq!(h.hp, 3);
        h.handle_action(Action::Concentrate);
        assert_eq!(h.hp, 3);
    }
}
