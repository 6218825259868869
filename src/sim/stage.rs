/// The stage machine: tracks which horizontal stage the hero occupies,
/// scrolls every world layer while a transition is in flight, and decides
/// when a transition commits.
///
/// Per-tick processing order (load-bearing):
///   1. Player tick
///   2. Skip-cooldown check (UI unlock at the skip threshold)
///   3. Advance block — while the advance timer runs:
///      a. unconditional triple shift (foreground, hazards/pickups,
///         background) every tick regardless of elapsed time
///      b. commit check at `advance_ticks`, stage held if the player died
///      c. input-lock recompute + timer clear at `input_clear_ticks`,
///         nested INSIDE the commit branch
///
/// The nesting in (c) is intentional: the short clear threshold sits
/// inside the long commit branch, so in practice both fire on the commit
/// tick. Flattening the checks would change the machine's shape, not its
/// observable timing, and the nested form is what the tests pin down.
///
/// There is no cancellation: a started transition always runs to its
/// timer-driven end. Death only suppresses the stage increment; the scroll
/// and the UI unlock still complete.

use crate::config::ScrollConfig;
use crate::domain::elevation::{ElevationMap, FloorFlags};
use crate::domain::geometry::{DrawCmd, Rect, SpriteDef, SpriteKind};
use crate::domain::registry::Registry;
use super::context::{GameContext, StageTimer};
use super::event::GameEvent;
use super::hooks::{PlayerHooks, UiHooks};
use super::layout::LevelLayout;

pub struct Level {
    scroll: ScrollConfig,

    stage: usize,
    /// Horizontal translation of the level art. Decreases monotonically
    /// while a forward transition is in flight, frozen otherwise.
    level_pos_x: f32,
    level_sprite: SpriteDef,
    level_scale: f32,

    bg_sprite: SpriteDef,
    bg_scale: f32,
    bg_positions: Vec<f32>,

    registry: Registry,
    elevations: ElevationMap,
    floor_heights: [f32; 3],

    skip_started: StageTimer,
    advance_started: StageTimer,
    input_locked: bool,

    collision_debug: bool,
}

impl Level {
    pub fn new(scroll: ScrollConfig, layout: LevelLayout, collision_debug: bool) -> Self {
        Level {
            scroll,
            stage: 0,
            level_pos_x: 0.0,
            level_sprite: layout.level_sprite,
            level_scale: layout.level_scale,
            bg_sprite: layout.bg_sprite,
            bg_scale: layout.bg_scale,
            bg_positions: layout.bg_segments,
            registry: Registry::new(
                layout.hazards,
                layout.pickups,
                layout.hazard_sprite,
                layout.hazard_policy,
                layout.pickup_sprite,
                layout.pickup_policy,
            ),
            elevations: layout.elevations,
            floor_heights: layout.floor_heights,
            skip_started: StageTimer::unset(),
            advance_started: StageTimer::unset(),
            input_locked: false,
            collision_debug,
        }
    }

    // ── Queries ──

    pub fn stage(&self) -> usize {
        self.stage
    }

    pub fn level_pos_x(&self) -> f32 {
        self.level_pos_x
    }

    pub fn complete(&self) -> bool {
        self.stage == self.elevations.max_stage()
    }

    pub fn next_stage(&self) -> usize {
        self.elevations.clamp(self.stage as i64 + 1)
    }

    pub fn max_stage(&self) -> usize {
        self.elevations.max_stage()
    }

    pub fn next_elevations(&self) -> FloorFlags {
        self.elevations.reachable(self.next_stage())
    }

    pub fn input_locked(&self) -> bool {
        self.input_locked
    }

    #[allow(dead_code)]
    pub fn advancing(&self) -> bool {
        self.advance_started.running()
    }

    pub fn floor_heights(&self) -> [f32; 3] {
        self.floor_heights
    }

    pub fn hazard_rects(&self) -> Vec<Rect> {
        self.registry.hazard_rects()
    }

    pub fn pickup_rects(&self) -> Vec<Rect> {
        self.registry.pickup_rects()
    }

    pub fn pickup_count(&self) -> usize {
        self.registry.pickup_count()
    }

    #[cfg(test)]
    fn bg_positions(&self) -> &[f32] {
        &self.bg_positions
    }

    // ── Input path ──

    /// Feed one frame of input. `click` is a world-space click position if
    /// the mouse was clicked this frame.
    pub fn handle_click(
        &mut self,
        ctx: &mut GameContext,
        player: &mut impl PlayerHooks,
        ui: &mut impl UiHooks,
        click: Option<(f32, f32)>,
    ) -> Vec<GameEvent> {
        let mut events = Vec::new();
        ui.handle_input();

        let (cx, cy) = match click {
            Some(pos) => pos,
            None => return events,
        };
        if ui.locked() || self.input_locked {
            return events;
        }

        if !ctx.tutorial_done {
            ui.finish_tutorial();
            ctx.tutorial_done = true;
            events.push(GameEvent::TutorialFinished);
            return events;
        }

        let action = match ui.action_for_click(cx, cy) {
            Some(a) => a,
            None => return events,
        };
        if player.dead() || self.complete() {
            return events;
        }

        player.handle_action(action);
        if action.advances() {
            self.input_locked = true; // unlocked when the stage transition ends
            self.advance_stage(ctx);
            events.push(GameEvent::AdvanceStarted { action });
        }
        events
    }

    /// Explicit skip: lock the UI and start the skip cooldown.
    /// Record-if-absent — the cooldown is never re-armed within a level.
    pub fn skip_stage(&mut self, ctx: &GameContext, ui: &mut impl UiHooks) -> Vec<GameEvent> {
        self.skip_started.start_if_unset(ctx.tick);
        ui.lock();
        vec![GameEvent::SkipRequested]
    }

    fn advance_stage(&mut self, ctx: &GameContext) {
        self.advance_started.start_if_unset(ctx.tick);
    }

    // ── Frame driver ──

    pub fn tick(
        &mut self,
        ctx: &GameContext,
        player: &mut impl PlayerHooks,
        ui: &mut impl UiHooks,
    ) -> Vec<GameEvent> {
        let mut events = Vec::new();

        player.tick(ctx);

        if let Some(dt) = self.skip_started.elapsed(ctx.tick) {
            if dt >= self.scroll.skip_unlock_ticks {
                if ui.locked() {
                    events.push(GameEvent::UiUnlocked);
                }
                ui.unlock();
            }
        }

        if let Some(dt) = self.advance_started.elapsed(ctx.tick) {
            // Move the hero right by moving the world left. These shifts
            // run every tick the timer is set, whatever dt is.
            self.level_pos_x -= self.scroll.fg_speed;
            self.registry.shift(-self.scroll.fg_speed, 0.0);
            for x in &mut self.bg_positions {
                *x += self.scroll.bg_speed;
            }

            if dt >= self.scroll.advance_ticks {
                if player.dead() {
                    events.push(GameEvent::StageHeld);
                } else {
                    self.stage = self.next_stage();
                    debug_assert!(self.stage <= self.elevations.max_stage());
                    events.push(GameEvent::StageCommitted { stage: self.stage });
                }
                ui.unlock();
                if dt >= self.scroll.input_clear_ticks {
                    self.input_locked = self.complete();
                    self.advance_started.clear();
                    if self.complete() {
                        events.push(GameEvent::LevelComplete);
                    }
                }
            }
        }

        events
    }

    // ── Pickup collection ──

    /// Remove a collected pickup. Forwards the registry's silent-no-op
    /// policy for stale indices.
    pub fn collect_pickup(&mut self, index: usize) -> bool {
        let before = self.registry.pickup_count();
        self.registry.remove_pickup(index);
        self.registry.pickup_count() < before
    }

    // ── Draw (pure read) ──

    /// World draw list for this frame, back to front: background tiles,
    /// level art, hazards, pickups. The hero and the card panel are drawn
    /// by their owners on top.
    pub fn draw(&self) -> Vec<DrawCmd> {
        let mut cmds = Vec::with_capacity(self.bg_positions.len() + 1 + 16);

        for &x in &self.bg_positions {
            cmds.push(DrawCmd {
                rect: self.bg_sprite.rect_at(x + self.level_pos_x, 0.0, self.bg_scale),
                kind: SpriteKind::Background,
                debug_border: false,
            });
        }

        cmds.push(DrawCmd {
            rect: self.level_sprite.rect_at(self.level_pos_x, 0.0, self.level_scale),
            kind: SpriteKind::LevelArt,
            debug_border: false,
        });

        for rect in self.registry.hazard_rects() {
            cmds.push(DrawCmd { rect, kind: SpriteKind::Hazard, debug_border: self.collision_debug });
        }
        for rect in self.registry.pickup_rects() {
            cmds.push(DrawCmd { rect, kind: SpriteKind::Pickup, debug_border: self.collision_debug });
        }

        cmds
    }
}
