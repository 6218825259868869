/// Collaborator contracts consumed by the stage machine.
///
/// The sim only needs these narrow surfaces; the concrete hero entity and
/// the card panel implement them, and the stage tests run against stubs.

use crate::domain::action::Action;
use super::context::GameContext;

/// The player avatar. Ticked unconditionally every frame; `dead` gates
/// the stage commit at the end of a transition.
pub trait PlayerHooks {
    fn tick(&mut self, ctx: &GameContext);
    fn dead(&self) -> bool;
    fn handle_action(&mut self, action: Action);
}

/// The choice-card panel. `locked` suppresses click resolution while a
/// skip cooldown or transition is in flight.
pub trait UiHooks {
    fn handle_input(&mut self);
    fn locked(&self) -> bool;
    fn lock(&mut self);
    fn unlock(&mut self);
    /// Resolve a world-space click to the card under it, if any.
    fn action_for_click(&self, x: f32, y: f32) -> Option<Action>;
    fn finish_tutorial(&mut self);
}
