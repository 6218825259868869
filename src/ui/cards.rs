/// The choice-card panel: three action cards along the bottom edge.
///
/// Implements the UI surface the stage machine talks to. The panel owns
/// its lock flag and the tutorial overlay; click resolution is a plain
/// rect lookup. Whether a click reaches the panel at all is the stage
/// machine's call.

use crate::domain::action::Action;
use crate::domain::geometry::{DrawCmd, Rect, SpriteKind, WORLD_W};
use crate::sim::hooks::UiHooks;

const CARD_W: f32 = 150.0;
const CARD_H: f32 = 200.0;
const CARD_GAP: f32 = 30.0;
const CARD_Y: f32 = 24.0;

pub struct CardPanel {
    locked: bool,
    tutorial_open: bool,
    cards: [(Rect, Action); 3],
}

impl CardPanel {
    pub fn new() -> Self {
        let actions = [Action::Walk, Action::Jump, Action::Concentrate];
        let total = 3.0 * CARD_W + 2.0 * CARD_GAP;
        let left = (WORLD_W - total) / 2.0;

        let mut i = 0;
        let cards = actions.map(|action| {
            let x = left + i as f32 * (CARD_W + CARD_GAP);
            i += 1;
            (Rect::new(x, CARD_Y, CARD_W, CARD_H), action)
        });

        CardPanel { locked: false, tutorial_open: true, cards }
    }

    pub fn cards(&self) -> &[(Rect, Action); 3] {
        &self.cards
    }

    pub fn tutorial_open(&self) -> bool {
        self.tutorial_open
    }

    pub fn draw(&self) -> Vec<DrawCmd> {
        self.cards
            .iter()
            .map(|&(rect, _)| DrawCmd { rect, kind: SpriteKind::Card, debug_border: false })
            .collect()
    }
}

impl UiHooks for CardPanel {
    fn handle_input(&mut self) {
        // no per-frame widget state yet; hover/animation would go here
    }

    fn locked(&self) -> bool {
        self.locked
    }

    fn lock(&mut self) {
        self.locked = true;
    }

    fn unlock(&mut self) {
        self.locked = false;
    }

    fn action_for_click(&self, x: f32, y: f32) -> Option<Action> {
        self.cards
            .iter()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|&(_, action)| action)
    }

    fn finish_tutorial(&mut self) {
        self.tutorial_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks_resolve_to_the_card_under_them() {
        let panel = CardPanel::new();
        for &(rect, action) in panel.cards() {
            let (cx, cy) = rect.center();
            assert_eq!(panel.action_for_click(cx, cy), Some(action));
        }
    }

    #[test]
    fn clicks_between_cards_resolve_to_nothing() {
        let panel = CardPanel::new();
        let (first, _) = panel.cards()[0];
        assert_eq!(panel.action_for_click(first.x + first.w + 1.0, first.y + 5.0), None);
        assert_eq!(panel.action_for_click(10.0, 600.0), None);
    }

    #[test]
    fn lock_state_round_trips() {
        let mut panel = CardPanel::new();
        assert!(!panel.locked());
        panel.lock();
        assert!(panel.locked());
        panel.unlock();
        assert!(!panel.locked());
    }

    #[test]
    fn tutorial_dismisses_once() {
        let mut panel = CardPanel::new();
        assert!(panel.tutorial_open());
        panel.finish_tutorial();
        assert!(!panel.tutorial_open());
    }
}
