/// Events emitted by the tick and input paths.
/// The presentation layer consumes these for HUD messages.

use crate::domain::action::Action;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    SkipRequested,
    TutorialFinished,
    AdvanceStarted { action: Action },
    StageCommitted { stage: usize },
    /// The advance finished while the player was dead: the scroll ran its
    /// course but the stage did not change.
    StageHeld,
    UiUnlocked,
    LevelComplete,
    PickupCollected { index: usize },
}
