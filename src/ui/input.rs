/// Input drain: collapses the frame's terminal events into game controls.
///
/// The game is click-driven, so there is no held-key tracking: mouse
/// clicks select cards directly, and the number keys synthesize a click
/// on the matching card for terminals without mouse reporting.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind, poll,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Quit,
    /// Left click at a terminal cell.
    Click { col: u16, row: u16 },
    /// Number-key selection of card 0..=2.
    Card(usize),
    Skip,
}

pub struct InputState {
    controls: Vec<Control>,
}

impl InputState {
    pub fn new() -> Self {
        InputState { controls: Vec::with_capacity(8) }
    }

    /// Drain all pending terminal events. Call once per frame.
    pub fn drain_events(&mut self) {
        self.controls.clear();

        while poll(Duration::ZERO).unwrap_or(false) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
                    {
                        self.controls.push(Control::Quit);
                        continue;
                    }
                    match key.code {
                        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                            self.controls.push(Control::Quit);
                        }
                        KeyCode::Char(c @ '1'..='3') => {
                            self.controls.push(Control::Card(c as usize - '1' as usize));
                        }
                        KeyCode::Char('s') | KeyCode::Char('S') => {
                            self.controls.push(Control::Skip);
                        }
                        _ => {}
                    }
                }
                Ok(Event::Mouse(m)) => {
                    if let MouseEventKind::Down(MouseButton::Left) = m.kind {
                        self.controls.push(Control::Click { col: m.column, row: m.row });
                    }
                }
                _ => {}
            }
        }
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }
}
