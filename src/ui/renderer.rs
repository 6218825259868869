/// Presentation layer: maps the 1280x720 world onto terminal cells.
///
/// The frame's draw list is painted back to front into a cell grid, HUD
/// text goes on top, and the grid is emitted in one queue!-batched pass.
/// World y is up, terminal rows grow down, so rows are flipped during
/// rect painting.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor::{self, MoveTo},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::domain::geometry::{DrawCmd, Rect, SpriteKind, WORLD_H, WORLD_W};

const BASE_BG: Color = Color::Rgb { r: 16, g: 18, b: 32 };
const SKY_BG: Color = Color::Rgb { r: 30, g: 38, b: 66 };
const PLATFORM_BG: Color = Color::Rgb { r: 52, g: 110, b: 58 };
const POST_FG: Color = Color::Rgb { r: 86, g: 70, b: 48 };
const CARD_BG: Color = Color::Rgb { r: 198, g: 200, b: 212 };
const CARD_LOCKED_BG: Color = Color::Rgb { r: 84, g: 86, b: 96 };

/// Spacing of the scroll-feedback posts painted over the level art.
const POST_SPACING: f32 = 256.0;
/// Platform strip thickness in world px.
const PLATFORM_THICKNESS: f32 = 18.0;

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

const BLANK: Cell = Cell { ch: ' ', fg: Color::White, bg: BASE_BG };

/// Everything the renderer needs besides the world draw list.
pub struct Hud<'a> {
    pub stage: usize,
    pub max_stage: usize,
    pub hp: u32,
    /// Floors the next stage offers (ground, second, third).
    pub next_floors: [bool; 3],
    pub potions: usize,
    pub message: &'a str,
    pub floors: [f32; 3],
    pub cards: [(Rect, &'static str); 3],
    pub locked: bool,
    pub tutorial_open: bool,
    pub complete: bool,
    pub dead: bool,
}

pub struct Renderer {
    out: BufWriter<Stdout>,
    cols: u16,
    rows: u16,
    grid: Vec<Cell>,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            out: BufWriter::new(io::stdout()),
            cols: 0,
            rows: 0,
            grid: vec![],
        }
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            Clear(ClearType::All)
        )?;
        let (cols, rows) = terminal::size()?;
        self.resize(cols, rows);
        Ok(())
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(self.out, cursor::Show, DisableMouseCapture, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.grid = vec![BLANK; cols as usize * rows as usize];
    }

    // ── Coordinate mapping ──

    fn sx(&self) -> f32 {
        self.cols as f32 / WORLD_W
    }

    fn sy(&self) -> f32 {
        self.rows as f32 / WORLD_H
    }

    /// Terminal cell -> world position (cell center).
    pub fn cell_to_world(&self, col: u16, row: u16) -> (f32, f32) {
        let x = (col as f32 + 0.5) / self.sx();
        let y = WORLD_H - (row as f32 + 0.5) / self.sy();
        (x, y)
    }

    /// World rect -> inclusive-exclusive cell ranges, clamped to screen.
    fn cell_span(&self, rect: &Rect) -> (usize, usize, usize, usize) {
        let col0 = (rect.x * self.sx()).floor().max(0.0) as usize;
        let col1 = ((rect.x + rect.w) * self.sx()).ceil().min(self.cols as f32) as usize;
        let row0 = ((WORLD_H - rect.y - rect.h) * self.sy()).floor().max(0.0) as usize;
        let row1 = ((WORLD_H - rect.y) * self.sy()).ceil().min(self.rows as f32) as usize;
        (col0, col1, row0, row1)
    }

    // ── Painting ──

    fn put(&mut self, col: usize, row: usize, cell: Cell) {
        if col < self.cols as usize && row < self.rows as usize {
            self.grid[row * self.cols as usize + col] = cell;
        }
    }

    fn overlay(&mut self, col: usize, row: usize, ch: char, fg: Color) {
        if col < self.cols as usize && row < self.rows as usize {
            let cell = &mut self.grid[row * self.cols as usize + col];
            cell.ch = ch;
            cell.fg = fg;
        }
    }

    fn fill(&mut self, rect: &Rect, cell: Cell) {
        let (c0, c1, r0, r1) = self.cell_span(rect);
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(col, row, cell);
            }
        }
    }

    fn glyph_fill(&mut self, rect: &Rect, ch: char, fg: Color) {
        let (c0, c1, r0, r1) = self.cell_span(rect);
        for row in r0..r1 {
            for col in c0..c1 {
                self.overlay(col, row, ch, fg);
            }
        }
    }

    fn border(&mut self, rect: &Rect, fg: Color) {
        let (c0, c1, r0, r1) = self.cell_span(rect);
        if c0 >= c1 || r0 >= r1 {
            return;
        }
        for col in c0..c1 {
            self.overlay(col, r0, '+', fg);
            self.overlay(col, r1 - 1, '+', fg);
        }
        for row in r0..r1 {
            self.overlay(c0, row, '+', fg);
            self.overlay(c1 - 1, row, '+', fg);
        }
    }

    fn text(&mut self, col: usize, row: usize, s: &str, fg: Color) {
        for (i, ch) in s.chars().enumerate() {
            self.overlay(col + i, row, ch, fg);
        }
    }

    fn text_centered(&mut self, row: usize, s: &str, fg: Color) {
        let col = (self.cols as usize).saturating_sub(s.chars().count()) / 2;
        self.text(col, row, s, fg);
    }

    /// Level art: the texture itself is out of scope, so the strip at each
    /// floor height plus periodic posts stand in for the platform art.
    /// Both ride the rect's x, so the scroll is visible.
    fn paint_level_art(&mut self, rect: &Rect, floors: &[f32; 3]) {
        for &floor_y in floors {
            let strip = Rect::new(rect.x, floor_y - PLATFORM_THICKNESS, rect.w, PLATFORM_THICKNESS);
            self.fill(&strip, Cell { ch: ' ', fg: Color::White, bg: PLATFORM_BG });
        }
        let mut px = (rect.x / POST_SPACING).ceil() * POST_SPACING;
        while px < rect.x + rect.w {
            let post = Rect::new(px, floors[0] - PLATFORM_THICKNESS, 8.0, PLATFORM_THICKNESS);
            self.glyph_fill(&post, '|', POST_FG);
            px += POST_SPACING;
        }
    }

    // ── Frame ──

    pub fn render(&mut self, cmds: &[DrawCmd], hud: &Hud) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        if cols != self.cols || rows != self.rows {
            self.resize(cols, rows);
            queue!(self.out, Clear(ClearType::All))?;
        }
        self.grid.fill(BLANK);

        for cmd in cmds {
            match cmd.kind {
                SpriteKind::Background => {
                    self.fill(&cmd.rect, Cell { ch: ' ', fg: Color::White, bg: SKY_BG });
                }
                SpriteKind::LevelArt => {
                    let floors = hud.floors;
                    self.paint_level_art(&cmd.rect, &floors);
                }
                SpriteKind::Hazard => {
                    self.glyph_fill(&cmd.rect, '^', Color::Red);
                }
                SpriteKind::Pickup => {
                    self.glyph_fill(&cmd.rect, 'o', Color::Magenta);
                }
                SpriteKind::Hero => {
                    self.glyph_fill(&cmd.rect, '#', Color::Yellow);
                }
                SpriteKind::Card => {
                    let bg = if hud.locked { CARD_LOCKED_BG } else { CARD_BG };
                    self.fill(&cmd.rect, Cell { ch: ' ', fg: Color::Black, bg });
                }
            }
            if cmd.debug_border {
                self.border(&cmd.rect, Color::Red);
            }
        }

        // card labels
        for (rect, label) in &hud.cards {
            let (c0, c1, r0, r1) = self.cell_span(rect);
            if c1 > c0 && r1 > r0 {
                let row = (r0 + r1) / 2;
                let col = c0 + (c1 - c0).saturating_sub(label.chars().count()) / 2;
                self.text(col, row, label, Color::Black);
            }
        }

        // HUD line
        let hearts = "*".repeat(hud.hp as usize);
        let next = if hud.complete {
            "-".to_string()
        } else {
            let names = ["G", "2F", "3F"];
            hud.next_floors
                .iter()
                .zip(names)
                .filter_map(|(&open, name)| open.then_some(name))
                .collect::<Vec<_>>()
                .join("/")
        };
        let status = format!(
            " Stage {}/{}  HP {:<3}  Next: {:<7}  Potions: {}  {}",
            hud.stage, hud.max_stage, hearts, next, hud.potions, hud.message
        );
        self.text(0, 0, &status, Color::White);

        if hud.tutorial_open {
            self.text_centered(
                self.rows as usize / 2,
                "Click anywhere to begin. Cards 1-3 act, S skips, Q quits.",
                Color::White,
            );
        } else if hud.dead {
            self.text_centered(self.rows as usize / 2, "You died. Q to quit.", Color::Red);
        } else if hud.complete {
            self.text_centered(self.rows as usize / 2, "Level complete!", Color::Green);
        }

        self.emit()
    }

    fn emit(&mut self) -> io::Result<()> {
        for row in 0..self.rows {
            queue!(self.out, MoveTo(0, row))?;
            for col in 0..self.cols {
                let cell = self.grid[row as usize * self.cols as usize + col as usize];
                queue!(
                    self.out,
                    SetForegroundColor(cell.fg),
                    SetBackgroundColor(cell.bg),
                    Print(cell.ch)
                )?;
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}
