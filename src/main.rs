/// Entry point and game loop.

mod config;
mod domain;
mod sim;
mod ui;

use std::time::{Duration, Instant};

use config::GameConfig;
use domain::entity::Hero;
use domain::geometry::{DrawCmd, SpriteKind};
use sim::context::GameContext;
use sim::event::GameEvent;
use sim::hooks::{PlayerHooks, UiHooks};
use sim::layout;
use sim::stage::Level;
use ui::cards::CardPanel;
use ui::input::{Control, InputState};
use ui::renderer::{Hud, Renderer};

const FRAME_SLEEP: Duration = Duration::from_millis(5);
/// How long a HUD message lingers, in ticks.
const MESSAGE_TICKS: u32 = 150;

fn main() {
    let config = GameConfig::load();

    let mut renderer = Renderer::new();
    if let Err(e) = renderer.init() {
        eprintln!("Terminal init failed: {e}");
        return;
    }

    let result = game_loop(&config, &mut renderer);

    if let Err(e) = renderer.cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }
    if let Err(e) = result {
        eprintln!("Game error: {e}");
    }

    println!();
    println!("Thanks for playing Card Runner!");
}

fn game_loop(
    config: &GameConfig,
    renderer: &mut Renderer,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = GameContext::new();
    let layout = layout::level_one();
    let mut hero = Hero::new(layout.hero_spawn, layout.floor_heights);
    let mut panel = CardPanel::new();
    let mut level = Level::new(config.scroll.clone(), layout, config.debug.collision_borders);
    let mut input = InputState::new();

    let tick_rate = Duration::from_millis(config.scroll.tick_rate_ms);
    let mut last_tick = Instant::now();

    let mut pending_click: Option<(f32, f32)> = None;
    let mut events: Vec<GameEvent> = Vec::new();
    let mut message = String::new();
    let mut message_timer: u32 = 0;

    loop {
        input.drain_events();

        let mut quit = false;
        for &control in input.controls() {
            match control {
                Control::Quit => quit = true,
                Control::Click { col, row } => {
                    pending_click = Some(renderer.cell_to_world(col, row));
                }
                Control::Card(i) => {
                    // number keys stand in for a click on the card's center
                    pending_click = Some(panel.cards()[i].0.center());
                }
                Control::Skip => {
                    events.extend(level.skip_stage(&ctx, &mut panel));
                }
            }
        }
        if quit {
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            ctx.advance_frame();

            events.extend(level.handle_click(&mut ctx, &mut hero, &mut panel, pending_click.take()));
            events.extend(level.tick(&ctx, &mut hero, &mut panel));
            events.extend(resolve_contacts(&mut level, &mut hero, &ctx));

            for event in events.drain(..) {
                if let Some(text) = describe(event) {
                    message = text;
                    message_timer = MESSAGE_TICKS;
                }
            }
            if message_timer > 0 {
                message_timer -= 1;
                if message_timer == 0 {
                    message.clear();
                }
            }

            last_tick = Instant::now();
        }

        let mut cmds = level.draw();
        cmds.push(DrawCmd { rect: hero.rect(), kind: SpriteKind::Hero, debug_border: false });
        cmds.extend(panel.draw());

        let hud = Hud {
            stage: level.stage(),
            max_stage: level.max_stage(),
            hp: hero.hp,
            next_floors: level.next_elevations(),
            potions: level.pickup_count(),
            message: &message,
            floors: level.floor_heights(),
            cards: (*panel.cards()).map(|(rect, action)| (rect, action.label())),
            locked: panel.locked() || level.input_locked(),
            tutorial_open: panel.tutorial_open(),
            complete: level.complete(),
            dead: hero.dead(),
        };
        renderer.render(&cmds, &hud)?;

        std::thread::sleep(FRAME_SLEEP);
    }

    Ok(())
}

/// Hero-vs-world contact resolution. The hero's overlap check is the
/// authoritative "already collected" gate; the registry removal below it
/// is a silent no-op on stale indices.
fn resolve_contacts(level: &mut Level, hero: &mut Hero, ctx: &GameContext) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if hero.dead() {
        return events;
    }
    let hero_rect = hero.rect();

    if level.hazard_rects().iter().any(|r| r.intersects(&hero_rect)) {
        hero.hit(ctx.tick); // grace window lives in the hero
    }

    if let Some(i) = level.pickup_rects().iter().position(|r| r.intersects(&hero_rect)) {
        if level.collect_pickup(i) {
            hero.heal();
            events.push(GameEvent::PickupCollected { index: i });
        }
    }
    events
}

fn describe(event: GameEvent) -> Option<String> {
    match event {
        GameEvent::StageCommitted { stage } => Some(format!("Stage {stage}")),
        GameEvent::StageHeld => Some("The world moved on without you...".into()),
        GameEvent::LevelComplete => Some("Level complete!".into()),
        GameEvent::PickupCollected { .. } => Some("Potion! +1 HP".into()),
        GameEvent::TutorialFinished => Some("Pick a card.".into()),
        GameEvent::SkipRequested => Some("Skipping ahead...".into()),
        GameEvent::AdvanceStarted { .. } | GameEvent::UiUnlocked => None,
    }
}
