//! Terminal factory game runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer-based
//! renderer from `factory_game::term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};

use factory_game::engine::GameSession;
use factory_game::input::{handle_key_event, handle_mouse_event, should_quit, MovementInput};
use factory_game::logging::init_tracing;
use factory_game::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use factory_game::AppConfig;

/// Enemy spawn points in play-area pixels.
const ENEMY_SPAWNS: [(f32, f32); 2] = [(500.0, 200.0), (500.0, 400.0)];

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_tracing(&config)?;
    info!(
        tick_ms = config.tick_ms,
        show_grid = config.show_grid,
        enemies = config.enemies,
        "session starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;
    info!(
        keyboard_enhanced = term.keyboard_enhanced(),
        "terminal ready"
    );

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    match &result {
        Ok(()) => info!("session finished"),
        Err(err) => error!(error = %err, "session aborted"),
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut session = GameSession::new().with_overlay_visible(config.show_grid);
    if config.enemies {
        for (x, y) in ENEMY_SPAWNS {
            session.spawn_enemy(x, y);
        }
    }
    let view = GameView::default();
    let mut movement =
        MovementInput::new().with_key_release_timeout_ms(config.key_release_timeout_ms);
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(config.tick_ms as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(&session, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if key.kind == KeyEventKind::Press && should_quit(key) {
                            return Ok(());
                        }
                        // Auto-repeat only refreshes held movement.
                        if movement.handle_key_press(key.code).is_none()
                            && key.kind == KeyEventKind::Press
                        {
                            if let Some(action) = handle_key_event(key) {
                                session.apply_action(action);
                            }
                        }
                    }
                    KeyEventKind::Release => {
                        movement.handle_key_release(key.code);
                    }
                },
                Event::Mouse(mouse) => {
                    session.set_hover(view.screen_to_pixel(viewport, mouse.column, mouse.row));
                    if let Some(action) = handle_mouse_event(mouse.kind) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            movement.update(config.tick_ms);
            session.tick(config.tick_ms, movement.direction());
        }
    }
}
