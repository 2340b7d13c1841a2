//! Terminal Snaketris runner (default binary).
//!
//! One loop: render, wait for input until the next 16ms frame, apply actions,
//! then advance the simulation by the time that passed. When a game ends with a total
//! that makes the leaderboard, a name prompt takes over the keyboard.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use tui_snaketris::core::{GameSnapshot, GameState};
use tui_snaketris::input::{handle_key_event, should_quit, NameEntry, NameInput};
use tui_snaketris::logging::init_file_logger;
use tui_snaketris::scores::{HighScores, ScoreStore};
use tui_snaketris::term::{
    FrameBuffer, GameView, NamePrompt, PanelExtras, RenderThrottle, TerminalRenderer, Viewport,
};
use tui_snaketris::types::FRAME_MS;
use tui_snaketris::{AppConfig, FrameClock};

/// Score waiting for a name
struct PendingScore {
    entry: NameEntry,
    score: u32,
    rank: usize,
}

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    if let Some(path) = &config.log_path {
        if let Err(e) = init_file_logger(path) {
            eprintln!("logging disabled: {:#}", e);
        }
    }
    log::info!(
        "starting: seed {}, gravity {}, practice {}",
        config.seed,
        config.gravity.as_str(),
        config.disable_game_over
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("exiting with error: {:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut game = GameState::with_rules(config.seed, config.rules());
    let store = ScoreStore::new(&config.scores_path);
    let mut high_scores = store.load();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::default();
    let mut pending: Option<PendingScore> = None;
    // Episode whose game over has already been offered to the leaderboard
    let mut scored_episode: Option<u32> = None;

    let started = Instant::now();
    let mut clock = FrameClock::new(FRAME_MS, started);

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, snap.fingerprint()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let extras = PanelExtras {
                high_scores: Some(&high_scores),
                name_prompt: pending.as_ref().map(|p| NamePrompt {
                    name: p.entry.as_str(),
                    rank: p.rank,
                }),
            };
            view.render_into(&snap, &extras, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next frame.
        let timeout = clock.timeout(Instant::now());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    throttle.invalidate();
                    if let Some(p) = pending.as_mut() {
                        if is_ctrl_c(key) {
                            return Ok(());
                        }
                        let score = p.score;
                        match p.entry.handle_key(key) {
                            NameInput::Editing => {}
                            NameInput::Submitted(name) => {
                                record_score(&mut high_scores, &store, &name, score);
                                pending = None;
                            }
                            NameInput::Cancelled => pending = None,
                        }
                    } else {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = handle_key_event(key) {
                            game.apply_action(action);
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Tick with the time that actually passed.
        if let Some(elapsed_ms) = clock.tick_due(Instant::now()) {
            game.tick(elapsed_ms);
        }

        // A game can end from a tick or from a soft drop.
        if game.game_over() && scored_episode != Some(game.episode_id()) {
            scored_episode = Some(game.episode_id());
            let total = game.total_score();
            if let Some(rank) = high_scores.potential_rank(total) {
                log::info!("total {} qualifies for rank {}", total, rank);
                pending = Some(PendingScore {
                    entry: NameEntry::new(),
                    score: total,
                    rank,
                });
            }
        } else if !game.game_over() && pending.is_some() {
            // Restarted from another path while the prompt was open
            pending = None;
        }
    }
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn record_score(high_scores: &mut HighScores, store: &ScoreStore, name: &str, score: u32) {
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    if let Some(rank) = high_scores.add_score(name, score, timestamp_ms) {
        log::info!("{} placed #{} with {}", name, rank, score);
        if let Err(e) = store.save(high_scores) {
            log::error!("saving high scores: {:#}", e);
        }
    }
}
