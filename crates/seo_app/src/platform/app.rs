use std::collections::VecDeque;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use engine_logging::{engine_debug, engine_info, engine_warn};
use seo_core::{update, AppState, Msg};
use seo_engine::{normalize_base_address, EngineHandle};

use super::config::{self, AppConfig};
use super::effects::EffectRunner;
use super::ui::constants::TICK_INTERVAL;
use super::ui::keys::{self, Focus, KeyAction};
use super::ui::render;
use super::ui::terminal::{TerminalSession, Tui};

pub fn run_app() -> anyhow::Result<()> {
    let config_path = config::config_path_from_args();
    let (config, config_problem) = match config::load_config(&config_path) {
        Ok(loaded) => (loaded.unwrap_or_default(), None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    engine_logging::initialize_file(&config.log_file, config.log_level())
        .context("initializing logging")?;
    if let Some(err) = config_problem {
        engine_warn!("Using default settings: {}", err);
    }

    let base_address = normalize_base_address(&config.base_address)
        .with_context(|| format!("invalid base_address {:?}", config.base_address))?;
    engine_info!("Analysis endpoint base address {}", base_address);

    let engine = EngineHandle::new(config.engine_settings(base_address.clone()))
        .context("starting engine")?;
    let runner = EffectRunner::new(engine, config.download_dir.clone());

    let mut session = TerminalSession::enter().context("entering terminal UI")?;
    let result = event_loop(session.terminal(), AppState::new(base_address), &runner);
    runner.shutdown();
    drop(session);

    engine_info!("Exiting");
    result
}

fn event_loop(
    terminal: &mut Tui,
    mut state: AppState,
    runner: &EffectRunner,
) -> anyhow::Result<()> {
    let mut focus = Focus::default();
    let mut needs_redraw = true;

    loop {
        for msg in runner.drain_messages() {
            state = dispatch(state, msg, runner);
        }

        needs_redraw |= state.consume_dirty();
        if needs_redraw {
            let view = state.view();
            terminal.draw(|frame| render::render(frame, &view, focus))?;
            needs_redraw = false;
        }

        if !event::poll(TICK_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match keys::map_key(key, focus, &state.view()) {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Focus(next) => {
                        focus = next;
                        needs_redraw = true;
                    }
                    KeyAction::Send(msg) => state = dispatch(state, msg, runner),
                    KeyAction::Ignore => {}
                }
            }
            Event::Paste(text) => {
                if let KeyAction::Send(msg) = keys::map_paste(&text, focus, &state.view()) {
                    state = dispatch(state, msg, runner);
                }
            }
            Event::Resize(..) => needs_redraw = true,
            _ => {}
        }
    }
}

/// Applies `msg` and any failures the runner feeds back for refused effects.
fn dispatch(mut state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let mut pending = VecDeque::from([msg]);
    while let Some(msg) = pending.pop_front() {
        log_if_stale(&state, &msg);
        let (next, effects) = update(state, msg);
        state = next;
        pending.extend(runner.run(effects));
    }
    state
}

fn log_if_stale(state: &AppState, msg: &Msg) {
    let request_id = match msg {
        Msg::AnalysisSucceeded { request_id, .. }
        | Msg::AnalysisFailed { request_id, .. }
        | Msg::DownloadFinished { request_id, .. } => *request_id,
        _ => return,
    };
    if request_id != state.latest_request() {
        engine_debug!(
            "Discarding stale completion request_id={} latest={}",
            request_id,
            state.latest_request()
        );
    }
}
