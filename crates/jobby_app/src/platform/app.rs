use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use jobby_core::{update, AppState, Msg, Route};
use jobby_engine::{EngineHandle, FileSessionStore, ReqwestJobBoard};
use jobby_logging::{jobby_debug, jobby_info};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui::input::{self, Command};
use super::ui::render;

/// Everything the UI thread reacts to.
pub enum UiEvent {
    Input(Command),
    Msg(Msg),
    InputClosed,
}

pub fn run_app(config: AppConfig, start_path: &str) -> anyhow::Result<()> {
    jobby_info!("Starting jobby against {}", config.api_base_url);

    let api = ReqwestJobBoard::new(config.api_settings()).context("building http client")?;
    let (engine, events) = EngineHandle::new(Arc::new(api)).context("starting engine")?;
    let store = FileSessionStore::new(config.session_file.clone());

    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>();
    let runner = EffectRunner::new(
        engine,
        events,
        Box::new(store),
        config.session_ttl(),
        ui_tx.clone(),
    );

    spawn_stdin_reader(ui_tx);

    let mut app = App {
        state: AppState::new(),
        runner,
    };
    let restored = app.runner.restore_session();
    app.dispatch(Msg::SessionRestored(restored));
    app.dispatch(Msg::Navigate(Route::parse(start_path)));
    app.render_if_dirty(true)?;

    while let Ok(event) = ui_rx.recv() {
        match event {
            UiEvent::Input(Command::Dispatch(msgs)) => {
                for msg in msgs {
                    app.dispatch(msg);
                }
                app.render_if_dirty(true)?;
            }
            UiEvent::Input(Command::Help) => {
                println!("{}", input::HELP);
                prompt()?;
            }
            UiEvent::Input(Command::Unknown(line)) => {
                println!("Unknown command: {line} (try `help`)");
                prompt()?;
            }
            UiEvent::Msg(msg) => {
                app.dispatch(msg);
                app.render_if_dirty(false)?;
            }
            UiEvent::Input(Command::Quit) | UiEvent::InputClosed => break,
        }
    }

    jobby_info!("Shutting down");
    Ok(())
}

struct App {
    state: AppState,
    runner: EffectRunner,
}

impl App {
    fn dispatch(&mut self, msg: Msg) {
        jobby_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    /// Redraws the page when the last messages changed it. Typed commands
    /// always get a fresh prompt.
    fn render_if_dirty(&mut self, after_input: bool) -> io::Result<()> {
        if self.state.consume_dirty() {
            let mut out = io::stdout().lock();
            writeln!(out)?;
            for line in render::render(&self.state.view()) {
                writeln!(out, "{line}")?;
            }
            drop(out);
            return prompt();
        }
        if after_input {
            return prompt();
        }
        Ok(())
    }
}

fn prompt() -> io::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "> ")?;
    out.flush()
}

fn spawn_stdin_reader(ui_tx: mpsc::Sender<UiEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if ui_tx.send(UiEvent::Input(input::parse_command(&line))).is_err() {
                return;
            }
        }
        let _ = ui_tx.send(UiEvent::InputClosed);
    });
}
