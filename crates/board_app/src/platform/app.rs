use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use board_core::{update, BoardState, Msg};
use board_engine::EngineHandle;
use board_logging::{board_debug, board_info};

use super::config::{self, Labels};
use super::effects::{ConsoleRouter, EffectRunner, Router};
use super::logging;
use super::ui::commands::{self, UiInput};
use super::ui::render;

const TICK_INTERVAL: Duration = Duration::from_millis(50);
const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn run_app() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE));
    let app_config = config::load_config(&config_path)?;
    logging::initialize(app_config.log.destination, app_config.log_level());
    board_info!("Starting board with config {:?}", config_path);

    let engine = EngineHandle::new(app_config.fetch_settings())
        .context("failed to start the fetch engine")?;
    let mut board = Board::new(
        BoardState::new(app_config.board_config()),
        EffectRunner::new(engine, ConsoleRouter),
        app_config.labels.clone(),
    );

    let (input_tx, input_rx) = mpsc::channel::<UiInput>();

    let line_tx = input_tx.clone();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx
                .send(commands::parse_line(&line, Instant::now()))
                .is_err()
            {
                return;
            }
        }
        let _ = line_tx.send(UiInput::Quit);
    });

    // Drives the debounce timer.
    thread::spawn(move || {
        while input_tx
            .send(UiInput::Msg(Msg::Tick {
                now: Instant::now(),
            }))
            .is_ok()
        {
            thread::sleep(TICK_INTERVAL);
        }
    });

    board.dispatch(Msg::Mounted);
    loop {
        match input_rx.recv_timeout(POLL_INTERVAL) {
            Ok(UiInput::Msg(msg)) => board.dispatch(msg),
            Ok(UiInput::Help) => commands::HELP.iter().for_each(|line| println!("{line}")),
            Ok(UiInput::Unknown(line)) => println!("Unknown command: {line} (try `help`)"),
            Ok(UiInput::Quit) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
        board.drain_engine();
    }

    board_info!("Board closed");
    Ok(())
}

struct Board<R: Router> {
    state: BoardState,
    runner: EffectRunner<R>,
    labels: Labels,
}

impl<R: Router> Board<R> {
    fn new(state: BoardState, runner: EffectRunner<R>, labels: Labels) -> Self {
        Self {
            state,
            runner,
            labels,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        if self.state.consume_dirty() {
            self.render();
        }
        if !effects.is_empty() {
            board_debug!("Running {} effect(s)", effects.len());
            self.runner.run(effects);
        }
    }

    fn drain_engine(&mut self) {
        for msg in self.runner.poll() {
            self.dispatch(msg);
        }
    }

    fn render(&self) {
        let view = self.state.view();
        println!();
        for line in render::render(&view, &self.labels) {
            println!("{line}");
        }
    }
}
