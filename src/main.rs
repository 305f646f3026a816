use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Position;
use ratatui::Terminal;

use jotpad::app::Workbench;
use jotpad::kernel::services::adapters::{ensure_settings_file, load_settings};
use jotpad::tui::crossterm::into_input_event;
use jotpad::tui::terminal_guard::{
    install_termination_signals, TerminalGuard, TerminationSignal,
};
use jotpad::tui::view::View;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> io::Result<()> {
    let mut logging_guard = logging::init();
    let log_rx = logging_guard.as_mut().and_then(|guard| guard.take_log_rx());
    if let Some(guard) = logging_guard.as_ref() {
        tracing::debug!(log_dir = %guard.log_dir().display(), "log directory");
    }

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "Failed to create settings file");
    }
    let mut settings = load_settings();
    if let Some(path) = std::env::args().nth(1) {
        settings.default_file = Some(path);
    }
    let initial_file = settings.default_file.as_ref().map(PathBuf::from);

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    let _signal_thread = install_termination_signals(guard.restorer(), signal_tx)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let mut workbench = Workbench::new(&settings, initial_file, log_rx);
    let result = run(&mut terminal, &mut workbench, &signal_rx);

    drop(terminal);
    drop(guard);

    match result {
        Ok(Some(signal)) => {
            drop(logging_guard);
            std::process::exit(signal.exit_code())
        }
        Ok(None) => Ok(()),
        Err(e) => {
            tracing::error!(error = %e, "main loop failed");
            Err(e)
        }
    }
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    workbench: &mut Workbench,
    signal_rx: &mpsc::Receiver<TerminationSignal>,
) -> io::Result<Option<TerminationSignal>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            workbench.render(frame, area);
            if let Some((x, y)) = workbench.cursor_position() {
                frame.set_cursor_position(Position::new(x, y));
            }
        })?;

        if event::poll(POLL_INTERVAL)? {
            if let Some(input) = into_input_event(event::read()?) {
                if workbench.handle_input(&input).is_quit() {
                    return Ok(None);
                }
            }
        }

        workbench.tick();

        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(?signal, "termination signal");
            return Ok(Some(signal));
        }
        if workbench.should_quit() {
            return Ok(None);
        }
    }
}
