use crate::config::Config;
use crate::employee::MockEmployeeService;
use crate::shutdown::{listen_for_ctrl_c, ShutdownHandle};
use crate::store::EmployeeStore;
use crate::ui::app::App;
use crate::ui::command::{run_command_worker, COMMAND_BUFFER};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Run the employee page until the user quits or the process is interrupted.
///
/// The UI loop runs on the calling thread; store operations run on `runtime`.
pub fn run(config: &Config, runtime: &Handle, shutdown: ShutdownHandle) -> io::Result<()> {
    let service = Arc::new(MockEmployeeService::new(&config.service));
    let store = EmployeeStore::new(service);

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    runtime.spawn(run_command_worker(
        command_rx,
        store.clone(),
        events.sender(),
        shutdown.clone(),
    ));
    runtime.spawn(listen_for_ctrl_c(shutdown.clone()));

    let mut app = App::new(store.subscribe(), &config.ui);
    app.set_command_sender(command_tx);
    app.start();
    tracing::info!(page_size = config.ui.page_size, "UI started");

    loop {
        app.sync_store();
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Settled(outcome)) => app.on_outcome(outcome, Instant::now()),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}
