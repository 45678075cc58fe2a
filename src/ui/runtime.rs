use std::io;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::config::Config;
use crate::reactive::MainContext;
use crate::search::{SearchModule, SearchUseCase};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Upper bound on how long the loop waits for input before draining
/// completions again.
const COMPLETION_LATENCY: Duration = Duration::from_millis(50);

/// Run the search screen until the user quits.
///
/// The calling thread is the delivery context: it drains completions posted
/// by the runtime, applies input and redraws.
pub fn run(config: &Config, runtime: Handle, interactor: Arc<SearchUseCase>) -> io::Result<()> {
    let mut context = MainContext::new(runtime);
    let module = SearchModule::assemble(
        interactor,
        context.handle(),
        config.search.default_keyword.clone(),
        config.ui.view,
    );
    let mut app = App::new(module, config.ui.view);

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    app.start();

    loop {
        let delivered = context.run_pending();
        if delivered > 0 {
            tracing::trace!(delivered, "completions delivered");
        }

        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate.min(COMPLETION_LATENCY)) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
            }
            Ok(AppEvent::Tick) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(events);
    app.shutdown();
    drop(guard);
    Ok(())
}
