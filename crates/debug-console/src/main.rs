use anyhow::Result;
use debug_console::{
    actions::{Action, DebugConsoleAction, GlobalAction},
    handle::Delivery,
    logger,
    middleware::{KeyboardMiddleware, LoggingMiddleware},
    producers,
    state::AppState,
    store::Store,
    views::{self, debug_console_view},
};
use debug_console_config::AppConfig;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    layout::Rect,
    Terminal,
};
use std::io;
use std::time::Duration;

fn main() -> Result<()> {
    let (config, config_source) = AppConfig::load();

    // The store lives on this thread for the whole run; it is the console's owner
    let mut store = Store::new(AppState::new(config.clone()));
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));

    // Log records must never block the thread that emits them
    let console = store.console_handle();
    let log_file = logger::init(console.clone().with_delivery(Delivery::Post))?;

    log::info!("Starting debug-console, logging to {}", log_file.display());
    config_source.log();
    log::debug!("Config: {:?}", config);

    let producers = producers::spawn_producers(
        config.demo_producers,
        Duration::from_millis(config.demo_interval_ms),
        console,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Release producers waiting on the owner before joining them
    producers.signal_stop();
    drop(store);
    producers.join();

    if let Err(err) = &result {
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting debug-console");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, store: &mut Store) -> Result<()> {
    loop {
        // Apply everything other threads queued since the last frame
        store.pump();

        let size = terminal.size()?;
        let height = debug_console_view::inner_height(
            Rect::new(0, 0, size.width, size.height),
            store.state().config.console_height_percent,
        );
        if height != store.state().debug_console.visible_height {
            store.dispatch(Action::DebugConsole(DebugConsoleAction::SetVisibleHeight(
                height,
            )));
        }

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}
