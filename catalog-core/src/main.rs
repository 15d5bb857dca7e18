//! src/main.rs
//! Terminal browser for the MCP server catalog

use std::{
    io::{self, Stdout, Write},
    panic::PanicHookInfo,
    sync::Arc,
    time::Duration,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tokio::{
    signal,
    sync::{Notify, mpsc},
};
use tracing::{debug, error, info, warn};

use catalog_core::{
    AppError, Logger,
    cli::CliArgs,
    config::Config,
    controller::{
        action_dispatcher::{ActionDispatcher, Flow},
        actions::Action,
        event_loop::{EventLoop, TaskResult},
        key_handler::KeyHandler,
    },
    model::{catalog_view::CatalogView, ui_state::UIState},
    printer,
    source::{catalog_source::CatalogSource, loader},
    view::ui::UIRenderer,
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .await
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load().await.unwrap_or_else(|e| {
            eprintln!("Failed to load config, using defaults: {e}");
            Config::default()
        }),
    };
    args.apply_to(&mut config);

    let _log_guard =
        Logger::init_tracing(&config.logging, args.print).context("Failed to initialize logging")?;
    info!("Starting catalog browser");
    debug!("Effective config: {:?}", config);

    let source: CatalogSource = config
        .catalog
        .source
        .parse()
        .context("Invalid catalog source")?;

    if args.print {
        return run_headless(&args, &source).await;
    }

    setup_panic_handler();

    let app = App::new(&config, source).context("Failed to initialize application")?;
    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

/// `--print`: load once, filter, write to stdout.
async fn run_headless(args: &CliArgs, source: &CatalogSource) -> Result<()> {
    let mut view = CatalogView::new();

    let failed = match loader::load_catalog(source).await {
        Ok(catalog) => {
            view.load_succeeded(catalog);
            false
        }
        Err(e) => {
            error!("Error loading catalog: {e}");
            view.load_failed(e.to_string());
            true
        }
    };

    if let Some(tab) = &args.tab {
        view.set_tab(tab);
    }
    if let Some(search) = &args.search {
        view.set_search(search);
    }
    if args.category.is_some() {
        view.set_category(args.category.clone());
    }

    let mut stdout = io::stdout().lock();
    printer::print_view(&view, &mut stdout).context("Failed to write output")?;
    stdout.flush()?;

    if failed {
        bail!("catalog could not be loaded from {source}");
    }
    Ok(())
}

struct App {
    terminal: AppTerminal,
    event_loop: EventLoop,
    dispatcher: ActionDispatcher,
    key_handler: KeyHandler,
    renderer: UIRenderer,
    view: CatalogView,
    ui_state: UIState,
    shutdown: Arc<Notify>,
}

impl App {
    fn new(config: &Config, source: CatalogSource) -> Result<Self> {
        let terminal = setup_terminal().context("Failed to initialize terminal")?;

        let (task_tx, task_rx) = mpsc::unbounded_channel::<TaskResult>();
        let event_loop = EventLoop::new(task_rx, Duration::from_millis(config.ui.tick_rate_ms));

        let mut ui_state = UIState::new();
        ui_state.viewport_height = terminal.size().map(|s| s.height).unwrap_or(0);

        info!("Loading catalog from {source}");
        let _load_handle = loader::spawn_catalog_load(source, task_tx);

        Ok(Self {
            terminal,
            event_loop,
            dispatcher: ActionDispatcher::new(config.ui.open_links),
            key_handler: KeyHandler::new(),
            renderer: UIRenderer::new(),
            view: CatalogView::new(),
            ui_state,
            shutdown: Arc::new(Notify::new()),
        })
    }

    async fn run(mut self) -> Result<()> {
        self.setup_shutdown_handler();
        info!("Starting event loop");

        let mut event_stream = EventStream::new();

        loop {
            self.render()?;

            let action = tokio::select! {
                _ = self.shutdown.notified() => {
                    info!("Shutdown signal received");
                    break;
                }

                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.key_handler.handle_event(&self.ui_state, event),
                    Some(Err(e)) => {
                        warn!("Terminal event error: {e}");
                        None
                    }
                    None => {
                        info!("Terminal event stream closed");
                        break;
                    }
                },

                action = self.event_loop.next_action() => Some(action),
            };

            if let Some(action) = action {
                if self.dispatch(action) == Flow::Quit {
                    info!("Quit requested");
                    break;
                }
            }
        }

        self.log_final_metrics();
        Ok(())
    }

    fn dispatch(&mut self, action: Action) -> Flow {
        if !matches!(action, Action::Tick) {
            debug!("Dispatching action: {:?}", action);
        }
        self.dispatcher
            .handle(&mut self.view, &mut self.ui_state, action)
    }

    fn render(&mut self) -> Result<()> {
        if !self.ui_state.needs_redraw() {
            return Ok(());
        }

        let Self {
            terminal,
            renderer,
            view,
            ui_state,
            ..
        } = self;

        terminal
            .draw(|frame: &mut Frame<'_>| renderer.render(frame, view, ui_state))
            .context("Failed to draw terminal")?;

        self.ui_state.clear_redraw();
        Ok(())
    }

    fn log_final_metrics(&self) {
        let loop_metrics = self.event_loop.snapshot_metrics();
        let dispatch = self.dispatcher.stats();
        let render = self.renderer.stats();

        info!("Final metrics:");
        info!("  Actions dispatched: {}", dispatch.total_actions);
        info!("  Filter changes: {}", dispatch.filter_changes);
        info!("  Links opened: {}", dispatch.links_opened);
        info!("  Background results: {}", loop_metrics.tasks);
        info!(
            "  Frames: {} (slow: {}, avg {:.2}ms)",
            render.frames,
            render.slow,
            render.avg_ms()
        );
    }

    fn setup_shutdown_handler(&self) {
        let shutdown = self.shutdown.clone();

        tokio::spawn(async move {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{SignalKind, signal};

                match signal(SignalKind::terminate()) {
                    Ok(mut sigterm) => {
                        tokio::select! {
                            _ = sigterm.recv() => info!("Received SIGTERM"),
                            _ = signal::ctrl_c() => info!("Received Ctrl+C"),
                        }
                    }
                    Err(e) => {
                        warn!("Failed to create SIGTERM handler: {e}");
                        if signal::ctrl_c().await.is_err() {
                            return;
                        }
                    }
                }
            }

            #[cfg(not(unix))]
            {
                if let Err(e) = signal::ctrl_c().await {
                    warn!("Failed to listen for Ctrl+C: {}", e);
                    return;
                }
                info!("Received Ctrl+C");
            }

            shutdown.notify_one();
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {}", e);
        }
    }
}

fn setup_terminal() -> Result<AppTerminal, AppError> {
    enable_raw_mode().map_err(|e| AppError::terminal("enable raw mode", e))?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| AppError::terminal("enter alternate screen", e))?;

    let backend = CrosstermBackend::new(stdout);
    let terminal =
        Terminal::new(backend).map_err(|e| AppError::terminal("create terminal", e))?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<(), AppError> {
    disable_raw_mode().map_err(|e| AppError::terminal("disable raw mode", e))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| AppError::terminal("leave alternate screen", e))?;
    terminal
        .show_cursor()
        .map_err(|e| AppError::terminal("show cursor", e))?;

    info!("Terminal cleanup complete");
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
