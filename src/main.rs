use view_state_controller::app::{AppCommand, DemoApp, FetchOutcome, FetchTasks};
use view_state_controller::config::DemoConfig;
use view_state_controller::logging;
use view_state_controller::terminal::{setup_panic_hook, TerminalManager};

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("vsc-demo {}", VERSION);
        std::process::exit(0);
    }

    color_eyre::install()?;

    let config = DemoConfig::from_env()?;
    logging::init(&config)?;
    tracing::info!(?config, "starting vsc-demo {}", VERSION);

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    let mut manager = TerminalManager::new()?;
    let mut app = DemoApp::new();
    let result = runtime.block_on(run_app(manager.terminal(), &mut app, &config));

    manager.restore()?;
    if let Err(ref e) = result {
        tracing::error!("demo exited with error: {:?}", e);
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut DemoApp,
    config: &DemoConfig,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel::<FetchOutcome>();
    let mut fetches = FetchTasks::new();
    let mut ticker = tokio::time::interval(config.tick_rate);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        tokio::select! {
            _ = ticker.tick() => app.on_tick(),

            Some(outcome) = fetch_rx.recv() => {
                app.finish_fetch(outcome);
            }

            event_result = event_stream.next() => {
                let event = match event_result {
                    Some(Ok(event)) => event,
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                };
                let Event::Key(key) = event else {
                    continue;
                };
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                match app.handle_key(key.code) {
                    AppCommand::Quit => return Ok(()),
                    AppCommand::StartFetch { attempt } => {
                        fetches.spawn(attempt, config.clone(), fetch_tx.clone());
                    }
                    AppCommand::CancelFetches => {
                        let aborted = fetches.abort_all();
                        tracing::info!(aborted, "fetches cancelled by reset");
                    }
                    AppCommand::None => {}
                }
            }
        }
    }
}
