use crate::config::Config;
use crate::quote::QuoteClient;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::{self as std_mpsc, RecvTimeoutError};
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const COMMAND_CHANNEL_SIZE: usize = 32;

/// Runs the quote screen until the user quits.
///
/// The UI loop stays on the calling thread; fetches run on `runtime`.
pub fn run(config: &Config, runtime: &Handle) -> anyhow::Result<()> {
    let client = QuoteClient::new(&config.api)?;
    tracing::info!(
        url = %client.url(),
        locale = ?config.ui.locale,
        overlap = ?config.ui.overlap,
        mouse = config.ui.mouse,
        "Starting quote screen"
    );

    let tick_rate = Duration::from_millis(config.ui.frame_ms);
    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let events = EventHandler::new(tick_rate);

    let mut app = App::new(config.ui.locale, config.ui.overlap);
    let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_SIZE);
    app.set_command_sender(command_tx);
    let worker = spawn_fetch_worker(runtime, client, command_rx, events.sender());

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.on_mount(Instant::now());

    loop {
        let now = Instant::now();
        terminal.draw(|frame| draw(frame, &app, now))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, Instant::now()),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse, Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::QuoteFetched { cycle, result }) => {
                app.on_quote_fetched(cycle, result, Instant::now())
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // In-flight fetches finish on their own; their results hit a closed
    // channel and are dropped.
    worker.abort();
    drop(guard);
    tracing::info!("Quote screen closed");
    Ok(())
}

/// Serves [`UiCommand`]s: one independent task per fetch, each reporting
/// back through `events`.
pub fn spawn_fetch_worker(
    runtime: &Handle,
    client: QuoteClient,
    mut commands: mpsc::Receiver<UiCommand>,
    events: std_mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    let spawner = runtime.clone();
    runtime.spawn(async move {
        while let Some(command) = commands.recv().await {
            match command {
                UiCommand::FetchQuote { cycle } => {
                    let client = client.clone();
                    let events = events.clone();
                    spawner.spawn(async move {
                        let result = client.fetch().await;
                        if events.send(AppEvent::QuoteFetched { cycle, result }).is_err() {
                            tracing::debug!(cycle, "Screen closed before the quote arrived");
                        }
                    });
                }
            }
        }
    })
}
