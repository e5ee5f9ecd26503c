//! Runtime: unified event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop over input, the animation ticker and the
//!   in-flight enrichment requests.
//! - Route input to the main view and execute the returned `Effect`s.
//! - Render only when `App` marks itself dirty.
//!
//! Unified Event Loop Strategy
//! - A dedicated input thread blocks on `crossterm::event::read()` and
//!   forwards events over a channel.
//! - Enrichment futures live in a `FuturesUnordered` polled by the same
//!   `select!`; each settled project becomes one `Msg::EnrichmentSettled`.
//! - Smart ticking: fast interval (30 ms) while the viewport animates or
//!   requests are in flight; long interval (5 s) when idle.
//!
//! Entry Point
//! - `run_app(options)` is called from `lib::run` and performs setup,
//!   event processing, and teardown.

use std::io::Stdout;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use folio_engine::{EnrichmentFuture, enrichment_futures};
use folio_types::{Effect, Msg};
use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use ratatui::Terminal;
use ratatui::prelude::CrosstermBackend;
use tokio::signal;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::TuiOptions;
use crate::app::{App, SharedCtx};
use crate::cmd;
use crate::ui::main_component::MainView;
use crate::ui::theme;

const FAST_TICK: Duration = Duration::from_millis(30);
const IDLE_TICK: Duration = Duration::from_secs(5);
const INPUT_CHANNEL_CAPACITY: usize = 500;

type Backend = CrosstermBackend<Stdout>;

/// Spawn a dedicated input thread that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
///
/// The thread ends once the receiver is dropped or reading fails.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!("Failed to read event: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    let entered = execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)).context("create terminal"));
    undo_on_error(entered, || {
        let mut stdout = std::io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        if let Err(error) = disable_raw_mode() {
            warn!("Failed to disable raw mode: {}", error);
        }
    })
}

/// Runs `undo` when `result` is an error, then returns `result` unchanged.
fn undo_on_error<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Handle raw crossterm input events and update `App`/components.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::Key(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Apply effects. Navigation is handled here; everything else goes through
/// the command layer. Returns `true` when the app should exit.
fn process_effects(app: &mut App, effects: Vec<Effect>) -> bool {
    let mut quit = false;
    let mut remaining = Vec::with_capacity(effects.len());
    for effect in effects {
        match effect {
            Effect::SwitchTo(section) => app.select_section(section),
            Effect::Quit => quit = true,
            other => remaining.push(other),
        }
    }
    cmd::run_cmds(app, cmd::from_effects(remaining));
    quit
}

/// Waits for the next enrichment to settle. The message for the last one is
/// followed by `Msg::EnrichmentFinished`. An empty set yields nothing.
async fn next_enrichment_messages(pending: &mut FuturesUnordered<EnrichmentFuture>) -> Vec<Msg> {
    let Some((project_id, result)) = pending.next().await else {
        return Vec::new();
    };
    debug!(project = %project_id, stars = result.stars, "enrichment settled");
    let mut messages = vec![Msg::EnrichmentSettled { project_id, result }];
    if pending.is_empty() {
        messages.push(Msg::EnrichmentFinished);
    }
    messages
}

fn ticker(interval: Duration) -> time::Interval {
    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Entry point for the TUI runtime: sets up the terminal, dispatches the
/// enrichment requests, runs the event loop, and performs cleanup on exit.
pub async fn run_app(options: TuiOptions) -> Result<()> {
    let TuiOptions {
        portfolio,
        metadata_source,
        theme: theme_name,
    } = options;

    let mut pending: FuturesUnordered<EnrichmentFuture> = match metadata_source {
        Some(source) => enrichment_futures(source, &portfolio.projects),
        None => FuturesUnordered::new(),
    };
    info!(requests = pending.len(), "starting portfolio");

    let (width, _) = crossterm::terminal::size().context("query terminal size")?;
    let ctx = SharedCtx::new(theme::load(theme_name.as_deref()), Arc::clone(&portfolio));
    let mut app = App::new(ctx, width, !pending.is_empty());
    let mut main_view = MainView::new();

    let mut input_receiver = spawn_input_thread();
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app, &mut main_view, &mut input_receiver, &mut pending).await;
    if let Err(error) = cleanup_terminal(&mut terminal) {
        warn!("Failed to restore terminal: {}", error);
    }
    result
}

async fn event_loop(
    terminal: &mut Terminal<Backend>,
    app: &mut App,
    main_view: &mut MainView,
    input_receiver: &mut mpsc::Receiver<Event>,
    pending: &mut FuturesUnordered<EnrichmentFuture>,
) -> Result<()> {
    let mut current_interval = IDLE_TICK;
    let mut ticker = ticker(current_interval);

    render(terminal, app, main_view)?;
    app.take_dirty();

    // Track the last known terminal size to synthesize Resize messages when
    // a terminal fails to emit them.
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();

    loop {
        let target_interval = if app.needs_animation() { FAST_TICK } else { IDLE_TICK };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = self::ticker(current_interval);
        }

        let mut effects = Vec::new();
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                match maybe_event {
                    Some(event) => effects.extend(handle_input_event(app, main_view, event)),
                    // Input channel closed; shut down cleanly.
                    None => break,
                }
                app.mark_dirty();
            }

            _ = ticker.tick() => {
                effects.extend(main_view.handle_message(app, Msg::Tick));
            }

            messages = next_enrichment_messages(pending), if !pending.is_empty() => {
                for msg in messages {
                    effects.extend(main_view.handle_message(app, msg));
                }
            }

            _ = signal::ctrl_c() => { break; }
        }

        if process_effects(app, effects) {
            break;
        }

        // Fallback: detect terminal size changes even if no explicit Resize
        // event was received.
        if let Ok((w, h)) = crossterm::terminal::size()
            && last_size != Some((w, h))
        {
            last_size = Some((w, h));
            main_view.handle_message(app, Msg::Resize(w, h));
        }

        if app.take_dirty() {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use folio_types::{EnrichmentResult, ProjectId, Section};
    use futures_util::FutureExt;
    use futures_util::future;

    use super::*;
    use crate::app::test_app;

    fn settled(id: &str, stars: u64) -> EnrichmentFuture {
        let result = EnrichmentResult {
            stars,
            language: None,
            url: format!("https://github.com/levalleyjack/{id}"),
        };
        future::ready((ProjectId::new(id), result)).boxed()
    }

    fn is_finished(msg: &Msg) -> bool {
        matches!(msg, Msg::EnrichmentFinished)
    }

    #[tokio::test]
    async fn finished_follows_only_the_last_settled_project() {
        let mut pending: FuturesUnordered<EnrichmentFuture> =
            [settled("project-one", 1), settled("project-two", 2)].into_iter().collect();

        let first = next_enrichment_messages(&mut pending).await;
        assert_eq!(first.len(), 1);
        assert!(matches!(first[0], Msg::EnrichmentSettled { .. }));

        let last = next_enrichment_messages(&mut pending).await;
        assert_eq!(last.len(), 2);
        assert!(matches!(last[0], Msg::EnrichmentSettled { .. }));
        assert!(is_finished(&last[1]));
        assert!(pending.is_empty());
    }

    #[tokio::test]
    async fn empty_set_never_reports_finished() {
        let mut pending: FuturesUnordered<EnrichmentFuture> = FuturesUnordered::new();
        assert!(next_enrichment_messages(&mut pending).await.is_empty());
    }

    #[tokio::test]
    async fn settling_everything_stops_the_fetching_marker() {
        let mut app = test_app(80);
        let mut view = MainView::new();
        let mut pending: FuturesUnordered<EnrichmentFuture> = [settled("project-one", 7)].into_iter().collect();

        for msg in next_enrichment_messages(&mut pending).await {
            view.handle_message(&mut app, msg);
        }
        assert!(!app.fetching);
        assert_eq!(app.enrichment.get(&ProjectId::new("project-one")).map(|result| result.stars), Some(7));
    }

    #[test]
    fn setup_failure_runs_the_undo() {
        let mut undone = false;
        let result: Result<()> = undo_on_error(Err(anyhow::anyhow!("no tty")), || undone = true);
        assert!(result.is_err());
        assert!(undone);

        let mut undone = false;
        assert!(undo_on_error(Ok(1), || undone = true).is_ok());
        assert!(!undone);
    }

    #[test]
    fn navigation_effects_are_applied_in_place() {
        let mut app = test_app(80);
        let quit = process_effects(&mut app, vec![Effect::SwitchTo(Section::Resume)]);
        assert!(!quit);
        assert_eq!(app.active_section(), Section::Resume);
        assert!(app.viewport.is_animating());
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut app = test_app(80);
        assert!(process_effects(&mut app, vec![Effect::Quit]));
    }
}
