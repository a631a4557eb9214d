mod app;
mod config;
mod cycler;
mod logging;
mod ui;

use crate::app::action::Action;
use crate::app::event::{AppEvent, MountId};
use crate::app::handler;
use crate::app::state::AppState;
use crate::cycler::{CyclerState, TaglineCycler, Variant};
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Instant;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    if let Some(path) = logging::init(&cfg.logging)? {
        info!(log_file = %path.display(), "herotag starting");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let taglines = cfg.cycler.tagline_list()?;
    let mut state = AppState::new(cfg.clone(), taglines);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task for animation frames
    let tick_tx = event_tx.clone();
    let tick_interval = cfg.ui.tick_interval();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_interval);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    let mut cycler = mount(&mut state, cfg.cycler.variant, &event_tx)?;

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::SelectVariant(variant) => {
                    cycler.teardown();
                    cycler = mount(&mut state, variant, &event_tx)?;
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            cycler.teardown();
            info!("herotag exiting");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

/// Mount a cycler for `variant` and forward its state changes into the
/// event loop, tagged with a fresh mount id.
fn mount(
    state: &mut AppState,
    variant: Variant,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
) -> Result<TaglineCycler> {
    let timing = state.config.cycler.timing_for(variant)?;
    let mount_id = state.allocate_mount_id();
    let cycler = TaglineCycler::mount(state.taglines.clone(), timing);
    forward_changes(mount_id, cycler.subscribe(), event_tx.clone());
    state.mounted(mount_id, timing, Instant::now());
    debug!(mount_id, variant = %variant, "variant mounted");
    Ok(cycler)
}

fn forward_changes(
    mount_id: MountId,
    mut rx: watch::Receiver<CyclerState>,
    tx: mpsc::UnboundedSender<AppEvent>,
) {
    // Ends once the cycler and its timer tasks are gone.
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let state = *rx.borrow_and_update();
            if tx.send(AppEvent::Cycler { mount_id, state }).is_err() {
                break;
            }
        }
    });
}
