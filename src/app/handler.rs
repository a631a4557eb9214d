use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::cycler::Variant;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;
use tracing::trace;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    handle_event_at(state, event, Instant::now())
}

fn handle_event_at(state: &mut AppState, event: AppEvent, now: Instant) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Cycler {
            mount_id,
            state: cycler,
        } => {
            if !state.apply_cycler_state(mount_id, cycler, now) {
                trace!(mount_id, "dropping state from a torn-down cycler");
            }
            vec![]
        }
        AppEvent::Tick => {
            handle_tick(state, now);
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState, now: Instant) {
    state.tick_count = state.tick_count.wrapping_add(1);
    // keep redrawing while a transition is in flight
    if state.is_animating(now) {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    let selected = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Char('1') => Variant::Fade,
        KeyCode::Char('2') => Variant::CrossFade,
        KeyCode::Char('3') => Variant::Gradient,
        KeyCode::Tab => state.variant().next(),
        _ => return vec![],
    };

    if selected == state.variant() && state.mount.is_some() {
        return vec![];
    }
    vec![Action::SelectVariant(selected)]
}
