use crate::cycler::CyclerState;
use crossterm::event::Event as CrosstermEvent;

/// Identifies one mount of the cycler, so late events from a torn-down
/// cycler can be told apart from the current one.
pub type MountId = usize;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Cycler published a new state
    Cycler { mount_id: MountId, state: CyclerState },

    /// Tick for animation frames
    Tick,
}
