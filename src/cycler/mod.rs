//! Tagline cycling: the list, its timing, the observable state, and the
//! timer tasks that advance it.
//!
//! A [`TaglineCycler`] is mounted with a [`TaglineList`] and a [`Timing`].
//! In fade mode every period hides the current tagline, then reveals the
//! next one after the hide delay. In cross-fade mode every period advances
//! the position in place. Renderers subscribe to state changes and draw a
//! [`TaglineView`].

pub mod error;
pub mod list;
pub mod runner;
pub mod state;
pub mod timing;

pub use error::CyclerError;
pub use list::{TaglineList, DEFAULT_TAGLINES};
pub use runner::TaglineCycler;
pub use state::{CyclerState, StackItem, TaglineView};
pub use timing::{Mode, Timing, Variant};
