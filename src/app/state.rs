use crate::app::animation::TaglineAnimation;
use crate::app::event::MountId;
use crate::config::AppConfig;
use crate::cycler::{CyclerState, TaglineList, TaglineView, Timing, Variant};
use std::time::Instant;

/// The currently mounted cycler, as seen by the host.
#[derive(Debug, Clone)]
pub struct MountState {
    pub id: MountId,
    pub timing: Timing,
    /// Last state published by the cycler.
    pub cycler: CyclerState,
    pub animation: TaglineAnimation,
}

pub struct AppState {
    pub config: AppConfig,
    pub taglines: TaglineList,
    pub mount: Option<MountState>,
    pub next_mount_id: MountId,
    pub should_quit: bool,
    pub dirty: bool,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig, taglines: TaglineList) -> Self {
        Self {
            config,
            taglines,
            mount: None,
            next_mount_id: 0,
            should_quit: false,
            dirty: true,
            tick_count: 0,
        }
    }

    pub fn allocate_mount_id(&mut self) -> MountId {
        let id = self.next_mount_id;
        self.next_mount_id += 1;
        id
    }

    /// Record a freshly mounted cycler. Any earlier mount is forgotten.
    pub fn mounted(&mut self, id: MountId, timing: Timing, now: Instant) {
        self.mount = Some(MountState {
            id,
            timing,
            cycler: CyclerState::default(),
            animation: TaglineAnimation::new(timing.variant, self.taglines.len(), now),
        });
        self.dirty = true;
    }

    /// Apply a published cycler state. Returns `false` for stale mounts.
    pub fn apply_cycler_state(&mut self, id: MountId, state: CyclerState, now: Instant) -> bool {
        let Some(mount) = self.mount.as_mut().filter(|m| m.id == id) else {
            return false;
        };
        mount.cycler = state;
        mount.animation.sync(&state, now);
        self.dirty = true;
        true
    }

    pub fn variant(&self) -> Variant {
        self.mount
            .as_ref()
            .map(|m| m.timing.variant)
            .unwrap_or(self.config.cycler.variant)
    }

    pub fn view(&self) -> Option<TaglineView<'_>> {
        self.mount
            .as_ref()
            .map(|m| m.cycler.view(&self.taglines, m.timing.mode()))
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.mount
            .as_ref()
            .map(|m| m.animation.is_animating(now))
            .unwrap_or(false)
    }

    pub fn status_line(&self) -> String {
        match &self.mount {
            Some(m) => format!(
                "{}/{} · every {:.1}s",
                m.cycler.position + 1,
                self.taglines.len(),
                m.timing.period.as_secs_f32()
            ),
            None => "not mounted".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppState {
        AppState::new(AppConfig::default(), TaglineList::default())
    }

    #[test]
    fn test_stale_mount_is_ignored() {
        let mut state = app();
        let now = Instant::now();
        let old = state.allocate_mount_id();
        state.mounted(old, Timing::for_variant(Variant::Fade), now);
        let new = state.allocate_mount_id();
        state.mounted(new, Timing::for_variant(Variant::CrossFade), now);
        state.dirty = false;

        let late = CyclerState { position: 5, visible: false };
        assert!(!state.apply_cycler_state(old, late, now));
        assert!(!state.dirty);
        assert_eq!(state.mount.as_ref().unwrap().cycler, CyclerState::default());

        let fresh = CyclerState { position: 1, visible: true };
        assert!(state.apply_cycler_state(new, fresh, now));
        assert!(state.dirty);
        assert_eq!(state.variant(), Variant::CrossFade);
    }

    #[test]
    fn test_status_line() {
        let mut state = app();
        assert_eq!(state.status_line(), "not mounted");
        let id = state.allocate_mount_id();
        state.mounted(id, Timing::for_variant(Variant::Gradient), Instant::now());
        assert_eq!(state.status_line(), "1/12 · every 4.5s");
    }
}
