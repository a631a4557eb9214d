use super::list::TaglineList;
use super::timing::Mode;

/// Observable state of a mounted cycler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclerState {
    pub position: usize,
    /// Presentation only; never affects `position`.
    pub visible: bool,
}

impl Default for CyclerState {
    fn default() -> Self {
        Self {
            position: 0,
            visible: true,
        }
    }
}

impl CyclerState {
    /// Fade mode, start of a cycle. Returns `true` if anything changed.
    pub fn hide(&mut self) -> bool {
        let changed = self.visible;
        self.visible = false;
        changed
    }

    /// Fade mode, end of the hide delay: swap the tagline and show it.
    pub fn reveal_next(&mut self, list: &TaglineList) {
        self.position = list.next_position(self.position);
        self.visible = true;
    }

    /// Cross-fade mode: advance in place, nothing is ever hidden.
    pub fn advance(&mut self, list: &TaglineList) {
        self.position = list.next_position(self.position);
    }

    pub fn view<'a>(&self, list: &'a TaglineList, mode: Mode) -> TaglineView<'a> {
        match mode {
            Mode::Fade => TaglineView::Single {
                text: list.get(self.position),
                visible: self.visible,
            },
            Mode::CrossFade => TaglineView::Stack(
                list.iter()
                    .enumerate()
                    .map(|(i, text)| StackItem {
                        text,
                        active: i == self.position,
                    })
                    .collect(),
            ),
        }
    }
}

/// What the renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaglineView<'a> {
    Single { text: &'a str, visible: bool },
    Stack(Vec<StackItem<'a>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackItem<'a> {
    pub text: &'a str,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(n: usize) -> TaglineList {
        TaglineList::new((0..n).map(|i| format!("tag {}", i))).unwrap()
    }

    #[test]
    fn test_hide_then_reveal() {
        let list = list(3);
        let mut state = CyclerState::default();
        assert!(state.hide());
        assert!(!state.hide());
        assert_eq!(state.position, 0);
        state.reveal_next(&list);
        assert_eq!(state, CyclerState { position: 1, visible: true });
    }

    #[test]
    fn test_fade_view_shows_current() {
        let list = list(3);
        let state = CyclerState { position: 2, visible: false };
        assert_eq!(
            state.view(&list, Mode::Fade),
            TaglineView::Single { text: "tag 2", visible: false }
        );
    }

    #[test]
    fn test_stack_view_has_exactly_one_active() {
        let list = list(5);
        let mut state = CyclerState::default();
        for step in 0..12 {
            let TaglineView::Stack(items) = state.view(&list, Mode::CrossFade) else {
                panic!("expected stack view");
            };
            assert_eq!(items.len(), 5);
            let active: Vec<_> = items
                .iter()
                .enumerate()
                .filter(|(_, item)| item.active)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(active, vec![step % 5]);
            state.advance(&list);
        }
    }
}
