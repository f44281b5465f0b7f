/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Transient UI state behind the interactive islands.
//!
//! These are plain values so that the transitions can be exercised without a
//! DOM; the islands keep them inside signals.

use std::fmt;

use crate::site::DROPDOWN_OPEN_ON_LOAD;

/// Reasons offered by the mock line editor for skipping a line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SkipReason {
    #[default]
    BranchStateUnreproducible,
    NotEnoughTime,
    Other,
}

impl SkipReason {
    /// Every reason, in display order.
    pub const ALL: [SkipReason; 3] = [
        SkipReason::BranchStateUnreproducible,
        SkipReason::NotEnoughTime,
        SkipReason::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkipReason::BranchStateUnreproducible => "Branch state can't be produced",
            SkipReason::NotEnoughTime => "Not enough time",
            SkipReason::Other => "Other reason",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single-choice dropdown: whether the list is showing, and what is picked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dropdown<T> {
    open: bool,
    selected: T,
}

impl<T: Copy + PartialEq> Dropdown<T> {
    pub fn new(selected: T, open: bool) -> Self {
        Self { open, selected }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> T {
        self.selected
    }

    pub fn is_selected(&self, value: T) -> bool {
        self.selected == value
    }

    /// Clicking the control flips the list.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Picking an option always closes the list, even if it was already selected.
    pub fn select(&mut self, value: T) {
        self.selected = value;
        self.open = false;
    }
}

impl<T: Copy + PartialEq + Default> Default for Dropdown<T> {
    fn default() -> Self {
        Self::new(T::default(), DROPDOWN_OPEN_ON_LOAD)
    }
}

/// What dismissed the video modal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DismissReason {
    Backdrop,
    CloseButton,
    Escape,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VideoModalState {
    open: bool,
}

impl VideoModalState {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn dismiss(&mut self, reason: DismissReason) {
        if self.open {
            log::debug!("video modal dismissed by {reason:?}");
        }
        self.open = false;
    }

    /// Routes a `keydown` key name. Returns true if it closed the modal.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if self.open && key == "Escape" {
            self.dismiss(DismissReason::Escape);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_starts_open_on_first_reason() {
        let dropdown = Dropdown::<SkipReason>::default();
        assert!(dropdown.is_open());
        assert_eq!(dropdown.selected(), SkipReason::BranchStateUnreproducible);
        assert_eq!(dropdown.selected().label(), "Branch state can't be produced");
    }

    #[test]
    fn selecting_any_reason_sets_it_and_closes() {
        for reason in SkipReason::ALL {
            let mut dropdown = Dropdown::<SkipReason>::default();
            dropdown.select(reason);
            assert_eq!(dropdown.selected(), reason);
            assert!(!dropdown.is_open());
            assert!(dropdown.is_selected(reason));
        }
    }

    #[test]
    fn reselecting_current_reason_only_closes() {
        let mut dropdown = Dropdown::new(SkipReason::NotEnoughTime, true);
        dropdown.select(SkipReason::NotEnoughTime);
        assert_eq!(dropdown.selected(), SkipReason::NotEnoughTime);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn control_click_toggles() {
        let mut dropdown = Dropdown::new(SkipReason::Other, false);
        dropdown.toggle();
        assert!(dropdown.is_open());
        dropdown.toggle();
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.selected(), SkipReason::Other);
    }

    #[test]
    fn labels_are_listed_in_order() {
        let labels: Vec<_> = SkipReason::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            ["Branch state can't be produced", "Not enough time", "Other reason"]
        );
    }

    #[test]
    fn modal_starts_open() {
        assert!(crate::site::VIDEO_MODAL_OPEN_ON_LOAD);
        assert!(VideoModalState::new(crate::site::VIDEO_MODAL_OPEN_ON_LOAD).is_open());
    }

    #[test]
    fn escape_closes_open_modal() {
        let mut modal = VideoModalState::new(true);
        assert!(modal.handle_key("Escape"));
        assert!(!modal.is_open());
    }

    #[test]
    fn escape_while_closed_is_ignored() {
        let mut modal = VideoModalState::new(false);
        assert!(!modal.handle_key("Escape"));
        assert!(!modal.is_open());
    }

    #[test]
    fn other_keys_leave_modal_open() {
        let mut modal = VideoModalState::new(true);
        assert!(!modal.handle_key("Enter"));
        assert!(!modal.handle_key("Esc"));
        assert!(modal.is_open());
    }

    #[test]
    fn clicks_dismiss_and_cta_reopens() {
        let mut modal = VideoModalState::new(false);
        modal.open();
        assert!(modal.is_open());
        modal.dismiss(DismissReason::Backdrop);
        assert!(!modal.is_open());
        modal.open();
        modal.dismiss(DismissReason::CloseButton);
        assert!(!modal.is_open());
    }
}
