//! Unsaved-changes navigation guard.
//!
//! # Design
//! - The guard is plain data so the shell, the page and tests share one state machine.
//! - Targets are generic; the app stores route paths.
//! - A submit arms a one-shot bypass that the very next navigation attempt consumes.
//! - In-app pushes and browser back/forward pops go through the same `attempt`.

/// Outcome of an in-app navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationDecision<T> {
    /// Navigate to the target now.
    Proceed(T),
    /// Navigation was held back; the prompt should be shown.
    Blocked,
}

/// Guard state for a form with unsaved input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationGuard<T> {
    dirty: bool,
    submit_bypass: bool,
    pending: Option<T>,
}

impl<T> Default for NavigationGuard<T> {
    fn default() -> Self {
        Self {
            dirty: false,
            submit_bypass: false,
            pending: None,
        }
    }
}

impl<T: Clone + PartialEq> NavigationGuard<T> {
    /// Whether unsaved input is present.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Record whether the form holds unsaved input.
    pub const fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Let exactly one upcoming navigation through.
    pub const fn arm_submit_bypass(&mut self) {
        self.submit_bypass = true;
    }

    /// Whether a submit bypass is waiting to be consumed.
    #[must_use]
    pub const fn submit_bypass_armed(&self) -> bool {
        self.submit_bypass
    }

    /// Target held back by the prompt, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Decide an in-app navigation from `current` to `next`.
    ///
    /// An armed bypass is consumed first, whatever the target. Otherwise the
    /// navigation is blocked only when the form is dirty and the target differs
    /// from the current location.
    pub fn attempt(&mut self, current: &T, next: T) -> NavigationDecision<T> {
        if self.submit_bypass {
            self.submit_bypass = false;
            return NavigationDecision::Proceed(next);
        }
        if self.dirty && *current != next {
            self.pending = Some(next);
            return NavigationDecision::Blocked;
        }
        NavigationDecision::Proceed(next)
    }

    /// The user chose to leave; hand back the held target.
    ///
    /// The guard is reset since the page owning the input is going away.
    pub fn confirm(&mut self) -> Option<T> {
        let target = self.pending.take();
        if target.is_some() {
            self.release();
        }
        target
    }

    /// The user chose to stay; drop the held target.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a browser unload should ask for confirmation.
    #[must_use]
    pub const fn warns_on_unload(&self) -> bool {
        self.dirty
    }

    /// Reset everything, used when the guarded page unmounts.
    pub fn release(&mut self) {
        self.dirty = false;
        self.submit_bypass = false;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORM: &str = "/generate";
    const LIST: &str = "/list";

    fn guard() -> NavigationGuard<&'static str> {
        NavigationGuard::default()
    }

    #[test]
    fn clean_form_never_blocks() {
        let mut guard = guard();
        assert_eq!(guard.attempt(&FORM, LIST), NavigationDecision::Proceed(LIST));
        assert!(!guard.warns_on_unload());
    }

    #[test]
    fn dirty_form_blocks_and_holds_target() {
        let mut guard = guard();
        guard.set_dirty(true);
        assert_eq!(guard.attempt(&FORM, LIST), NavigationDecision::Blocked);
        assert_eq!(guard.pending(), Some(&LIST));
        assert!(guard.warns_on_unload());
    }

    #[test]
    fn same_path_is_not_blocked() {
        let mut guard = guard();
        guard.set_dirty(true);
        assert_eq!(guard.attempt(&FORM, FORM), NavigationDecision::Proceed(FORM));
        assert!(guard.pending().is_none());
    }

    #[test]
    fn submit_bypass_lets_exactly_one_navigation_through() {
        let mut guard = guard();
        guard.set_dirty(true);
        guard.arm_submit_bypass();
        assert_eq!(guard.attempt(&FORM, LIST), NavigationDecision::Proceed(LIST));
        assert!(!guard.submit_bypass_armed());
        assert_eq!(guard.attempt(&FORM, LIST), NavigationDecision::Blocked);
    }

    #[test]
    fn bypass_is_consumed_even_when_clean() {
        let mut guard = guard();
        guard.arm_submit_bypass();
        assert_eq!(guard.attempt(&FORM, FORM), NavigationDecision::Proceed(FORM));
        assert!(!guard.submit_bypass_armed());
    }

    #[test]
    fn confirm_releases_guard() {
        let mut guard = guard();
        guard.set_dirty(true);
        let _ = guard.attempt(&FORM, LIST);
        assert_eq!(guard.confirm(), Some(LIST));
        assert!(!guard.is_dirty());
        assert!(guard.pending().is_none());
    }

    #[test]
    fn confirm_without_pending_keeps_state() {
        let mut guard = guard();
        guard.set_dirty(true);
        assert_eq!(guard.confirm(), None);
        assert!(guard.is_dirty());
    }

    #[test]
    fn back_navigation_out_of_dirty_form_is_held_for_the_prompt() {
        let mut guard = guard();
        guard.set_dirty(true);
        assert_eq!(guard.attempt(&FORM, LIST), NavigationDecision::Blocked);
        assert_eq!(guard.pending(), Some(&LIST));
        assert!(guard.warns_on_unload());
        assert_eq!(guard.confirm(), Some(LIST));
        assert_eq!(guard.attempt(&FORM, LIST), NavigationDecision::Proceed(LIST));
    }

    #[test]
    fn back_navigation_after_submit_uses_the_bypass() {
        let mut guard = guard();
        guard.set_dirty(true);
        guard.arm_submit_bypass();
        assert_eq!(guard.attempt(&FORM, LIST), NavigationDecision::Proceed(LIST));
        assert!(guard.pending().is_none());
    }

    #[test]
    fn cancel_keeps_dirty_flag() {
        let mut guard = guard();
        guard.set_dirty(true);
        let _ = guard.attempt(&FORM, LIST);
        guard.cancel();
        assert!(guard.pending().is_none());
        assert!(guard.is_dirty());
        assert_eq!(guard.attempt(&FORM, LIST), NavigationDecision::Blocked);
    }
}
