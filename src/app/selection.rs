//! Detail selection with toggle semantics.

/// The id whose detail record is (or is being) shown, if any.
///
/// Selection toggles: selecting the id that is already selected clears the
/// selection instead of refetching it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    current: Option<String>,
}

impl SelectionState {
    /// Applies a selection. Returns `true` when `id` became the new
    /// selection and `false` when the call toggled it off.
    pub fn select(&mut self, id: &str) -> bool {
        if self.current.as_deref() == Some(id) {
            self.current = None;
            false
        } else {
            self.current = Some(id.to_string());
            true
        }
    }

    /// Clears the selection unconditionally.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The currently selected id.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}
