//! Edge detection on the host's loading flag.
//!
//! The host raises `is_loading` while an edit request is in flight. Panels
//! that keep local state clear it once the request completes, i.e. on the
//! falling edge of the flag.

/// A change of the loading flag between two observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingTransition {
    /// A request started (false -> true)
    Started,
    /// A request completed (true -> false)
    Completed,
}

/// Remembers the last observed loading flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingEdge {
    was_loading: bool,
}

impl LoadingEdge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current flag and report the transition, if any.
    pub fn observe(&mut self, is_loading: bool) -> Option<LoadingTransition> {
        let transition = match (self.was_loading, is_loading) {
            (false, true) => Some(LoadingTransition::Started),
            (true, false) => Some(LoadingTransition::Completed),
            _ => None,
        };
        self.was_loading = is_loading;

        if let Some(t) = transition {
            tracing::debug!(transition = ?t, "Loading flag changed");
        }
        transition
    }

    /// Record the current flag and report only the falling edge.
    pub fn completed(&mut self, is_loading: bool) -> bool {
        self.observe(is_loading) == Some(LoadingTransition::Completed)
    }

    pub fn was_loading(&self) -> bool {
        self.was_loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_false_is_quiet() {
        let mut edge = LoadingEdge::new();
        assert_eq!(edge.observe(false), None);
    }

    #[test]
    fn detects_start_and_completion() {
        let mut edge = LoadingEdge::new();
        assert_eq!(edge.observe(true), Some(LoadingTransition::Started));
        assert_eq!(edge.observe(true), None);
        assert_eq!(edge.observe(false), Some(LoadingTransition::Completed));
        assert_eq!(edge.observe(false), None);
    }

    #[test]
    fn completed_fires_once_per_request() {
        let mut edge = LoadingEdge::new();
        let fired: Vec<bool> = [true, false, false, true, true, false]
            .into_iter()
            .map(|flag| edge.completed(flag))
            .collect();
        assert_eq!(fired, vec![false, true, false, false, false, true]);
    }
}
