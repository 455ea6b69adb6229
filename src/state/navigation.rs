// ============================================================================
// NAVIGATION TRACKER - Generación de navegación
// ============================================================================
// Cada navegación incrementa la generación; una carga asíncrona solo se
// aplica al DOM si su token sigue siendo el último
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationToken(u64);

#[derive(Clone, Default)]
pub struct NavigationTracker {
    generation: Rc<Cell<u64>>,
}

impl NavigationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> NavigationToken {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        NavigationToken(next)
    }

    pub fn is_current(&self, token: NavigationToken) -> bool {
        self.generation.get() == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_token_is_current() {
        let tracker = NavigationTracker::new();
        let first = tracker.begin();
        assert!(tracker.is_current(first));
        let second = tracker.clone().begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }
}
