use relata_store::RelationStore;

use crate::state::{History, Settings};

// AppState holds the relation session, the user's settings and the undo history.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) store: RelationStore,
    pub(crate) settings: Settings,
    history: History,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(store: RelationStore) -> Self {
        Self::with_history(store, History::new())
    }

    #[must_use]
    pub(crate) fn with_history(store: RelationStore, history: History) -> Self {
        let mut state = Self {
            store,
            settings: Settings::default(),
            history,
        };
        state.reset_history();
        state
    }

    pub(crate) fn reset_history(&mut self) {
        self.history.reset(&self.store);
    }

    pub(crate) fn push_history(&mut self) {
        self.history.push(&self.store);
    }

    #[must_use]
    pub(crate) fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub(crate) fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub(crate) fn undo(&mut self) -> bool {
        self.history.undo(&mut self.store)
    }

    pub(crate) fn redo(&mut self) -> bool {
        self.history.redo(&mut self.store)
    }
}

#[cfg(test)]
mod tests {
    use relata_core::Side;
    use relata_store::RelationStore;

    use super::AppState;

    #[test]
    fn new_state_has_nothing_to_undo() {
        let app_state = AppState::new(RelationStore::new());
        assert!(!app_state.can_undo());
        assert!(!app_state.can_redo());
    }

    #[test]
    fn undo_redo_round_trips_the_store() {
        let mut app_state = AppState::new(RelationStore::new());
        app_state.store.add_element(Side::A);
        app_state.push_history();

        assert!(app_state.undo());
        assert_eq!(app_state.store.set(Side::A).len(), 4);
        assert!(app_state.redo());
        assert_eq!(app_state.store.set(Side::A).len(), 5);
    }
}
