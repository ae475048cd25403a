use std::mem;

use relata_store::Event;

use crate::state::Settings;

pub(crate) mod handler;

#[derive(Debug, Clone, derive_more::From)]
pub(crate) enum Action {
    Store(Event),
    History(HistoryAction),
    Settings(SettingsAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum HistoryAction {
    Undo,
    Redo,
}

#[derive(Debug, Clone)]
pub(crate) enum SettingsAction {
    SwitchLocale,
    UpdateSettings(Settings),
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use relata_core::Side;
    use relata_store::Event;

    use super::{Action, ActionRequestQueue, HistoryAction};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Event::AddElement(Side::B).into());
        queue.request(HistoryAction::Undo.into());

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(matches!(
            drained[0],
            Action::Store(Event::AddElement(Side::B))
        ));
        assert!(matches!(drained[1], Action::History(HistoryAction::Undo)));

        assert!(queue.take_all().is_empty());
    }
}
