use crate::{
    action::{Action, ActionRequestQueue, HistoryAction, SettingsAction},
    state::AppState,
};

/// Applies every queued action in request order.
///
/// Returns `true` if any action was handled.
pub(crate) fn handle_all(app_state: &mut AppState, action_queue: &mut ActionRequestQueue) -> bool {
    let actions = action_queue.take_all();
    let handled = !actions.is_empty();
    for action in actions {
        handle(app_state, action);
    }
    handled
}

pub(crate) fn handle(app_state: &mut AppState, action: Action) {
    let version_before = app_state.store.version();
    let mut push_history_if_changed = true;

    match action {
        Action::Store(event) => {
            let outcome = app_state.store.apply(event);
            if outcome.is_applied() {
                log::debug!("applied {event}, version={}", app_state.store.version());
            } else {
                log::trace!("ignored {event}");
            }
        }
        Action::History(history_action) => {
            push_history_if_changed = false;
            let moved = match history_action {
                HistoryAction::Undo => app_state.undo(),
                HistoryAction::Redo => app_state.redo(),
            };
            if moved {
                log::debug!("{history_action:?} to version={}", app_state.store.version());
            } else {
                log::trace!("nothing to {history_action:?}");
            }
        }
        Action::Settings(SettingsAction::SwitchLocale) => {
            app_state.settings.locale.toggle();
            log::debug!("switched locale to {:?}", app_state.settings.locale);
        }
        Action::Settings(SettingsAction::UpdateSettings(settings)) => {
            if app_state.settings != settings {
                log::debug!("updated settings: {settings:?}");
            }
            app_state.settings = settings;
        }
    }

    if push_history_if_changed && app_state.store.version() != version_before {
        app_state.push_history();
    }
}
