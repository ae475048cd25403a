use eframe::egui::{InputState, Key};

use crate::action::{Action, ActionRequestQueue, HistoryAction, SettingsAction};

struct Trigger {
    key: Key,
    command: bool,
    shift: bool,
}

impl Trigger {
    const fn new(key: Key, command: bool, shift: bool) -> Self {
        Self {
            key,
            command,
            shift,
        }
    }
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn new(trigger: Trigger, action: Action) -> Self {
        Self { trigger, action }
    }

    const fn command(key: Key, action: Action) -> Self {
        Self::new(Trigger::new(key, true, false), action)
    }

    const fn command_shift(key: Key, action: Action) -> Self {
        Self::new(Trigger::new(key, true, true), action)
    }
}

const SHORTCUTS: [Shortcut; 4] = [
    Shortcut::command(Key::Z, Action::History(HistoryAction::Undo)),
    Shortcut::command(Key::Y, Action::History(HistoryAction::Redo)),
    Shortcut::command_shift(Key::Z, Action::History(HistoryAction::Redo)),
    Shortcut::command(Key::L, Action::Settings(SettingsAction::SwitchLocale)),
];

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    for shortcut in SHORTCUTS {
        let triggered = i.key_pressed(shortcut.trigger.key)
            && i.modifiers.command == shortcut.trigger.command
            && i.modifiers.shift == shortcut.trigger.shift;

        if triggered {
            action_queue.request(shortcut.action);
            return;
        }
    }
}
