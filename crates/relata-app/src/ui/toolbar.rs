use eframe::egui::{Align, Button, Layout, Ui, widgets};

use crate::{
    action::{ActionRequestQueue, HistoryAction, SettingsAction},
    state::Settings,
};

#[derive(Debug, Clone)]
pub(crate) struct ToolbarViewModel {
    pub(crate) can_undo: bool,
    pub(crate) can_redo: bool,
    pub(crate) settings: Settings,
    pub(crate) version: String,
}

pub(crate) fn show(ui: &mut Ui, vm: &ToolbarViewModel, action_queue: &mut ActionRequestQueue) {
    let strings = vm.settings.locale.strings();

    ui.horizontal(|ui| {
        if ui
            .button(strings.switch_language)
            .on_hover_text("Ctrl+L")
            .clicked()
        {
            action_queue.request(SettingsAction::SwitchLocale.into());
        }

        ui.separator();

        if ui
            .add_enabled(vm.can_undo, Button::new(strings.undo))
            .on_hover_text("Ctrl+Z")
            .clicked()
        {
            action_queue.request(HistoryAction::Undo.into());
        }
        if ui
            .add_enabled(vm.can_redo, Button::new(strings.redo))
            .on_hover_text("Ctrl+Y")
            .clicked()
        {
            action_queue.request(HistoryAction::Redo.into());
        }

        ui.separator();

        let mut settings = vm.settings.clone();
        let display = &mut settings.display;
        let mut changed = false;
        changed |= ui
            .checkbox(&mut display.show_link_lines, strings.show_link_lines)
            .changed();
        changed |= ui
            .checkbox(&mut display.highlight_uncovered, strings.highlight_uncovered)
            .changed();
        if changed {
            action_queue.request(SettingsAction::UpdateSettings(settings).into());
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            widgets::global_theme_preference_buttons(ui);
            ui.separator();
            ui.weak(vm.version.as_str());
        });
    });
}
