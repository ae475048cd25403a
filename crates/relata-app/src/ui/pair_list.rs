use eframe::egui::{RichText, Ui};

#[derive(Debug, Clone)]
pub(crate) struct PairListViewModel {
    pub(crate) heading: &'static str,
    pub(crate) entries: Vec<String>,
}

const ENTRY_SIZE: f32 = 20.0;

pub(crate) fn show(ui: &mut Ui, vm: &PairListViewModel) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(vm.heading).strong());
        for entry in &vm.entries {
            ui.label(RichText::new(entry).size(ENTRY_SIZE));
        }
    });
}
