use eframe::egui::Ui;

#[derive(Debug, Clone)]
pub(crate) struct ExplanationViewModel {
    pub(crate) paragraphs: Vec<&'static str>,
}

pub(crate) fn show(ui: &mut Ui, vm: &ExplanationViewModel) {
    for paragraph in &vm.paragraphs {
        ui.label(*paragraph);
        ui.add_space(ui.spacing().item_spacing.y);
    }
}
