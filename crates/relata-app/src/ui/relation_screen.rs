use eframe::egui::{Frame, RichText, ScrollArea, Ui};

use crate::{
    action::ActionRequestQueue,
    ui::{
        explanation::{self, ExplanationViewModel},
        matrix::{self, MatrixViewModel},
        pair_list::{self, PairListViewModel},
        set_diagram::{self, SetDiagramViewModel},
    },
};

#[derive(Debug, Clone)]
pub(crate) struct RelationScreenViewModel {
    pub(crate) title: &'static str,
    pub(crate) diagram: SetDiagramViewModel,
    pub(crate) matrix: MatrixViewModel,
    pub(crate) pair_list: PairListViewModel,
    pub(crate) explanation: ExplanationViewModel,
}

const TITLE_SIZE: f32 = 26.0;
const SECTION_SPACING: f32 = 24.0;

pub(crate) fn show(
    ui: &mut Ui,
    vm: &RelationScreenViewModel,
    action_queue: &mut ActionRequestQueue,
) {
    ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(vm.title).size(TITLE_SIZE).strong());
        });
        ui.add_space(SECTION_SPACING);

        Frame::group(ui.style()).show(ui, |ui| {
            set_diagram::show(ui, &vm.diagram, action_queue);
        });
        ui.add_space(SECTION_SPACING);

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| matrix::show(ui, &vm.matrix, action_queue));
            ui.add_space(SECTION_SPACING * 2.0);
            ui.vertical(|ui| pair_list::show(ui, &vm.pair_list));
        });
        ui.add_space(SECTION_SPACING);

        Frame::group(ui.style()).show(ui, |ui| {
            explanation::show(ui, &vm.explanation);
        });
    });
}
