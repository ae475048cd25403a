use eframe::egui::{Button, Grid, RichText, Ui, vec2};
use relata_store::Event;

use crate::action::ActionRequestQueue;

#[derive(Debug, Clone)]
pub(crate) struct MatrixRow {
    pub(crate) glyph: &'static str,
    pub(crate) cells: Vec<bool>,
}

/// Rows are the elements of set A, columns the elements of set B.
#[derive(Debug, Clone)]
pub(crate) struct MatrixViewModel {
    pub(crate) heading: &'static str,
    pub(crate) column_glyphs: Vec<&'static str>,
    pub(crate) rows: Vec<MatrixRow>,
}

const CELL_SIZE: f32 = 32.0;
const HEADER_GLYPH_SIZE: f32 = 20.0;
const CHECK_MARK: &str = "✔";

pub(crate) fn show(ui: &mut Ui, vm: &MatrixViewModel, action_queue: &mut ActionRequestQueue) {
    ui.label(RichText::new(vm.heading).strong());

    Grid::new("relation_matrix")
        .spacing(vec2(2.0, 2.0))
        .min_col_width(CELL_SIZE)
        .show(ui, |ui| {
            ui.label("");
            for glyph in &vm.column_glyphs {
                ui.label(RichText::new(*glyph).size(HEADER_GLYPH_SIZE));
            }
            ui.end_row();

            for (left, row) in vm.rows.iter().enumerate() {
                ui.label(RichText::new(row.glyph).size(HEADER_GLYPH_SIZE));
                for (right, &checked) in row.cells.iter().enumerate() {
                    let text = if checked { CHECK_MARK } else { "" };
                    let cell = Button::new(text)
                        .min_size(vec2(CELL_SIZE, CELL_SIZE))
                        .selected(checked);
                    if ui.add(cell).clicked() {
                        action_queue.request(Event::TogglePair { left, right }.into());
                    }
                }
                ui.end_row();
            }
        });
}
