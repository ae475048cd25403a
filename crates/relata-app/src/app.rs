//! Relata application UI.
//!
//! # Design Notes
//! - One screen: set diagram, relation matrix, pair list and explanation, topped by
//!   the category title.
//! - UI code only requests actions; the handler applies them between passes.
//! - Every applied store mutation is recorded for undo/redo.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};
use relata_store::RelationStore;

use crate::{
    action::{self, ActionRequestQueue},
    state::AppState,
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct RelataApp {
    app_state: AppState,
}

impl RelataApp {
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self {
            app_state: AppState::new(RelationStore::new()),
        }
    }
}

impl App for RelataApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        ctx.input(|i| {
            ui::input::handle_input(i, &mut action_queue);
        });
        action::handler::handle_all(&mut self.app_state, &mut action_queue);

        let toolbar_vm = view_model_builder::build_toolbar_vm(&self.app_state);
        let screen_vm = view_model_builder::build_relation_screen_vm(&self.app_state);

        CentralPanel::default().show(ctx, |ui| {
            ui::toolbar::show(ui, &toolbar_vm, &mut action_queue);
            ui.separator();
            ui::relation_screen::show(ui, &screen_vm, &mut action_queue);
        });

        if action::handler::handle_all(&mut self.app_state, &mut action_queue) {
            ctx.request_repaint();
        }
    }
}
