use eframe::egui::{
    Align2, Button, Color32, CursorIcon, DragAndDrop, FontId, Painter, Rect, RichText, Sense,
    Stroke, StrokeKind, Ui, pos2, vec2,
};
use egui_extras::{Size, StripBuilder};
use relata_core::{ElementRef, MAX_ELEMENTS, Pair, Side};
use relata_store::Event;

use crate::{
    action::ActionRequestQueue,
    ui::{
        link_lines::{self, HIT_TOLERANCE},
        theme::DiagramPalette,
    },
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct ElementVisualState: u8 {
        const DRAG_SOURCE = 0b0000_0001;
        const UNCOVERED = 0b0000_0010;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ElementCell {
    pub(crate) glyph: &'static str,
    pub(crate) visual_state: ElementVisualState,
}

#[derive(Debug, Clone)]
pub(crate) struct SetColumnViewModel {
    pub(crate) side: Side,
    pub(crate) heading: &'static str,
    pub(crate) add_tooltip: &'static str,
    pub(crate) remove_tooltip: &'static str,
    pub(crate) can_add: bool,
    pub(crate) can_remove: bool,
    pub(crate) elements: Vec<ElementCell>,
}

#[derive(Debug, Clone)]
pub(crate) struct SetDiagramViewModel {
    pub(crate) set_a: SetColumnViewModel,
    pub(crate) set_b: SetColumnViewModel,
    pub(crate) pairs: Vec<Pair>,
    pub(crate) drag_origin: Option<ElementRef>,
    pub(crate) show_links: bool,
    pub(crate) empty_hint: Option<&'static str>,
}

const COLUMN_WIDTH: f32 = 150.0;
const MIN_LINK_AREA_WIDTH: f32 = 120.0;
const HEADER_HEIGHT: f32 = 30.0;
const ELEMENT_SIZE: f32 = 44.0;
const ELEMENT_GLYPH_SIZE: f32 = 30.0;
const ELEMENT_RADIUS: f32 = 8.0;
const OUTLINE_WIDTH: f32 = 96.0;
const OUTLINE_RADIUS: f32 = 48.0;
const HINT_FONT_SIZE: f32 = 15.0;
#[allow(clippy::cast_precision_loss)]
const ROWS: f32 = MAX_ELEMENTS as f32;

pub(crate) fn show(ui: &mut Ui, vm: &SetDiagramViewModel, action_queue: &mut ActionRequestQueue) {
    let palette = DiagramPalette::from_visuals(ui.visuals());
    let spacing = ui.spacing().item_spacing.y;
    let height = HEADER_HEIGHT + (ELEMENT_SIZE + spacing) * ROWS + spacing * 2.0;

    // The payload is set while egui renders the drag source, so the drag start
    // reaches the store before the drop that ends it.
    let live_drag = DragAndDrop::payload::<ElementRef>(ui.ctx()).map(|payload| *payload);
    if let Some(origin) = live_drag
        && vm.drag_origin != Some(origin)
    {
        action_queue.request(Event::DragStart(origin).into());
    }
    let mut visible_states = ElementVisualState::UNCOVERED;
    if live_drag.is_some() {
        visible_states |= ElementVisualState::DRAG_SOURCE;
    }

    let mut rects_a = Vec::new();
    let mut rects_b = Vec::new();
    let mut link_area = Rect::NOTHING;

    ui.allocate_ui(vec2(ui.available_width(), height), |ui| {
        StripBuilder::new(ui)
            .size(Size::exact(COLUMN_WIDTH))
            .size(Size::remainder().at_least(MIN_LINK_AREA_WIDTH))
            .size(Size::exact(COLUMN_WIDTH))
            .horizontal(|mut strip| {
                strip.cell(|ui| {
                    rects_a = show_column(ui, &vm.set_a, visible_states, &palette, action_queue);
                });
                strip.cell(|ui| {
                    link_area = ui.max_rect();
                });
                strip.cell(|ui| {
                    rects_b = show_column(ui, &vm.set_b, visible_states, &palette, action_queue);
                });
            });
    });

    if vm.show_links && link_area.is_positive() {
        let segments = link_lines::layout(&vm.pairs, &rects_a, &rects_b);
        let response = ui.interact(link_area, ui.id().with("link_area"), Sense::click());
        let hovered = response
            .hover_pos()
            .and_then(|pos| link_lines::hit_test(&segments, pos, HIT_TOLERANCE));
        if let Some(pair) = hovered {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
            if response.clicked() {
                action_queue.request(
                    Event::TogglePair {
                        left: pair.left,
                        right: pair.right,
                    }
                    .into(),
                );
            }
        }
        link_lines::paint(ui.painter(), &segments, hovered, &palette);
    }

    if let Some(hint) = vm.empty_hint
        && link_area.is_positive()
    {
        paint_hint(ui.painter(), link_area, hint, &palette);
    }
}

fn show_column(
    ui: &mut Ui,
    vm: &SetColumnViewModel,
    visible_states: ElementVisualState,
    palette: &DiagramPalette,
    action_queue: &mut ActionRequestQueue,
) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(vm.elements.len());

    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(vm.heading).strong());
            let add = ui
                .add_enabled(vm.can_add, Button::new("+"))
                .on_hover_text(vm.add_tooltip);
            if add.clicked() {
                action_queue.request(Event::AddElement(vm.side).into());
            }
            let remove = ui
                .add_enabled(vm.can_remove, Button::new("−"))
                .on_hover_text(vm.remove_tooltip);
            if remove.clicked() {
                action_queue.request(Event::RemoveElement(vm.side).into());
            }
        });

        let body = ui.available_rect_before_wrap();
        let outline = Rect::from_center_size(body.center(), vec2(OUTLINE_WIDTH, body.height()));
        ui.painter().rect_stroke(
            outline,
            OUTLINE_RADIUS,
            Stroke::new(2.0, palette.set_border(vm.side)),
            StrokeKind::Inside,
        );

        for (index, cell) in vm.elements.iter().enumerate() {
            let element = ElementRef::new(vm.side, index);
            let id = ui.id().with(("element", vm.side, index));
            let visual_state = cell.visual_state & visible_states;

            let response = ui
                .dnd_drag_source(id, element, |ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(vec2(ELEMENT_SIZE, ELEMENT_SIZE), Sense::hover());
                    let text_color = ui.visuals().text_color();
                    paint_element(ui.painter(), rect, cell, visual_state, text_color, palette);
                })
                .response;

            if let Some(payload) = response.dnd_hover_payload::<ElementRef>()
                && payload.side != vm.side
            {
                ui.painter().rect_stroke(
                    response.rect,
                    ELEMENT_RADIUS,
                    Stroke::new(2.0, palette.drop_target_border),
                    StrokeKind::Outside,
                );
            }
            if response.dnd_release_payload::<ElementRef>().is_some() {
                action_queue.request(Event::Drop(element).into());
            }

            rects.push(response.rect);
        }
    });

    rects
}

fn paint_element(
    painter: &Painter,
    rect: Rect,
    cell: &ElementCell,
    visual_state: ElementVisualState,
    text_color: Color32,
    palette: &DiagramPalette,
) {
    if visual_state.contains(ElementVisualState::DRAG_SOURCE) {
        painter.rect_filled(rect, ELEMENT_RADIUS, palette.drag_source_bg);
    }
    if visual_state.contains(ElementVisualState::UNCOVERED) {
        painter.rect_stroke(
            rect,
            ELEMENT_RADIUS,
            Stroke::new(2.0, palette.uncovered_border),
            StrokeKind::Inside,
        );
    }
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        cell.glyph,
        FontId::proportional(ELEMENT_GLYPH_SIZE),
        text_color,
    );
}

fn paint_hint(painter: &Painter, area: Rect, hint: &str, palette: &DiagramPalette) {
    let galley = painter.layout(
        hint.to_owned(),
        FontId::proportional(HINT_FONT_SIZE),
        palette.hint_text,
        area.width(),
    );
    let pos = pos2(
        area.center().x - galley.size().x / 2.0,
        area.top() + HEADER_HEIGHT,
    );
    painter.galley(pos, galley, palette.hint_text);
}
