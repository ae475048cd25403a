use relata_core::{ElementRef, Pair, Side};
use relata_store::RelationStore;

use crate::{
    locale::Strings,
    state::{AppState, DisplaySettings},
    ui::{
        explanation::ExplanationViewModel,
        matrix::{MatrixRow, MatrixViewModel},
        pair_list::PairListViewModel,
        relation_screen::RelationScreenViewModel,
        set_diagram::{ElementCell, ElementVisualState, SetColumnViewModel, SetDiagramViewModel},
        toolbar::ToolbarViewModel,
    },
    version,
};

#[must_use]
pub(crate) fn build_toolbar_vm(app_state: &AppState) -> ToolbarViewModel {
    ToolbarViewModel {
        can_undo: app_state.can_undo(),
        can_redo: app_state.can_redo(),
        settings: app_state.settings.clone(),
        version: version::build_version(),
    }
}

#[must_use]
pub(crate) fn build_relation_screen_vm(app_state: &AppState) -> RelationScreenViewModel {
    let store = &app_state.store;
    let strings = app_state.settings.locale.strings();
    let classification = store.classification();

    RelationScreenViewModel {
        title: strings.title(classification.category),
        diagram: build_set_diagram_vm(store, &app_state.settings.display, strings),
        matrix: build_matrix_vm(store, strings),
        pair_list: build_pair_list_vm(store, strings),
        explanation: ExplanationViewModel {
            paragraphs: strings.explanation(&classification),
        },
    }
}

fn build_set_diagram_vm(
    store: &RelationStore,
    display: &DisplaySettings,
    strings: &'static Strings,
) -> SetDiagramViewModel {
    SetDiagramViewModel {
        set_a: build_set_column_vm(store, Side::A, display, strings),
        set_b: build_set_column_vm(store, Side::B, display, strings),
        pairs: store.relation().pairs().to_vec(),
        drag_origin: store.drag_origin(),
        show_links: display.show_link_lines,
        empty_hint: store.relation().is_empty().then_some(strings.empty_hint),
    }
}

fn build_set_column_vm(
    store: &RelationStore,
    side: Side,
    display: &DisplaySettings,
    strings: &'static Strings,
) -> SetColumnViewModel {
    let relation = store.relation();
    let elements = store
        .set(side)
        .iter()
        .enumerate()
        .map(|(index, element)| {
            let mut visual_state = ElementVisualState::empty();
            if store.drag_origin() == Some(ElementRef::new(side, index)) {
                visual_state |= ElementVisualState::DRAG_SOURCE;
            }
            let covered = relation.iter().any(|pair| pair.index_on(side) == index);
            if display.highlight_uncovered && !covered {
                visual_state |= ElementVisualState::UNCOVERED;
            }
            ElementCell {
                glyph: element.glyph(),
                visual_state,
            }
        })
        .collect();

    SetColumnViewModel {
        side,
        heading: strings.set_name(side),
        add_tooltip: strings.add_element,
        remove_tooltip: strings.remove_element,
        can_add: store.add_element_capability(side).is_ok(),
        can_remove: store.remove_element_capability(side).is_ok(),
        elements,
    }
}

fn build_matrix_vm(store: &RelationStore, strings: &'static Strings) -> MatrixViewModel {
    let set_b = store.set(Side::B);
    let relation = store.relation();

    let rows = store
        .set(Side::A)
        .iter()
        .enumerate()
        .map(|(left, element)| MatrixRow {
            glyph: element.glyph(),
            cells: (0..set_b.len())
                .map(|right| relation.contains(Pair::new(left, right)))
                .collect(),
        })
        .collect();

    MatrixViewModel {
        heading: strings.relation_matrix,
        column_glyphs: set_b.iter().map(|element| element.glyph()).collect(),
        rows,
    }
}

fn build_pair_list_vm(store: &RelationStore, strings: &'static Strings) -> PairListViewModel {
    let separator = strings.pair_separator(store.category());
    let set_a = store.set(Side::A);
    let set_b = store.set(Side::B);

    let entries = store
        .relation()
        .iter()
        .filter_map(|pair| {
            let left = set_a.get(pair.left)?;
            let right = set_b.get(pair.right)?;
            Some(format!("{left} {separator} {right}"))
        })
        .collect();

    PairListViewModel {
        heading: strings.pairs_heading,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use relata_core::{ElementRef, Side};
    use relata_store::{Event, RelationStore};

    use super::{build_relation_screen_vm, build_toolbar_vm};
    use crate::{
        action::handler::handle, locale::Locale, state::AppState,
        ui::set_diagram::ElementVisualState,
    };

    fn app_state_with(events: &[Event]) -> AppState {
        let mut app_state = AppState::new(RelationStore::new());
        for event in events {
            handle(&mut app_state, (*event).into());
        }
        app_state
    }

    #[test]
    fn initial_screen_shows_spanish_relation_and_hint() {
        let vm = build_relation_screen_vm(&app_state_with(&[]));

        assert_eq!(vm.title, "Relación");
        assert_eq!(vm.diagram.set_a.elements.len(), 4);
        assert_eq!(vm.diagram.set_b.elements.len(), 5);
        assert!(vm.diagram.set_a.can_add);
        assert!(!vm.diagram.set_b.can_add);
        assert!(vm.diagram.empty_hint.is_some());
        assert!(vm.pair_list.entries.is_empty());
        assert_eq!(vm.explanation.paragraphs.len(), 1);
    }

    #[test]
    fn pair_list_uses_function_arrow_for_functions() {
        let vm = build_relation_screen_vm(&app_state_with(&[Event::TogglePair {
            left: 0,
            right: 1,
        }]));

        assert_eq!(vm.title, "Función Inyectiva");
        assert_eq!(vm.pair_list.entries, vec!["🍎 ⟼ 🌟".to_owned()]);
        assert!(vm.diagram.empty_hint.is_none());
        assert!(vm.matrix.rows[0].cells[1]);
        assert!(!vm.matrix.rows[0].cells[0]);
    }

    #[test]
    fn pair_list_uses_relation_separator_for_relations() {
        let vm = build_relation_screen_vm(&app_state_with(&[
            Event::TogglePair { left: 0, right: 0 },
            Event::TogglePair { left: 0, right: 1 },
        ]));

        assert_eq!(
            vm.pair_list.entries,
            vec!["🍎 :: 🐶".to_owned(), "🍎 :: 🌟".to_owned()]
        );
    }

    #[test]
    fn matrix_follows_set_sizes() {
        let vm = build_relation_screen_vm(&app_state_with(&[Event::RemoveElement(Side::B)]));

        assert_eq!(vm.matrix.rows.len(), 4);
        assert_eq!(vm.matrix.column_glyphs, vec!["🐶", "🌟", "🎈", "🍕"]);
        assert!(vm.matrix.rows.iter().all(|row| row.cells.len() == 4));
    }

    #[test]
    fn uncovered_elements_are_flagged_only_when_enabled() {
        let mut app_state = app_state_with(&[Event::TogglePair { left: 1, right: 2 }]);
        let vm = build_relation_screen_vm(&app_state);
        assert!(
            vm.diagram
                .set_a
                .elements
                .iter()
                .all(|cell| cell.visual_state.is_empty())
        );

        app_state.settings.display.highlight_uncovered = true;
        let vm = build_relation_screen_vm(&app_state);
        let uncovered_a: Vec<_> = vm
            .diagram
            .set_a
            .elements
            .iter()
            .map(|cell| cell.visual_state.contains(ElementVisualState::UNCOVERED))
            .collect();
        assert_eq!(uncovered_a, vec![true, false, true, true]);
        assert!(
            !vm.diagram.set_b.elements[2]
                .visual_state
                .contains(ElementVisualState::UNCOVERED)
        );
    }

    #[test]
    fn drag_origin_marks_drag_source() {
        let vm = build_relation_screen_vm(&app_state_with(&[Event::DragStart(ElementRef::new(
            Side::B,
            3,
        ))]));

        assert_eq!(vm.diagram.drag_origin, Some(ElementRef::new(Side::B, 3)));
        assert!(
            vm.diagram.set_b.elements[3]
                .visual_state
                .contains(ElementVisualState::DRAG_SOURCE)
        );
    }

    #[test]
    fn english_locale_changes_every_label() {
        let mut app_state = app_state_with(&[
            Event::TogglePair { left: 0, right: 0 },
            Event::TogglePair { left: 1, right: 1 },
            Event::TogglePair { left: 2, right: 2 },
            Event::TogglePair { left: 3, right: 3 },
            Event::RemoveElement(Side::B),
        ]);
        app_state.settings.locale = Locale::En;

        let vm = build_relation_screen_vm(&app_state);
        assert_eq!(vm.title, "Bijective Function");
        assert_eq!(vm.diagram.set_a.heading, "Set A");
        assert_eq!(vm.matrix.heading, "Relation Matrix");
        assert_eq!(vm.pair_list.heading, "Set A ⟶ Set B");
        assert_eq!(vm.explanation.paragraphs.len(), 5);
    }

    #[test]
    fn toolbar_reflects_history() {
        let mut app_state = app_state_with(&[]);
        assert!(!build_toolbar_vm(&app_state).can_undo);

        handle(&mut app_state, Event::AddElement(Side::A).into());
        let vm = build_toolbar_vm(&app_state);
        assert!(vm.can_undo);
        assert!(!vm.can_redo);
    }
}
