use relata_classifier::{Category, Classification};
use relata_core::Side;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub(crate) enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    #[must_use]
    pub(crate) const fn toggled(self) -> Self {
        match self {
            Self::Es => Self::En,
            Self::En => Self::Es,
        }
    }

    pub(crate) fn toggle(&mut self) {
        *self = self.toggled();
    }

    #[must_use]
    pub(crate) fn strings(self) -> &'static Strings {
        match self {
            Self::Es => &ES,
            Self::En => &EN,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Strings {
    pub(crate) set_a: &'static str,
    pub(crate) set_b: &'static str,
    pub(crate) relation_matrix: &'static str,
    pub(crate) pairs_heading: &'static str,
    pub(crate) pair_separator_relation: &'static str,
    pub(crate) pair_separator_function: &'static str,
    pub(crate) switch_language: &'static str,
    pub(crate) empty_hint: &'static str,
    pub(crate) add_element: &'static str,
    pub(crate) remove_element: &'static str,
    pub(crate) undo: &'static str,
    pub(crate) redo: &'static str,
    pub(crate) show_link_lines: &'static str,
    pub(crate) highlight_uncovered: &'static str,
    pub(crate) titles: Titles,
    pub(crate) explanations: Explanations,
}

#[derive(Debug)]
pub(crate) struct Titles {
    pub(crate) relation: &'static str,
    pub(crate) function: &'static str,
    pub(crate) total_function: &'static str,
    pub(crate) injective: &'static str,
    pub(crate) surjective: &'static str,
    pub(crate) bijective: &'static str,
}

#[derive(Debug)]
pub(crate) struct Explanations {
    pub(crate) relation: &'static str,
    pub(crate) function: &'static str,
    pub(crate) total_function: &'static str,
    pub(crate) surjective: &'static str,
    pub(crate) bijective: &'static str,
    pub(crate) injective: &'static str,
}

static ES: Strings = Strings {
    set_a: "Conjunto A",
    set_b: "Conjunto B",
    relation_matrix: "Matriz de relación",
    pairs_heading: "Conjunto A ⟶ Conjunto B",
    pair_separator_relation: "::",
    pair_separator_function: "⟼",
    switch_language: "Cambiar idioma",
    empty_hint: "Haz clic en la matriz para añadir o eliminar enlaces.",
    add_element: "Añadir elemento",
    remove_element: "Quitar el último elemento",
    undo: "Deshacer",
    redo: "Rehacer",
    show_link_lines: "Mostrar enlaces",
    highlight_uncovered: "Resaltar elementos sin enlace",
    titles: Titles {
        relation: "Relación",
        function: "Función",
        total_function: "Función Total",
        injective: "Función Inyectiva",
        surjective: "Función Suprayectiva",
        bijective: "Función Biyectiva",
    },
    explanations: Explanations {
        relation: "En teoría de conjuntos, una relación es cualquier conjunto de pares ordenados \
                   que conecta elementos de un conjunto (A) con otro conjunto (B).",
        function: "Una función es una relación especial donde cada elemento de A se relaciona \
                   con a lo sumo un elemento de B.",
        total_function: "Una función total es una función donde cada elemento de A se relaciona \
                         con exactamente un elemento de B.",
        surjective: "Una función suprayectiva cubre todo el conjunto destino B.",
        bijective: "Una función biyectiva es tanto inyectiva como suprayectiva: cada elemento de \
                    A se relaciona con un único y distinto elemento de B, cubriendo todo B.",
        injective: "Una función inyectiva asigna elementos distintos de A a elementos distintos \
                    de B.",
    },
};

static EN: Strings = Strings {
    set_a: "Set A",
    set_b: "Set B",
    relation_matrix: "Relation Matrix",
    pairs_heading: "Set A ⟶ Set B",
    pair_separator_relation: "::",
    pair_separator_function: "⟼",
    switch_language: "Switch language",
    empty_hint: "Click on the matrix to add or delete links.",
    add_element: "Add element",
    remove_element: "Remove last element",
    undo: "Undo",
    redo: "Redo",
    show_link_lines: "Show links",
    highlight_uncovered: "Highlight unlinked elements",
    titles: Titles {
        relation: "Relation",
        function: "Function",
        total_function: "Total Function",
        injective: "Injective Function",
        surjective: "Surjective Function",
        bijective: "Bijective Function",
    },
    explanations: Explanations {
        relation: "In set theory, a relation is any set of ordered pairs connecting elements \
                   from one set (A) to another set (B).",
        function: "A function is a special relation where each element of A is related to at \
                   most one element of B.",
        total_function: "A total function is a function where every element of A is related \
                         to exactly one element of B.",
        surjective: "A surjective function maps onto the entire target set B.",
        bijective: "A bijective function is both injective and surjective: each element of A \
                    maps to a unique and distinct element of B, covering all of B.",
        injective: "An injective function assigns distinct elements of A to distinct elements \
                    of B.",
    },
};

impl Strings {
    #[must_use]
    pub(crate) fn title(&self, category: Category) -> &'static str {
        let titles = &self.titles;
        match category {
            Category::Relation => titles.relation,
            Category::Function => titles.function,
            Category::TotalFunction => titles.total_function,
            Category::Injective => titles.injective,
            Category::Surjective => titles.surjective,
            Category::Bijective => titles.bijective,
        }
    }

    #[must_use]
    pub(crate) fn set_name(&self, side: Side) -> &'static str {
        match side {
            Side::A => self.set_a,
            Side::B => self.set_b,
        }
    }

    #[must_use]
    pub(crate) fn pair_separator(&self, category: Category) -> &'static str {
        if category.is_function_like() {
            self.pair_separator_function
        } else {
            self.pair_separator_relation
        }
    }

    /// Paragraphs explaining `classification`, in display order.
    #[must_use]
    pub(crate) fn explanation(&self, classification: &Classification) -> Vec<&'static str> {
        let texts = &self.explanations;
        let category = classification.category;
        if !category.is_function_like() {
            return vec![texts.relation];
        }

        let mut paragraphs = vec![texts.function];
        if classification.total && classification.is_function {
            paragraphs.push(texts.total_function);
        }
        if matches!(category, Category::Surjective | Category::Bijective) {
            paragraphs.push(texts.surjective);
        }
        if category == Category::Bijective {
            paragraphs.push(texts.bijective);
        }
        if matches!(category, Category::Injective | Category::Bijective) {
            paragraphs.push(texts.injective);
        }
        paragraphs
    }
}
