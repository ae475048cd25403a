use eframe::egui::{Color32, Visuals};
use relata_core::Side;

/// Color palette for the set diagram and the relation matrix.
///
/// Set borders keep fixed hues in both themes so set A and set B stay
/// recognizable; everything else follows the current visuals.
#[derive(Debug, Clone)]
pub struct DiagramPalette {
    pub set_a_border: Color32,
    pub set_b_border: Color32,

    pub link: Color32,
    pub link_hovered: Color32,

    pub drag_source_bg: Color32,
    pub drop_target_border: Color32,
    pub uncovered_border: Color32,

    pub hint_text: Color32,
}

impl DiagramPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let (set_a_border, set_b_border, hint_text) = if visuals.dark_mode {
            (
                Color32::from_rgb(96, 165, 250),
                Color32::from_rgb(74, 222, 128),
                Color32::from_rgb(147, 197, 253),
            )
        } else {
            (
                Color32::from_rgb(59, 130, 246),
                Color32::from_rgb(34, 197, 94),
                Color32::from_rgb(29, 78, 216),
            )
        };

        Self {
            set_a_border,
            set_b_border,

            link: visuals.strong_text_color(),
            link_hovered: visuals.selection.stroke.color,

            drag_source_bg: visuals.selection.bg_fill,
            drop_target_border: visuals.selection.stroke.color,
            uncovered_border: visuals.warn_fg_color,

            hint_text,
        }
    }

    #[must_use]
    pub fn set_border(&self, side: Side) -> Color32 {
        match side {
            Side::A => self.set_a_border,
            Side::B => self.set_b_border,
        }
    }
}
