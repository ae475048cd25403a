use crate::locale::Locale;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) locale: Locale,
    pub(crate) display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DisplaySettings {
    pub(crate) show_link_lines: bool,
    pub(crate) highlight_uncovered: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_link_lines: true,
            highlight_uncovered: false,
        }
    }
}
