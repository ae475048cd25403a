pub mod explanation;
pub mod input;
pub mod link_lines;
pub mod matrix;
pub mod pair_list;
pub mod relation_screen;
pub mod set_diagram;
pub mod theme;
pub mod toolbar;
