pub(crate) use self::{app_state::*, history::*, settings::*};

mod app_state;
mod history;
mod settings;
