pub mod app;
pub mod dice_face;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_session;
pub mod theme;
pub mod toast;

pub use runtime::run;
