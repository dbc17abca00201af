pub mod engine;
pub mod layout;
pub mod slide;
pub mod state;
