pub mod constants;
pub mod keys;
pub mod layout;
pub mod render;
pub mod terminal;
