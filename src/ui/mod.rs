pub mod state;
pub mod styles;
