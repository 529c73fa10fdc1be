pub mod app_state;
pub mod lifecycle;
pub mod table_state;
