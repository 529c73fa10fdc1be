pub mod payload;
pub mod source;
