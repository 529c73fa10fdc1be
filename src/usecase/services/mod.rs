pub mod load_service;
pub mod pagination;
pub mod view_service;
