pub mod enums;
pub mod models;
