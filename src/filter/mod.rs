pub mod base;
pub mod kinds;
