pub mod chain;
pub mod model;
