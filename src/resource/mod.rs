pub mod model;
pub mod receipt;
