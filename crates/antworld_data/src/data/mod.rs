pub mod food;
pub mod position;
