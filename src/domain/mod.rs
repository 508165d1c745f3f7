pub mod effects;
pub mod weather;
