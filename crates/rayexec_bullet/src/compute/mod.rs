pub mod cast;
pub mod date;
