pub mod field;
pub mod visitor;
