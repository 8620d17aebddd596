pub mod catalog;
pub mod spa;
