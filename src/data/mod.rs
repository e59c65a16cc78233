pub mod catalog;
pub mod plants;
