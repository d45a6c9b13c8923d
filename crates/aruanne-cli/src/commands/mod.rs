pub mod extract;
pub mod keywords;
pub mod merge;
