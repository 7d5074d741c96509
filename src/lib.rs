pub mod catalog;
pub mod dedup;
pub mod errors;
pub mod grammar;
pub mod resolution;
pub mod types;
