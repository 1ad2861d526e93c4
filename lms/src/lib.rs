pub mod catalog;
pub mod core;
pub mod documents;
pub mod gateway;
pub mod lending;
pub mod persons;
pub mod utils;
