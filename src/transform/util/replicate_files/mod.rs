pub mod service;
pub mod structs;
