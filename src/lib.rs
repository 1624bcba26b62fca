#[macro_use]
extern crate lazy_static;

pub mod app;
pub mod transform;
