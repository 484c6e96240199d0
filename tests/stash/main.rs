#[path = "../common/mod.rs"]
mod common;

mod coercion;
mod properties;
