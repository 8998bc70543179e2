//! End-to-end tests through the application state

mod common;
mod lifecycle;
mod stock;
