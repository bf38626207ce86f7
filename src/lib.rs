// Library crate exposing modules for integration tests

pub mod cli;
pub mod model;
pub mod util;
pub mod view;
pub mod viewmodel;
