pub mod config;
pub mod logging;

pub mod checker;
pub mod http;
pub mod probe;
pub mod report;
pub mod target;
