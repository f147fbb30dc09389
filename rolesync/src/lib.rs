pub mod actions;
pub mod cli;
pub mod connection;
pub mod logging;
