mod client;
pub mod prelude;
pub mod spreadsheet;

pub use client::*;
