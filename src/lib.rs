pub mod app;
pub mod engine;
pub mod input;
pub mod output;

pub use app::{App, ScanSummary};
