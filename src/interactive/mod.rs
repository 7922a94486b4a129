//! Interactive TUI interface

mod app;
pub mod input;
mod rendering;
pub mod views;

pub use app::{App, Message, MessageLog, MessageStyle, run_tui};
