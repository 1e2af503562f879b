//! Interactive TUI interface
//!
//! A ratatui front end: tile board, keyboard coloured by what each letter
//! has scored so far, and running statistics.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
