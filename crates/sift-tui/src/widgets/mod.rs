//! Ratatui widgets for the sift TUI.

pub mod input_bar;
pub mod results_list;
pub mod status_bar;
