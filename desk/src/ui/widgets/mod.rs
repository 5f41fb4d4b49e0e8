//! # Reusable Widgets

pub mod forms;
pub mod nav_bar;
