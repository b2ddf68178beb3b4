pub mod formatters;
pub mod presenters;
pub mod theme;
pub mod tui;
pub mod view_models;
pub mod views;
