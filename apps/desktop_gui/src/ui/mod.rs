//! UI layer for the desktop app: app shell, page renderers, and theme.

pub mod app;
pub mod pages;
pub mod theme;

pub use app::{StartupConfig, SummitApp};
