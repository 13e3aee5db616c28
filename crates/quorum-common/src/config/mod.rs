//! Configuration structs

mod theme;

pub use theme::{SidebarTheme, StatusTheme, Theme, ThemeError};
