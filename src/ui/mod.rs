//! UI modules for the catalog browser
//!
//! Rendering code, organized by view, plus shared components and the theme.

pub mod components;
mod detail_view;
mod list_view;
pub mod theme;

pub use detail_view::render_detail_view;
pub use list_view::render_list_view;
