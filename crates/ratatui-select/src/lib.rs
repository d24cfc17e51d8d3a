//! High-level facade for `ratatui-select`.
//!
//! Re-exports the widget and its primitives from `ratatui-select-core` so apps only need one
//! dependency. See [`select::SelectView`] for the widget itself.
pub use ratatui_select_core::help;
pub use ratatui_select_core::input;
pub use ratatui_select_core::keymap;
pub use ratatui_select_core::option;
pub use ratatui_select_core::render;
pub use ratatui_select_core::select;
pub use ratatui_select_core::selection;
pub use ratatui_select_core::theme;
pub use ratatui_select_core::viewport;

#[cfg(feature = "crossterm")]
pub use ratatui_select_core::crossterm_input;

pub use ratatui_select_core::option::Catalog;
pub use ratatui_select_core::option::SelectOption;
pub use ratatui_select_core::select::SelectAction;
pub use ratatui_select_core::select::SelectView;
pub use ratatui_select_core::selection::Selection;
