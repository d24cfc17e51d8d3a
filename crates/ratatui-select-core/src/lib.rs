//! `ratatui-select-core` provides a dropdown/select widget and the small primitives it is built
//! from.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - No async runtime: everything runs on the main thread.
//! - Selection is app-owned: [`select::SelectView`] emits [`select::SelectAction::Changed`] with
//!   the requested next [`selection::Selection`] and never stores it. The app applies the change
//!   (or vetoes it) and passes the selection back in on the next frame.
//!
//! ## Getting started
//!
//! Most users should depend on the facade crate `ratatui-select`. Useful entry points:
//! - [`option::Catalog`]: ordered options with unique values.
//! - [`selection::Selection`]: single or multiple selection, tagged by mode.
//! - [`select::SelectView`]: the widget (keyboard, mouse, rendering).
//! - [`help::HelpBar`]: key hints built from [`select::SelectBindings::help_bindings`].
//!
//! ## Input
//!
//! Widgets consume backend-neutral [`input::InputEvent`]s. Enable the `crossterm` feature for
//! [`crossterm_input::input_event_from_crossterm`].
pub mod theme;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod render;
pub mod viewport;

pub mod help;
pub mod input;
pub mod keymap;
pub mod option;
pub mod select;
pub mod selection;
