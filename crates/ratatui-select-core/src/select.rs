//! Dropdown select widget with single- and multi-selection.
//!
//! [`SelectView`] owns only ephemeral UI state: whether the list is open, which row is
//! highlighted, and whether the widget has focus. The option [`Catalog`] and the [`Selection`]
//! belong to the caller and are passed in on every call. When the user picks, removes, or clears
//! options the widget returns [`SelectAction::Changed`] with the requested next selection; the
//! caller stores it and passes it back on the next frame.
//!
//! ```no_run
//! # use ratatui_select_core::option::Catalog;
//! # use ratatui_select_core::selection::Selection;
//! # use ratatui_select_core::select::{SelectAction, SelectView};
//! # use ratatui_select_core::input::InputEvent;
//! # fn next_event() -> InputEvent { unimplemented!() }
//! let catalog = Catalog::from_pairs([("first", 1), ("second", 2)]).unwrap();
//! let mut selection = Selection::single(None);
//! let mut select = SelectView::new();
//! select.set_focused(true);
//! loop {
//!     // terminal.draw(|f| select.render(area, f.buffer_mut(), &theme, &catalog, &selection))?;
//!     if let SelectAction::Changed(next) = select.handle_event(next_event(), &catalog, &selection) {
//!         selection = next;
//!     }
//! }
//! ```

use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::MouseButton;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crate::keymap;
use crate::keymap::Binding;
use crate::option::Catalog;
use crate::render;
use crate::selection::Selection;
use crate::theme::Theme;
use crate::viewport::ListViewport;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Clear;
use ratatui::widgets::Widget;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectAction {
    None,
    Redraw,
    /// The user asked for a new selection. Implies a redraw.
    Changed(Selection),
}

impl SelectAction {
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Key bindings for the select widget, matched with exact modifiers.
#[derive(Clone, Debug)]
pub struct SelectBindings {
    pub up: Vec<KeyEvent>,
    pub down: Vec<KeyEvent>,
    /// Opens a closed list, or picks the highlighted option and closes an open one.
    pub confirm: Vec<KeyEvent>,
    pub close: Vec<KeyEvent>,
}

impl Default for SelectBindings {
    fn default() -> Self {
        Self {
            up: vec![keymap::key(KeyCode::Up)],
            down: vec![keymap::key(KeyCode::Down)],
            confirm: vec![keymap::key(KeyCode::Enter), keymap::key_char(' ')],
            close: vec![keymap::key(KeyCode::Esc)],
        }
    }
}

impl SelectBindings {
    pub fn is_up(&self, key: &KeyEvent) -> bool {
        keymap::matches_any(&self.up, key)
    }

    pub fn is_down(&self, key: &KeyEvent) -> bool {
        keymap::matches_any(&self.down, key)
    }

    pub fn is_confirm(&self, key: &KeyEvent) -> bool {
        keymap::matches_any(&self.confirm, key)
    }

    pub fn is_close(&self, key: &KeyEvent) -> bool {
        keymap::matches_any(&self.close, key)
    }

    /// Bindings for a [`crate::help::HelpBar`].
    pub fn help_bindings(&self) -> Vec<Binding> {
        let mut nav = self.up.clone();
        nav.extend(self.down.iter().cloned());
        vec![
            Binding::new("↑/↓", "navigate", nav),
            Binding::new("enter/space", "select", self.confirm.clone()),
            Binding::new("esc", "close", self.close.clone()),
        ]
    }
}

#[derive(Clone, Debug)]
pub struct SelectViewOptions {
    /// Shown muted in single mode when nothing is selected.
    pub placeholder: String,
    pub max_visible_options: usize,
    pub show_scrollbar: bool,
    pub style: Style,
    pub badge_style: Style,
    pub selected_style: Style,
    pub highlighted_style: Style,
    pub scrollbar_style: Style,
    pub selected_marker: String,
    pub unselected_marker: String,
    pub remove_symbol: String,
    pub clear_symbol: String,
    pub divider: String,
    pub caret_closed: String,
    pub caret_open: String,
    pub bindings: SelectBindings,
}

impl Default for SelectViewOptions {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            max_visible_options: 8,
            show_scrollbar: true,
            style: Style::default(),
            badge_style: Style::default(),
            selected_style: Style::default().add_modifier(Modifier::BOLD),
            highlighted_style: Style::default().add_modifier(Modifier::REVERSED),
            scrollbar_style: Style::default(),
            selected_marker: "✓ ".to_string(),
            unselected_marker: "  ".to_string(),
            remove_symbol: "×".to_string(),
            clear_symbol: "×".to_string(),
            divider: "│".to_string(),
            caret_closed: "▾".to_string(),
            caret_open: "▴".to_string(),
            bindings: SelectBindings::default(),
        }
    }
}

/// Screen regions from the last render, used to route mouse events.
#[derive(Clone, Debug, Default)]
struct HitAreas {
    widget: Rect,
    clear: Rect,
    badges: Vec<(Rect, i64)>,
    list: Rect,
    rows: Rect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum KeyIntent {
    Up,
    Down,
    Confirm,
    Close,
}

#[derive(Debug, Default)]
pub struct SelectView {
    options: SelectViewOptions,
    open: bool,
    highlighted: usize,
    focused: bool,
    list: ListViewport,
    hits: HitAreas,
}

impl SelectView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SelectViewOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &SelectViewOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SelectViewOptions) {
        self.options = options;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn list_viewport(&self) -> &ListViewport {
        &self.list
    }

    pub fn open(&mut self) {
        self.set_open(true);
    }

    pub fn close(&mut self) {
        self.set_open(false);
    }

    pub fn toggle_open(&mut self) {
        self.set_open(!self.open);
    }

    /// Gives or takes keyboard focus. Losing focus closes the list.
    pub fn set_focused(&mut self, focused: bool) -> SelectAction {
        let focus_changed = self.focused != focused;
        self.focused = focused;
        let closed = !focused && self.set_open(false);
        if focus_changed || closed {
            SelectAction::Redraw
        } else {
            SelectAction::None
        }
    }

    /// Moves the highlight to `index`, clamped to the catalog.
    pub fn set_highlighted(&mut self, index: usize, count: usize) {
        self.highlighted = if count == 0 {
            0
        } else {
            index.min(count - 1)
        };
        self.list.ensure_visible(self.highlighted);
    }

    /// Rows needed to show the control line plus, when open, the visible part of the list.
    pub fn required_height(&self, catalog: &Catalog) -> u16 {
        let rows = if self.open {
            catalog.len().min(self.options.max_visible_options)
        } else {
            0
        };
        (1 + rows).min(u16::MAX as usize) as u16
    }

    pub fn handle_event(
        &mut self,
        event: InputEvent,
        catalog: &Catalog,
        selection: &Selection,
    ) -> SelectAction {
        match event {
            InputEvent::Key(key) => self.handle_key(key, catalog, selection),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse, catalog, selection),
            InputEvent::FocusLost => {
                if self.set_open(false) {
                    SelectAction::Redraw
                } else {
                    SelectAction::None
                }
            }
            InputEvent::FocusGained | InputEvent::Paste(_) => SelectAction::None,
        }
    }

    pub fn render(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        catalog: &Catalog,
        selection: &Selection,
    ) {
        self.hits = HitAreas::default();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let base_style = if self.options.style == Style::default() {
            theme.text_primary
        } else {
            self.options.style
        };

        let control = Rect::new(area.x, area.y, area.width, 1);
        buf.set_style(control, base_style);
        self.hits.widget = control;
        self.render_control(control, buf, theme, base_style, selection);

        if !self.open {
            return;
        }

        let available = area.height.saturating_sub(1) as usize;
        let rows = catalog
            .len()
            .min(self.options.max_visible_options)
            .min(available);
        if self.highlighted >= catalog.len() {
            self.highlighted = catalog.len().saturating_sub(1);
        }
        self.list.set_total(catalog.len());
        self.list.set_visible(rows);
        self.list.ensure_visible(self.highlighted);
        if rows == 0 {
            return;
        }

        let list_area = Rect::new(area.x, area.y + 1, area.width, rows as u16);
        Clear.render(list_area, buf);
        buf.set_style(list_area, base_style);

        let show_scrollbar =
            self.options.show_scrollbar && self.list.is_scrollable() && list_area.width >= 2;
        let (rows_area, scrollbar_x) = if show_scrollbar {
            (
                Rect::new(list_area.x, list_area.y, list_area.width - 1, list_area.height),
                Some(list_area.x + list_area.width - 1),
            )
        } else {
            (list_area, None)
        };

        let selected_style = self.options.selected_style.patch(theme.accent);
        let highlighted_style = self.options.highlighted_style;

        for row in 0..rows_area.height {
            let Some(idx) = self.list.index_at_row(row as usize) else {
                break;
            };
            let Some(option) = catalog.get(idx) else {
                break;
            };
            let is_selected = selection.is_selected(option);
            let is_highlighted = idx == self.highlighted;

            let mut style = base_style;
            if is_selected {
                style = style.patch(selected_style);
            }
            if is_highlighted {
                style = style.patch(highlighted_style);
            }

            let y = rows_area.y + row;
            buf.set_style(Rect::new(rows_area.x, y, rows_area.width, 1), style);
            let marker = if is_selected {
                &self.options.selected_marker
            } else {
                &self.options.unselected_marker
            };
            let text = format!("{marker}{}", option.label);
            render::render_str_clipped(rows_area.x, y, rows_area.width, buf, &text, style);
        }

        if let Some(sb_x) = scrollbar_x {
            render::render_scrollbar(
                Rect::new(sb_x, list_area.y, 1, list_area.height),
                buf,
                &self.list,
                self.options.scrollbar_style.patch(theme.border),
            );
        }

        self.hits.list = list_area;
        self.hits.rows = rows_area;
        self.hits.widget = control.union(list_area);
    }

    fn render_control(
        &mut self,
        control: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        base_style: Style,
        selection: &Selection,
    ) {
        let caret = if self.open {
            &self.options.caret_open
        } else {
            &self.options.caret_closed
        };
        let caret_w = render::str_width(caret);
        let divider_w = render::str_width(&self.options.divider);
        let clear_w = render::str_width(&self.options.clear_symbol);
        let trailer_w = clear_w + 1 + divider_w + 1 + caret_w;

        let right = control.x as usize + control.width as usize;
        let value_w = if control.width as usize > trailer_w + 1 {
            let caret_x = right - caret_w;
            let divider_x = caret_x - 1 - divider_w;
            let clear_x = divider_x - 1 - clear_w;

            let clear = Rect::new(clear_x as u16, control.y, clear_w as u16, 1);
            render::render_str_clipped(
                clear.x,
                clear.y,
                clear.width,
                buf,
                &self.options.clear_symbol,
                base_style.patch(theme.text_muted),
            );
            self.hits.clear = clear;

            render::render_str_clipped(
                divider_x as u16,
                control.y,
                divider_w as u16,
                buf,
                &self.options.divider,
                base_style.patch(theme.border),
            );

            let caret_style = if self.focused {
                base_style.patch(theme.accent)
            } else {
                base_style.patch(theme.text_muted)
            };
            render::render_str_clipped(
                caret_x as u16,
                control.y,
                caret_w as u16,
                buf,
                caret,
                caret_style,
            );

            (clear_x - control.x as usize).saturating_sub(1)
        } else {
            control.width as usize
        };

        let value_area = Rect::new(control.x, control.y, value_w as u16, 1);
        match selection {
            Selection::Single(current) => {
                let (text, style) = match current {
                    Some(opt) => (opt.label.as_str(), base_style),
                    None => (
                        self.options.placeholder.as_str(),
                        base_style.patch(theme.text_muted),
                    ),
                };
                render::render_str_clipped(
                    value_area.x,
                    value_area.y,
                    value_area.width,
                    buf,
                    text,
                    style,
                );
            }
            Selection::Multiple(_) => self.render_badges(value_area, buf, theme, selection),
        }
    }

    fn render_badges(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme, selection: &Selection) {
        let badge_style = if self.options.badge_style == Style::default() {
            theme.badge
        } else {
            self.options.badge_style
        };
        let right = area.x as usize + area.width as usize;
        let selected = selection.selected();

        let mut x = area.x as usize;
        for (i, opt) in selected.iter().enumerate() {
            let text = format!("{} {}", opt.label, self.options.remove_symbol);
            let w = render::str_width(&text);
            let rest = selected.len() - i - 1;
            let reserve = if rest > 0 {
                render::str_width(&format!(" +{rest}"))
            } else {
                0
            };

            if x + w + reserve > right {
                let more = format!("+{}", selected.len() - i);
                render::render_str_clipped(
                    x as u16,
                    area.y,
                    right.saturating_sub(x) as u16,
                    buf,
                    &more,
                    theme.text_muted,
                );
                break;
            }

            render::render_str_clipped(x as u16, area.y, w as u16, buf, &text, badge_style);
            self.hits
                .badges
                .push((Rect::new(x as u16, area.y, w as u16, 1), opt.value));
            x += w + 1;
        }
    }

    fn handle_key(
        &mut self,
        key: KeyEvent,
        catalog: &Catalog,
        selection: &Selection,
    ) -> SelectAction {
        if !self.focused {
            return SelectAction::None;
        }
        let Some(intent) = self.key_intent(&key) else {
            return SelectAction::None;
        };

        match intent {
            KeyIntent::Close => {
                if self.set_open(false) {
                    SelectAction::Redraw
                } else {
                    SelectAction::None
                }
            }
            KeyIntent::Confirm => {
                if !self.open {
                    self.set_open(true);
                    return SelectAction::Redraw;
                }
                // Pick first, then close.
                let change = catalog
                    .get(self.highlighted)
                    .and_then(|opt| selection.toggled(opt));
                self.set_open(false);
                change_action(change)
            }
            KeyIntent::Up | KeyIntent::Down => {
                if !self.open {
                    self.set_open(true);
                    return SelectAction::Redraw;
                }
                let delta = if intent == KeyIntent::Up { -1 } else { 1 };
                if self.move_highlight(delta, catalog.len()) {
                    SelectAction::Redraw
                } else {
                    SelectAction::None
                }
            }
        }
    }

    fn key_intent(&self, key: &KeyEvent) -> Option<KeyIntent> {
        let b = &self.options.bindings;
        if b.is_close(key) {
            Some(KeyIntent::Close)
        } else if b.is_confirm(key) {
            Some(KeyIntent::Confirm)
        } else if b.is_up(key) {
            Some(KeyIntent::Up)
        } else if b.is_down(key) {
            Some(KeyIntent::Down)
        } else {
            None
        }
    }

    fn handle_mouse(
        &mut self,
        mouse: MouseEvent,
        catalog: &Catalog,
        selection: &Selection,
    ) -> SelectAction {
        let pos = Position::new(mouse.x, mouse.y);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(pos, catalog, selection),
            MouseEventKind::Moved => {
                if !self.open {
                    return SelectAction::None;
                }
                match self.row_at(pos) {
                    Some(idx) if idx != self.highlighted => {
                        self.highlighted = idx;
                        SelectAction::Redraw
                    }
                    _ => SelectAction::None,
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                if !self.open || !self.hits.list.contains(pos) {
                    return SelectAction::None;
                }
                let delta = if mouse.kind == MouseEventKind::ScrollUp {
                    -1
                } else {
                    1
                };
                if self.move_highlight(delta, catalog.len()) {
                    SelectAction::Redraw
                } else {
                    SelectAction::None
                }
            }
            _ => SelectAction::None,
        }
    }

    fn handle_click(
        &mut self,
        pos: Position,
        catalog: &Catalog,
        selection: &Selection,
    ) -> SelectAction {
        if !self.hits.widget.contains(pos) {
            return self.set_focused(false);
        }
        let gained_focus = !self.focused;
        self.focused = true;

        if let Some(value) = self.badge_at(pos) {
            let change = selection
                .selected()
                .iter()
                .find(|o| o.value == value)
                .and_then(|o| selection.toggled(o));
            return change_action(change);
        }

        if self.hits.clear.contains(pos) {
            return change_action(Some(selection.cleared()));
        }

        if self.open && self.hits.list.contains(pos) {
            let Some(idx) = self.row_at(pos) else {
                return if gained_focus {
                    SelectAction::Redraw
                } else {
                    SelectAction::None
                };
            };
            let change = catalog.get(idx).and_then(|opt| selection.toggled(opt));
            self.set_open(false);
            return change_action(change);
        }

        self.toggle_open();
        SelectAction::Redraw
    }

    fn badge_at(&self, pos: Position) -> Option<i64> {
        self.hits
            .badges
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, value)| *value)
    }

    fn row_at(&self, pos: Position) -> Option<usize> {
        if !self.hits.rows.contains(pos) {
            return None;
        }
        self.list.index_at_row((pos.y - self.hits.rows.y) as usize)
    }

    fn move_highlight(&mut self, delta: isize, count: usize) -> bool {
        let next = self.highlighted as isize + delta;
        if next < 0 || next >= count as isize {
            return false;
        }
        self.highlighted = next as usize;
        self.list.ensure_visible(self.highlighted);
        true
    }

    /// Every open/closed transition starts over at the first row.
    fn set_open(&mut self, open: bool) -> bool {
        if self.open == open {
            return false;
        }
        self.open = open;
        self.highlighted = 0;
        self.list.reset();
        tracing::trace!(open, "select list toggled");
        true
    }
}

fn change_action(change: Option<Selection>) -> SelectAction {
    match change {
        Some(next) => {
            tracing::debug!(
                multiple = next.is_multiple(),
                selected = next.selected().len(),
                "select change requested"
            );
            SelectAction::Changed(next)
        }
        None => SelectAction::Redraw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::SelectOption;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::from_pairs([
            ("first", 1),
            ("second", 2),
            ("third", 3),
            ("fourth", 4),
            ("fifth", 5),
        ])
        .unwrap()
    }

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code))
    }

    fn focused() -> SelectView {
        let mut v = SelectView::new();
        v.set_focused(true);
        v
    }

    #[test]
    fn arrow_opens_without_moving_then_moves() {
        let c = catalog();
        let s = Selection::default();
        let mut v = focused();

        assert_eq!(v.handle_event(key(KeyCode::Down), &c, &s), SelectAction::Redraw);
        assert!(v.is_open());
        assert_eq!(v.highlighted(), 0);

        v.handle_event(key(KeyCode::Down), &c, &s);
        v.handle_event(key(KeyCode::Down), &c, &s);
        assert_eq!(v.highlighted(), 2);
        v.handle_event(key(KeyCode::Up), &c, &s);
        assert_eq!(v.highlighted(), 1);
    }

    #[test]
    fn navigation_at_bounds_is_rejected() {
        let c = catalog();
        let s = Selection::default();
        let mut v = focused();
        v.open();

        assert_eq!(v.handle_event(key(KeyCode::Up), &c, &s), SelectAction::None);
        assert_eq!(v.highlighted(), 0);

        for _ in 0..4 {
            v.handle_event(key(KeyCode::Down), &c, &s);
        }
        assert_eq!(v.highlighted(), 4);
        assert_eq!(v.handle_event(key(KeyCode::Down), &c, &s), SelectAction::None);
        assert_eq!(v.highlighted(), 4);
    }

    #[test]
    fn enter_picks_highlighted_then_closes() {
        let c = catalog();
        let s = Selection::single(c.get(0).cloned());
        let mut v = focused();

        v.handle_event(key(KeyCode::Down), &c, &s);
        v.handle_event(key(KeyCode::Down), &c, &s);
        let act = v.handle_event(key(KeyCode::Enter), &c, &s);
        assert_eq!(
            act,
            SelectAction::Changed(Selection::Single(Some(SelectOption::new("second", 2))))
        );
        assert!(!v.is_open());
    }

    #[test]
    fn space_on_current_value_closes_without_change() {
        let c = catalog();
        let s = Selection::single(c.get(0).cloned());
        let mut v = focused();

        assert_eq!(v.handle_event(key(KeyCode::Char(' ')), &c, &s), SelectAction::Redraw);
        assert!(v.is_open());
        assert_eq!(v.handle_event(key(KeyCode::Char(' ')), &c, &s), SelectAction::Redraw);
        assert!(!v.is_open());
    }

    #[test]
    fn reopening_resets_highlight() {
        let c = catalog();
        let s = Selection::default();
        let mut v = focused();
        v.open();
        v.handle_event(key(KeyCode::Down), &c, &s);
        v.handle_event(key(KeyCode::Down), &c, &s);
        assert_eq!(v.highlighted(), 2);

        v.handle_event(key(KeyCode::Esc), &c, &s);
        assert!(!v.is_open());
        v.handle_event(key(KeyCode::Up), &c, &s);
        assert!(v.is_open());
        assert_eq!(v.highlighted(), 0);
    }

    #[test]
    fn escape_when_closed_is_a_no_op() {
        let c = catalog();
        let s = Selection::default();
        let mut v = focused();
        assert_eq!(v.handle_event(key(KeyCode::Esc), &c, &s), SelectAction::None);
    }

    #[test]
    fn unfocused_widget_ignores_keys() {
        let c = catalog();
        let s = Selection::default();
        let mut v = SelectView::new();
        assert_eq!(v.handle_event(key(KeyCode::Down), &c, &s), SelectAction::None);
        assert!(!v.is_open());
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let c = catalog();
        let s = Selection::default();
        let mut v = focused();
        v.open();
        assert_eq!(v.handle_event(key(KeyCode::Char('x')), &c, &s), SelectAction::None);
        assert_eq!(v.handle_event(key(KeyCode::Tab), &c, &s), SelectAction::None);
        assert!(v.is_open());
    }

    #[test]
    fn confirm_on_empty_catalog_only_closes() {
        let c = Catalog::default();
        let s = Selection::multiple(Vec::new());
        let mut v = focused();
        v.open();
        assert_eq!(v.handle_event(key(KeyCode::Enter), &c, &s), SelectAction::Redraw);
        assert!(!v.is_open());
    }

    #[test]
    fn losing_focus_closes() {
        let c = catalog();
        let s = Selection::default();
        let mut v = focused();
        v.open();
        assert_eq!(v.set_focused(false), SelectAction::Redraw);
        assert!(!v.is_open());

        v.set_focused(true);
        v.open();
        assert_eq!(v.handle_event(InputEvent::FocusLost, &c, &s), SelectAction::Redraw);
        assert!(!v.is_open());
    }

    #[test]
    fn custom_bindings_replace_defaults() {
        let c = catalog();
        let s = Selection::default();
        let mut v = SelectView::with_options(SelectViewOptions {
            bindings: SelectBindings {
                up: vec![keymap::key_char('k')],
                down: vec![keymap::key_char('j')],
                ..SelectBindings::default()
            },
            ..SelectViewOptions::default()
        });
        v.set_focused(true);

        assert_eq!(v.handle_event(key(KeyCode::Down), &c, &s), SelectAction::None);
        v.handle_event(key(KeyCode::Char('j')), &c, &s);
        v.handle_event(key(KeyCode::Char('j')), &c, &s);
        assert_eq!(v.highlighted(), 1);
    }

    #[test]
    fn required_height_tracks_open_state() {
        let c = catalog();
        let mut v = SelectView::with_options(SelectViewOptions {
            max_visible_options: 3,
            ..SelectViewOptions::default()
        });
        assert_eq!(v.required_height(&c), 1);
        v.open();
        assert_eq!(v.required_height(&c), 4);
    }

    #[test]
    fn set_highlighted_clamps() {
        let mut v = SelectView::new();
        v.set_highlighted(10, 5);
        assert_eq!(v.highlighted(), 4);
        v.set_highlighted(3, 0);
        assert_eq!(v.highlighted(), 0);
    }
}
