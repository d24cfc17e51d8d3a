use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::viewport::ListViewport;

/// Draws a one-column scrollbar for a vertically scrolled list.
pub fn render_scrollbar(area: Rect, buf: &mut Buffer, state: &ListViewport, style: Style) {
    buf.set_style(area, style);
    if area.height == 0 {
        return;
    }
    if !state.is_scrollable() {
        for dy in 0..area.height {
            buf.set_stringn(area.x, area.y + dy, " ", 1, style);
        }
        return;
    }

    let track_h = area.height as f64;
    let thumb_h = ((state.visible as f64 / state.total as f64) * track_h)
        .round()
        .clamp(1.0, track_h) as u16;

    let max_offset = state.max_offset().max(1) as f64;
    let thumb_top = ((state.offset as f64 / max_offset) * (track_h - thumb_h as f64))
        .round()
        .clamp(0.0, (track_h - thumb_h as f64).max(0.0)) as u16;

    for dy in 0..area.height {
        let ch = if dy >= thumb_top && dy < thumb_top + thumb_h {
            "█"
        } else {
            "│"
        };
        buf.set_stringn(area.x, area.y + dy, ch, 1, style);
    }
}

/// Display width of `s` in terminal columns.
pub fn str_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Total display width of a run of spans.
pub fn spans_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|s| str_width(s.content.as_ref())).sum()
}

/// Writes `input` at `(x, y)`, stopping before the first character that would exceed
/// `max_cols`. Wide characters are never split; tabs expand to four spaces.
pub fn render_str_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    input: &str,
    style: Style,
) {
    put_chars(x, y, 0, max_cols as usize, buf, input, style);
}

/// Like [`render_str_clipped`] for a run of spans. Unstyled spans use `fallback_style`.
pub fn render_spans_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    spans: &[Span<'_>],
    fallback_style: Style,
) {
    let max_cols = max_cols as usize;
    let mut used = 0usize;
    for span in spans {
        let style = if span.style == Style::default() {
            fallback_style
        } else {
            span.style
        };
        match put_chars(x, y, used, max_cols, buf, span.content.as_ref(), style) {
            Some(next) => used = next,
            None => return,
        }
    }
}

/// Returns the column reached, or `None` once `max_cols` is exhausted.
fn put_chars(
    x: u16,
    y: u16,
    mut col: usize,
    max_cols: usize,
    buf: &mut Buffer,
    input: &str,
    style: Style,
) -> Option<usize> {
    let mut tmp = [0u8; 4];
    for ch in input.chars() {
        let (symbol, w): (&str, usize) = if ch == '\t' {
            (" ", 4)
        } else {
            match UnicodeWidthChar::width(ch) {
                Some(w) if w > 0 => (&*ch.encode_utf8(&mut tmp), w),
                _ => continue,
            }
        };
        if col + w > max_cols {
            return None;
        }

        let tab = ch == '\t';
        for i in 0..w {
            let cell_symbol = if i == 0 || tab { symbol } else { "" };
            if let Some(cell) = buf.cell_mut((x + (col + i) as u16, y)) {
                cell.set_style(style);
                cell.set_symbol(cell_symbol);
            }
        }
        col += w;
    }
    Some(col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        (area.x..area.x + area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn str_clipped_stops_at_max_cols() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        render_str_clipped(0, 0, 4, &mut buf, "second", Style::default());
        assert_eq!(row(&buf, 0), "seco  ");
    }

    #[test]
    fn str_clipped_does_not_split_wide_chars() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        render_str_clipped(0, 0, 3, &mut buf, "你好", Style::default());
        assert_eq!(buf[(0, 0)].symbol(), "你");
        assert_eq!(buf[(2, 0)].symbol(), " ");
    }

    #[test]
    fn scrollbar_thumb_tracks_offset() {
        let mut state = ListViewport::default();
        state.set_total(10);
        state.set_visible(5);
        state.ensure_visible(9);
        let mut buf = Buffer::empty(Rect::new(0, 0, 1, 5));
        render_scrollbar(Rect::new(0, 0, 1, 5), &mut buf, &state, Style::default());
        assert_eq!(buf[(0, 4)].symbol(), "█");
        assert_eq!(buf[(0, 0)].symbol(), "│");
    }

    #[test]
    fn spans_clipped_continues_across_spans_and_expands_tabs() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 1));
        let spans = vec![Span::raw("a\tb"), Span::raw("cdef")];
        render_spans_clipped(0, 0, 7, &mut buf, &spans, Style::default());
        assert_eq!(row(&buf, 0), "a    bc ");
    }

    #[test]
    fn spans_width_sums_columns() {
        let spans = vec![Span::raw("ab"), Span::raw("你")];
        assert_eq!(spans_width(&spans), 4);
    }
}
