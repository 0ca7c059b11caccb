use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, NavHitboxes};

const PREV_LABEL: &str = " ← Prev ";
const NEXT_LABEL: &str = " Next → ";
const GAP: u16 = 4;

/// Prev/Next controls under the book
///
/// "Prev" is hidden on the first page and "Next" on the last one. The drawn
/// button areas are stored on the app so mouse clicks can be matched.
pub struct NavBarWidget;

impl NavBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        app.controls = NavHitboxes::default();
        if area.is_empty() {
            return;
        }

        let page_label = app
            .config
            .ui
            .show_page_number
            .then(|| format!("{} / {}", app.cursor() + 1, app.page_count()));

        let button_style = Style::default()
            .fg(app.theme.ink)
            .bg(app.theme.button)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(app.theme.muted);

        // (text, style, is prev, is next)
        let mut items: Vec<(&str, Style, bool, bool)> = Vec::new();
        if app.has_prev() {
            items.push((PREV_LABEL, button_style, true, false));
        }
        if let Some(label) = page_label.as_deref() {
            items.push((label, label_style, false, false));
        }
        if app.has_next() {
            items.push((NEXT_LABEL, button_style, false, true));
        }
        if items.is_empty() {
            return;
        }

        let widths: Vec<u16> = items.iter().map(|(text, ..)| text.width() as u16).collect();
        let total = widths.iter().sum::<u16>() + GAP * (items.len() as u16 - 1);
        let mut x = area.x + area.width.saturating_sub(total) / 2;

        for ((text, style, is_prev, is_next), width) in items.into_iter().zip(widths) {
            let width = width.min(area.right().saturating_sub(x));
            if width == 0 {
                break;
            }
            let rect = Rect::new(x, area.y, width, 1);
            frame.render_widget(Span::styled(text, style), rect);

            if is_prev {
                app.controls.prev = Some(rect);
            } else if is_next {
                app.controls.next = Some(rect);
            }
            x = x.saturating_add(width + GAP);
        }
    }
}
