mod book;
mod footer;
mod help;
mod nav_bar;
mod page_view;
mod picture;

pub use book::BookWidget;
pub use footer::{emphasis_style, FooterWidget};
pub use help::HelpWidget;
pub use nav_bar::NavBarWidget;
pub use page_view::PageViewWidget;
pub use picture::PictureWidget;

use ratatui::{
    layout::Rect,
    widgets::{Paragraph, Wrap},
};

/// Helper function to create a centered rect
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Rows `text` takes when word-wrapped at `width` columns, measured with
/// the same wrapper that draws it
pub(crate) fn wrapped_height(text: &str, width: u16, trim: bool) -> u16 {
    Paragraph::new(text)
        .wrap(Wrap { trim })
        .line_count(width)
        .min(u16::MAX as usize) as u16
}

/// Area shifted horizontally by `offset` columns, clipped to the original area
pub(crate) fn slide(area: Rect, offset: i16) -> Rect {
    let shift = offset.unsigned_abs().min(area.width);
    if offset >= 0 {
        Rect {
            x: area.x + shift,
            width: area.width - shift,
            ..area
        }
    } else {
        Rect {
            width: area.width - shift,
            ..area
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("", 10, false), 0);
        assert_eq!(wrapped_height("hello", 10, false), 1);
        assert_eq!(wrapped_height("hello world", 10, false), 2);
        assert_eq!(wrapped_height("one\ntwo\n\nthree", 10, false), 4);
        assert_eq!(wrapped_height("abcdefghijklmnopqrstuvwxy", 10, false), 3);
        assert_eq!(wrapped_height("anything", 0, false), 0);
    }

    #[test]
    fn test_wrapped_height_keeps_whitespace_rows() {
        // Indentation, tabs and runs of spaces take columns when not trimmed
        assert_eq!(wrapped_height("  indented line here ok", 7, false), 4);
        assert_eq!(wrapped_height("tab\there and more words", 7, false), 5);
        assert_eq!(
            wrapped_height("Dear you,\n\nI have been thinking about   this...", 5, false),
            15
        );
    }

    #[test]
    fn test_wrapped_height_matches_drawn_rows() {
        use ratatui::{backend::TestBackend, Terminal};

        let text = "  Dear you,\n\n\tI kept   every note.   \nAll of them.";
        let width = 9;
        let rows = wrapped_height(text, width, false);

        let mut terminal = Terminal::new(TestBackend::new(width, 40)).unwrap();
        terminal
            .draw(|frame| {
                let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
                frame.render_widget(paragraph, frame.area());
            })
            .unwrap();

        // Nothing is drawn below the measured height
        let buffer = terminal.backend().buffer();
        for y in rows..40 {
            for x in 0..width {
                assert_eq!(buffer[(x, y)].symbol(), " ", "row {} was drawn", y);
            }
        }
        assert!(rows > 4);
    }

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(40, 40, area), area);
    }

    #[test]
    fn test_slide() {
        let area = Rect::new(2, 0, 20, 5);
        assert_eq!(slide(area, 0), area);
        assert_eq!(slide(area, 5), Rect::new(7, 0, 15, 5));
        assert_eq!(slide(area, -5), Rect::new(2, 0, 15, 5));
        assert_eq!(slide(area, 50).width, 0);
    }
}
