use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;

use super::{FooterWidget, NavBarWidget, PageViewWidget};

/// Widest the book gets on large terminals
const BOOK_MAX_WIDTH: u16 = 84;

/// The whole reading screen: backdrop, book with page and caption, controls
pub struct BookWidget;

impl BookWidget {
    pub fn render(frame: &mut Frame, app: &mut App) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(app.theme.backdrop)),
            area,
        );

        let [_, book_row, _, nav_row, status_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let book_width = BOOK_MAX_WIDTH.min(book_row.width.saturating_sub(4));
        let book = Rect {
            x: book_row.x + (book_row.width - book_width) / 2,
            width: book_width,
            ..book_row
        };

        let shadow = Rect {
            x: book.x + 1,
            y: book.y + 1,
            ..book
        }
        .intersection(area);
        frame.render_widget(
            Block::default().style(Style::default().bg(app.theme.shadow)),
            shadow,
        );

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(app.theme.muted))
            .style(Style::default().bg(app.theme.paper));
        if let Some(title) = &app.story.title {
            block = block
                .title(format!(" {} ", title))
                .title_alignment(Alignment::Center)
                .title_style(Style::default().fg(app.theme.accent));
        }
        let inner = block.inner(book);
        frame.render_widget(block, book);

        // The caption belongs to the committed page, even mid-transition
        let page = app.current_page().clone();
        let footer_height = if page.shows_footer() {
            FooterWidget::height(&page, inner.width).min(inner.height / 2)
        } else {
            0
        };
        let [content, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(footer_height)]).areas(inner);

        PageViewWidget::render(frame, content, app);
        if footer_height > 0 {
            FooterWidget::render(frame, footer, &page, &app.theme);
        }

        NavBarWidget::render(frame, nav_row, app);

        if let Some(message) = &app.status_message {
            let status = Paragraph::new(message.as_str())
                .style(Style::default().fg(app.theme.muted))
                .alignment(Alignment::Center);
            frame.render_widget(status, status_row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use storybook_core::{AppConfig, ImageRef, Story};

    use crate::theme::Theme;

    fn app() -> App {
        let texts: Vec<String> = ["Once upon a time", "We met", "Dear you", "Fin"]
            .iter()
            .map(|t| t.to_string())
            .collect();
        let images = vec![
            ImageRef::from("cover.png"),
            ImageRef::default(),
            ImageRef::default(),
            ImageRef::from(vec!["a.png", "b.png"]),
        ];
        let mut story = Story::from_parts(&texts, &images).unwrap();
        story.title = Some("Our story".to_string());
        let story = Arc::new(story);
        let mut config = AppConfig::default();
        config.ui.transition.enabled = false;
        App::new(story, Arc::new(config), Theme::default())
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| BookWidget::render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_picture_page_has_caption_and_next() {
        let mut app = app();
        let screen = draw(&mut app);
        assert!(screen.contains("Our story"));
        assert!(screen.contains("Once upon a time"));
        assert!(screen.contains("Next →"));
        assert!(!screen.contains("Prev"));
    }

    #[test]
    fn test_letter_has_no_caption_strip() {
        let mut app = app();
        app.advance();
        app.advance();
        assert_eq!(app.current_page().shape, storybook_core::PageShape::Letter);
        let screen = draw(&mut app);
        assert_eq!(screen.matches("Dear you").count(), 1);
        assert!(screen.contains("← Prev"));
        assert!(screen.contains("Next →"));
    }

    #[test]
    fn test_status_message_is_shown() {
        let mut app = app();
        app.set_status("Could not load cover.png");
        let screen = draw(&mut app);
        assert!(screen.contains("Could not load cover.png"));
    }
}
