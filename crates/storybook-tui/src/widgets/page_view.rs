use std::sync::Arc;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{
        Block, BorderType, Borders, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Wrap,
    },
    Frame,
};
use storybook_core::page::GRID_CELLS;
use storybook_core::{Page, PageShape};

use crate::app::App;
use crate::theme::Theme;

use super::{centered_rect, slide, wrapped_height, PictureWidget};

/// Widest the letter column gets
const LETTER_MAX_WIDTH: u16 = 72;
/// Widest the note card gets
const NOTE_MAX_WIDTH: u16 = 56;
/// Pages fading below this opacity are not drawn at all
const HIDDEN_BELOW: f64 = 0.15;
/// Pages fading below this opacity are drawn dimmed
const DIM_BELOW: f64 = 0.6;

/// The content area of the book: one page, shaped by its classification
pub struct PageViewWidget;

impl PageViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let story = Arc::clone(&app.story);
        let shown = app.displayed_frame();
        let Some(page) = story.get(shown.page_id) else {
            return;
        };

        let background = Self::background(page, &app.theme);
        frame.render_widget(Block::default().style(Style::default().bg(background)), area);

        if shown.opacity < HIDDEN_BELOW {
            return;
        }
        let area = slide(area, shown.offset);
        if area.is_empty() {
            return;
        }

        match &page.shape {
            PageShape::Letter => Self::render_letter(frame, area, app, page),
            PageShape::Note { .. } => Self::render_note(frame, area, page, &app.theme),
            PageShape::Grid { images } => Self::render_grid(frame, area, app, images),
            PageShape::Single { image } => PictureWidget::render(frame, area, app, image),
            PageShape::Blank => {}
        }

        if shown.opacity < DIM_BELOW {
            frame
                .buffer_mut()
                .set_style(area, Style::default().add_modifier(Modifier::DIM));
        }
    }

    fn background(page: &Page, theme: &Theme) -> Color {
        match page.shape {
            PageShape::Letter => theme.letter,
            PageShape::Note { .. } => theme.card,
            PageShape::Grid { .. } | PageShape::Single { .. } => theme.canvas,
            PageShape::Blank => theme.paper,
        }
    }

    /// Long-form text, left aligned with its line breaks kept, scrollable
    fn render_letter(frame: &mut Frame, area: Rect, app: &mut App, page: &Page) {
        let column = centered_rect(LETTER_MAX_WIDTH.min(area.width), area.height, area);
        let block = Block::default().padding(Padding::new(3, 3, 1, 1));
        let inner = block.inner(column);

        let content_height = wrapped_height(&page.text, inner.width, false);
        app.letter_viewport = inner.height;
        app.letter_max_scroll = content_height.saturating_sub(inner.height);
        let scroll = app.letter_scroll.current_scroll().min(app.letter_max_scroll);

        let paragraph = Paragraph::new(page.text.as_str())
            .block(block)
            .style(Style::default().fg(app.theme.ink).bg(app.theme.letter))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(paragraph, column);

        if app.letter_max_scroll > 0 {
            let mut state =
                ScrollbarState::new(app.letter_max_scroll as usize).position(scroll as usize);
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .style(Style::default().fg(app.theme.muted));
            frame.render_stateful_widget(scrollbar, area, &mut state);
        }
    }

    /// Short text on a centered card with a drop shadow
    fn render_note(frame: &mut Frame, area: Rect, page: &Page, theme: &Theme) {
        let card_width = NOTE_MAX_WIDTH.min(area.width.saturating_sub(4));
        if card_width < 8 {
            return;
        }
        // Borders plus horizontal padding
        let text_width = card_width - 2 - 6;
        let card_height = (wrapped_height(&page.text, text_width, true).max(1) + 4)
            .min(area.height.saturating_sub(1));
        let card = centered_rect(card_width, card_height, area);

        let shadow = Rect {
            x: card.x + 1,
            y: card.y + 1,
            ..card
        }
        .intersection(area);
        frame.render_widget(Block::default().style(Style::default().bg(theme.shadow)), shadow);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.muted))
            .padding(Padding::new(3, 3, 1, 1))
            .style(Style::default().bg(theme.paper));

        let paragraph = Paragraph::new(page.text.as_str())
            .block(block)
            .style(Style::default().fg(theme.ink_soft))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, card);
    }

    /// Up to four pictures in a 2x2 grid, row-major; unused cells stay empty
    fn render_grid(frame: &mut Frame, area: Rect, app: &mut App, images: &[String]) {
        let inner = Block::default().padding(Padding::uniform(1)).inner(area);
        let [top, bottom] =
            Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)]).spacing(1).areas(inner);

        let mut cells = Vec::with_capacity(GRID_CELLS);
        for row in [top, bottom] {
            let [left, right] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).spacing(2).areas(row);
            cells.push(left);
            cells.push(right);
        }

        for (locator, cell) in images.iter().take(GRID_CELLS).zip(cells) {
            PictureWidget::render(frame, cell, app, locator);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use storybook_core::{AppConfig, ImageRef, Story};

    fn app(texts: &[&str], images: Vec<ImageRef>) -> App {
        let texts: Vec<String> = texts.iter().map(|t| t.to_string()).collect();
        let story = Arc::new(Story::from_parts(&texts, &images).unwrap());
        let mut config = AppConfig::default();
        config.ui.transition.enabled = false;
        config.ui.scroll.smooth_enabled = false;
        App::new(story, Arc::new(config), Theme::default())
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| PageViewWidget::render(frame, frame.area(), app))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_note_shows_text() {
        let mut app = app(&["A quiet note", "letter", "end"], vec![ImageRef::default(); 3]);
        let screen = draw(&mut app, 60, 12);
        assert!(screen.contains("A quiet note"));
        assert!(screen.contains("╭"));
    }

    #[test]
    fn test_letter_measures_scroll_range() {
        let body = (1..=30)
            .map(|i| format!("line {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let mut app = app(&["first", body.as_str(), "last"], vec![ImageRef::default(); 3]);
        app.advance();

        let screen = draw(&mut app, 60, 12);
        assert!(screen.contains("line 1"));
        // 12 rows minus vertical padding
        assert_eq!(app.letter_viewport, 10);
        assert_eq!(app.letter_max_scroll, 20);

        app.apply(crate::input::Action::ScrollPageDown);
        let screen = draw(&mut app, 60, 12);
        assert!(screen.contains("line 11"));
        assert!(!screen.contains("line 1 "));
    }

    #[test]
    fn test_grid_requests_each_cell() {
        let grid = ImageRef::from(vec!["a.png", "b.png", "c.png"]);
        let mut app = app(&["grid", "letter", "end"], vec![grid, ImageRef::default(), ImageRef::default()]);
        let screen = draw(&mut app, 60, 12);
        assert_eq!(screen.matches("Loading image...").count(), 3);
    }

    #[test]
    fn test_letter_scrolls_to_last_line_with_indentation() {
        let mut body: Vec<String> = (1..=12)
            .map(|i| format!("\t    row {}   of   the letter", i))
            .collect();
        body.push("THE END".to_string());
        let body = body.join("\n");
        let mut app = app(&["first", body.as_str(), "last"], vec![ImageRef::default(); 3]);
        app.advance();

        draw(&mut app, 20, 8);
        assert!(app.letter_max_scroll > 0);
        for _ in 0..30 {
            app.apply(crate::input::Action::ScrollPageDown);
        }
        let screen = draw(&mut app, 20, 8);
        assert!(screen.contains("THE END"));
    }

    #[test]
    fn test_grid_ignores_images_past_four() {
        let grid = ImageRef::from(vec!["1.png", "2.png", "3.png", "4.png", "5.png"]);
        let mut app = app(&["grid", "letter", "end"], vec![grid, ImageRef::default(), ImageRef::default()]);

        let requested = app.take_pending_image_loads();
        assert_eq!(requested, vec!["1.png", "2.png", "3.png", "4.png"]);

        let screen = draw(&mut app, 60, 12);
        assert_eq!(screen.matches("Loading image...").count(), 4);
    }

    #[test]
    fn test_blank_page_draws_nothing() {
        let single = ImageRef::from(vec!["only.png"]);
        let mut app = app(&["blank", "letter", "end"], vec![single, ImageRef::default(), ImageRef::default()]);
        assert_eq!(app.current_page().shape, PageShape::Blank);
        let screen = draw(&mut app, 30, 6);
        assert!(screen.trim().is_empty());
    }
}
