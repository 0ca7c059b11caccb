use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::images::ImageState;

use super::centered_rect;

/// One image scaled to fit its cell, drawn with half blocks
pub struct PictureWidget;

impl PictureWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App, locator: &str) {
        if area.is_empty() {
            return;
        }

        if app.images.is_ready(locator) {
            Self::render_halfblocks(frame, area, app, locator);
            return;
        }

        match app.images.state(locator) {
            Some(ImageState::Failed(error)) => {
                let message = format!("⚠ {}", error);
                Self::render_message(frame, area, &message, app.theme.error);
            }
            _ => Self::render_message(frame, area, "Loading image...", app.theme.loading),
        }
    }

    /// Each cell shows two vertical pixels: `▀` with fg = top, bg = bottom
    fn render_halfblocks(frame: &mut Frame, area: Rect, app: &mut App, locator: &str) {
        let target_width = area.width as u32;
        let target_height = area.height as u32 * 2;
        let Some(rgba) = app.images.scaled(locator, target_width, target_height) else {
            return;
        };

        let (width, height) = rgba.dimensions();
        let x_offset = (target_width.saturating_sub(width) / 2) as u16;
        let y_offset = ((area.height as u32).saturating_sub(height.div_ceil(2)) / 2) as u16;

        let buf = frame.buffer_mut();
        for row in 0..height.div_ceil(2) {
            let y = row * 2;
            let cell_y = area.y + y_offset + row as u16;
            if cell_y >= area.bottom() {
                break;
            }
            for x in 0..width {
                let cell_x = area.x + x_offset + x as u16;
                if cell_x >= area.right() {
                    break;
                }
                let top = rgba.get_pixel(x, y);
                let bottom = if y + 1 < height {
                    rgba.get_pixel(x, y + 1)
                } else {
                    top
                };

                if let Some(cell) = buf.cell_mut((cell_x, cell_y)) {
                    cell.set_char('▀')
                        .set_fg(Color::Rgb(top[0], top[1], top[2]))
                        .set_bg(Color::Rgb(bottom[0], bottom[1], bottom[2]));
                }
            }
        }
    }

    fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
        let line_area = centered_rect(area.width, 1, area);
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, line_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use storybook_core::{AppConfig, ImageRef, Story};

    use crate::theme::Theme;

    fn app() -> App {
        let texts: Vec<String> = vec!["a".into(), "b".into()];
        let images = vec![ImageRef::from("red.png"), ImageRef::from("")];
        let story = Arc::new(Story::from_parts(&texts, &images).unwrap());
        App::new(story, Arc::new(AppConfig::default()), Theme::default())
    }

    #[test]
    fn test_ready_image_fills_cells() {
        let mut app = app();
        let red = RgbImage::from_pixel(8, 8, Rgb([255, 0, 0]));
        app.images.set_loaded("red.png", DynamicImage::ImageRgb8(red));

        let mut terminal = Terminal::new(TestBackend::new(8, 4)).unwrap();
        terminal
            .draw(|frame| PictureWidget::render(frame, frame.area(), &mut app, "red.png"))
            .unwrap();

        let cell = &terminal.backend().buffer()[(3, 2)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_loading_and_failed_states() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal
            .draw(|frame| PictureWidget::render(frame, frame.area(), &mut app, "red.png"))
            .unwrap();
        let text: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Loading image..."));

        app.images.set_failed("red.png", "HTTP 404".to_string());
        terminal
            .draw(|frame| PictureWidget::render(frame, frame.area(), &mut app, "red.png"))
            .unwrap();
        let text: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("HTTP 404"));
    }
}
