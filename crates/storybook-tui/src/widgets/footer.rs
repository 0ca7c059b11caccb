use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Padding, Paragraph, Wrap},
    Frame,
};
use storybook_core::{Emphasis, Page};

use crate::theme::Theme;

use super::wrapped_height;

const PADDING_X: u16 = 2;
const PADDING_Y: u16 = 1;

/// Caption strip under picture and blank pages
pub struct FooterWidget;

impl FooterWidget {
    /// Rows the caption needs at this width, padding included
    pub fn height(page: &Page, width: u16) -> u16 {
        let text_width = width.saturating_sub(PADDING_X * 2);
        wrapped_height(&page.text, text_width, true).max(1) + PADDING_Y * 2
    }

    pub fn render(frame: &mut Frame, area: Rect, page: &Page, theme: &Theme) {
        let block = Block::default()
            .padding(Padding::new(PADDING_X, PADDING_X, PADDING_Y, PADDING_Y))
            .style(Style::default().bg(theme.footer));

        let paragraph = Paragraph::new(page.text.as_str())
            .block(block)
            .style(emphasis_style(page.emphasis, theme))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, area);
    }
}

/// Caption style for each emphasis level, heaviest last
pub fn emphasis_style(emphasis: Option<Emphasis>, theme: &Theme) -> Style {
    let base = Style::default().fg(theme.ink);
    match emphasis {
        None => base,
        Some(Emphasis::Semibold) => base.add_modifier(Modifier::BOLD),
        Some(Emphasis::Bold) => base.fg(theme.accent).add_modifier(Modifier::BOLD),
        Some(Emphasis::ExtraBold) => base
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use storybook_core::PageShape;

    fn page(text: &str, emphasis: Option<Emphasis>) -> Page {
        Page {
            id: 0,
            text: text.to_string(),
            shape: PageShape::Blank,
            emphasis,
        }
    }

    #[test]
    fn test_emphasis_levels_are_distinct() {
        let theme = Theme::default();
        let styles = [
            emphasis_style(None, &theme),
            emphasis_style(Some(Emphasis::Semibold), &theme),
            emphasis_style(Some(Emphasis::Bold), &theme),
            emphasis_style(Some(Emphasis::ExtraBold), &theme),
        ];
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(styles[3].add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_height_grows_with_text() {
        let short = page("Hi", None);
        let long = page("a caption that certainly wraps onto more rows", None);
        assert_eq!(FooterWidget::height(&short, 40), 3);
        assert!(FooterWidget::height(&long, 14) > 3);
    }

    #[test]
    fn test_renders_caption() {
        let theme = Theme::default();
        let page = page("The end", Some(Emphasis::Bold));
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        terminal
            .draw(|frame| FooterWidget::render(frame, frame.area(), &page, &theme))
            .unwrap();

        let row: String = (0..20)
            .map(|x| terminal.backend().buffer()[(x, 1)].symbol().to_string())
            .collect();
        assert!(row.contains("The end"));
        let first = terminal.backend().buffer()[(6, 1)].clone();
        assert_eq!(first.fg, theme.accent);
    }
}
