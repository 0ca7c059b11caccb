use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::input::Action;
use crate::keymap::Keymap;
use crate::theme::Theme;

use super::centered_rect;

const ENTRIES: &[(Action, &str)] = &[
    (Action::NextPage, "Next page"),
    (Action::PrevPage, "Previous page"),
    (Action::ScrollDown, "Scroll letter down"),
    (Action::ScrollUp, "Scroll letter up"),
    (Action::ScrollHalfPageDown, "Half page down"),
    (Action::ScrollHalfPageUp, "Half page up"),
    (Action::ScrollPageDown, "Page down"),
    (Action::ScrollPageUp, "Page up"),
    (Action::ShowHelp, "Toggle this help"),
    (Action::Quit, "Quit"),
];

/// Key binding overview, drawn over the book
pub struct HelpWidget;

impl HelpWidget {
    pub fn render(frame: &mut Frame, keymap: &Keymap, theme: &Theme) {
        let area = frame.area();
        let lines = Self::lines(keymap, theme);

        let popup_width = 54u16.min(area.width.saturating_sub(4));
        let popup_height = (lines.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.paper));

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let content = Rect {
            y: inner.y + 1,
            height: inner.height.saturating_sub(1),
            ..inner
        };
        frame.render_widget(Paragraph::new(lines), content);
    }

    fn lines(keymap: &Keymap, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines: Vec<Line> = ENTRIES
            .iter()
            .filter_map(|(action, label)| {
                let keys = keymap.describe(action);
                if keys.is_empty() {
                    return None;
                }
                Some(Line::from(vec![
                    Span::styled(
                        format!("  {:<22}", keys.join(", ")),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(label.to_string(), Style::default().fg(theme.ink)),
                ]))
            })
            .collect();

        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                "Press any key to close",
                Style::default().fg(theme.muted),
            ))
            .alignment(Alignment::Center),
        );
        lines
    }
}
