use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::widgets::popup::centered_rect;

const KEYS: &[(&str, &str)] = &[
    ("Arrows / hjkl", "Pan the map"),
    ("+ / -", "Zoom in and out"),
    ("c", "Back to the starting view"),
    ("Tab / Shift-Tab", "Select next / previous spot"),
    ("Enter", "Center on the selected spot"),
    ("Esc", "Clear the selection"),
    ("/", "Search spots by name"),
    ("m", "Show only my spots (signed in)"),
    ("r", "Reload all spots"),
    ("e", "Export visible spots to KML"),
    ("? / F1", "Toggle this help"),
    ("q", "Quit"),
];

pub fn render_help(f: &mut Frame<'_>) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let lines: Vec<Line<'_>> = KEYS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{key:<18}"), key_style),
                Span::raw(*action),
            ])
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Keys ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: false }),
        area,
    );
}
