use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets::popup::centered_rect;

const MAX_RESULTS: usize = 12;

pub fn render_search(app: &App, f: &mut Frame<'_>) {
    let area = centered_rect(50, 60, f.area());
    f.render_widget(Clear, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let input = Paragraph::new(Line::from(vec![
        Span::styled("/ ", Style::default().fg(Color::Cyan)),
        Span::raw(app.search.query.as_str()),
        Span::styled("█", Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .title(" Find a spot ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(input, rows[0]);

    let markers = app.markers();
    let items: Vec<ListItem<'_>> = app
        .search
        .matches
        .iter()
        .take(MAX_RESULTS)
        .enumerate()
        .filter_map(|(rank, index)| markers.get(*index).map(|marker| (rank, marker)))
        .map(|(rank, marker)| {
            let style = if rank == 0 {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker.popup.title.as_str(), style),
                Span::styled(
                    format!("  {}", marker.popup.address),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let title = format!(" {} match(es) ", app.search.matches.len());
    f.render_widget(
        List::new(items).block(Block::default().title(title).borders(Borders::ALL)),
        rows[1],
    );
}
