use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

use crate::app::App;
use crate::ui::widgets::map_canvas::render_map_canvas;
use crate::ui::widgets::spot_card::render_spot_card;

const CARD_WIDTH: u16 = 36;

pub fn render_map_screen(app: &App, f: &mut Frame<'_>) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Map and spot card
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_title_section(app, f, main_layout[0]);
    render_content_section(app, f, main_layout[1]);
    render_status_section(app, f, main_layout[2]);
    render_shortcuts(app, f, main_layout[3]);
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "☕ Cozy Hot Chocolate Spots",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            app.filter_mode().label(),
            Style::default().fg(Color::Cyan),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(title, area);
}

fn render_content_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let show_card = area.width > CARD_WIDTH * 2;
    let constraints = if show_card {
        vec![Constraint::Min(20), Constraint::Length(CARD_WIDTH)]
    } else {
        vec![Constraint::Percentage(100)]
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    render_map_canvas(
        f,
        columns[0],
        &app.view,
        app.markers(),
        app.selected_index(),
        app.layer.plain_attribution,
    );

    if show_card {
        render_spot_card(f, columns[1], app.selected());
    }
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(10)])
        .split(inner);

    if app.is_loading() {
        let throbber = Throbber::default()
            .label("Loading")
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(Paragraph::new(throbber.to_line(&app.throbber)), columns[0]);
    }

    let mut spans = vec![Span::styled(
        format!("{} on map / {} loaded", app.marker_count(), app.loaded_count()),
        Style::default().fg(Color::Green),
    )];
    spans.push(Span::styled(
        format!("  placing {}", app.coordinate_policy().label()),
        Style::default().fg(Color::DarkGray),
    ));
    if let Some(updated) = app.last_update {
        spans.push(Span::styled(
            format!("  updated {}", updated.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if !app.status_message.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            app.status_message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), columns[1]);
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let mut shortcuts = String::from("←↑↓→ pan  +/- zoom  Tab spot  / search  e export  r reload");
    if app.map.has_toggle() {
        shortcuts.push_str("  m my spots");
    }
    shortcuts.push_str("  ? help  q quit");

    f.render_widget(
        Paragraph::new(shortcuts)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 40)).expect("test terminal");
        terminal
            .draw(|f| render_map_screen(app, f))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn map_credits_tiles_in_plain_text() {
        let settings = Settings::from_lookup(|_| None).expect("default settings");
        let text = screen_text(&App::new(&settings));

        assert!(text.contains("© OpenStreetMap contributors"));
        assert!(!text.contains("href"));
        assert!(!text.contains("&copy;"));
    }

    #[test]
    fn status_line_names_coordinate_policy() {
        let mut settings = Settings::from_lookup(|_| None).expect("default settings");
        assert!(screen_text(&App::new(&settings)).contains("placing non-zero coordinates"));

        settings.coordinate_policy = cozy_map_core::CoordinatePolicy::Present;
        assert!(screen_text(&App::new(&settings)).contains("placing any finite coordinates"));
    }
}
