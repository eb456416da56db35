use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::PlacedMarker;

/// Terminal version of the marker popup: same fields, same order.
pub fn spot_card_lines(marker: &PlacedMarker) -> Vec<Line<'static>> {
    let popup = &marker.popup;
    let label = Style::default().fg(Color::Gray);

    let mut lines = vec![
        Line::from(Span::styled(
            popup.title.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(popup.address.clone()),
        Line::from(vec![
            Span::raw(popup.star_glyphs()),
            Span::raw(" "),
            Span::styled(popup.rating_text(), Style::default().fg(Color::Cyan)),
        ]),
    ];

    if let Some(src) = &popup.image_src {
        lines.push(Line::from(vec![
            Span::styled("Photo: ", label),
            Span::raw(src.clone()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        popup.notes.clone(),
        Style::default().add_modifier(Modifier::ITALIC),
    )));

    if let Some(date) = &popup.date_traveled {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Visited: ", label),
            Span::raw(date.clone()),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled("At: ", label),
        Span::raw(format!(
            "{:.4}, {:.4}",
            marker.position.lat, marker.position.lon
        )),
    ]));

    lines
}

pub fn render_spot_card(f: &mut Frame<'_>, area: Rect, marker: Option<&PlacedMarker>) {
    let block = Block::default()
        .title(" Spot ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = marker.map_or_else(
        || {
            vec![
                Line::from("No spot selected."),
                Line::from(""),
                Line::from(Span::styled(
                    "Tab / Shift-Tab to pick one",
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        },
        spot_card_lines,
    );

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_map_core::{LatLon, Popup, Spot};

    fn marker(spot: &Spot) -> PlacedMarker {
        PlacedMarker {
            id: 0,
            position: LatLon::new(48.85, 2.35),
            popup: Popup::for_spot(spot),
        }
    }

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn card_shows_popup_fields() {
        let spot = Spot {
            name: "Café A".to_string(),
            address: "1 Rue X".to_string(),
            rating: Some(4.6),
            image_path: Some("a.jpg".to_string()),
            notes: Some("Rich".to_string()),
            date_traveled: Some("2024-12-01".to_string()),
            ..Spot::default()
        };
        let lines = text(&spot_card_lines(&marker(&spot)));

        assert_eq!(lines[0], "Café A");
        assert_eq!(lines[1], "1 Rue X");
        assert_eq!(lines[2], "⭐⭐⭐⭐⭐ 4.6/5");
        assert_eq!(lines[3], "Photo: /static/a.jpg");
        assert!(lines.contains(&"Rich".to_string()));
        assert!(lines.contains(&"Visited: 2024-12-01".to_string()));
    }

    #[test]
    fn card_skips_missing_photo_and_date() {
        let spot = Spot {
            name: "Spot B".to_string(),
            rating: Some(2.0),
            ..Spot::default()
        };
        let lines = text(&spot_card_lines(&marker(&spot)));

        assert_eq!(lines[2], "⭐⭐ 2/5");
        assert!(!lines.iter().any(|line| line.starts_with("Photo")));
        assert!(!lines.iter().any(|line| line.starts_with("Visited")));
    }
}
