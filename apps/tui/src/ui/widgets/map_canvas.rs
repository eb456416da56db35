use cozy_map_core::{LatLon, MapView};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Map, MapResolution};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::PlacedMarker;

pub const MARKER_GLYPH: &str = "●";
pub const SELECTED_GLYPH: &str = "◉";

/// Longitude and latitude ranges visible in `area`, as `([west, east], [south, north])`.
///
/// Zoom 0 shows the whole world across the width; each level halves it.
/// Terminal cells are about twice as tall as they are wide, so the latitude
/// span is stretched by the same factor.
pub fn viewport_bounds(view: &MapView, area: Rect) -> ([f64; 2], [f64; 2]) {
    let width = f64::from(area.width.max(1));
    let height = f64::from(area.height.max(1));

    let lon_span = (360.0 / 2_f64.powf(view.zoom)).min(360.0);
    let lat_span = (lon_span * height * 2.0 / width).min(180.0);

    let LatLon { lat, lon } = view.center;
    (
        [lon - lon_span / 2.0, lon + lon_span / 2.0],
        [lat - lat_span / 2.0, lat + lat_span / 2.0],
    )
}

pub fn is_visible(position: LatLon, bounds: &([f64; 2], [f64; 2])) -> bool {
    let ([west, east], [south, north]) = *bounds;
    (west..=east).contains(&position.lon) && (south..=north).contains(&position.lat)
}

pub fn render_map_canvas(
    f: &mut Frame<'_>,
    area: Rect,
    view: &MapView,
    markers: &[PlacedMarker],
    selected: Option<usize>,
    attribution: &str,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(
            " {:.4}, {:.4}  z{} ",
            view.center.lat, view.center.lon, view.zoom
        ))
        .title_bottom(Span::styled(
            format!(" {attribution} "),
            Style::default().fg(Color::DarkGray),
        ));

    let inner = block.inner(area);
    let bounds = viewport_bounds(view, inner);
    let (x_bounds, y_bounds) = bounds;

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            ctx.draw(&Map {
                color: Color::DarkGray,
                resolution: MapResolution::High,
            });
            ctx.layer();

            for (index, marker) in markers.iter().enumerate() {
                if !is_visible(marker.position, &bounds) || Some(index) == selected {
                    continue;
                }
                ctx.print(
                    marker.position.lon,
                    marker.position.lat,
                    Span::styled(MARKER_GLYPH, Style::default().fg(Color::LightRed)),
                );
            }

            // Drawn last so it sits on top of neighbours.
            if let Some(marker) = selected.and_then(|index| markers.get(index)) {
                if is_visible(marker.position, &bounds) {
                    ctx.print(
                        marker.position.lon,
                        marker.position.lat,
                        Span::styled(
                            SELECTED_GLYPH,
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            }
        });

    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_zero_shows_the_world() {
        let view = MapView {
            center: LatLon::new(0.0, 0.0),
            zoom: 0.0,
        };
        let (lon, lat) = viewport_bounds(&view, Rect::new(0, 0, 80, 20));

        assert_eq!(lon, [-180.0, 180.0]);
        assert_eq!(lat, [-90.0, 90.0]);
    }

    #[test]
    fn each_zoom_level_halves_the_span() {
        let mut view = MapView::default();
        let area = Rect::new(0, 0, 100, 30);
        let (wide, _) = viewport_bounds(&view, area);
        view.zoom += 1.0;
        let (narrow, _) = viewport_bounds(&view, area);

        let wide_span = wide[1] - wide[0];
        let narrow_span = narrow[1] - narrow[0];
        assert!((wide_span / narrow_span - 2.0).abs() < 1e-9);
    }

    #[test]
    fn paris_is_visible_from_default_view() {
        let bounds = viewport_bounds(&MapView::default(), Rect::new(0, 0, 120, 40));
        assert!(is_visible(LatLon::new(48.8566, 2.3522), &bounds));
        assert!(!is_visible(LatLon::new(-33.86, 151.2), &bounds));
    }
}
