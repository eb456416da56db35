//! Popup content shown when a marker is opened.
//!
//! The same [`Popup`] feeds the Leaflet popup (as escaped HTML) and the
//! terminal side panel (as plain fields).

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::domain::Spot;

pub const STAR_GLYPH: &str = "⭐";
pub const MAX_STARS: usize = 5;
pub const STATIC_PREFIX: &str = "/static/";
pub const IMAGE_ALT: &str = "Hot chocolate spot photo";

#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub title: String,
    pub address: String,
    pub rating: f64,
    pub image_src: Option<String>,
    pub notes: String,
    pub date_traveled: Option<String>,
}

impl Popup {
    pub fn for_spot(spot: &Spot) -> Self {
        Self {
            title: spot.name.clone(),
            address: spot.address.clone(),
            rating: spot.rating_value(),
            image_src: spot.image().map(|path| format!("{STATIC_PREFIX}{path}")),
            notes: spot.notes_text().to_string(),
            date_traveled: spot.date_traveled.clone(),
        }
    }

    pub fn star_count(&self) -> usize {
        star_count(self.rating)
    }

    pub fn star_glyphs(&self) -> String {
        STAR_GLYPH.repeat(self.star_count())
    }

    /// The textual fraction shown after the stars, e.g. `4.6/5`.
    pub fn rating_text(&self) -> String {
        format!("{}/{MAX_STARS}", format_rating(self.rating))
    }

    /// Leaflet popup markup. Every spot-sourced field is escaped.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"popup-content\" style=\"text-align:center;\">");
        html.push_str(&format!(
            "<h3 class=\"popup-title\">{}</h3>",
            encode_text(&self.title)
        ));
        html.push_str(&format!(
            "<p class=\"popup-address\">{}</p>",
            encode_text(&self.address)
        ));
        html.push_str(&format!(
            "<p class=\"popup-rating\"> {} ({})</p>",
            self.star_glyphs(),
            self.rating_text()
        ));

        if let Some(src) = &self.image_src {
            html.push_str(&format!(
                "<img src=\"{}\" alt=\"{IMAGE_ALT}\" class=\"popup-img\">",
                encode_double_quoted_attribute(src)
            ));
        }

        html.push_str(&format!(
            "<p class=\"popup-notes mt-2\"><em>{}</em></p>",
            encode_text(&self.notes)
        ));
        html.push_str("</div>");
        html
    }
}

/// Number of star glyphs for a rating: rounded half away from zero and
/// clamped to `0..=5`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn star_count(rating: f64) -> usize {
    if !rating.is_finite() {
        return 0;
    }
    rating.round().clamp(0.0, MAX_STARS as f64) as usize
}

fn format_rating(rating: f64) -> String {
    if rating.is_finite() {
        format!("{rating}")
    } else {
        "0".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(rating: f64) -> Popup {
        Popup::for_spot(&Spot {
            name: "Test".to_string(),
            rating: Some(rating),
            ..Spot::default()
        })
    }

    #[test]
    fn stars_round_to_nearest() {
        let popup = rated(4.6);
        assert_eq!(popup.star_glyphs(), "⭐⭐⭐⭐⭐");
        assert_eq!(popup.rating_text(), "4.6/5");

        let popup = rated(0.0);
        assert_eq!(popup.star_glyphs(), "");
        assert_eq!(popup.rating_text(), "0/5");

        let popup = rated(3.0);
        assert_eq!(popup.star_glyphs().chars().count(), 3);
        assert_eq!(popup.rating_text(), "3/5");
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        assert_eq!(star_count(-2.0), 0);
        assert_eq!(star_count(9.0), 5);
        assert_eq!(star_count(f64::NAN), 0);
        assert_eq!(star_count(2.5), 3);
    }

    #[test]
    fn missing_rating_reads_as_zero() {
        let popup = Popup::for_spot(&Spot::default());
        assert_eq!(popup.star_count(), 0);
        assert_eq!(popup.rating_text(), "0/5");
    }

    #[test]
    fn html_escapes_spot_fields() {
        let popup = Popup::for_spot(&Spot {
            name: "<script>alert(1)</script>".to_string(),
            address: "Tom & Jerry's".to_string(),
            notes: Some("<b>hot</b>".to_string()),
            image_path: Some("uploads/a\".jpg".to_string()),
            rating: Some(4.0),
            ..Spot::default()
        });

        let html = popup.to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Tom &amp; Jerry's"));
        assert!(html.contains("<em>&lt;b&gt;hot&lt;/b&gt;</em>"));
        assert!(html.contains("src=\"/static/uploads/a&quot;.jpg\""));
        assert!(html.contains("⭐⭐⭐⭐ (4/5)"));
    }

    #[test]
    fn image_tag_only_when_path_present() {
        let without = Popup::for_spot(&Spot::default()).to_html();
        assert!(!without.contains("<img"));

        let with = Popup::for_spot(&Spot {
            image_path: Some("uploads/cocoa.png".to_string()),
            ..Spot::default()
        })
        .to_html();
        assert!(with.contains("<img src=\"/static/uploads/cocoa.png\""));
    }

    #[test]
    fn notes_line_is_always_rendered() {
        let html = Popup::for_spot(&Spot::default()).to_html();
        assert!(html.contains("<p class=\"popup-notes mt-2\"><em></em></p>"));
    }
}
