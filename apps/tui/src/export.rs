//! KML export of rendered spots, readable by Google Maps and Google Earth.

use chrono::{DateTime, TimeZone};
use cozy_map_core::{LatLon, Popup};
use html_escape::encode_text;
use std::fmt::Display;
use std::fs;
use std::path::Path;

pub const DOCUMENT_NAME: &str = "Cozy Hot Chocolate Spots";

pub fn render_kml<'a, Tz, I>(placemarks: I, exported_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
    I: IntoIterator<Item = (LatLon, &'a Popup)>,
{
    let mut kml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    kml.push_str("<kml xmlns=\"http://www.opengis.net/kml/2.2\">\n  <Document>\n");
    kml.push_str(&format!("    <name>{DOCUMENT_NAME}</name>\n"));
    kml.push_str(&format!(
        "    <description>Exported {}</description>\n",
        exported_at.format("%Y-%m-%d %H:%M")
    ));

    for (position, popup) in placemarks {
        kml.push_str(&render_placemark(position, popup));
    }

    kml.push_str("  </Document>\n</kml>\n");
    kml
}

fn render_placemark(position: LatLon, popup: &Popup) -> String {
    let notes = if popup.notes.is_empty() {
        "None"
    } else {
        popup.notes.as_str()
    };
    let date = popup.date_traveled.as_deref().unwrap_or("N/A");

    // Escaping `>` also keeps a stray "]]>" from closing the CDATA block.
    format!(
        "    <Placemark>
      <name>{name}</name>
      <description><![CDATA[<b>Address:</b> {address}<br><b>Rating:</b> {rating}<br><b>Notes:</b> {notes}<br><b>Date Traveled:</b> {date}]]></description>
      <Point>
        <coordinates>{lon},{lat},0</coordinates>
      </Point>
    </Placemark>
",
        name = encode_text(&popup.title),
        address = encode_text(&popup.address),
        rating = popup.rating_text(),
        notes = encode_text(notes),
        date = encode_text(date),
        lon = position.lon,
        lat = position.lat,
    )
}

pub fn write_kml(path: &Path, kml: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, kml)
}
