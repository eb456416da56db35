use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use cozy_map_core::{MapRenderer, SpotEndpoint};
use serde::Serialize;

use crate::app::CanvasSurface;
use crate::cli::HeadlessOptions;
use crate::client::SpotClient;
use crate::config::Settings;
use crate::export::{render_kml, write_kml};

/// Fetch once, print, optionally export, exit. Fetch errors are fatal here.
pub async fn run_headless(settings: &Settings, options: &HeadlessOptions) -> Result<()> {
    let endpoint = if options.mine {
        SpotEndpoint::Mine
    } else {
        SpotEndpoint::All
    };

    let client = SpotClient::new(settings)?;
    let spots = client
        .fetch_spots(endpoint)
        .await
        .wrap_err_with(|| format!("Error fetching {}", endpoint.label()))?;
    tracing::info!(endpoint = endpoint.path(), count = spots.len(), "fetched spots");

    let mut renderer = MapRenderer::new(CanvasSurface::default(), settings.coordinate_policy);
    renderer.render_spots(&spots);

    let stats = build_headless_stats(endpoint, spots.len(), renderer.surface());
    if options.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_headless_stats(&stats);
    }

    if let Some(path) = &options.export {
        let kml = render_kml(
            renderer
                .surface()
                .markers()
                .iter()
                .map(|marker| (marker.position, &marker.popup)),
            &chrono::Local::now(),
        );
        write_kml(path, &kml)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        eprintln!("Exported {} spots to {}", stats.rendered, path.display());
    }

    Ok(())
}

pub fn build_headless_stats(
    endpoint: SpotEndpoint,
    fetched: usize,
    surface: &CanvasSurface,
) -> HeadlessStats {
    let spots: Vec<HeadlessSpot> = surface
        .markers()
        .iter()
        .map(|marker| HeadlessSpot {
            name: marker.popup.title.clone(),
            address: marker.popup.address.clone(),
            rating: marker.popup.rating,
            stars: marker.popup.star_count(),
            lat: marker.position.lat,
            lon: marker.position.lon,
            date_traveled: marker.popup.date_traveled.clone(),
        })
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let count = spots.len() as f64;
    let average_rating =
        (!spots.is_empty()).then(|| spots.iter().map(|spot| spot.rating).sum::<f64>() / count);

    HeadlessStats {
        endpoint: endpoint.path(),
        fetched,
        rendered: spots.len(),
        average_rating,
        spots,
    }
}

fn print_headless_stats(stats: &HeadlessStats) {
    println!("\nCozy Hot Chocolate Spots ({})", stats.endpoint);
    println!("==============================");
    println!("Fetched: {}", stats.fetched);
    println!("On the map: {}", stats.rendered);

    if let Some(average) = stats.average_rating {
        println!("Average rating: {average:.1}/5");
    }

    println!("\nSpots:");
    for spot in &stats.spots {
        println!(
            "- {} | {} | {}/5 | {:.4}, {:.4}",
            spot.name, spot.address, spot.rating, spot.lat, spot.lon
        );
    }
}

#[derive(Debug, Serialize)]
pub struct HeadlessStats {
    pub endpoint: &'static str,
    pub fetched: usize,
    pub rendered: usize,
    pub average_rating: Option<f64>,
    pub spots: Vec<HeadlessSpot>,
}

#[derive(Debug, Serialize)]
pub struct HeadlessSpot {
    pub name: String,
    pub address: String,
    pub rating: f64,
    pub stars: usize,
    pub lat: f64,
    pub lon: f64,
    pub date_traveled: Option<String>,
}
