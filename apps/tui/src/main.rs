use clap::Parser;
use color_eyre::Result;
use tokio::sync::mpsc;

use cozy_map_tui::app::{App, SpotFetcher};
use cozy_map_tui::cli::CliArgs;
use cozy_map_tui::client::SpotClient;
use cozy_map_tui::config::Settings;
use cozy_map_tui::logging::{self, LogTarget};
use cozy_map_tui::{event, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let mut settings = Settings::load()?;
    args.apply(&mut settings)?;

    if args.wants_headless() || !is_terminal() {
        logging::init(&settings, LogTarget::Stderr)?;
        return event::run_headless(&settings, &args.headless_options()).await;
    }

    logging::init(&settings, LogTarget::File)?;
    tracing::info!(base_url = %settings.base_url, signed_in = settings.signed_in(), "starting");

    let client = SpotClient::new(&settings)?;
    let (outcomes_tx, mut outcomes_rx) = mpsc::unbounded_channel();
    let fetcher = SpotFetcher::new(client, outcomes_tx);
    let mut app = App::new(&settings);

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app, &fetcher, &mut outcomes_rx).await;
    terminal::cleanup(true, true);

    result
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
