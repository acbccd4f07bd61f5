use anyhow::Context;
use env_logger::Env;
use trackscrape::{
    configuration::get_configuration,
    services::{scrape_all, write_usernames_csv, ReqwestPageFetcher},
};

const DEFAULT_OUTPUT_FILE: &str = "twitch_usernames.csv";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let output_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string());

    let fetcher = ReqwestPageFetcher::new(&configuration.scraper);
    let usernames = scrape_all(&fetcher, &configuration.scraper).await;

    log::info!("Total usernames found: {}", usernames.len());
    log::info!("Writing to {}...", output_file);

    let file = std::fs::File::create(&output_file)
        .with_context(|| format!("Failed to create {}", output_file))?;
    write_usernames_csv(file, &usernames)
        .with_context(|| format!("Failed to write usernames to {}", output_file))?;

    log::info!(
        "Successfully saved {} usernames to {}",
        usernames.len(),
        output_file
    );

    Ok(())
}
