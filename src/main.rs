use std::net::TcpListener;
use std::sync::Arc;

use env_logger::Env;
use trackscrape::{
    configuration::get_configuration,
    services::{PageFetcher, ReqwestPageFetcher},
    startup::run,
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;

    let fetcher: Arc<dyn PageFetcher> = Arc::new(ReqwestPageFetcher::new(&configuration.scraper));

    log::info!(
        "Starting scraper service on {}:{}",
        configuration.application.host,
        configuration.application.port
    );

    run(listener, fetcher, configuration.scraper)?.await
}
