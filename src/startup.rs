use std::net::TcpListener;
use std::sync::Arc;

use actix_web::{
    dev::Server,
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};

use crate::{
    configuration::ScraperSettings,
    routes::{default_route, scrape_route},
    services::PageFetcher,
};

pub fn run(
    listener: TcpListener,
    fetcher: Arc<dyn PageFetcher>,
    scraper_settings: ScraperSettings,
) -> Result<Server, std::io::Error> {
    let fetcher = Data::from(fetcher);
    let scraper_settings = web::Data::new(scraper_settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(default_route::default)
            .service(scrape_route::scrape)
            .service(scrape_route::download)
            .app_data(fetcher.clone())
            .app_data(scraper_settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
