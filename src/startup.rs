use std::net::TcpListener;
use std::sync::Arc;

use actix_web::{dev::Server, web::Data, App, HttpServer};

use crate::config::Config;
use crate::routes::scrape_route;
use crate::scraper::{ChromeFetcher, PageFetcher};

/// Assemble the HTTP server on an already-bound listener.
///
/// The fetcher and configuration are shared across workers; each request
/// still gets its own browser session.
pub fn run(listener: TcpListener, config: Config) -> Result<Server, std::io::Error> {
    let fetcher: Arc<dyn PageFetcher> = Arc::new(ChromeFetcher::new(config.fetcher.clone()));
    let fetcher = Data::from(fetcher);
    let config = Data::new(config);

    let server = HttpServer::new(move || {
        App::new()
            .service(scrape_route::scrape)
            .app_data(fetcher.clone())
            .app_data(config.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
