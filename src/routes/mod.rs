pub mod scrape_route;
