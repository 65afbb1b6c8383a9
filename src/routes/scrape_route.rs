use actix_web::{get, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::scraper::{scrape_page, PageFetcher, ScrapeError, ScrapeResult};

#[derive(Debug, Deserialize)]
pub struct ScrapeQuery {
    url: Option<String>,
}

/// JSON body returned for every failed scrape.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// `GET /api/scrape?url=<target>` — scrape one page and return its summary.
///
/// A missing `url` parameter short-circuits to the invalid-url outcome
/// without touching the scraper.
#[get("/api/scrape")]
pub async fn scrape(
    query: web::Query<ScrapeQuery>,
    fetcher: web::Data<dyn PageFetcher>,
    config: web::Data<Config>,
) -> HttpResponse {
    let Some(url) = query.url.as_deref() else {
        return classify(Err(ScrapeError::InvalidUrl));
    };

    info!("Scraping {}", url);
    let result = scrape_page(fetcher.as_ref(), url, config.fetcher.timeout()).await;
    classify(result)
}

/// Map a scrape outcome to its HTTP status code and JSON body.
fn classify(result: ScrapeResult) -> HttpResponse {
    match result {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => {
            let body = ErrorBody {
                error: err.to_string(),
            };
            match err {
                ScrapeError::InvalidUrl => HttpResponse::BadRequest().json(body),
                ScrapeError::Timeout => HttpResponse::GatewayTimeout().json(body),
                ScrapeError::Unknown => HttpResponse::InternalServerError().json(body),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use async_trait::async_trait;

    use crate::scraper::PageSummary;

    struct StubFetcher {
        result: ScrapeResult,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl PageFetcher for StubFetcher {
        async fn fetch(&self, _url: &str) -> ScrapeResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn stub(result: ScrapeResult) -> (web::Data<dyn PageFetcher>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let fetcher: Arc<dyn PageFetcher> = Arc::new(StubFetcher {
            result,
            calls: calls.clone(),
        });
        (web::Data::from(fetcher), calls)
    }

    fn summary() -> PageSummary {
        PageSummary {
            title: "Example Domain".into(),
            meta_description: "An example page".into(),
            h1: "Example".into(),
        }
    }

    async fn request(path: &str, result: ScrapeResult) -> (StatusCode, serde_json::Value, usize) {
        let (fetcher, calls) = stub(result);
        let app = test::init_service(
            App::new()
                .service(scrape)
                .app_data(fetcher)
                .app_data(web::Data::new(Config::default())),
        )
        .await;

        let req = test::TestRequest::get().uri(path).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body, calls.load(Ordering::SeqCst))
    }

    #[actix_web::test]
    async fn test_missing_url_returns_400_without_fetching() {
        let (status, body, calls) = request("/api/scrape", Ok(summary())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid URL");
        assert_eq!(calls, 0);
    }

    #[actix_web::test]
    async fn test_malformed_url_returns_400_without_fetching() {
        let (status, body, calls) = request("/api/scrape?url=not%20a%20url", Ok(summary())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid URL");
        assert_eq!(calls, 0);
    }

    #[actix_web::test]
    async fn test_empty_url_returns_400_without_fetching() {
        let (status, body, calls) = request("/api/scrape?url=", Ok(summary())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid URL");
        assert_eq!(calls, 0);
    }

    #[actix_web::test]
    async fn test_successful_scrape_returns_200_with_summary() {
        let (status, body, calls) =
            request("/api/scrape?url=https%3A%2F%2Fexample.com", Ok(summary())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Example Domain");
        assert_eq!(body["metaDescription"], "An example page");
        assert_eq!(body["h1"], "Example");
        assert_eq!(calls, 1);
    }

    #[actix_web::test]
    async fn test_timeout_returns_504() {
        let (status, body, _) = request(
            "/api/scrape?url=https%3A%2F%2Fexample.com",
            Err(ScrapeError::Timeout),
        )
        .await;

        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body["error"], "Timeout");
    }

    #[actix_web::test]
    async fn test_unknown_failure_returns_500() {
        let (status, body, _) = request(
            "/api/scrape?url=https%3A%2F%2Fexample.com",
            Err(ScrapeError::Unknown),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "An unknown error occurred");
    }
}
