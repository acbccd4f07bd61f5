use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::configuration::ScraperSettings;
use crate::services::{csv_filename, scrape_range, usernames_csv_bytes, PageFetcher};

#[derive(Deserialize)]
pub struct RangeRequest {
    #[serde(default = "default_start")]
    start: u32,
    #[serde(default = "default_end")]
    end: u32,
    #[serde(default)]
    language: Option<String>,
}

fn default_start() -> u32 {
    1
}

fn default_end() -> u32 {
    50
}

impl RangeRequest {
    /// Trimmed language filter; empty or whitespace-only means absent.
    fn language(&self) -> Option<&str> {
        self.language
            .as_deref()
            .map(str::trim)
            .filter(|language| !language.is_empty())
    }
}

#[derive(Serialize)]
struct ScrapeResponse {
    success: bool,
    count: usize,
    usernames: Vec<String>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn validate_range(start: u32, end: u32) -> Result<(), String> {
    if start < 1 || end < start {
        return Err("Invalid range. Start must be >= 1 and end must be >= start.".to_string());
    }
    Ok(())
}

#[post("/scrape")]
async fn scrape(
    fetcher: web::Data<dyn PageFetcher>,
    settings: web::Data<ScraperSettings>,
    body: web::Json<RangeRequest>,
) -> HttpResponse {
    if let Err(error) = validate_range(body.start, body.end) {
        return HttpResponse::BadRequest().json(ErrorResponse { error });
    }

    let usernames = scrape_range(
        fetcher.get_ref(),
        &settings,
        body.start,
        body.end,
        body.language(),
    )
    .await;

    HttpResponse::Ok().json(ScrapeResponse {
        success: true,
        count: usernames.len(),
        usernames,
    })
}

#[post("/download")]
async fn download(
    fetcher: web::Data<dyn PageFetcher>,
    settings: web::Data<ScraperSettings>,
    body: web::Json<RangeRequest>,
) -> HttpResponse {
    if let Err(error) = validate_range(body.start, body.end) {
        return HttpResponse::BadRequest().json(ErrorResponse { error });
    }

    let usernames = scrape_range(
        fetcher.get_ref(),
        &settings,
        body.start,
        body.end,
        body.language(),
    )
    .await;

    match usernames_csv_bytes(&usernames) {
        Ok(bytes) => {
            let filename = csv_filename(body.start, body.end, body.language());
            HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", filename),
                ))
                .body(bytes)
        }
        Err(e) => {
            log::error!("Failed to serialize usernames to csv: {:?}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}
