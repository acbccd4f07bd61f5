use actix_web::{get, HttpResponse, Responder};

#[get("/")]
async fn default() -> impl Responder {
    HttpResponse::Ok().body("TwitchTracker username scraper. POST /scrape or /download.")
}
