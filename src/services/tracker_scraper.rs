use std::ops::RangeInclusive;
use std::time::Duration;

use crate::configuration::ScraperSettings;
use crate::domain::{ListingParse, PaginationState};

use super::{listing_url, parse_listing, PageFetcher};

/// Minimal contiguous page range covering items [start, end], assuming each
/// page holds up to `page_size` items in stable order.
pub fn pages_for_range(start: u32, end: u32, page_size: u32) -> RangeInclusive<u32> {
    start.div_ceil(page_size)..=end.div_ceil(page_size)
}

/// Scrape the usernames in positions [start, end] (1-indexed, inclusive) of
/// the leaderboard, optionally restricted to a language sub-listing.
///
/// A failed page fetch is logged and skipped; a page without a listing table
/// contributes nothing. The running list is deduplicated as it grows (first
/// occurrence wins) and sliced to the requested window at the end, so the
/// result never contains items outside [start, end] even though a page may
/// carry items beyond `end`.
pub async fn scrape_range(
    fetcher: &dyn PageFetcher,
    settings: &ScraperSettings,
    start: u32,
    end: u32,
    language: Option<&str>,
) -> Vec<String> {
    let pages = pages_for_range(start, end, settings.page_size);
    log::info!(
        "Scraping pages {:?} for range {}-{} (language: {})",
        pages,
        start,
        end,
        language.unwrap_or("all")
    );

    let mut collected: Vec<String> = Vec::new();

    for page in pages {
        let url = listing_url(&settings.base_url, language, page);
        log::info!("Scraping page {}...", page);

        match fetcher.fetch(&url).await {
            Ok(html) => match parse_listing(&html) {
                ListingParse::Listing { usernames, .. } => {
                    for username in usernames {
                        if !collected.contains(&username) {
                            collected.push(username);
                        }
                    }
                }
                ListingParse::NoListing => {
                    log::error!("No listing table found on page {}", page);
                }
            },
            Err(e) => {
                log::error!("Error fetching page {}: {}", page, e);
            }
        }

        politeness_delay(settings).await;
    }

    let start_index = (start - 1) as usize;
    if start_index >= collected.len() {
        return Vec::new();
    }
    let window = (end - start + 1) as usize;

    collected.into_iter().skip(start_index).take(window).collect()
}

/// Walk the leaderboard from page 1, accumulating every username until the
/// listing is exhausted, and return the full deduplicated list.
///
/// The walk stops on: a failed fetch (partial results are kept), a page
/// without a listing table, a page with zero rows, a page yielding no new
/// usernames, an exhausted pagination control, or the `max_pages` safety
/// ceiling. When the pagination widget is missing entirely, the walk
/// continues only if the page yielded at least `full_page_threshold` new
/// usernames.
pub async fn scrape_all(fetcher: &dyn PageFetcher, settings: &ScraperSettings) -> Vec<String> {
    log::info!("Starting scrape of {}...", settings.base_url);

    let mut collected: Vec<String> = Vec::new();

    for page in 1..=settings.max_pages {
        let url = listing_url(&settings.base_url, None, page);
        log::info!("Scraping page {}...", page);

        let html = match fetcher.fetch(&url).await {
            Ok(html) => html,
            Err(e) => {
                log::error!("Error fetching page {}: {}", page, e);
                break;
            }
        };

        let (usernames, row_count, pagination) = match parse_listing(&html) {
            ListingParse::Listing {
                usernames,
                row_count,
                pagination,
            } => (usernames, row_count, pagination),
            ListingParse::NoListing => {
                log::info!("No listing table found on page {}. Stopping.", page);
                break;
            }
        };

        if row_count == 0 {
            log::info!("No rows found on page {}. Stopping.", page);
            break;
        }

        let mut new_count = 0;
        for username in usernames {
            if !collected.contains(&username) {
                collected.push(username);
                new_count += 1;
            }
        }

        if new_count == 0 {
            log::info!("No new usernames found on page {}. Stopping.", page);
            break;
        }

        log::info!(
            "Found {} usernames on page {} (total: {})",
            new_count,
            page,
            collected.len()
        );

        let keep_going = match pagination {
            PaginationState::NextAvailable => true,
            PaginationState::NextExhausted => false,
            // No pagination widget at all: a short page is taken to mean the
            // listing ran out. Unverified assumption about the site's page
            // size, kept configurable.
            PaginationState::Absent => new_count >= settings.full_page_threshold,
        };

        if !keep_going {
            break;
        }

        politeness_delay(settings).await;
    }

    collected
}

async fn politeness_delay(settings: &ScraperSettings) {
    tokio::time::sleep(Duration::from_secs(settings.politeness_delay_secs)).await;
}
