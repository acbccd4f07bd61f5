pub mod csv_export;
pub mod listing_parser;
pub mod page_fetcher;
pub mod tracker_scraper;

pub use csv_export::*;
pub use listing_parser::*;
pub use page_fetcher::*;
pub use tracker_scraper::*;
