pub mod error;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod submit;

pub use error::ScraperError;
pub use extract::{extract_coupons, ExtractOptions};
pub use fetch::PageFetcher;
pub use pipeline::{
    collect_coupons, run_scrape, Collected, ScrapeConfig, ScrapeSummary, SubmissionStatus,
};
pub use submit::{ApiClient, SubmitOutcome, API_KEY_HEADER};
