// src/scrape/mod.rs
mod scrape;

pub use scrape::collect_cabinet;
pub use scrape::collect_open_data;
pub use scrape::collect_president;
