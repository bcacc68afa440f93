// src/config/consts.rs

// Net config
pub const BROWSER_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const ACCEPT_JSON: &str = "application/json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Open-data catalog (CKAN)
pub const CATALOG_ORIGIN: &str = "https://data.gov.ua";
pub const CATALOG_SEARCH_PATH: &str = "/api/3/action/package_search";
pub const DEFAULT_QUERY: &str = "петиції";
pub const CATALOG_TOP_N: usize = 10;
pub const JSON_PREVIEW_ENTRIES: usize = 10;
pub const CSV_PREVIEW_LINES: usize = 11; // header + 10 rows

// Cabinet of Ministers
pub const CABINET_API_URL: &str = "https://petition.kmu.gov.ua/api/petitions";
pub const CABINET_PETITION_URL: &str = "https://petition.kmu.gov.ua/kmu/petition/{id}";
pub const CABINET_LABEL: &str = "Cabinet of Ministers";

// President of Ukraine
pub const PRESIDENT_ORIGIN: &str = "https://petition.president.gov.ua";
pub const PRESIDENT_LANDING_URL: &str = "https://petition.president.gov.ua/";
pub const PRESIDENT_LABEL: &str = "President of Ukraine";
pub const PRESIDENT_DATE_LABEL: &str = "Дата оприлюднення:";

// Normalization defaults
pub const NUMBER_FALLBACK: &str = "N/A";
pub const STATUS_FALLBACK: &str = "Unknown";
pub const STATUS_ACTIVE: &str = "Триває збір підписів";

// Data-quality thresholds, percent of seen records dropped
pub const ERROR_RATE_WARN_PCT: usize = 10;
pub const ERROR_RATE_FAIL_PCT: usize = 20;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "petitions";
