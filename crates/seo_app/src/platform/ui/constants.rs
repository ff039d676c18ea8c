use std::time::Duration;

pub const APP_TITLE: &str = "SEO Analysis Tool";
pub const APP_TAGLINE: &str = "Optimize your pages for maximum visibility with ease.";
pub const URLS_LABEL: &str = "Enter URLs (comma-separated)";
pub const URLS_PLACEHOLDER: &str = "https://example.com, https://example2.com";
pub const KEYWORDS_LABEL: &str = "Enter Keywords (comma-separated)";
pub const KEYWORDS_PLACEHOLDER: &str = "keyword1, keyword2, keyword3";
pub const SUBMIT_LABEL: &str = "Analyze";
pub const RESULTS_TITLE: &str = "Results";
pub const DOWNLOAD_LABEL: &str = "Download CSV";
pub const REQUIRED_HINT: &str = "Please fill out this field.";
pub const HELP_TEXT: &str = "Tab: next field | Enter: analyze | Ctrl+D: save CSV | Esc: quit";

/// Input poll interval; engine events are drained once per tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(75);
