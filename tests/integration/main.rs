//! Integration tests for docscrape
//!
//! These run complete scrapes against wiremock servers.

mod scrape_tests;
