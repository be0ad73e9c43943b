use super::*;

// =============================================================================
// query_parse
// =============================================================================

#[test]
fn query_parse_missing_returns_default() {
    let val: u32 = query_parse(&[("other", "5")], "page_size", 24);
    assert_eq!(val, 24);
}

#[test]
fn query_parse_present_valid() {
    let val: u32 = query_parse(&[("page_size", "48")], "page_size", 24);
    assert_eq!(val, 48);
}

#[test]
fn query_parse_invalid_or_zero_returns_default() {
    let bad: u32 = query_parse(&[("page_size", "lots")], "page_size", 24);
    let zero: u32 = query_parse(&[("page_size", "0")], "page_size", 24);
    let negative: u32 = query_parse(&[("page_size", "-3")], "page_size", 24);
    assert_eq!((bad, zero, negative), (24, 24, 24));
}

#[test]
fn query_parse_last_value_wins() {
    let val: u64 = query_parse(&[("log_poll_secs", "10"), ("log_poll_secs", "20")], "log_poll_secs", 30);
    assert_eq!(val, 20);
}

// =============================================================================
// DashboardConfig
// =============================================================================

#[test]
fn defaults_match_constants() {
    let config = DashboardConfig::default();
    assert_eq!(config.page_size, 24);
    assert_eq!(config.source_refresh_interval(), Duration::from_secs(1_800));
    assert_eq!(config.metrics_poll_interval(), Duration::from_secs(5));
    assert_eq!(config.log_poll_interval(), Duration::from_secs(30));
    assert_eq!(config.log_history, 500);
}

#[test]
fn from_query_applies_overrides() {
    let config = DashboardConfig::from_query("?page_size=48&metrics_poll_secs=10&log_history=50");
    assert_eq!(config.page_size, 48);
    assert_eq!(config.metrics_poll_secs, 10);
    assert_eq!(config.log_history, 50);
    assert_eq!(config.source_refresh_secs, DEFAULT_SOURCE_REFRESH_SECS);
}

#[test]
fn from_query_tolerates_junk() {
    assert_eq!(DashboardConfig::from_query(""), DashboardConfig::default());
    assert_eq!(DashboardConfig::from_query("?"), DashboardConfig::default());
    assert_eq!(DashboardConfig::from_query("?page_size&&x=1&page_size=abc"), DashboardConfig::default());
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_outside_browser_uses_defaults() {
    assert_eq!(DashboardConfig::load(), DashboardConfig::default());
}
