use super::*;
use crate::state::gallery::GroupFilter;

fn query(group: GroupFilter, search: &str, page: u32) -> TemplateQuery {
    TemplateQuery { group, search: search.to_owned(), page, per_page: 24 }
}

#[test]
fn templates_query_pairs_include_all_parameters() {
    let pairs = templates_query_pairs(&query(GroupFilter::Group("roads".into()), "gate", 3), 1_700);
    assert_eq!(
        pairs,
        vec![
            ("group", "roads".to_owned()),
            ("search", "gate".to_owned()),
            ("page", "3".to_owned()),
            ("per_page", "24".to_owned()),
            ("t", "1700".to_owned()),
        ]
    );
}

#[test]
fn templates_query_pairs_send_all_for_unfiltered_group() {
    let pairs = templates_query_pairs(&query(GroupFilter::All, "", 1), 0);
    assert_eq!(pairs[0], ("group", "all".to_owned()));
    assert_eq!(pairs[1], ("search", String::new()));
}

#[test]
fn media_urls_are_cache_busted() {
    assert_eq!(last_video_url("harbor", 42), "/last_video/harbor?t=42");
    assert_eq!(last_screenshot_url("harbor", 42), "/last_screenshot/harbor?t=42");
    assert_eq!(template_detail_url("harbor"), "/templates/harbor");
}

#[test]
fn cache_bust_is_a_current_millisecond_stamp() {
    // 2020-09-13 in milliseconds; any real clock is past it.
    let first = cache_bust();
    assert!(first > 1_600_000_000_000);
    assert!(cache_bust() >= first);
}

#[test]
fn log_query_pairs_trim_filter() {
    assert_eq!(log_query_pairs("  error "), vec![("filter", "error".to_owned())]);
}

#[cfg(not(feature = "csr"))]
#[test]
fn network_calls_are_unavailable_outside_browser() {
    let result = futures::executor::block_on(HttpTemplateSource.fetch_templates(&query(GroupFilter::All, "", 1)));
    assert_eq!(result, Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(fetch_groups()), Err(ApiError::Unavailable));
}
