//! Tests for page rendering.

use chrono::{TimeZone, Utc};

use super::pages;
use crate::db::Bug;

fn sample_bug() -> Bug {
    Bug {
        id: 7,
        description: "Wrong Spelling".to_string(),
        bug_type: "Documentation".to_string(),
        report_date: Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap(),
        status: "In Progress".to_string(),
    }
}

#[test]
fn escape_replaces_html_significant_characters() {
    assert_eq!(
        pages::escape("<a href=\"x\">&'</a>"),
        "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
    );
}

#[test]
fn escape_leaves_plain_text_alone() {
    assert_eq!(pages::escape("Wrong Spelling"), "Wrong Spelling");
}

#[test]
fn bug_list_renders_one_item_per_bug() {
    let bugs = vec![sample_bug()];
    let html = pages::bug_list(&bugs);
    assert!(html.contains("<li>"));
    assert!(html.contains("href=\"/7\""));
    assert!(html.contains("Wrong Spelling"));
}

#[test]
fn bug_list_without_bugs_says_so() {
    let html = pages::bug_list(&[]);
    assert!(html.contains("No bugs have been reported yet."));
    assert!(!html.contains("<li>"));
}

#[test]
fn bug_detail_shows_every_field() {
    let html = pages::bug_detail(&sample_bug());
    assert!(html.contains("Bug #7"));
    assert!(html.contains("Wrong Spelling"));
    assert!(html.contains("Documentation"));
    assert!(html.contains("2025-06-30 12:00"));
    assert!(html.contains("In Progress"));
}

#[test]
fn register_form_posts_back_to_itself() {
    let html = pages::register_form();
    assert!(html.contains("method=\"post\""));
    assert!(html.contains("action=\"/register-bug\""));
}

#[test]
fn error_page_escapes_the_message() {
    let html = pages::error_page("Bug not found", "No bug with id <1800>");
    assert!(html.contains("Bug not found"));
    assert!(html.contains("No bug with id &lt;1800&gt;"));
}
