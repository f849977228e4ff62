//! HTML page rendering.
//!
//! The views are small enough that pages are built from string templates
//! rather than a template engine: a shared layout plus one builder per page.
//! All user-supplied text goes through [`escape`].

use crate::db::Bug;

/// Display format for report dates.
const DISPLAY_DATE: &str = "%Y-%m-%d %H:%M";

/// Replace the HTML-significant characters with entities.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n\
         <body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

/// The front page: the most recent bugs, newest first.
pub(crate) fn bug_list(bugs: &[Bug]) -> String {
    let listing = if bugs.is_empty() {
        "<p>No bugs have been reported yet.</p>".to_string()
    } else {
        let items: String = bugs
            .iter()
            .map(|bug| {
                format!(
                    "  <li><a href=\"/{}\">{}</a> &mdash; {} ({})</li>\n",
                    bug.id,
                    escape(&bug.description),
                    escape(&bug.status),
                    bug.report_date.format(DISPLAY_DATE),
                )
            })
            .collect();
        format!("<ul>\n{}</ul>", items)
    };

    layout(
        "Recent bugs",
        &format!(
            "<h1>Recent bugs</h1>\n{}\n<p><a href=\"/register-bug\">Register a bug</a></p>",
            listing
        ),
    )
}

/// Detail page showing all four fields of one bug.
pub(crate) fn bug_detail(bug: &Bug) -> String {
    let body = format!(
        "<h1>Bug #{}</h1>\n<dl>\n\
         <dt>Description</dt><dd>{}</dd>\n\
         <dt>Type</dt><dd>{}</dd>\n\
         <dt>Report date</dt><dd>{}</dd>\n\
         <dt>Status</dt><dd>{}</dd>\n\
         </dl>\n<p><a href=\"/\">Back to the list</a></p>",
        bug.id,
        escape(&bug.description),
        escape(&bug.bug_type),
        bug.report_date.format(DISPLAY_DATE),
        escape(&bug.status),
    );
    layout(&format!("Bug #{}", bug.id), &body)
}

/// Empty registration form.
pub(crate) fn register_form() -> String {
    let body = "<h1>Register a bug</h1>\n\
         <form method=\"post\" action=\"/register-bug\">\n\
         <p><label>Description <input type=\"text\" name=\"description\" maxlength=\"200\"></label></p>\n\
         <p><label>Type <input type=\"text\" name=\"bug_type\" maxlength=\"200\"></label></p>\n\
         <p><label>Report date <input type=\"datetime-local\" name=\"report_date\"></label></p>\n\
         <p><label>Status <input type=\"text\" name=\"status\" maxlength=\"200\"></label></p>\n\
         <p><button type=\"submit\">Submit</button></p>\n\
         </form>\n<p><a href=\"/\">Back to the list</a></p>";
    layout("Register a bug", body)
}

/// Error page with a heading and a message.
pub(crate) fn error_page(title: &str, message: &str) -> String {
    layout(
        title,
        &format!("<h1>{}</h1>\n<p>{}</p>", escape(title), escape(message)),
    )
}
