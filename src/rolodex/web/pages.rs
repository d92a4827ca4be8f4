//! Server-rendered HTML for the web interface.
//!
//! Pages are plain `format!` templates around a shared shell. Every value
//! that originates from user input goes through [`escape_html`] before it is
//! interpolated.

use crate::commands::ContactInput;
use crate::model::{Contact, Stats};
use url::form_urlencoded::byte_serialize;

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Encode a value for use inside a query string.
pub fn encode_query(s: &str) -> String {
    byte_serialize(s.as_bytes()).collect()
}

/// Encode a value for use as a path segment. Form encoding covers every
/// reserved character except that it writes space as `+`, which path
/// segments do not decode.
pub fn encode_segment(s: &str) -> String {
    encode_query(s).replace('+', "%20")
}

fn shell(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{title}</title>\
<style>\
body{{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem;color:#222}}\
table{{border-collapse:collapse;width:100%}}\
th,td{{text-align:left;padding:.4rem .6rem;border-bottom:1px solid #ddd}}\
.flash-success{{background:#e6f4e6;border:1px solid #5a5;padding:.5rem;margin:1rem 0}}\
.flash-error{{background:#fae6e6;border:1px solid #c55;padding:.5rem;margin:1rem 0}}\
.stats{{color:#666;font-size:.9rem}}\
form.inline{{display:inline}}\
label{{display:block;margin:.6rem 0 .2rem}}\
input[type=text]{{width:100%;padding:.3rem}}\
</style>\
</head><body>{body}</body></html>"
    )
}

fn flash_block(flash: Option<(&str, &str)>) -> String {
    match flash {
        Some((level, message)) => {
            let class = if level == "error" {
                "flash-error"
            } else {
                "flash-success"
            };
            format!("<div class=\"{class}\">{}</div>", escape_html(message))
        }
        None => String::new(),
    }
}

pub fn index_page(
    contacts: &[Contact],
    search: &str,
    stats: Stats,
    flash: Option<(&str, &str)>,
) -> String {
    let mut rows = String::new();
    for contact in contacts {
        let segment = encode_segment(&contact.name);
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
<td><a href=\"/edit/{segment}\">edit</a> \
<form class=\"inline\" method=\"post\" action=\"/delete/{segment}\">\
<button type=\"submit\">delete</button></form></td></tr>",
            escape_html(&contact.name),
            escape_html(&contact.phone),
            escape_html(or_na(&contact.email)),
            escape_html(or_na(&contact.address)),
        ));
    }
    if rows.is_empty() {
        rows.push_str("<tr><td colspan=\"5\">No contacts found.</td></tr>");
    }

    let body = format!(
        "<h1>Contact Book</h1>{}\
<p class=\"stats\">{} contacts, {} with email, {} with address</p>\
<form method=\"get\" action=\"/\">\
<input type=\"text\" name=\"search\" value=\"{}\" placeholder=\"Search name, phone, or email\">\
<button type=\"submit\">Search</button> <a href=\"/\">clear</a>\
</form>\
<p><a href=\"/add\">Add a contact</a></p>\
<table><tr><th>Name</th><th>Phone</th><th>Email</th><th>Address</th><th></th></tr>{rows}</table>",
        flash_block(flash),
        stats.total,
        stats.with_email,
        stats.with_address,
        escape_html(search),
    );
    shell("Contact Book", &body)
}

/// Shared form for add and edit. `action` is the POST target; `values` holds
/// whatever the user already typed so a failed submit does not wipe the form.
pub fn contact_form_page(
    heading: &str,
    action: &str,
    values: &ContactInput,
    error: Option<&str>,
) -> String {
    let error_block = match error {
        Some(message) => format!(
            "<div class=\"flash-error\">{}</div>",
            escape_html(message)
        ),
        None => String::new(),
    };

    let body = format!(
        "<h1>{}</h1>{error_block}\
<form method=\"post\" action=\"{}\">\
<label>Name</label><input type=\"text\" name=\"name\" value=\"{}\" required>\
<label>Phone</label><input type=\"text\" name=\"phone\" value=\"{}\" required>\
<label>Email (optional)</label><input type=\"text\" name=\"email\" value=\"{}\">\
<label>Address (optional)</label><input type=\"text\" name=\"address\" value=\"{}\">\
<p><button type=\"submit\">Save</button> <a href=\"/\">cancel</a></p>\
</form>",
        escape_html(heading),
        escape_html(action),
        escape_html(&values.name),
        escape_html(&values.phone),
        escape_html(&values.email),
        escape_html(&values.address),
    );
    shell(heading, &body)
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<b>\"a&b\"</b>"),
            "&lt;b&gt;&quot;a&amp;b&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn segment_encoding_uses_percent_twenty() {
        assert_eq!(encode_segment("ada lovelace"), "ada%20lovelace");
        assert_eq!(encode_segment("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn index_page_shows_na_for_empty_optionals() {
        let contact = Contact::new("Ada".into(), "1234567890".into(), "".into(), "".into());
        let html = index_page(&[contact], "", Stats::default(), None);
        assert!(html.contains("N/A"));
        assert!(html.contains("Ada"));
    }

    #[test]
    fn index_page_escapes_contact_fields() {
        let contact = Contact::new(
            "<script>alert(1)</script>".into(),
            "1234567890".into(),
            "".into(),
            "".into(),
        );
        let html = index_page(&[contact], "", Stats::default(), None);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
