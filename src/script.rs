use crate::cookies::CookieRecord;

/// Build the `document.cookie` assignment that recreates `record` in the
/// page.
///
/// The expiry is converted to a cookie date inside the page, since
/// `document.cookie` ignores a bare timestamp. `httpOnly` cannot be set from
/// script and is dropped.
pub fn set_cookie_statement(record: &CookieRecord) -> String {
    let mut cookie = format!("{}={}", record.name, record.value);
    if !record.domain.is_empty() {
        cookie.push_str("; domain=");
        cookie.push_str(&record.domain);
    }
    cookie.push_str("; path=");
    cookie.push_str(&record.path);
    if record.secure {
        cookie.push_str("; secure");
    }

    let literal = js_string(&cookie);
    match record.expires_at() {
        Some(expires) => format!(
            "document.cookie = {} + \"; expires=\" + new Date({} * 1000).toUTCString();",
            literal, expires
        ),
        None => format!("document.cookie = {};", literal),
    }
}

/// Escape a string for embedding as a double-quoted JavaScript literal.
/// The returned string includes the surrounding quotes.
pub fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
