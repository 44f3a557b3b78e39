use std::time::Duration;

/// Full-page frame around a stored preview URL. Scripts run, but the frame
/// cannot navigate the top-level window.
pub fn preview_frame(url: &str) -> String {
    let src = html_escape::encode_double_quoted_attribute(url);
    format!(r#"<!doctype html>
<html><head><meta charset="utf-8"><title>Preview</title><style>
html, body {{ margin:0; padding:0; height:100%; }}
iframe {{ width:100%; height:100%; border:none; }}
</style></head>
<body><iframe src="{src}" sandbox="allow-scripts allow-same-origin allow-forms"></iframe></body></html>"#)
}

pub fn invalid_link_page() -> String {
    notice_page("🔒 Expired or Invalid Link")
}

pub fn link_expired_page(ttl: Option<Duration>) -> String {
    match ttl {
        Some(ttl) => notice_page(&format!("⏰ Link expired ({})", human_ttl(ttl))),
        None => notice_page("⏰ Link expired"),
    }
}

pub fn paste_not_found_page() -> &'static str {
    "HTML Not Found"
}

pub fn paste_form_page() -> &'static str {
    r#"<!doctype html>
<html><head><meta charset="utf-8"><title>HTML preview</title></head>
<body><h1>Paste HTML</h1>
<form method="post" action="/html/preview">
<textarea name="html_code" rows="20" cols="80"></textarea><br>
<button type="submit">Preview</button>
</form></body></html>"#
}

fn notice_page(msg: &str) -> String {
    format!(r#"<h1 style="text-align:center;padding:2rem;">{}</h1>"#, html_escape::encode_text(msg))
}

fn human_ttl(ttl: Duration) -> String {
    let secs = ttl.as_secs();
    let (n, unit) = if secs >= 3600 && secs % 3600 == 0 {
        (secs / 3600, "hour")
    } else if secs >= 60 && secs % 60 == 0 {
        (secs / 60, "minute")
    } else {
        (secs, "second")
    };
    if n == 1 { format!("1 {unit}") } else { format!("{n} {unit}s") }
}
