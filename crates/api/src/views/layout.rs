//! Document shell and HTML escaping.

use billed_core::routes::Route;

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
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

/// Wrap `content` in the page shell with the employee navigation bar.
pub fn page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
<meta charset="utf-8">
<title>Billed - {title}</title>
</head>
<body>
<div class="layout">
<div class="vertical-navbar">
<div class="layout-title">Billed</div>
<a id="layout-icon1" data-testid="icon-window" href="{bills}">Notes de frais</a>
<a id="layout-icon2" data-testid="icon-mail" href="{new_bill}">Nouvelle note</a>
</div>
<div class="content">
{content}
</div>
</div>
</body>
</html>
"#,
        title = escape(title),
        bills = Route::Bills.path(),
        new_bill = Route::NewBill.path(),
    )
}
