// src/views/mod.rs
//
// Server-rendered HTML documents for the browser-facing side of the
// dual-format routes. JSON responses bypass this module entirely.
pub mod product;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; margin: 2rem auto; max-width: 40rem; }}
    table {{ border-collapse: collapse; width: 100%; }}
    th, td {{ border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }}
    label {{ display: block; margin: 0.5rem 0; }}
    .error {{ color: #b00; }}
  </style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<b name="a&b">'x'</b>"#),
            "&lt;b name=&quot;a&amp;b&quot;&gt;&#39;x&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }
}
