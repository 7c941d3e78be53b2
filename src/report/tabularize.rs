use serde_json::Value;

use super::escape_html;

/// Turns an error response from the cluster into something readable inside the
/// alert. JSON bodies (the usual `{"error":{...},"status":503}`) become nested
/// key/value tables; anything else is shown verbatim.
pub fn tabularize(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => render_value(&value),
        _ if raw.trim().is_empty() => "<p>Empty response body</p>".to_string(),
        _ => format!("<pre>{}</pre>", escape_html(raw)),
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut out = String::from("<table border=1 cellpadding=3 cellspacing=0>");
            for (key, v) in map {
                out.push_str(&format!(
                    "<tr><th>{}</th><td>{}</td></tr>",
                    escape_html(key),
                    render_value(v)
                ));
            }
            out.push_str("</table>");
            out
        }
        Value::Array(items) if items.is_empty() => String::new(),
        Value::Array(items) => {
            let mut out = String::from("<table border=1 cellpadding=3 cellspacing=0>");
            for item in items {
                out.push_str(&format!("<tr><td>{}</td></tr>", render_value(item)));
            }
            out.push_str("</table>");
            out
        }
        Value::String(s) => escape_html(s),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabularize_plain_text() {
        assert_eq!(tabularize("Bad Gateway"), "<pre>Bad Gateway</pre>");
        assert_eq!(tabularize("<h1>502</h1>"), "<pre>&lt;h1&gt;502&lt;/h1&gt;</pre>");
    }

    #[test]
    fn test_tabularize_empty_body() {
        assert_eq!(tabularize(""), "<p>Empty response body</p>");
        assert_eq!(tabularize("  \n"), "<p>Empty response body</p>");
    }

    #[test]
    fn test_tabularize_error_object() {
        let body = r#"{"error":{"type":"cluster_block_exception","reason":"blocked"},"status":503}"#;
        let html = tabularize(body);
        assert!(html.starts_with("<table"));
        assert!(html.contains("<th>error</th>"));
        assert!(html.contains("<th>type</th><td>cluster_block_exception</td>"));
        assert!(html.contains("<th>status</th><td>503</td>"));
    }

    #[test]
    fn test_tabularize_scalar_json_is_verbatim() {
        assert_eq!(tabularize("42"), "<pre>42</pre>");
    }

    #[test]
    fn test_tabularize_array() {
        let html = tabularize(r#"["a", null, true]"#);
        assert_eq!(
            html,
            "<table border=1 cellpadding=3 cellspacing=0><tr><td>a</td></tr><tr><td></td></tr><tr><td>true</td></tr></table>"
        );
    }
}
