//! String and time helpers shared across the dashboard.

use wasm_bindgen::JsValue;

/// Display form of a raw area identifier: `motor_pool` → `MOTOR POOL`.
pub fn format_area_name(area: &str) -> String {
    area.replace('_', " ").to_uppercase()
}

/// Escape the handful of characters that matter when server-provided text is
/// spliced into markup built by string concatenation.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// Current wall-clock time as the browser's locale string. This is the
/// client clock, not a server value.
pub fn current_locale_time() -> String {
    String::from(js_sys::Date::new_0().to_locale_string("default", &JsValue::UNDEFINED))
}

/// Render an ISO-8601 timestamp as the browser's locale date-time string.
/// Falls back to the raw value when the string does not parse.
pub fn locale_string_from_iso(iso: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    if date.get_time().is_nan() {
        iso.to_string()
    } else {
        String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_names_are_uppercased_with_spaces() {
        assert_eq!(format_area_name("motor_pool"), "MOTOR POOL");
        assert_eq!(format_area_name("war_room"), "WAR ROOM");
        assert_eq!(format_area_name("cafeteria"), "CAFETERIA");
        assert_eq!(format_area_name(""), "");
    }

    #[test]
    fn escaping_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("a & b's"), "a &amp; b&#39;s");
        assert_eq!(escape_html("plain text"), "plain text");
    }
}
