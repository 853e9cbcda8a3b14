/// Percentages arrive as numbers like `80.0` or `12.5`; show whole values
/// without the trailing `.0`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", trim_number(value))
}

/// Average delay / heat-map minutes, e.g. `18m`.
pub fn format_minutes(value: f64) -> String {
    format!("{}m", trim_number(value))
}

fn trim_number(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}

#[cfg(feature = "web")]
fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

/// Render an RFC3339 instant in the viewer's local time (dd.mm.yyyy hh:mm).
/// Falls back to the raw string when the date can't be parsed, or when not
/// running in a browser.
#[cfg(feature = "web")]
pub fn format_local(rfc3339: &str) -> String {
    use js_sys::Date;
    let d = Date::new(&wasm_bindgen::JsValue::from_str(rfc3339));
    if d.get_time().is_nan() {
        return rfc3339.to_string();
    }
    format!(
        "{}.{}.{} {}:{}",
        pad2(d.get_date() as i32),
        pad2((d.get_month() as i32) + 1),
        d.get_full_year() as i32,
        pad2(d.get_hours() as i32),
        pad2(d.get_minutes() as i32)
    )
}

#[cfg(not(feature = "web"))]
pub fn format_local(rfc3339: &str) -> String {
    rfc3339.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_drops_trailing_zero() {
        assert_eq!(format_percent(80.0), "80%");
        assert_eq!(format_percent(12.5), "12.5%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn minutes_format() {
        assert_eq!(format_minutes(18.0), "18m");
        assert_eq!(format_minutes(4.0), "4m");
        assert_eq!(format_minutes(22.4), "22.4m");
    }

    #[test]
    fn local_format_passthrough_off_web() {
        assert_eq!(
            format_local("2025-01-05T10:00:00Z"),
            "2025-01-05T10:00:00Z"
        );
    }
}
