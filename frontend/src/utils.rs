use js_sys::Date;

/// Local `YYYY-MM-DD HH:MM` rendering of an epoch-millisecond timestamp.
pub fn format_ms(ts_ms: i64) -> String {
    let d = Date::new(&wasm_bindgen::JsValue::from_f64(ts_ms as f64));
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        d.get_full_year(),
        d.get_month() + 1, // JS months are 0-indexed
        d.get_date(),
        d.get_hours(),
        d.get_minutes(),
    )
}

/// Five-star rendering of a 1..=5 rating; out-of-range values are clamped.
pub fn rating_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::rating_stars;

    #[test]
    fn stars_are_clamped_to_five() {
        assert_eq!(rating_stars(3), "★★★☆☆");
        assert_eq!(rating_stars(0), "☆☆☆☆☆");
        assert_eq!(rating_stars(9), "★★★★★");
    }
}
