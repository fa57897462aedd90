use chrono::NaiveDate;

/// Current date in the browser's local timezone
pub fn current_date() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Year dropdown range: two years back through three ahead
pub fn year_options(current_year: i32) -> Vec<i32> {
    (current_year - 2..=current_year + 3).collect()
}
