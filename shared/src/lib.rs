use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;

/// A rentable item from the static catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    pub category: String,
}

/// Shape of the static catalog resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitCatalog {
    pub units: Vec<Unit>,
    pub categories: Vec<String>,
}

/// Booking state of a unit/date cell as stored by the spreadsheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Available,
    Booked,
}

impl BookingStatus {
    /// Parse a wire status value; anything unrecognized normalizes to
    /// available, so the matrix never sees an out-of-vocabulary status
    pub fn from_wire(value: &str) -> Self {
        match value {
            "booked" => BookingStatus::Booked,
            _ => BookingStatus::Available,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Available => "available",
            BookingStatus::Booked => "booked",
        }
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Available
    }
}

impl<'de> Deserialize<'de> for BookingStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(BookingStatus::from_wire(&value))
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reservation record as returned by the spreadsheet API.
///
/// Missing customer fields and status decode to defaults, matching what
/// the script hands back for sparsely-filled sheet rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    /// Calendar date in YYYY-MM-DD form
    pub date: String,
    /// Catalog name of the unit
    pub unit: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub status: BookingStatus,
}

impl BookingRecord {
    /// Key identifying this record's cell: "<unit>_<date>"
    pub fn key(&self) -> String {
        booking_key(&self.unit, &self.date)
    }
}

/// Compose the cell key for a unit name and a YYYY-MM-DD date
pub fn booking_key(unit: &str, date: &str) -> String {
    format!("{}_{}", unit, date)
}

/// Envelope for the booking read endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: HashMap<String, BookingRecord>,
}

/// Envelope for the booking write endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveBookingResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope for the export endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Vec<BookingRecord>,
}

/// In-memory mapping from cell key to booking record.
///
/// Replaced wholesale on every successful fetch. `upsert` and `restore`
/// exist for the optimistic save path: a failed remote save puts the
/// displaced record back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingStore {
    records: HashMap<String, BookingRecord>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the current contents and take over the fetched records
    pub fn replace_all(&mut self, records: HashMap<String, BookingRecord>) {
        self.records = records;
    }

    pub fn get(&self, unit: &str, date: &str) -> Option<&BookingRecord> {
        self.records.get(&booking_key(unit, date))
    }

    /// Insert or overwrite the record under its own cell key, returning
    /// whatever it displaced
    pub fn upsert(&mut self, record: BookingRecord) -> Option<BookingRecord> {
        self.records.insert(record.key(), record)
    }

    /// Undo an `upsert`: put the displaced record back, or clear the key
    /// if the cell was empty before the write
    pub fn restore(&mut self, unit: &str, date: &str, previous: Option<BookingRecord>) {
        let key = booking_key(unit, date);
        match previous {
            Some(record) => {
                self.records.insert(key, record);
            }
            None => {
                self.records.remove(&key);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// User-selected constraint on which cell states are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Available,
    Booked,
}

impl StatusFilter {
    /// Parse the status dropdown value; unknown values mean no constraint
    pub fn from_value(value: &str) -> Self {
        match value {
            "available" => StatusFilter::Available,
            "booked" => StatusFilter::Booked,
            _ => StatusFilter::All,
        }
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Available => "available",
            StatusFilter::Booked => "booked",
        }
    }

    /// Whether a stored status passes this filter
    pub fn admits(&self, status: BookingStatus) -> bool {
        match (self, status) {
            (StatusFilter::All, _) => true,
            (StatusFilter::Available, BookingStatus::Available) => true,
            (StatusFilter::Booked, BookingStatus::Booked) => true,
            _ => false,
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::All
    }
}

/// Current filter selection driving the matrix.
///
/// Created from the current date at startup, mutated by UI events,
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Month 1-12
    pub month: u32,
    pub year: i32,
    /// None shows every category ("Semua")
    pub category: Option<String>,
    /// None shows every unit; narrows only the unit dropdown
    pub unit: Option<String>,
    pub status: StatusFilter,
    /// Case-insensitive customer-name substring
    pub search: String,
}

impl FilterState {
    /// Unconstrained filter over the month containing `today`
    pub fn for_today(today: NaiveDate) -> Self {
        Self {
            month: today.month(),
            year: today.year(),
            category: None,
            unit: None,
            status: StatusFilter::All,
            search: String::new(),
        }
    }
}

/// Format a date as zero-padded YYYY-MM-DD, locale independent
pub fn format_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Parse a YYYY-MM-DD date string; malformed input yields None
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.split('-').collect();
    if parts.len() != 3 {
        return None;
    }

    let year = parts[0].parse::<i32>().ok()?;
    let month = parts[1].parse::<u32>().ok()?;
    let day = parts[2].parse::<u32>().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Get days in a month (accounting for leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Check if a date falls on Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Month display name (1-12)
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "January",
    }
}

/// Rendered state of one matrix cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    Available,
    Booked,
    /// An explicitly-available record hidden by the booked-only status
    /// filter; carries no status class at all
    Unmarked,
}

/// One day column of the matrix header
#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub day: u32,
    pub date: String,
    pub weekend: bool,
    pub today: bool,
}

/// One unit/day cell of the matrix
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixCell {
    pub date: String,
    pub weekend: bool,
    pub today: bool,
    pub status: CellStatus,
    /// Customer name shown on booked cells that pass the filters
    pub customer: Option<String>,
}

/// One catalog unit with its cells for the visible month
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixRow {
    pub unit: Unit,
    pub cells: Vec<MatrixCell>,
}

/// The unit x date grid for one filter selection
#[derive(Debug, Clone, PartialEq)]
pub struct BookingMatrix {
    pub month: u32,
    pub year: i32,
    pub columns: Vec<DayColumn>,
    pub rows: Vec<MatrixRow>,
}

/// Build the unit x date grid for the current filter selection.
///
/// Row order follows the catalog; columns cover every day of the
/// selected month. The store is read, never mutated: a search or status
/// mismatch only suppresses the booked rendering of a cell, the stored
/// record keeps its status.
pub fn build_matrix(
    units: &[Unit],
    store: &BookingStore,
    filter: &FilterState,
    today: NaiveDate,
) -> BookingMatrix {
    let columns: Vec<DayColumn> = (1..=days_in_month(filter.year, filter.month))
        .filter_map(|day| NaiveDate::from_ymd_opt(filter.year, filter.month, day))
        .map(|date| DayColumn {
            day: date.day(),
            date: format_date(date),
            weekend: is_weekend(date),
            today: date == today,
        })
        .collect();

    let needle = filter.search.trim().to_lowercase();

    let rows: Vec<MatrixRow> = units
        .iter()
        .filter(|unit| match &filter.category {
            Some(category) => unit.category == *category,
            None => true,
        })
        .map(|unit| {
            let cells = columns
                .iter()
                .map(|column| {
                    let (status, customer) =
                        cell_state(store.get(&unit.name, &column.date), filter.status, &needle);
                    MatrixCell {
                        date: column.date.clone(),
                        weekend: column.weekend,
                        today: column.today,
                        status,
                        customer,
                    }
                })
                .collect();
            MatrixRow {
                unit: unit.clone(),
                cells,
            }
        })
        .collect();

    BookingMatrix {
        month: filter.month,
        year: filter.year,
        columns,
        rows,
    }
}

fn cell_state(
    record: Option<&BookingRecord>,
    status_filter: StatusFilter,
    needle: &str,
) -> (CellStatus, Option<String>) {
    match record {
        None => (CellStatus::Available, None),
        Some(record) => match record.status {
            BookingStatus::Booked => {
                let matches_search =
                    needle.is_empty() || record.customer_name.to_lowercase().contains(needle);
                if status_filter.admits(BookingStatus::Booked) && matches_search {
                    (CellStatus::Booked, Some(record.customer_name.clone()))
                } else {
                    (CellStatus::Available, None)
                }
            }
            BookingStatus::Available => {
                if status_filter.admits(BookingStatus::Available) {
                    (CellStatus::Available, None)
                } else {
                    (CellStatus::Unmarked, None)
                }
            }
        },
    }
}

/// Column order of the exported CSV
const EXPORT_HEADER: [&str; 5] = ["date", "unit", "customerName", "customerPhone", "status"];

/// Assemble export rows into CSV text, header line first
pub fn export_csv(rows: &[BookingRecord]) -> String {
    let mut out = String::new();
    out.push_str(&EXPORT_HEADER.join(","));
    out.push('\n');

    for row in rows {
        let fields = [
            csv_field(&row.date),
            csv_field(&row.unit),
            csv_field(&row.customer_name),
            csv_field(&row.customer_phone),
            csv_field(row.status.as_str()),
        ];
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}

/// Quote a field when it holds a comma, quote or newline
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Download name for an export started on `date`
pub fn export_filename(date: NaiveDate) -> String {
    format!("booking_{}.csv", format_date(date))
}

/// Failures crossing the remote-client boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Network(String),
    /// The server answered outside the 2xx range
    #[error("HTTP error {0}")]
    Http(u16),
    /// The server answered success=false
    #[error("{0}")]
    Application(String),
    /// The payload did not match the expected shape
    #[error("unexpected response shape: {0}")]
    Decode(String),
    /// A browser API refused to cooperate
    #[error("browser error: {0}")]
    Browser(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record(unit: &str, day: &str, name: &str, status: BookingStatus) -> BookingRecord {
        BookingRecord {
            date: day.to_string(),
            unit: unit.to_string(),
            customer_name: name.to_string(),
            customer_phone: String::new(),
            status,
        }
    }

    fn catalog() -> Vec<Unit> {
        vec![
            Unit {
                name: "UnitA".to_string(),
                category: "Motor".to_string(),
            },
            Unit {
                name: "UnitB".to_string(),
                category: "Motor".to_string(),
            },
            Unit {
                name: "Tenda Dome".to_string(),
                category: "Camping".to_string(),
            },
        ]
    }

    fn store_with(records: Vec<BookingRecord>) -> BookingStore {
        let mut store = BookingStore::new();
        for record in records {
            store.upsert(record);
        }
        store
    }

    fn march_filter() -> FilterState {
        FilterState {
            month: 3,
            year: 2024,
            category: None,
            unit: None,
            status: StatusFilter::All,
            search: String::new(),
        }
    }

    #[test]
    fn test_booking_key_format() {
        assert_eq!(booking_key("UnitA", "2024-03-10"), "UnitA_2024-03-10");

        let record = record("UnitA", "2024-03-10", "Budi", BookingStatus::Booked);
        assert_eq!(record.key(), "UnitA_2024-03-10");
    }

    #[test]
    fn test_format_date_zero_pads() {
        assert_eq!(format_date(date(2024, 3, 5)), "2024-03-05");
        assert_eq!(format_date(date(2024, 12, 31)), "2024-12-31");
    }

    #[test]
    fn test_parse_format_round_trip() {
        for d in [
            date(2024, 2, 29),
            date(2023, 1, 1),
            date(2025, 12, 31),
            date(2000, 6, 15),
        ] {
            assert_eq!(parse_date(&format_date(d)), Some(d));
        }
    }

    #[test]
    fn test_parse_date_rejects_malformed() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2024-03"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date("2023-02-29"), None);
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("2024-03-10-extra"), None);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(date(2024, 3, 9))); // Saturday
        assert!(is_weekend(date(2024, 3, 10))); // Sunday
        assert!(!is_weekend(date(2024, 3, 11))); // Monday
        assert!(!is_weekend(date(2024, 3, 8))); // Friday
    }

    #[test]
    fn test_status_normalizes_unknown_values() {
        let parsed: BookingRecord = serde_json::from_str(
            r#"{"date":"2024-03-10","unit":"UnitA","customerName":"Budi","status":"pending"}"#,
        )
        .unwrap();
        assert_eq!(parsed.status, BookingStatus::Available);
        assert_eq!(parsed.customer_phone, "");

        assert_eq!(BookingStatus::from_wire("booked"), BookingStatus::Booked);
        assert_eq!(BookingStatus::from_wire("BOOKED"), BookingStatus::Available);
        assert_eq!(BookingStatus::from_wire(""), BookingStatus::Available);
    }

    #[test]
    fn test_record_defaults_for_missing_fields() {
        let parsed: BookingRecord =
            serde_json::from_str(r#"{"date":"2024-03-10","unit":"UnitA"}"#).unwrap();
        assert_eq!(parsed.customer_name, "");
        assert_eq!(parsed.customer_phone, "");
        assert_eq!(parsed.status, BookingStatus::Available);
    }

    #[test]
    fn test_bookings_response_envelope() {
        let parsed: BookingsResponse = serde_json::from_str(
            r#"{"success":true,"data":{"UnitA_2024-03-10":{"date":"2024-03-10","unit":"UnitA","customerName":"Budi","customerPhone":"0812","status":"booked"}}}"#,
        )
        .unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.message, None);
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(
            parsed.data["UnitA_2024-03-10"].status,
            BookingStatus::Booked
        );

        let failed: BookingsResponse =
            serde_json::from_str(r#"{"success":false,"message":"Sheet unavailable"}"#).unwrap();
        assert!(!failed.success);
        assert_eq!(failed.message.as_deref(), Some("Sheet unavailable"));
        assert!(failed.data.is_empty());
    }

    #[test]
    fn test_store_replace_all_drops_stale_keys() {
        let mut store = store_with(vec![record(
            "UnitA",
            "2024-02-01",
            "Sari",
            BookingStatus::Booked,
        )]);

        let mut fresh = HashMap::new();
        let march = record("UnitA", "2024-03-10", "Budi", BookingStatus::Booked);
        fresh.insert(march.key(), march);
        store.replace_all(fresh);

        assert_eq!(store.len(), 1);
        assert!(store.get("UnitA", "2024-02-01").is_none());
        assert!(store.get("UnitA", "2024-03-10").is_some());
    }

    #[test]
    fn test_store_upsert_returns_displaced_record() {
        let mut store = BookingStore::new();
        let first = record("UnitA", "2024-03-10", "Budi", BookingStatus::Booked);
        assert_eq!(store.upsert(first.clone()), None);

        let second = record("UnitA", "2024-03-10", "Sari", BookingStatus::Booked);
        assert_eq!(store.upsert(second), Some(first));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_restore_undoes_optimistic_write() {
        // Rolling back over a previously occupied cell puts the old
        // record back
        let original = record("UnitA", "2024-03-10", "Budi", BookingStatus::Booked);
        let mut store = store_with(vec![original.clone()]);
        let replacement = record("UnitA", "2024-03-10", "Sari", BookingStatus::Booked);
        let previous = store.upsert(replacement);
        store.restore("UnitA", "2024-03-10", previous);
        assert_eq!(store.get("UnitA", "2024-03-10"), Some(&original));

        // Rolling back over an empty cell clears it again
        let mut store = BookingStore::new();
        let previous = store.upsert(record("UnitB", "2024-03-11", "Sari", BookingStatus::Booked));
        store.restore("UnitB", "2024-03-11", previous);
        assert!(store.is_empty());
    }

    #[test]
    fn test_matrix_row_count_follows_category_filter() {
        let units = catalog();
        let store = BookingStore::new();
        let today = date(2024, 3, 15);

        let all = build_matrix(&units, &store, &march_filter(), today);
        assert_eq!(all.rows.len(), 3);

        let mut filter = march_filter();
        filter.category = Some("Motor".to_string());
        let motors = build_matrix(&units, &store, &filter, today);
        assert_eq!(motors.rows.len(), 2);
        assert_eq!(motors.rows[0].unit.name, "UnitA");
        assert_eq!(motors.rows[1].unit.name, "UnitB");

        filter.category = Some("Camping".to_string());
        let camping = build_matrix(&units, &store, &filter, today);
        assert_eq!(camping.rows.len(), 1);
    }

    #[test]
    fn test_matrix_column_count_matches_calendar() {
        let units = catalog();
        let store = BookingStore::new();
        let today = date(2024, 3, 15);

        let mut filter = march_filter();
        filter.month = 2;
        filter.year = 2024;
        let leap = build_matrix(&units, &store, &filter, today);
        assert_eq!(leap.columns.len(), 29);
        assert!(leap.rows.iter().all(|row| row.cells.len() == 29));

        filter.year = 2023;
        let common = build_matrix(&units, &store, &filter, today);
        assert_eq!(common.columns.len(), 28);
    }

    #[test]
    fn test_matrix_flags_weekend_and_today() {
        let units = catalog();
        let store = BookingStore::new();
        let today = date(2024, 3, 15);

        let matrix = build_matrix(&units, &store, &march_filter(), today);
        // 2024-03-09 is a Saturday, 2024-03-11 a Monday
        assert!(matrix.columns[8].weekend);
        assert!(!matrix.columns[10].weekend);
        assert!(matrix.columns[14].today);
        assert!(!matrix.columns[13].today);
        assert!(matrix.rows[0].cells[8].weekend);
        assert!(matrix.rows[0].cells[14].today);
    }

    #[test]
    fn test_budi_booking_renders_in_march() {
        let units = catalog();
        let store = store_with(vec![record(
            "UnitA",
            "2024-03-10",
            "Budi",
            BookingStatus::Booked,
        )]);
        let today = date(2024, 3, 15);

        let matrix = build_matrix(&units, &store, &march_filter(), today);
        let unit_a = &matrix.rows[0];
        assert_eq!(unit_a.unit.name, "UnitA");

        for (index, cell) in unit_a.cells.iter().enumerate() {
            if index == 9 {
                assert_eq!(cell.status, CellStatus::Booked);
                assert_eq!(cell.customer.as_deref(), Some("Budi"));
            } else {
                assert_eq!(cell.status, CellStatus::Available);
                assert_eq!(cell.customer, None);
            }
        }
    }

    #[test]
    fn test_search_mismatch_suppresses_visual_but_not_store() {
        let units = catalog();
        let store = store_with(vec![record(
            "UnitA",
            "2024-03-10",
            "Budi",
            BookingStatus::Booked,
        )]);
        let today = date(2024, 3, 15);

        let mut filter = march_filter();
        filter.search = "budi".to_string();
        let matching = build_matrix(&units, &store, &filter, today);
        assert_eq!(matching.rows[0].cells[9].status, CellStatus::Booked);

        filter.search = "Sari".to_string();
        let mismatched = build_matrix(&units, &store, &filter, today);
        assert_eq!(mismatched.rows[0].cells[9].status, CellStatus::Available);
        assert_eq!(mismatched.rows[0].cells[9].customer, None);

        // The underlying record is untouched
        assert_eq!(
            store.get("UnitA", "2024-03-10").map(|r| r.status),
            Some(BookingStatus::Booked)
        );
    }

    #[test]
    fn test_status_filter_available_hides_booked_cells() {
        let units = catalog();
        let store = store_with(vec![record(
            "UnitA",
            "2024-03-10",
            "Budi",
            BookingStatus::Booked,
        )]);
        let today = date(2024, 3, 15);

        let mut filter = march_filter();
        filter.status = StatusFilter::Available;
        let matrix = build_matrix(&units, &store, &filter, today);
        assert_eq!(matrix.rows[0].cells[9].status, CellStatus::Available);
        assert_eq!(matrix.rows[0].cells[9].customer, None);
    }

    #[test]
    fn test_status_filter_booked_leaves_available_record_unmarked() {
        let units = catalog();
        let store = store_with(vec![record(
            "UnitA",
            "2024-03-10",
            "",
            BookingStatus::Available,
        )]);
        let today = date(2024, 3, 15);

        let mut filter = march_filter();
        filter.status = StatusFilter::Booked;
        let matrix = build_matrix(&units, &store, &filter, today);

        // The explicit record loses its status class, absent cells stay
        // available
        assert_eq!(matrix.rows[0].cells[9].status, CellStatus::Unmarked);
        assert_eq!(matrix.rows[0].cells[10].status, CellStatus::Available);
    }

    #[test]
    fn test_saving_available_clears_booked_visual() {
        let units = catalog();
        let mut store = store_with(vec![record(
            "UnitA",
            "2024-03-10",
            "Budi",
            BookingStatus::Booked,
        )]);
        let today = date(2024, 3, 15);

        let before = build_matrix(&units, &store, &march_filter(), today);
        assert_eq!(before.rows[0].cells[9].status, CellStatus::Booked);

        store.upsert(record("UnitA", "2024-03-10", "", BookingStatus::Available));
        let after = build_matrix(&units, &store, &march_filter(), today);
        assert_eq!(after.rows[0].cells[9].status, CellStatus::Available);
        assert_eq!(after.rows[0].cells[9].customer, None);
    }

    #[test]
    fn test_matrix_search_is_case_insensitive() {
        let units = catalog();
        let store = store_with(vec![record(
            "UnitA",
            "2024-03-10",
            "Budi Santoso",
            BookingStatus::Booked,
        )]);
        let today = date(2024, 3, 15);

        for needle in ["BUDI", "santoso", "di sa"] {
            let mut filter = march_filter();
            filter.search = needle.to_string();
            let matrix = build_matrix(&units, &store, &filter, today);
            assert_eq!(
                matrix.rows[0].cells[9].status,
                CellStatus::Booked,
                "search {:?} should match",
                needle
            );
        }
    }

    #[test]
    fn test_filter_state_for_today() {
        let filter = FilterState::for_today(date(2024, 3, 15));
        assert_eq!(filter.month, 3);
        assert_eq!(filter.year, 2024);
        assert_eq!(filter.category, None);
        assert_eq!(filter.unit, None);
        assert_eq!(filter.status, StatusFilter::All);
        assert!(filter.search.is_empty());
    }

    #[test]
    fn test_status_filter_from_value() {
        assert_eq!(StatusFilter::from_value("all"), StatusFilter::All);
        assert_eq!(
            StatusFilter::from_value("available"),
            StatusFilter::Available
        );
        assert_eq!(StatusFilter::from_value("booked"), StatusFilter::Booked);
        assert_eq!(StatusFilter::from_value("anything"), StatusFilter::All);
    }

    #[test]
    fn test_export_csv_header_and_quoting() {
        let rows = vec![
            record("UnitA", "2024-03-10", "Budi", BookingStatus::Booked),
            record(
                "UnitB",
                "2024-03-11",
                "Sari, \"Ibu\"",
                BookingStatus::Available,
            ),
        ];

        let csv = export_csv(&rows);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "date,unit,customerName,customerPhone,status");
        assert_eq!(lines[1], "2024-03-10,UnitA,Budi,,booked");
        assert_eq!(lines[2], "2024-03-11,UnitB,\"Sari, \"\"Ibu\"\"\",,available");
    }

    #[test]
    fn test_export_csv_empty_rows_is_header_only() {
        let csv = export_csv(&[]);
        assert_eq!(csv, "date,unit,customerName,customerPhone,status\n");
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename(date(2024, 3, 15)), "booking_2024-03-15.csv");
    }
}
