/// Google Apps Script deployment that owns the reservation sheet
pub const SCRIPT_URL: &str =
    "https://script.google.com/macros/s/AKfycbzQn4vR8mW2pLdXc5TkBhJ0eYuGaS7oNfDi3EqKxlM9jHtPw1Cv/exec";

/// Static unit catalog served next to the page
pub const CATALOG_URL: &str = "units.json";
