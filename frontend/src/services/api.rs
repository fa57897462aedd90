use gloo::net::http::Request;
use shared::{
    ApiError, BookingRecord, BookingsResponse, ExportResponse, SaveBookingResponse, UnitCatalog,
};
use std::collections::HashMap;

use crate::config;

/// Client for the spreadsheet-backed booking API
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    script_url: String,
    catalog_url: String,
}

impl ApiClient {
    /// Create a client against the configured endpoints
    pub fn new() -> Self {
        Self {
            script_url: config::SCRIPT_URL.to_string(),
            catalog_url: config::CATALOG_URL.to_string(),
        }
    }

    /// Create a client against custom endpoints
    pub fn with_urls(script_url: String, catalog_url: String) -> Self {
        Self {
            script_url,
            catalog_url,
        }
    }

    /// Fetch the static unit catalog
    pub async fn load_catalog(&self) -> Result<UnitCatalog, ApiError> {
        let response = Request::get(&self.catalog_url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Http(response.status()));
        }

        response
            .json::<UnitCatalog>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Fetch the reservation map for one month; the timestamp parameter
    /// defeats intermediary caching
    pub async fn get_bookings(
        &self,
        month: u32,
        year: i32,
    ) -> Result<HashMap<String, BookingRecord>, ApiError> {
        let timestamp = js_sys::Date::now() as u64;
        let url = format!(
            "{}?action=getBookings&month={}&year={}&t={}",
            self.script_url, month, year, timestamp
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Http(response.status()));
        }

        let payload = response
            .json::<BookingsResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if !payload.success {
            return Err(ApiError::Application(
                payload.message.unwrap_or_else(|| "Invalid data".to_string()),
            ));
        }

        Ok(payload.data)
    }

    /// Persist one booking record, form-encoded as the script expects
    pub async fn save_booking(&self, record: &BookingRecord) -> Result<(), ApiError> {
        let body = format!(
            "action=saveBooking&date={}&unit={}&customerName={}&customerPhone={}&status={}",
            urlencoding::encode(&record.date),
            urlencoding::encode(&record.unit),
            urlencoding::encode(&record.customer_name),
            urlencoding::encode(&record.customer_phone),
            record.status
        );

        let response = Request::post(&self.script_url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Http(response.status()));
        }

        let payload = response
            .json::<SaveBookingResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if !payload.success {
            return Err(ApiError::Application(
                payload
                    .message
                    .unwrap_or_else(|| "Save rejected".to_string()),
            ));
        }

        Ok(())
    }

    /// Fetch every stored booking row for CSV export. An empty sheet is
    /// a valid result; the caller decides how to present it
    pub async fn export_data(&self) -> Result<Vec<BookingRecord>, ApiError> {
        let url = format!("{}?action=exportData", self.script_url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Http(response.status()));
        }

        let payload = response
            .json::<ExportResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if !payload.success {
            return Err(ApiError::Application(
                payload
                    .message
                    .unwrap_or_else(|| "Export failed".to_string()),
            ));
        }

        Ok(payload.data)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
