pub mod use_bookings;
pub mod use_catalog;
