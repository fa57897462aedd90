pub mod app;
pub mod booking_grid;
pub mod booking_modal;
pub mod export_modal;
pub mod filter_bar;
