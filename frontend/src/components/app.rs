use chrono::Datelike;
use shared::{build_matrix, month_name, BookingRecord, Unit};
use yew::prelude::*;

use crate::components::booking_grid::BookingGrid;
use crate::components::booking_modal::{BookingModal, CellSelection};
use crate::components::export_modal::ExportModal;
use crate::components::filter_bar::FilterBar;
use crate::hooks::use_bookings::use_bookings;
use crate::hooks::use_catalog::use_catalog;
use crate::services::api::ApiClient;
use crate::services::date_utils;

#[function_component(App)]
pub fn app() -> Html {
    let api_client = ApiClient::new();
    let catalog = use_catalog(&api_client);
    let bookings = use_bookings(&api_client);

    let selected_cell = use_state(|| Option::<CellSelection>::None);
    let export_open = use_state(|| false);

    let today = date_utils::current_date();
    let filter = bookings.state.filter.clone();
    let matrix = build_matrix(&catalog.units, &bookings.state.store, &filter, today);

    // Units of the active category feed the unit dropdown
    let dropdown_units: Vec<Unit> = match &filter.category {
        Some(category) => catalog
            .units
            .iter()
            .filter(|unit| &unit.category == category)
            .cloned()
            .collect(),
        None => catalog.units.clone(),
    };

    let on_cell_click = {
        let selected_cell = selected_cell.clone();
        let store = bookings.state.store.clone();
        Callback::from(move |(unit, date): (String, String)| {
            let record = store.get(&unit, &date).cloned();
            selected_cell.set(Some(CellSelection { unit, date, record }));
        })
    };

    let on_modal_close = {
        let selected_cell = selected_cell.clone();
        Callback::from(move |_: ()| {
            selected_cell.set(None);
        })
    };

    // The modal closes right away; the save itself is best effort and
    // rolls back the store if the server rejects it
    let on_modal_save = {
        let selected_cell = selected_cell.clone();
        let save_booking = bookings.actions.save_booking.clone();
        Callback::from(move |record: BookingRecord| {
            save_booking.emit(record);
            selected_cell.set(None);
        })
    };

    let on_export_open = {
        let export_open = export_open.clone();
        Callback::from(move |_: ()| {
            export_open.set(true);
        })
    };

    let on_export_close = {
        let export_open = export_open.clone();
        Callback::from(move |_: ()| {
            export_open.set(false);
        })
    };

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Booking Calendar"}</h1>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    {if let Some(error) = catalog.error.clone() {
                        html! {
                            <div class="catalog-error">
                                {format!("Failed to load units: {}", error)}
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    <FilterBar
                        categories={catalog.categories.clone()}
                        units={dropdown_units}
                        years={date_utils::year_options(today.year())}
                        filter={filter.clone()}
                        on_category_change={bookings.actions.set_category.clone()}
                        on_unit_change={bookings.actions.set_unit.clone()}
                        on_month_change={bookings.actions.set_month.clone()}
                        on_year_change={bookings.actions.set_year.clone()}
                        on_status_change={bookings.actions.set_status.clone()}
                        on_search_change={bookings.actions.set_search.clone()}
                        on_refresh={bookings.actions.refresh.clone()}
                        on_export={on_export_open}
                    />

                    {if let Some(save_error) = bookings.state.save_error.clone() {
                        html! { <div class="save-error-banner">{save_error}</div> }
                    } else {
                        html! {}
                    }}

                    <section class="matrix-section">
                        <div class="matrix-header">
                            <button
                                class="matrix-nav-btn"
                                onclick={bookings.actions.prev_month.clone()}
                            >
                                {"‹"}
                            </button>
                            <h2 class="matrix-title">
                                {format!("{} {}", month_name(filter.month), filter.year)}
                            </h2>
                            <button
                                class="matrix-nav-btn"
                                onclick={bookings.actions.next_month.clone()}
                            >
                                {"›"}
                            </button>
                        </div>

                        {if bookings.state.loading || catalog.loading {
                            html! { <div class="loading-indicator">{"Loading bookings..."}</div> }
                        } else {
                            html! {}
                        }}

                        <BookingGrid
                            matrix={matrix}
                            error={bookings.state.error.clone()}
                            on_cell_click={on_cell_click}
                        />
                    </section>
                </div>
            </main>

            <BookingModal
                selection={(*selected_cell).clone()}
                on_save={on_modal_save}
                on_close={on_modal_close}
            />
            <ExportModal
                is_open={*export_open}
                api_client={api_client.clone()}
                on_close={on_export_close}
            />
        </>
    }
}
