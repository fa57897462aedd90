use shared::{BookingRecord, BookingStore, FilterState, StatusFilter};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils;

/// Booking data and filter selection for the visible month
#[derive(Clone, PartialEq)]
pub struct BookingsState {
    pub store: BookingStore,
    pub filter: FilterState,
    pub loading: bool,
    /// Fetch failure, rendered as an inline error row in the matrix
    pub error: Option<String>,
    /// Save failure, rendered as a banner and cleared after a delay
    pub save_error: Option<String>,
}

#[derive(Clone)]
pub struct UseBookingsActions {
    pub refresh: Callback<()>,
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub set_month: Callback<u32>,
    pub set_year: Callback<i32>,
    pub set_category: Callback<Option<String>>,
    pub set_unit: Callback<Option<String>>,
    pub set_status: Callback<StatusFilter>,
    pub set_search: Callback<String>,
    pub save_booking: Callback<BookingRecord>,
}

pub struct UseBookingsResult {
    pub state: BookingsState,
    pub actions: UseBookingsActions,
}

#[hook]
pub fn use_bookings(api_client: &ApiClient) -> UseBookingsResult {
    let store = use_state(BookingStore::new);
    let filter = use_state(|| FilterState::for_today(date_utils::current_date()));
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let save_error = use_state(|| Option::<String>::None);

    // Monotonic fetch generation: only the response matching the latest
    // request may touch the store, later requests win over earlier ones
    let generation = use_mut_ref(|| 0u64);
    let reload = use_state(|| 0u32);

    // Refetch whenever the visible month changes or a refresh is requested
    {
        let store = store.clone();
        let loading = loading.clone();
        let error = error.clone();
        let generation = generation.clone();
        let api_client = api_client.clone();

        use_effect_with(
            (filter.month, filter.year, *reload),
            move |(month, year, _)| {
                let month = *month;
                let year = *year;
                let current = {
                    let mut counter = generation.borrow_mut();
                    *counter += 1;
                    *counter
                };

                loading.set(true);
                spawn_local(async move {
                    match api_client.get_bookings(month, year).await {
                        Ok(data) => {
                            if *generation.borrow() == current {
                                let mut next = (*store).clone();
                                next.replace_all(data);
                                store.set(next);
                                error.set(None);
                                loading.set(false);
                            } else {
                                log::debug!(
                                    "Dropping stale bookings response for {}/{}",
                                    month,
                                    year
                                );
                            }
                        }
                        Err(e) => {
                            if *generation.borrow() == current {
                                log::error!(
                                    "Failed to load bookings for {}/{}: {}",
                                    month,
                                    year,
                                    e
                                );
                                error.set(Some(e.to_string()));
                                loading.set(false);
                            }
                        }
                    }
                });
                || ()
            },
        );
    }

    let refresh = {
        let reload = reload.clone();
        use_callback(*reload, move |_: (), current| reload.set(*current + 1))
    };

    let prev_month = {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*filter).clone();
            if next.month == 1 {
                next.month = 12;
                next.year -= 1;
            } else {
                next.month -= 1;
            }
            filter.set(next);
        })
    };

    let next_month = {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*filter).clone();
            if next.month == 12 {
                next.month = 1;
                next.year += 1;
            } else {
                next.month += 1;
            }
            filter.set(next);
        })
    };

    let set_month = {
        let filter = filter.clone();
        Callback::from(move |month: u32| {
            let mut next = (*filter).clone();
            next.month = month;
            filter.set(next);
        })
    };

    let set_year = {
        let filter = filter.clone();
        Callback::from(move |year: i32| {
            let mut next = (*filter).clone();
            next.year = year;
            filter.set(next);
        })
    };

    // Changing the category also resets the unit selection, the unit
    // dropdown is rebuilt from the new category
    let set_category = {
        let filter = filter.clone();
        Callback::from(move |category: Option<String>| {
            let mut next = (*filter).clone();
            next.category = category;
            next.unit = None;
            filter.set(next);
        })
    };

    let set_unit = {
        let filter = filter.clone();
        Callback::from(move |unit: Option<String>| {
            let mut next = (*filter).clone();
            next.unit = unit;
            filter.set(next);
        })
    };

    let set_status = {
        let filter = filter.clone();
        Callback::from(move |status: StatusFilter| {
            let mut next = (*filter).clone();
            next.status = status;
            filter.set(next);
        })
    };

    let set_search = {
        let filter = filter.clone();
        Callback::from(move |search: String| {
            let mut next = (*filter).clone();
            next.search = search;
            filter.set(next);
        })
    };

    // Optimistic save: the store is updated before the server confirms,
    // and the displaced record is put back if the save fails
    let save_booking = {
        let store = store.clone();
        let save_error = save_error.clone();
        let api_client = api_client.clone();

        Callback::from(move |record: BookingRecord| {
            let mut next = (*store).clone();
            let previous = next.upsert(record.clone());
            store.set(next.clone());

            let store = store.clone();
            let save_error = save_error.clone();
            let api_client = api_client.clone();

            spawn_local(async move {
                match api_client.save_booking(&record).await {
                    Ok(()) => {
                        log::info!("Saved booking for {}", record.key());
                        save_error.set(None);
                    }
                    Err(e) => {
                        log::error!("Failed to save booking for {}: {}", record.key(), e);
                        let mut rolled = next;
                        rolled.restore(&record.unit, &record.date, previous);
                        store.set(rolled);
                        save_error.set(Some(format!("Booking was not saved: {}", e)));

                        let save_error = save_error.clone();
                        spawn_local(async move {
                            gloo::timers::future::TimeoutFuture::new(5000).await;
                            save_error.set(None);
                        });
                    }
                }
            });
        })
    };

    let state = BookingsState {
        store: (*store).clone(),
        filter: (*filter).clone(),
        loading: *loading,
        error: (*error).clone(),
        save_error: (*save_error).clone(),
    };

    let actions = UseBookingsActions {
        refresh,
        prev_month,
        next_month,
        set_month,
        set_year,
        set_category,
        set_unit,
        set_status,
        set_search,
        save_booking,
    };

    UseBookingsResult { state, actions }
}
