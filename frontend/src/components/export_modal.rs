use shared::{export_csv, export_filename};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::export::download_csv;

#[derive(Properties, PartialEq)]
pub struct ExportModalProps {
    pub is_open: bool,
    pub api_client: ApiClient,
    pub on_close: Callback<()>,
}

#[function_component(ExportModal)]
pub fn export_modal(props: &ExportModalProps) -> Html {
    let is_exporting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);
    let info_message = use_state(|| Option::<String>::None);
    let success_message = use_state(|| Option::<String>::None);

    // Reset state when the modal opens
    use_effect_with(props.is_open, {
        let error_message = error_message.clone();
        let info_message = info_message.clone();
        let success_message = success_message.clone();

        move |is_open| {
            if *is_open {
                error_message.set(None);
                info_message.set(None);
                success_message.set(None);
            }
            || ()
        }
    });

    let on_export = {
        let api_client = props.api_client.clone();
        let is_exporting = is_exporting.clone();
        let error_message = error_message.clone();
        let info_message = info_message.clone();
        let success_message = success_message.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            is_exporting.set(true);
            error_message.set(None);
            info_message.set(None);
            success_message.set(None);

            let api_client = api_client.clone();
            let is_exporting = is_exporting.clone();
            let error_message = error_message.clone();
            let info_message = info_message.clone();
            let success_message = success_message.clone();
            let on_close = on_close.clone();

            spawn_local(async move {
                match api_client.export_data().await {
                    Ok(rows) => {
                        if rows.is_empty() {
                            info_message.set(Some("No booking data to export.".to_string()));
                        } else {
                            let filename = export_filename(date_utils::current_date());
                            match download_csv(&filename, &export_csv(&rows)) {
                                Ok(()) => {
                                    success_message.set(Some(format!(
                                        "Exported {} bookings to {}",
                                        rows.len(),
                                        filename
                                    )));

                                    // Close the modal after a brief delay
                                    gloo::timers::callback::Timeout::new(2000, move || {
                                        on_close.emit(());
                                    })
                                    .forget();
                                }
                                Err(e) => {
                                    log::error!("CSV download failed: {}", e);
                                    error_message.set(Some(e.to_string()));
                                }
                            }
                        }
                    }
                    Err(e) => {
                        log::error!("Export fetch failed: {}", e);
                        error_message.set(Some(format!("Export failed: {}", e)));
                    }
                }
                is_exporting.set(false);
            });
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="booking-modal-backdrop" onclick={on_backdrop_click}>
            <div class="booking-modal" onclick={on_modal_click}>
                <div class="booking-modal-content">
                    <h3 class="booking-modal-title">{"Export Booking Data"}</h3>

                    {if let Some(error) = (*error_message).clone() {
                        html! { <div class="export-message error">{error}</div> }
                    } else {
                        html! {}
                    }}

                    {if let Some(info) = (*info_message).clone() {
                        html! { <div class="export-message info">{info}</div> }
                    } else {
                        html! {}
                    }}

                    {if let Some(success) = (*success_message).clone() {
                        html! { <div class="export-message success">{success}</div> }
                    } else {
                        html! {}
                    }}

                    <form class="export-form" onsubmit={on_export}>
                        <div class="export-info">
                            <p>{"Download every stored booking as a CSV file."}</p>
                        </div>

                        <div class="booking-modal-buttons">
                            <button type="submit" class="btn btn-primary" disabled={*is_exporting}>
                                {if *is_exporting { "Exporting..." } else { "Export CSV" }}
                            </button>
                            <button
                                type="button"
                                class="btn btn-secondary"
                                onclick={on_cancel}
                                disabled={*is_exporting}
                            >
                                {"Cancel"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
