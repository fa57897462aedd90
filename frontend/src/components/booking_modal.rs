use shared::{BookingRecord, BookingStatus};
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

/// Cell picked in the grid, with its stored record if one exists
#[derive(Clone, PartialEq)]
pub struct CellSelection {
    pub unit: String,
    pub date: String,
    pub record: Option<BookingRecord>,
}

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub selection: Option<CellSelection>,
    pub on_save: Callback<BookingRecord>,
    pub on_close: Callback<()>,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let customer_name = use_state(String::new);
    let customer_phone = use_state(String::new);
    let status = use_state(|| BookingStatus::Available);

    // Seed the form whenever a different cell is picked; an empty cell
    // opens as a new booking
    use_effect_with(props.selection.clone(), {
        let customer_name = customer_name.clone();
        let customer_phone = customer_phone.clone();
        let status = status.clone();

        move |selection: &Option<CellSelection>| {
            if let Some(selection) = selection {
                match &selection.record {
                    Some(record) => {
                        customer_name.set(record.customer_name.clone());
                        customer_phone.set(record.customer_phone.clone());
                        status.set(record.status);
                    }
                    None => {
                        customer_name.set(String::new());
                        customer_phone.set(String::new());
                        status.set(BookingStatus::Booked);
                    }
                }
            }
            || ()
        }
    });

    let on_name_change = {
        let customer_name = customer_name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            customer_name.set(input.value());
        })
    };

    let on_phone_change = {
        let customer_phone = customer_phone.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            customer_phone.set(input.value());
        })
    };

    let on_status_change = {
        let status = status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            status.set(BookingStatus::from_wire(&select.value()));
        })
    };

    let on_submit = {
        let selection = props.selection.clone();
        let customer_name = customer_name.clone();
        let customer_phone = customer_phone.clone();
        let status = status.clone();
        let on_save = props.on_save.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(selection) = &selection {
                let record = BookingRecord {
                    date: selection.date.clone(),
                    unit: selection.unit.clone(),
                    customer_name: (*customer_name).trim().to_string(),
                    customer_phone: (*customer_phone).trim().to_string(),
                    status: *status,
                };
                on_save.emit(record);
            }
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

    let selection = match props.selection.as_ref() {
        Some(selection) => selection,
        None => return html! {},
    };

    html! {
        <div class="booking-modal-backdrop" onclick={on_backdrop_click}>
            <div class="booking-modal" onclick={on_modal_click}>
                <div class="booking-modal-content">
                    <h3 class="booking-modal-title">
                        {format!("{} — {}", selection.unit, selection.date)}
                    </h3>

                    <form class="booking-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="booking-customer-name">{"Customer name"}</label>
                            <input
                                id="booking-customer-name"
                                type="text"
                                placeholder="Who is renting?"
                                value={(*customer_name).clone()}
                                onchange={on_name_change}
                                autofocus=true
                            />
                        </div>

                        <div class="form-group">
                            <label for="booking-customer-phone">{"Phone"}</label>
                            <input
                                id="booking-customer-phone"
                                type="tel"
                                placeholder="08..."
                                value={(*customer_phone).clone()}
                                onchange={on_phone_change}
                            />
                        </div>

                        <div class="form-group">
                            <label for="booking-status">{"Status"}</label>
                            <select id="booking-status" onchange={on_status_change}>
                                <option
                                    value="available"
                                    selected={*status == BookingStatus::Available}
                                >
                                    {"Available"}
                                </option>
                                <option value="booked" selected={*status == BookingStatus::Booked}>
                                    {"Booked"}
                                </option>
                            </select>
                        </div>

                        <div class="booking-modal-buttons">
                            <button type="submit" class="btn btn-primary">{"Save"}</button>
                            <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                                {"Cancel"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
