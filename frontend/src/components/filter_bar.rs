use shared::{month_name, FilterState, StatusFilter, Unit};
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub categories: Vec<String>,
    /// Units of the active category, feeding the unit dropdown
    pub units: Vec<Unit>,
    pub years: Vec<i32>,
    pub filter: FilterState,
    pub on_category_change: Callback<Option<String>>,
    pub on_unit_change: Callback<Option<String>>,
    pub on_month_change: Callback<u32>,
    pub on_year_change: Callback<i32>,
    pub on_status_change: Callback<StatusFilter>,
    pub on_search_change: Callback<String>,
    pub on_refresh: Callback<()>,
    pub on_export: Callback<()>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_category = {
        let on_category_change = props.on_category_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            on_category_change.emit(if value == "Semua" { None } else { Some(value) });
        })
    };

    let on_unit = {
        let on_unit_change = props.on_unit_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            on_unit_change.emit(if value == "all" { None } else { Some(value) });
        })
    };

    let on_month = {
        let on_month_change = props.on_month_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(value) = select.value().parse::<u32>() {
                on_month_change.emit(value);
            }
        })
    };

    let on_year = {
        let on_year_change = props.on_year_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(value) = select.value().parse::<i32>() {
                on_year_change.emit(value);
            }
        })
    };

    let on_status = {
        let on_status_change = props.on_status_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_status_change.emit(StatusFilter::from_value(&select.value()));
        })
    };

    let on_search = {
        let on_search_change = props.on_search_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search_change.emit(input.value());
        })
    };

    let on_refresh_click = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| {
            on_refresh.emit(());
        })
    };

    let on_export_click = {
        let on_export = props.on_export.clone();
        Callback::from(move |_: MouseEvent| {
            on_export.emit(());
        })
    };

    html! {
        <div class="filter-bar">
            <div class="filter-group">
                <label for="filter-category">{"Category"}</label>
                <select id="filter-category" onchange={on_category}>
                    <option value="Semua" selected={props.filter.category.is_none()}>{"Semua"}</option>
                    {for props.categories.iter().map(|category| {
                        let selected = props.filter.category.as_deref() == Some(category.as_str());
                        html! {
                            <option value={category.clone()} selected={selected}>{category}</option>
                        }
                    })}
                </select>
            </div>

            <div class="filter-group">
                <label for="filter-unit">{"Unit"}</label>
                <select id="filter-unit" onchange={on_unit}>
                    <option value="all" selected={props.filter.unit.is_none()}>{"Semua Barang"}</option>
                    {for props.units.iter().map(|unit| {
                        let selected = props.filter.unit.as_deref() == Some(unit.name.as_str());
                        html! {
                            <option value={unit.name.clone()} selected={selected}>{&unit.name}</option>
                        }
                    })}
                </select>
            </div>

            <div class="filter-group">
                <label for="filter-month">{"Month"}</label>
                <select id="filter-month" onchange={on_month}>
                    {for (1..=12u32).map(|month| {
                        html! {
                            <option value={month.to_string()} selected={props.filter.month == month}>
                                {month_name(month)}
                            </option>
                        }
                    })}
                </select>
            </div>

            <div class="filter-group">
                <label for="filter-year">{"Year"}</label>
                <select id="filter-year" onchange={on_year}>
                    {for props.years.iter().map(|year| {
                        html! {
                            <option value={year.to_string()} selected={props.filter.year == *year}>
                                {*year}
                            </option>
                        }
                    })}
                </select>
            </div>

            <div class="filter-group">
                <label for="filter-status">{"Status"}</label>
                <select id="filter-status" onchange={on_status}>
                    {for [StatusFilter::All, StatusFilter::Available, StatusFilter::Booked].iter().map(|status| {
                        let label = match status {
                            StatusFilter::All => "All",
                            StatusFilter::Available => "Available",
                            StatusFilter::Booked => "Booked",
                        };
                        html! {
                            <option
                                value={status.as_value()}
                                selected={props.filter.status == *status}
                            >
                                {label}
                            </option>
                        }
                    })}
                </select>
            </div>

            <div class="filter-group filter-search">
                <label for="filter-search">{"Search"}</label>
                <input
                    id="filter-search"
                    type="search"
                    placeholder="Customer name..."
                    value={props.filter.search.clone()}
                    oninput={on_search}
                />
            </div>

            <div class="filter-actions">
                <button class="btn btn-secondary" onclick={on_refresh_click}>{"Refresh"}</button>
                <button class="btn btn-secondary" onclick={on_export_click}>{"Export CSV"}</button>
            </div>
        </div>
    }
}
