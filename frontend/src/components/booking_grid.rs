use shared::{BookingMatrix, CellStatus};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookingGridProps {
    pub matrix: BookingMatrix,
    /// Fetch failure rendered as a single row spanning the matrix
    pub error: Option<String>,
    /// (unit name, YYYY-MM-DD) of the clicked cell
    pub on_cell_click: Callback<(String, String)>,
}

#[function_component(BookingGrid)]
pub fn booking_grid(props: &BookingGridProps) -> Html {
    let matrix = &props.matrix;

    let header = html! {
        <tr>
            <th class="unit-header">{"Unit"}</th>
            {for matrix.columns.iter().map(|column| {
                let mut class = String::from("date-header");
                if column.weekend {
                    class.push_str(" weekend");
                }
                if column.today {
                    class.push_str(" today");
                }
                html! { <th class={class}>{column.day}</th> }
            })}
        </tr>
    };

    let body = if let Some(error) = &props.error {
        html! {
            <tr>
                <td class="matrix-error" colspan={(matrix.columns.len() + 1).to_string()}>
                    {format!("Error loading data: {}", error)}
                </td>
            </tr>
        }
    } else {
        html! {
            <>
                {for matrix.rows.iter().map(|row| {
                    html! {
                        <tr>
                            <td class="unit-cell">{&row.unit.name}</td>
                            {for row.cells.iter().map(|cell| {
                                let mut class = String::from("date-cell");
                                if cell.weekend {
                                    class.push_str(" weekend");
                                }
                                if cell.today {
                                    class.push_str(" today");
                                }
                                match cell.status {
                                    CellStatus::Available => class.push_str(" available"),
                                    CellStatus::Booked => class.push_str(" booked"),
                                    CellStatus::Unmarked => {}
                                }

                                let onclick = {
                                    let on_cell_click = props.on_cell_click.clone();
                                    let unit = row.unit.name.clone();
                                    let date = cell.date.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        on_cell_click.emit((unit.clone(), date.clone()));
                                    })
                                };

                                html! {
                                    <td class={class} {onclick} title={cell.customer.clone()}>
                                        {cell.customer.clone().unwrap_or_default()}
                                    </td>
                                }
                            })}
                        </tr>
                    }
                })}
            </>
        }
    };

    html! {
        <div class="table-container">
            <table class="booking-matrix">
                <thead>{header}</thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
