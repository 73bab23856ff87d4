use common::Report;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReportsTableProps {
    pub reports: Rc<Vec<Report>>,
}

/// One row per report in fetch order. Rebuilt from scratch on every fetch.
#[function_component(ReportsTable)]
pub fn reports_table(props: &ReportsTableProps) -> Html {
    html! {
        <div class="table-container">
            <table class="reports-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Date & Time"}</th>
                        <th>{"Location"}</th>
                        <th>{"Hazard Type"}</th>
                        <th>{"Severity"}</th>
                        <th>{"Status"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody id="reportsTableBody">
                    { for props.reports.iter().map(|r| {
                        let id = r.id;
                        let on_details = Callback::from(move |_: MouseEvent| {
                            log::info!("Viewing details for report ID: {}", id);
                        });
                        html! {
                            <tr key={id}>
                                <td>{id}</td>
                                <td>{r.display_datetime()}</td>
                                <td>{&r.location}</td>
                                <td>{&r.hazard_type}</td>
                                <td>{&r.severity}</td>
                                <td>
                                    <span class={classes!("status-badge", r.status.badge_class())}>
                                        {r.status.label()}
                                    </span>
                                </td>
                                <td>
                                    <button class="btn btn-sm btn-outline" onclick={on_details}>
                                        {"Details"}
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
