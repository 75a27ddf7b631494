use booking_view::table::{DriverCell, RideTable, ride_table};
use booking_view::Messages;
use payloads::{RideId, RideSummary};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RidesTableProps {
    pub rides: Vec<RideSummary>,
    pub messages: Rc<Messages>,
    pub on_select: Callback<RideId>,
}

#[function_component]
pub fn RidesTable(props: &RidesTableProps) -> Html {
    let messages = &props.messages;
    let rows = match ride_table(messages, &props.rides) {
        RideTable::Empty(no_records) => {
            return html! {
                <p class="text-center py-6 text-neutral-600 dark:text-neutral-400">
                    {no_records}
                </p>
            };
        }
        RideTable::Rows(rows) => rows,
    };

    let header_class = "px-4 py-2 text-left text-xs font-medium uppercase \
                        tracking-wider text-neutral-500 dark:text-neutral-400";

    html! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-neutral-200 dark:divide-neutral-700">
                <thead>
                    <tr>
                        <th class={header_class}>{messages.translate("pick", "rideId")}</th>
                        <th class={header_class}>{messages.translate("pick", "status")}</th>
                        <th class={header_class}>{messages.translate("pick", "returnRide")}</th>
                        <th class={header_class}>{messages.translate("pick", "driver")}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-neutral-200 dark:divide-neutral-700">
                    {for rows.into_iter().map(|row| {
                        let id = row.id;
                        html! {
                            <tr key={id.to_string()}>
                                <td class="px-4 py-2">
                                    <button
                                        class="text-blue-600 dark:text-blue-400 hover:underline"
                                        onclick={props.on_select.reform(move |_: MouseEvent| id)}
                                    >
                                        {id.to_string()}
                                    </button>
                                </td>
                                <td class="px-4 py-2">
                                    <span class={row.status.classes()}>{row.status.label}</span>
                                </td>
                                <td class="px-4 py-2">{row.return_ride}</td>
                                <td class="px-4 py-2">
                                    {match row.driver {
                                        DriverCell::Assigned { href, name } => html! {
                                            <a href={href} class="text-blue-600 dark:text-blue-400 hover:underline">
                                                {name}
                                            </a>
                                        },
                                        DriverCell::Unassigned(label) => html! {
                                            <span class="text-neutral-500 dark:text-neutral-400">{label}</span>
                                        },
                                    }}
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
