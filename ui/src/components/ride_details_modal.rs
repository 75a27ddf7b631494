use booking_view::Messages;
use booking_view::presentation::StatusBadge;
use payloads::RideDetail;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::Modal;

#[derive(Properties, PartialEq)]
pub struct RideDetailsModalProps {
    pub ride: RideDetail,
    pub messages: Rc<Messages>,
    /// Customer contact fields are only shown to staff roles.
    pub can_view_contact: bool,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn RideDetailsModal(props: &RideDetailsModalProps) -> Html {
    let ride = &props.ride;
    let messages = &props.messages;
    let badge = StatusBadge::new(messages, &ride.status);

    let field_row = |(label, value): (String, String)| {
        html! {
            <div class="flex justify-between gap-4 py-1">
                <dt class="text-sm text-neutral-500 dark:text-neutral-400">{label}</dt>
                <dd class="text-sm text-neutral-900 dark:text-neutral-100 text-right">{value}</dd>
            </div>
        }
    };

    let driver = match &ride.id_driver {
        Some(driver) => html! {
            <a href={driver.profile_path()} class="text-blue-600 dark:text-blue-400 hover:underline">
                {driver.display_name()}
            </a>
        },
        None => html! { {messages.translate("pick", "unassigned")} },
    };

    html! {
        <Modal on_close={props.on_close.clone()}>
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-lg font-semibold text-neutral-900 dark:text-white">
                    {format!("{} #{}", messages.translate("pick", "rideDetails"), ride.id)}
                </h3>
                <span class={badge.classes()}>{badge.label}</span>
            </div>

            <dl class="divide-y divide-neutral-200 dark:divide-neutral-700">
                <div class="flex justify-between gap-4 py-1">
                    <dt class="text-sm text-neutral-500 dark:text-neutral-400">
                        {messages.translate("pick", "returnRide")}
                    </dt>
                    <dd class="text-sm">{ride.return_ride.to_string()}</dd>
                </div>
                <div class="flex justify-between gap-4 py-1">
                    <dt class="text-sm text-neutral-500 dark:text-neutral-400">
                        {messages.translate("pick", "driver")}
                    </dt>
                    <dd class="text-sm">{driver}</dd>
                </div>
                {for ride.trip_fields().into_iter().map(field_row)}
            </dl>

            if props.can_view_contact {
                <div class="mt-4">
                    <h4 class="text-sm font-semibold text-neutral-700 dark:text-neutral-300 mb-1">
                        {messages.translate("pick", "customerContact")}
                    </h4>
                    <dl>
                        {for ride.contact_fields().into_iter()
                            .map(|(key, value)| field_row((key.to_string(), value)))}
                    </dl>
                </div>
            }

            <div class="flex justify-end mt-6">
                <button
                    onclick={props.on_close.reform(|_: MouseEvent| ())}
                    class="px-4 py-2 text-sm font-medium text-neutral-700 dark:text-neutral-300
                           bg-white dark:bg-neutral-700 border border-neutral-300
                           dark:border-neutral-600 rounded-md hover:bg-neutral-50
                           dark:hover:bg-neutral-600"
                >
                    {messages.translate("pick", "close")}
                </button>
            </div>
        </Modal>
    }
}
