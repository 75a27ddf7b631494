use booking_view::summary::trip_details;
use booking_view::{LoadedBooking, Messages, ViewState};
use payloads::Role;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::{RideDetailsModal, RidesTable};
use crate::hooks::use_booking_details;
use crate::pages::NotFoundPage;

#[derive(Properties, PartialEq)]
pub struct BookingDetailsProps {
    /// Raw route segment; validated by the loader.
    pub booking_param: AttrValue,
    pub role: Option<Role>,
    pub messages: Rc<Messages>,
}

#[function_component]
pub fn BookingDetails(props: &BookingDetailsProps) -> Html {
    let hook = use_booking_details(props.booking_param.clone(), props.role.clone());
    let messages = &props.messages;

    let loaded = match hook.state {
        ViewState::Invalid => {
            return html! {
                <div class="text-center py-12">
                    {messages.translate("pick", "invalidBooking")}
                </div>
            };
        }
        ViewState::Loading => {
            return html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {messages.translate("pick", "loading")}
                    </p>
                </div>
            };
        }
        ViewState::NotFound => {
            return html! {
                <NotFoundPage
                    title={messages.translate("pick", "notFound")}
                    hint={messages.translate("pick", "notFoundHint")}
                />
            };
        }
        // Navigation to the unauthorized page is already under way.
        ViewState::Unauthorized => return html! {},
        ViewState::Failed(error) => {
            return html! {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                    <p class="text-sm font-medium text-red-700 dark:text-red-400">
                        {messages.translate("pick", "loadFailed")}
                    </p>
                    <p class="text-sm text-red-600 dark:text-red-400">{error}</p>
                </div>
            };
        }
        ViewState::Loaded(loaded) => loaded,
    };

    html! {
        <div class="space-y-8">
            <BookingSummary loaded={loaded.clone()} messages={messages.clone()} />

            <section>
                <h2 class="text-xl font-semibold mb-4">
                    {messages.translate("pick", "bookingRides")}
                </h2>
                <RidesTable
                    rides={loaded.rides.clone()}
                    messages={messages.clone()}
                    on_select={hook.inspect}
                />
            </section>

            if let Some(ride) = hook.displayed_ride {
                <RideDetailsModal
                    ride={ride}
                    messages={messages.clone()}
                    can_view_contact={hook.can_view_contact}
                    on_close={hook.dismiss}
                />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BookingSummaryProps {
    loaded: Rc<LoadedBooking>,
    messages: Rc<Messages>,
}

#[function_component]
fn BookingSummary(props: &BookingSummaryProps) -> Html {
    let booking = &props.loaded.booking;
    let messages = &props.messages;

    let row = |label: &str, value: Html| {
        html! {
            <div class="py-2">
                <dt class="text-sm text-neutral-500 dark:text-neutral-400">
                    {messages.translate("pick", label)}
                </dt>
                <dd class="text-neutral-900 dark:text-neutral-100">{value}</dd>
            </div>
        }
    };

    html! {
        <>
            <header>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {format!(
                        "{} #{}",
                        messages.translate("pick", "booking"),
                        booking.booking_number().unwrap_or_default()
                    )}
                </h1>
                if let Some(external) = booking.booking_number_ex() {
                    <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                        {format!("{}: {external}", messages.translate("pick", "exbooking"))}
                    </p>
                }
            </header>

            <section>
                <h2 class="text-xl font-semibold mb-2">
                    {messages.translate("pick", "tripDetails")}
                </h2>
                <dl class="divide-y divide-neutral-200 dark:divide-neutral-700">
                    {for trip_details(messages, booking).into_iter().map(|trip| html! {
                        <div class="py-2">
                            <dt class="text-sm text-neutral-500 dark:text-neutral-400">{trip.label}</dt>
                            <dd class="text-neutral-900 dark:text-neutral-100">{trip.value}</dd>
                        </div>
                    })}
                </dl>
            </section>

            <section>
                <h2 class="text-xl font-semibold mb-2">
                    {messages.translate("pick", "contactInfo")}
                </h2>
                <dl class="divide-y divide-neutral-200 dark:divide-neutral-700">
                    if let Some(email) = booking.email() {
                        {row("email", html! {
                            <a href={format!("mailto:{email}")} class="text-blue-600 dark:text-blue-400 hover:underline">
                                {email}
                            </a>
                        })}
                    }
                    if let Some(phone) = booking.phone_number() {
                        {row("phone", html! { {phone} })}
                    }
                </dl>
            </section>
        </>
    }
}
