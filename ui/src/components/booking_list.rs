use payloads::{AdminBlock, Booking, BookingId, UserBooking, partition};
use yew::prelude::*;

use crate::utils::format_naira;
use crate::utils::time::format_stay_date;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub bookings: Vec<Booking>,
    pub is_loading: bool,
    pub on_delete: Callback<BookingId>,
}

/// Admin blocks and user bookings, each in their own section. A section
/// with no records is left out entirely.
#[function_component]
pub fn BookingList(props: &Props) -> Html {
    if props.is_loading {
        return html! {
            <div class="text-center py-12">
                <div class="inline-block h-8 w-8 mb-4 rounded-full border-4 \
                            border-neutral-300 border-t-neutral-900 \
                            dark:border-neutral-600 dark:border-t-neutral-100 \
                            animate-spin" />
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading bookings..."}
                </p>
            </div>
        };
    }

    if props.bookings.is_empty() {
        return html! {
            <div class="text-center py-12">
                <p class="text-lg text-neutral-600 dark:text-neutral-400">
                    {"No bookings found"}
                </p>
            </div>
        };
    }

    let partitioned = partition(&props.bookings);

    html! {
        <div class="space-y-8">
            if !partitioned.admin_blocks.is_empty() {
                <section>
                    <h3 class="text-xl font-bold text-neutral-900 dark:text-neutral-100 mb-4">
                        {format!("Admin Blocked Dates ({})", partitioned.admin_blocks.len())}
                    </h3>
                    <div class="space-y-3">
                        {for partitioned.admin_blocks.iter().map(|block| html! {
                            <AdminBlockCard
                                key={block.id.to_string()}
                                block={(*block).clone()}
                                on_delete={props.on_delete.clone()}
                            />
                        })}
                    </div>
                </section>
            }
            if !partitioned.user_bookings.is_empty() {
                <section>
                    <h3 class="text-xl font-bold text-neutral-900 dark:text-neutral-100 mb-4">
                        {format!("User Bookings ({})", partitioned.user_bookings.len())}
                    </h3>
                    <div class="space-y-3">
                        {for partitioned.user_bookings.iter().map(|booking| html! {
                            <UserBookingCard
                                key={booking.id.to_string()}
                                booking={(*booking).clone()}
                                on_delete={props.on_delete.clone()}
                            />
                        })}
                    </div>
                </section>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AdminBlockCardProps {
    block: AdminBlock,
    on_delete: Callback<BookingId>,
}

#[function_component]
fn AdminBlockCard(props: &AdminBlockCardProps) -> Html {
    let block = &props.block;

    html! {
        <div class="bg-orange-50 dark:bg-orange-900/20 border border-orange-200 dark:border-orange-800 rounded-lg p-4">
            <div class="flex items-start justify-between">
                <div class="flex-1">
                    <div class="flex items-center gap-2 mb-2">
                        <span class="px-3 py-1 bg-orange-100 dark:bg-orange-900/40 text-orange-700 dark:text-orange-300 rounded-full text-sm font-medium">
                            {"Admin Block"}
                        </span>
                        <RoomBadge label={block.stay.room_type.label().to_string()} />
                    </div>
                    <div class="grid grid-cols-2 gap-4 mt-3">
                        <Field label="Check-in" value={format_stay_date(block.stay.check_in)} />
                        <Field label="Check-out" value={format_stay_date(block.stay.check_out)} />
                        <Field label="Nights" value={block.stay.nights().to_string()} />
                        if let Some(notes) = &block.notes {
                            <Field label="Reason" value={notes.clone()} />
                        }
                    </div>
                </div>
                <DeleteButton
                    id={block.id.clone()}
                    title="Delete block"
                    on_delete={props.on_delete.clone()}
                />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct UserBookingCardProps {
    booking: UserBooking,
    on_delete: Callback<BookingId>,
}

#[function_component]
fn UserBookingCard(props: &UserBookingCardProps) -> Html {
    let booking = &props.booking;
    let not_available = || "N/A".to_string();

    let status_class = if booking.is_paid() {
        "bg-green-100 dark:bg-green-900/40 text-green-700 dark:text-green-300"
    } else {
        "bg-amber-100 dark:bg-amber-900/40 text-amber-700 dark:text-amber-300"
    };

    html! {
        <div class="bg-white dark:bg-neutral-800 border border-neutral-200 dark:border-neutral-700 rounded-lg p-4 hover:bg-neutral-50 dark:hover:bg-neutral-700/50 transition-colors">
            <div class="flex items-start justify-between">
                <div class="flex-1">
                    <div class="flex items-center gap-2 mb-3">
                        <h4 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                            {booking.name.clone().unwrap_or_default()}
                        </h4>
                        if let Some(status) = &booking.payment_status {
                            <span class={classes!("px-3", "py-1", "rounded-full", "text-xs", "font-medium", status_class)}>
                                {status.clone()}
                            </span>
                        }
                        <RoomBadge label={booking.stay.room_type.label().to_string()} />
                    </div>

                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4 text-sm">
                        <Field label="Email" value={booking.email.clone().unwrap_or_default()} />
                        <Field label="Phone" value={booking.phone.clone().unwrap_or_else(not_available)} />
                        <Field label="Check-in" value={format_stay_date(booking.stay.check_in)} />
                        <Field label="Check-out" value={format_stay_date(booking.stay.check_out)} />
                        <Field label="Guests" value={booking.guests.unwrap_or(1).to_string()} />
                        <Field label="Nights" value={booking.stay.nights().to_string()} />
                        <Field label="Price" value={format_naira(booking.price)} />
                        <Field label="ID Type" value={booking.id_type.clone().unwrap_or_else(not_available)} />
                    </div>
                </div>
                <DeleteButton
                    id={booking.id.clone()}
                    title="Delete booking"
                    on_delete={props.on_delete.clone()}
                />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FieldProps {
    label: AttrValue,
    value: AttrValue,
}

#[function_component]
fn Field(props: &FieldProps) -> Html {
    html! {
        <div>
            <p class="text-neutral-500 dark:text-neutral-400 text-sm">{&props.label}</p>
            <p class="text-neutral-900 dark:text-neutral-100 font-medium">{&props.value}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RoomBadgeProps {
    label: AttrValue,
}

#[function_component]
fn RoomBadge(props: &RoomBadgeProps) -> Html {
    html! {
        <span class="px-3 py-1 bg-neutral-100 dark:bg-neutral-700 text-neutral-700 dark:text-neutral-300 rounded-full text-xs">
            {&props.label}
        </span>
    }
}

#[derive(Properties, PartialEq)]
struct DeleteButtonProps {
    id: BookingId,
    title: AttrValue,
    on_delete: Callback<BookingId>,
}

#[function_component]
fn DeleteButton(props: &DeleteButtonProps) -> Html {
    let onclick = {
        let id = props.id.clone();
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
    };

    html! {
        <button
            {onclick}
            title={props.title.clone()}
            class="ml-4 px-3 py-2 text-sm bg-red-50 hover:bg-red-100 \
                   dark:bg-red-900/20 dark:hover:bg-red-900/40 \
                   text-red-700 dark:text-red-400 rounded transition-colors"
        >
            {"Delete"}
        </button>
    }
}
