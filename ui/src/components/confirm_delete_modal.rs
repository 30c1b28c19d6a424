use payloads::Booking;
use yew::prelude::*;

use crate::utils::time::format_stay_date;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub booking: Booking,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
}

/// Modal for confirming deletion of a booking or block. Should be rendered
/// conditionally by parent when deletion is requested.
#[function_component]
pub fn ConfirmDeleteModal(props: &Props) -> Html {
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_backdrop_click = on_cancel.clone();

    html! {
        <div
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-black bg-opacity-50 flex \
                   items-center justify-center z-50"
        >
            <div
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                class="bg-white dark:bg-neutral-800 p-6 rounded-lg \
                       max-w-md w-full mx-4"
            >
                <h3 class="text-lg font-semibold mb-4 text-neutral-900 \
                           dark:text-neutral-100">
                    {"Delete Booking"}
                </h3>
                <p class="mb-4 text-neutral-700 dark:text-neutral-300">
                    {"Are you sure you want to delete "}
                    <span class="font-medium">{describe(&props.booking)}</span>
                    {"? This cannot be undone."}
                </p>

                <div class="flex gap-3 justify-end">
                    <button
                        onclick={on_cancel}
                        class="px-4 py-2 bg-neutral-200 hover:bg-neutral-300 \
                               dark:bg-neutral-700 dark:hover:bg-neutral-600 \
                               text-neutral-900 dark:text-neutral-100 rounded"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        onclick={on_confirm}
                        class="px-4 py-2 bg-red-600 hover:bg-red-700 \
                               text-white rounded"
                    >
                        {"Delete"}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn describe(booking: &Booking) -> String {
    let stay = booking.stay();
    let dates = format!(
        "{} to {}",
        format_stay_date(stay.check_in),
        format_stay_date(stay.check_out)
    );
    match booking {
        Booking::AdminBlock(_) => {
            format!("the {} block from {dates}", stay.room_type.label())
        }
        Booking::UserBooking(user) => match &user.name {
            Some(name) => format!("{name}'s booking from {dates}"),
            None => format!("the booking from {dates}"),
        },
    }
}
