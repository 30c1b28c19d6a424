use yew::prelude::*;

use crate::components::{
    BlockDateForm, BookingList, ConfirmDeleteModal, NoticeBanner,
    StatsSummary,
};
use crate::hooks::{use_dashboard, use_title};
use crate::state::ActiveTab;
use crate::utils::time::today;

#[function_component]
pub fn AdminDashboardPage() -> Html {
    use_title("Admin Dashboard");
    let dashboard = use_dashboard();
    let state = &*dashboard.state;
    let is_loading = state.is_loading();
    let partitioned = state.partitioned();
    let today = use_memo((), |_| today());

    let on_refresh = {
        let refresh = dashboard.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let tab_button = |tab: ActiveTab, label: &'static str| {
        let onclick = {
            let select_tab = dashboard.select_tab.clone();
            Callback::from(move |_: MouseEvent| select_tab.emit(tab))
        };
        let class = if state.active_tab == tab {
            "border-neutral-500 text-neutral-900 dark:text-neutral-100"
        } else {
            "border-transparent text-neutral-500 hover:text-neutral-700 \
             hover:border-neutral-300 dark:text-neutral-400 \
             dark:hover:text-neutral-300"
        };
        html! {
            <button
                {onclick}
                class={classes!("py-2", "px-1", "border-b-2", "font-medium", "text-sm", class)}
            >
                {label}
            </button>
        }
    };

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-8">
            // Header
            <div class="bg-white dark:bg-neutral-800 rounded-lg border border-neutral-200 dark:border-neutral-700 p-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                            {"Admin Dashboard"}
                        </h1>
                        <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                            {"Manage bookings and block dates"}
                        </p>
                    </div>
                    <button
                        onclick={on_refresh}
                        disabled={is_loading}
                        class="px-4 py-2 bg-neutral-900 hover:bg-neutral-800 \
                               dark:bg-neutral-100 dark:hover:bg-neutral-200 \
                               text-white dark:text-neutral-900 rounded-md \
                               disabled:opacity-50 disabled:cursor-not-allowed \
                               flex items-center gap-2"
                    >
                        <span class={classes!("inline-block", is_loading.then_some("animate-spin"))}>
                            {"⟳"}
                        </span>
                        {"Refresh"}
                    </button>
                </div>

                <StatsSummary
                    user_bookings={partitioned.user_bookings.len()}
                    admin_blocks={partitioned.admin_blocks.len()}
                    total={partitioned.total()}
                />
            </div>

            <NoticeBanner notice={state.notice.clone()} />

            // Tab Navigation
            <div class="border-b border-neutral-200 dark:border-neutral-700">
                <nav class="-mb-px flex space-x-8">
                    {tab_button(ActiveTab::BlockDates, "Block Dates")}
                    {tab_button(ActiveTab::AllBookings, "All Bookings")}
                </nav>
            </div>

            <div class="bg-white dark:bg-neutral-800 rounded-lg border border-neutral-200 dark:border-neutral-700 p-6">
                {match state.active_tab {
                    ActiveTab::BlockDates => html! {
                        <BlockDateForm
                            form={state.form.clone()}
                            today={*today}
                            {is_loading}
                            on_edit={dashboard.edit_form.clone()}
                            on_submit={dashboard.submit_block.clone()}
                        />
                    },
                    ActiveTab::AllBookings => html! {
                        <BookingList
                            bookings={state.bookings.clone()}
                            {is_loading}
                            on_delete={dashboard.request_delete.clone()}
                        />
                    },
                }}
            </div>

            if let Some(booking) = state.pending_delete_booking() {
                <ConfirmDeleteModal
                    booking={booking.clone()}
                    on_confirm={dashboard.confirm_delete.clone()}
                    on_close={dashboard.cancel_delete.clone()}
                />
            }
        </div>
    }
}
