use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub user_bookings: usize,
    pub admin_blocks: usize,
    pub total: usize,
}

#[function_component]
pub fn StatsSummary(props: &Props) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mt-6">
            <StatCard label="User Bookings" value={props.user_bookings} accent="text-blue-600 dark:text-blue-400" />
            <StatCard label="Admin Blocks" value={props.admin_blocks} accent="text-orange-600 dark:text-orange-400" />
            <StatCard label="Total Bookings" value={props.total} accent="text-green-600 dark:text-green-400" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    label: AttrValue,
    value: usize,
    accent: AttrValue,
}

#[function_component]
fn StatCard(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-neutral-50 dark:bg-neutral-900 rounded-lg p-4 border border-neutral-200 dark:border-neutral-700">
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {&props.label}
            </p>
            <p class={classes!("text-2xl", "font-bold", props.accent.to_string())}>
                {props.value}
            </p>
        </div>
    }
}
