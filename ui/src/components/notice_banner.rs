use yew::prelude::*;

use crate::state::{Notice, NoticeKind};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub notice: Option<Notice>,
}

/// Success or error banner for the most recent action. The dashboard hook
/// clears it after a few seconds.
#[function_component]
pub fn NoticeBanner(props: &Props) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };

    let (bg_class, border_class, text_class, icon) = match notice.kind {
        NoticeKind::Error => (
            "bg-red-50 dark:bg-red-900/20",
            "border-red-200 dark:border-red-800",
            "text-red-700 dark:text-red-400",
            "✕",
        ),
        NoticeKind::Success => (
            "bg-green-50 dark:bg-green-900/20",
            "border-green-200 dark:border-green-800",
            "text-green-700 dark:text-green-400",
            "✓",
        ),
    };

    html! {
        <div
            role="status"
            class={format!(
                "mb-6 p-4 rounded-lg border {} {} {}",
                bg_class, border_class, text_class
            )}
        >
            <div class="flex items-center gap-2">
                <span class="text-sm font-medium">{icon}</span>
                <span class="text-sm font-medium">{&notice.text}</span>
            </div>
        </div>
    }
}
