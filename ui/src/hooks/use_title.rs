use yew::prelude::*;

const SITE_NAME: &str = "Bookings";

/// Sets the document title to `"{page} | Bookings"`.
#[hook]
pub fn use_title(page: &str) {
    let title = format!("{page} | {SITE_NAME}");
    use_effect_with(title, |title| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    });
}
