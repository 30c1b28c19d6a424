use jiff::civil::Date;
use payloads::RoomType;
use yew::prelude::*;

use crate::state::{BlockForm, FormEdit};
use crate::utils::time::{date_input_value, parse_date_input};

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-neutral-300 \
                           dark:border-neutral-600 rounded bg-white \
                           dark:bg-neutral-800 text-neutral-900 \
                           dark:text-neutral-100";
const LABEL_CLASS: &str = "block text-sm font-medium text-neutral-700 \
                           dark:text-neutral-300 mb-1";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub form: BlockForm,
    /// Lower bound offered by the date pickers.
    pub today: Date,
    pub is_loading: bool,
    pub on_edit: Callback<FormEdit>,
    pub on_submit: Callback<()>,
}

/// Form for blocking a date range. The `min` bounds on the date inputs are
/// only hints; submission checks nothing but the presence of both dates.
#[function_component]
pub fn BlockDateForm(props: &Props) -> Html {
    let on_room_type_change = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_edit.emit(FormEdit::RoomType(RoomType::from(select.value())));
        })
    };

    let on_check_in_change = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(FormEdit::CheckIn(parse_date_input(&input.value())));
        })
    };

    let on_check_out_change = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(FormEdit::CheckOut(parse_date_input(&input.value())));
        })
    };

    let on_reason_input = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(FormEdit::Reason(input.value()));
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(()))
    };

    let check_in_min = props.today.to_string();
    let check_out_min = props.form.check_in.unwrap_or(props.today).to_string();

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div>
                    <label class={LABEL_CLASS}>{"Room Type"}</label>
                    <select class={INPUT_CLASS} onchange={on_room_type_change}>
                        {for RoomType::SELECTABLE.iter().map(|room_type| html! {
                            <option
                                value={room_type.as_str().to_string()}
                                selected={*room_type == props.form.room_type}
                            >
                                {room_type.label()}
                            </option>
                        })}
                    </select>
                </div>

                <div>
                    <label class={LABEL_CLASS}>{"Check-in Date"}</label>
                    <input
                        type="date"
                        class={INPUT_CLASS}
                        min={check_in_min}
                        value={date_input_value(props.form.check_in)}
                        onchange={on_check_in_change}
                    />
                </div>

                <div>
                    <label class={LABEL_CLASS}>{"Check-out Date"}</label>
                    <input
                        type="date"
                        class={INPUT_CLASS}
                        min={check_out_min}
                        value={date_input_value(props.form.check_out)}
                        onchange={on_check_out_change}
                    />
                </div>

                <div>
                    <label class={LABEL_CLASS}>{"Reason (Optional)"}</label>
                    <input
                        type="text"
                        class={INPUT_CLASS}
                        placeholder="e.g., Maintenance, Cleaning"
                        value={props.form.reason.clone()}
                        oninput={on_reason_input}
                    />
                </div>
            </div>

            <button
                onclick={on_submit}
                disabled={props.is_loading}
                class="w-full py-3 bg-neutral-900 hover:bg-neutral-700 \
                       dark:bg-neutral-100 dark:hover:bg-neutral-300 \
                       text-white dark:text-neutral-900 font-medium rounded \
                       disabled:opacity-50 disabled:cursor-not-allowed \
                       transition-colors"
            >
                {if props.is_loading { "Blocking..." } else { "Block Date" }}
            </button>
        </div>
    }
}
