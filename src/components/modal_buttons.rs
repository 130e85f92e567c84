//! Modal Buttons Component
//!
//! Cancel/submit footer shared by the timer dialogs.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";
pub const DEFAULT_SUBMIT_LABEL: &str = "Save Changes";
pub const DEFAULT_SUBMIT_CLASS: &str = "bg-blue-600 hover:bg-blue-700";
const DISABLED_SUBMIT_CLASS: &str = "bg-blue-400 cursor-not-allowed";

const CANCEL_CLASS: &str =
    "px-4 py-2 text-sm font-medium text-gray-700 bg-gray-100 rounded-md hover:bg-gray-200 transition-colors";
const SUBMIT_BASE_CLASS: &str = "px-4 py-2 text-sm font-medium text-white rounded-md transition-colors";

/// Full class list for the submit button
pub fn submit_button_class(submit_class: &str, disabled: bool) -> String {
    let style = if disabled { DISABLED_SUBMIT_CLASS } else { submit_class };
    format!("{} {}", SUBMIT_BASE_CLASS, style)
}

/// Whether a click on Submit should reach `on_submit`; unset means active
pub fn submit_allowed(disabled: Option<bool>) -> bool {
    !disabled.unwrap_or(false)
}

/// Cancel/submit button pair for modal forms
///
/// # Arguments
/// * `on_close` - Called when Cancel is clicked
/// * `on_submit` - Called with the click event when Submit is clicked
/// * `submit_disabled` - When true, Submit is inert and muted; when unset, always active
#[component]
pub fn ModalButtons(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_submit: Callback<MouseEvent>,
    #[prop(into, default = DEFAULT_CANCEL_LABEL.to_string())] cancel_label: String,
    #[prop(into, default = DEFAULT_SUBMIT_LABEL.to_string())] submit_label: String,
    #[prop(into, default = DEFAULT_SUBMIT_CLASS.to_string())] submit_class: String,
    #[prop(optional, into)] submit_disabled: MaybeProp<bool>,
) -> impl IntoView {
    let is_disabled = move || !submit_allowed(submit_disabled.get());

    view! {
        <div class="flex justify-end gap-3 pt-4 border-t">
            <button
                type="button"
                class=CANCEL_CLASS
                on:click=move |_| on_close.run(())
            >
                {cancel_label}
            </button>
            <button
                type="button"
                class=move || submit_button_class(&submit_class, is_disabled())
                disabled=is_disabled
                on:click=move |ev| {
                    if submit_allowed(submit_disabled.get()) {
                        on_submit.run(ev);
                    }
                }
            >
                {submit_label}
            </button>
        </div>
    }
}
