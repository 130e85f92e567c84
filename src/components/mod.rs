//! UI Components
//!
//! Reusable Leptos components.

mod modal_buttons;
mod delete_confirm_button;
mod timer_form;
mod timer_card;
mod timer_list;

pub use modal_buttons::ModalButtons;
pub use delete_confirm_button::DeleteConfirmButton;
pub use timer_form::TimerForm;
pub use timer_card::TimerCard;
pub use timer_list::TimerList;
