//! UI State Store
//!
//! Uses Leptos reactive_stores for which dialog is open.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TimerId;

/// Dialog currently shown over the timer list
#[derive(Clone, Debug, PartialEq)]
pub enum Dialog {
    NewTimer,
    EditTimer(TimerId),
}

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    pub dialog: Option<Dialog>,
}

pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

pub fn open_dialog(store: &UiStore, dialog: Dialog) {
    *store.dialog().write() = Some(dialog);
}

pub fn close_dialog(store: &UiStore) {
    *store.dialog().write() = None;
}

/// Currently open dialog (tracked)
pub fn current_dialog(store: &UiStore) -> Option<Dialog> {
    store.dialog().get()
}
