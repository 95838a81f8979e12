//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod place_card;
mod place_form;
mod place_list;
mod toast_stack;

pub use delete_confirm_button::DeleteConfirmButton;
pub use place_card::PlaceCard;
pub use place_form::PlaceFormCard;
pub use place_list::PlaceList;
pub use toast_stack::ToastStack;
