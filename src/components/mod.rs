//! UI Components
//!
//! Reusable Leptos components.

mod datetime_input;
mod delete_confirm_button;
mod item_type_card;
mod rating_input;
mod saving_alert;
mod spinner;
mod type_picker_modal;

pub use datetime_input::DateTimeInput;
pub use delete_confirm_button::DeleteConfirmButton;
pub use item_type_card::ItemTypeCard;
pub use rating_input::RatingInput;
pub use saving_alert::SavingAlert;
pub use spinner::Spinner;
pub use type_picker_modal::TypePickerModal;
