//! UI Components
//!
//! Reusable Leptos widgets for the wallet screens.

mod action_button;
mod card_stack;
mod transaction_item;
mod spending_chart;
mod summary_card;
mod category_card;

pub use action_button::ActionButton;
pub use card_stack::CardStack;
pub use transaction_item::TransactionItem;
pub use spending_chart::SpendingChart;
pub use summary_card::SummaryCard;
pub use category_card::CategoryCard;
