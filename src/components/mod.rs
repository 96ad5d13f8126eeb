//! UI Components

mod knockout_modal;
mod summary_bar;
mod title_bar;
mod toast_host;
mod todo_item;
mod todo_list;

pub use knockout_modal::KnockoutModal;
pub use summary_bar::SummaryBar;
pub use title_bar::TitleBar;
pub use toast_host::ToastHost;
pub use todo_item::TodoRow;
pub use todo_list::TodoList;
