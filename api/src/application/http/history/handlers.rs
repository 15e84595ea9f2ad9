pub mod clear_history;
pub mod delete_history_item;
pub mod get_history;
pub mod get_history_item;
pub mod save_history_item;
