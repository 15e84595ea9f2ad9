pub mod entities;
pub mod helpers;
pub mod ports;
pub mod services;

pub use entities::*;
pub use helpers::{format_relative_time, product_emoji};
pub use ports::*;
pub use services::{HISTORY_CAPACITY, HISTORY_KEY, HistoryStore};
