pub mod common;
pub mod history;
pub mod image;
pub mod insights;
pub mod label_analysis;
pub mod product_lookup;
