pub mod history;
pub mod image;
pub mod llm;
pub mod product_lookup;
