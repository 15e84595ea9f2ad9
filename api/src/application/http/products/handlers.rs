pub mod analyze_product;
pub mod search_products;
