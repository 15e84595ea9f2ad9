pub mod image_fetcher;
