use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, product_lookup::entities::ProductCandidate,
};

#[cfg_attr(test, mockall::automock)]
pub trait ProductLookup: Send + Sync {
    fn search(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Vec<ProductCandidate>, CoreError>> + Send;
}

pub trait ProductLookupService: Send + Sync {
    fn search_products(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Vec<ProductCandidate>, CoreError>> + Send;
}
