use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    image::{entities::FetchedImage, value_objects::ImageLocator},
};

/// Port dereferencing remote or local image locators
#[cfg_attr(test, mockall::automock)]
pub trait ImageFetcher: Send + Sync {
    fn fetch(
        &self,
        locator: ImageLocator,
    ) -> impl Future<Output = Result<FetchedImage, CoreError>> + Send;
}
