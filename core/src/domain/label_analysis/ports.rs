use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    label_analysis::value_objects::{
        AnalysisOutcome, AnalyzeImageInput, AnalyzeProductInput, AnalyzeTextInput,
        CompletionRequest,
    },
};

/// Remote model contract: one structured request in, raw completion text out.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Fails with `ConfigurationError` when no credential is available.
    fn ensure_configured(&self) -> Result<(), CoreError>;

    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

pub trait LabelAnalysisService: Send + Sync {
    fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<AnalysisOutcome, CoreError>> + Send;

    fn analyze_text(
        &self,
        input: AnalyzeTextInput,
    ) -> impl Future<Output = Result<AnalysisOutcome, CoreError>> + Send;

    fn analyze_product(
        &self,
        input: AnalyzeProductInput,
    ) -> impl Future<Output = Result<AnalysisOutcome, CoreError>> + Send;
}
