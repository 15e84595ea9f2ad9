use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    history::ports::{HistoryRepository, HistoryService},
    image::{ports::ImageFetcher, services::encode_image},
    label_analysis::{
        entities::LabelAnalysis,
        parser::{parse_label_analysis, parse_label_analysis_or},
        ports::{LLMClient, LabelAnalysisService},
        prompts::{LABEL_PERSONA, WEB_PERSONA, label_instruction, product_instruction},
        value_objects::{
            AnalysisOutcome, AnalyzeImageInput, AnalyzeProductInput, AnalyzeTextInput,
            CompletionRequest,
        },
    },
    product_lookup::ports::ProductLookup,
};

fn is_data_uri(locator: &str) -> bool {
    locator
        .trim_start()
        .get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("data:"))
}

impl<LLM, IF, HR, PL> Service<LLM, IF, HR, PL>
where
    LLM: LLMClient,
    IF: ImageFetcher,
    HR: HistoryRepository,
    PL: ProductLookup,
{
    async fn finish_analysis(
        &self,
        analysis: LabelAnalysis,
        save_to_history: bool,
        photo_uri: Option<String>,
    ) -> AnalysisOutcome {
        let history_item = if save_to_history {
            self.history_store.save(analysis.clone(), photo_uri).await
        } else {
            None
        };

        AnalysisOutcome {
            analysis,
            history_item,
        }
    }
}

impl<LLM, IF, HR, PL> LabelAnalysisService for Service<LLM, IF, HR, PL>
where
    LLM: LLMClient,
    IF: ImageFetcher,
    HR: HistoryRepository,
    PL: ProductLookup,
{
    #[instrument(skip(self, input), fields(save_to_history = input.save_to_history))]
    async fn analyze_image(&self, input: AnalyzeImageInput) -> Result<AnalysisOutcome, CoreError> {
        // 1. Credential check happens before the image is touched
        self.llm_client.ensure_configured()?;

        // 2. Encode image
        let image = encode_image(self.image_fetcher.as_ref(), &input.image_uri).await?;

        // 3. Call model
        let request = CompletionRequest {
            system: LABEL_PERSONA.to_string(),
            instruction: label_instruction(),
            image: Some(image),
        };
        let raw_response = self.llm_client.complete(request).await?;

        // 4. Parse and validate
        let analysis = parse_label_analysis(&raw_response);
        info!(
            product = %analysis.product_name,
            score = analysis.score,
            ingredients = analysis.ingredients.len(),
            "Label analyzed"
        );

        let photo_uri = input
            .photo_uri
            .or_else(|| (!is_data_uri(&input.image_uri)).then(|| input.image_uri.clone()));

        Ok(self
            .finish_analysis(analysis, input.save_to_history, photo_uri)
            .await)
    }

    #[instrument(skip(self, input), fields(product = %input.product_name, save_to_history = input.save_to_history))]
    async fn analyze_text(&self, input: AnalyzeTextInput) -> Result<AnalysisOutcome, CoreError> {
        self.llm_client.ensure_configured()?;

        let request = CompletionRequest {
            system: WEB_PERSONA.to_string(),
            instruction: product_instruction(
                &input.product_name,
                input.brand.as_deref(),
                &input.ingredients,
            ),
            image: None,
        };
        let raw_response = self.llm_client.complete(request).await?;

        let analysis = parse_label_analysis_or(
            &raw_response,
            LabelAnalysis::product_fallback(&input.product_name),
        );
        info!(
            score = analysis.score,
            ingredients = analysis.ingredients.len(),
            "Product analyzed"
        );

        Ok(self
            .finish_analysis(analysis, input.save_to_history, None)
            .await)
    }

    #[instrument(skip(self, input), fields(product = %input.candidate.product_name))]
    async fn analyze_product(
        &self,
        input: AnalyzeProductInput,
    ) -> Result<AnalysisOutcome, CoreError> {
        let ingredients = input
            .candidate
            .ingredients()
            .ok_or_else(|| {
                CoreError::InvalidInput("product has no ingredient list".to_string())
            })?
            .to_string();

        let brand = input.candidate.brand_or_unknown().to_string();
        let photo_uri = input.candidate.image_url.clone();
        let mut outcome = self
            .analyze_text(AnalyzeTextInput {
                product_name: input.candidate.product_name,
                ingredients,
                brand: Some(brand),
                save_to_history: false,
            })
            .await?;

        if input.save_to_history {
            outcome.history_item = self
                .history_store
                .save(outcome.analysis.clone(), photo_uri)
                .await;
        }

        Ok(outcome)
    }
}
