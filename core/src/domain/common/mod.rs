use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o";
pub const DEFAULT_MAX_TOKENS: u32 = 1200;
pub const DEFAULT_PRODUCT_LOOKUP_BASE_URL: &str = "https://world.openfoodfacts.org";

#[derive(Clone, Debug)]
pub struct LabelSlayerConfig {
    pub llm: LLMConfig,
    pub history: HistoryConfig,
    pub product_lookup: ProductLookupConfig,
    pub image: ImageConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub timeout_seconds: u64,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_LLM_MODEL.to_string(),
            base_url: DEFAULT_LLM_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_seconds: 120,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryBackend {
    File,
    Memory,
}

#[derive(Clone, Debug)]
pub struct HistoryConfig {
    pub backend: HistoryBackend,
    pub data_dir: PathBuf,
}

/// Filesystem locators are only served from below `root`; `None` disables them.
#[derive(Clone, Debug, Default)]
pub struct ImageConfig {
    pub root: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct ProductLookupConfig {
    pub base_url: String,
    pub page_size: u32,
}

impl Default for ProductLookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PRODUCT_LOOKUP_BASE_URL.to_string(),
            page_size: 10,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let nanos = now.timestamp_subsec_nanos();
    let timestamp = Timestamp::from_unix(NoContext, seconds, nanos);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Current time in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
