use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use label_slayer_core::domain::common::{
    DEFAULT_LLM_BASE_URL, DEFAULT_LLM_MODEL, DEFAULT_MAX_TOKENS,
    DEFAULT_PRODUCT_LOOKUP_BASE_URL, HistoryBackend, HistoryConfig, ImageConfig, LLMConfig,
    LabelSlayerConfig, ProductLookupConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "label-slayer", version, about = "Packaged food label analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub history: HistoryArgs,

    #[command(flatten)]
    pub product_lookup: ProductLookupArgs,

    #[command(flatten)]
    pub image: ImageArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:8081"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long = "llm-model", env = "LLM_MODEL", default_value = DEFAULT_LLM_MODEL)]
    pub model: String,

    #[arg(id = "llm_base_url", long = "llm-base-url", env = "LLM_BASE_URL", default_value = DEFAULT_LLM_BASE_URL)]
    pub base_url: String,

    #[arg(long = "llm-max-tokens", env = "LLM_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    #[arg(long = "llm-timeout-seconds", env = "LLM_TIMEOUT_SECONDS", default_value_t = 120)]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HistoryBackendArg {
    File,
    Memory,
}

impl From<HistoryBackendArg> for HistoryBackend {
    fn from(value: HistoryBackendArg) -> Self {
        match value {
            HistoryBackendArg::File => HistoryBackend::File,
            HistoryBackendArg::Memory => HistoryBackend::Memory,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct HistoryArgs {
    #[arg(
        long = "history-backend",
        env = "HISTORY_BACKEND",
        value_enum,
        default_value_t = HistoryBackendArg::File
    )]
    pub backend: HistoryBackendArg,

    #[arg(long = "data-dir", env = "DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ProductLookupArgs {
    #[arg(
        id = "product_lookup_base_url",
        long = "product-lookup-base-url",
        env = "PRODUCT_LOOKUP_BASE_URL",
        default_value = DEFAULT_PRODUCT_LOOKUP_BASE_URL
    )]
    pub base_url: String,

    #[arg(
        long = "product-lookup-page-size",
        env = "PRODUCT_LOOKUP_PAGE_SIZE",
        default_value_t = 10
    )]
    pub page_size: u32,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ImageArgs {
    /// Directory that `file://` URLs and bare paths may read from. Unset rejects them.
    #[arg(long = "image-root", env = "IMAGE_ROOT")]
    pub root: Option<PathBuf>,
}

impl From<Args> for LabelSlayerConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                api_key: args.llm.api_key,
                model: args.llm.model,
                base_url: args.llm.base_url,
                max_tokens: args.llm.max_tokens,
                timeout_seconds: args.llm.timeout_seconds,
            },
            history: HistoryConfig {
                backend: args.history.backend.into(),
                data_dir: args.history.data_dir,
            },
            product_lookup: ProductLookupConfig {
                base_url: args.product_lookup.base_url,
                page_size: args.product_lookup.page_size,
            },
            image: ImageConfig {
                root: args.image.root,
            },
        }
    }
}
