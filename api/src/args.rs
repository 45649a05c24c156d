use std::time::Duration;

use ayurdiet_core::domain::common::{AyurdietConfig, LLMConfig, RecommendationConfig};
use clap::{Args as ClapArgs, Parser};

#[derive(Debug, Clone, Parser)]
#[command(name = "ayurdiet-api", version, about = "AyurDiet clinical API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub recommendation: RecommendationArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,
}

#[derive(Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "HF_API_KEY")]
    pub hf_api_key: Option<String>,

    #[arg(long, env = "HF_MODEL", default_value = "mistralai/Mistral-7B-Instruct-v0.2")]
    pub hf_model: String,

    #[arg(
        long,
        env = "HF_BASE_URL",
        default_value = "https://api-inference.huggingface.co"
    )]
    pub hf_base_url: String,
}

impl std::fmt::Debug for LlmArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmArgs")
            .field("hf_api_key", &self.hf_api_key.as_ref().map(|_| "[REDACTED]"))
            .field("hf_model", &self.hf_model)
            .field("hf_base_url", &self.hf_base_url)
            .finish()
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct RecommendationArgs {
    /// Seconds to wait for the text-generation backend before falling back.
    #[arg(long, env = "GENERATION_TIMEOUT_SECS", default_value_t = 30)]
    pub generation_timeout_secs: u64,

    /// Drop suggested foods that are not in the catalog instead of only reporting them.
    #[arg(long, env = "FILTER_UNLISTED_FOODS")]
    pub filter_unlisted_foods: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for AyurdietConfig {
    fn from(args: Args) -> Self {
        AyurdietConfig {
            llm: LLMConfig {
                api_key: args.llm.hf_api_key,
                model: args.llm.hf_model,
                base_url: args.llm.hf_base_url,
            },
            recommendation: RecommendationConfig {
                generation_timeout: Duration::from_secs(args.recommendation.generation_timeout_secs),
                filter_unlisted_foods: args.recommendation.filter_unlisted_foods,
            },
        }
    }
}
