pub mod huggingface_client;

pub use huggingface_client::HuggingFaceLLMClient;
