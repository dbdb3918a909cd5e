/// Remote reranker provider, with fixed base URL / endpoint / default model
/// (spec §4.6 "Provider defaults are fixed for three providers").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Siliconflow,
    Cohere,
    Jina,
}

#[derive(Debug, Clone, Copy)]
pub struct ProviderDefaults {
    pub base_url: &'static str,
    pub endpoint_path: &'static str,
    pub default_model: &'static str,
    pub env_var: &'static str,
}

impl Provider {
    pub fn defaults(self) -> ProviderDefaults {
        match self {
            Provider::Siliconflow => ProviderDefaults {
                base_url: "https://api.siliconflow.cn/v1",
                endpoint_path: "/rerank",
                default_model: "BAAI/bge-reranker-v2-m3",
                env_var: "SILICONFLOW_API_KEY",
            },
            Provider::Cohere => ProviderDefaults {
                base_url: "https://api.cohere.ai/v1",
                endpoint_path: "/rerank",
                default_model: "rerank-english-v3.0",
                env_var: "COHERE_API_KEY",
            },
            Provider::Jina => ProviderDefaults {
                base_url: "https://api.jina.ai/v1",
                endpoint_path: "/rerank",
                default_model: "jina-reranker-v2-base-multilingual",
                env_var: "JINA_API_KEY",
            },
        }
    }

    pub fn endpoint_url(self) -> String {
        let d = self.defaults();
        format!("{}{}", d.base_url, d.endpoint_path)
    }
}

/// Infers `max_input_tokens` from the model name when not set explicitly
/// (spec §4.6, `SPEC_FULL.md`): `8b`/`large`-class models get a larger
/// window, everything else gets the conservative default.
pub fn infer_max_input_tokens(model_name: &str) -> usize {
    let lower = model_name.to_lowercase();
    if lower.contains("8b") || lower.contains("large") {
        32768
    } else {
        8192
    }
}
