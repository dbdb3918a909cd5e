use std::path::Path;

/// Resolves an API key in the order specified by spec §4.6: explicit
/// argument, then the provider's own env var, then the generic
/// `RERANKER_API_KEY` env var, then a `.env`-style file in the workspace
/// root (mirrors `_get_env_with_fallback` in the original implementation).
pub fn resolve_api_key(explicit: Option<&str>, provider_env_var: &str, workspace_root: Option<&Path>) -> Option<String> {
    if let Some(key) = explicit {
        if !key.is_empty() {
            return Some(key.to_string());
        }
    }
    if let Ok(value) = std::env::var(provider_env_var) {
        if !value.is_empty() {
            return Some(value);
        }
    }
    if let Ok(value) = std::env::var("RERANKER_API_KEY") {
        if !value.is_empty() {
            return Some(value);
        }
    }
    workspace_root.and_then(|root| read_dotenv_value(root, provider_env_var))
}

fn read_dotenv_value(root: &Path, key: &str) -> Option<String> {
    let content = std::fs::read_to_string(root.join(".env")).ok()?;
    content.lines().find_map(|line| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let (k, v) = line.split_once('=')?;
        if k.trim() != key {
            return None;
        }
        Some(v.trim().trim_matches('"').to_string())
    })
}
