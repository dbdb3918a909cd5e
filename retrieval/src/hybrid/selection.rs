use codesearch_core::config::RetrievalConfig;
use codesearch_core::{SearchOptions, SourceId};

/// Chooses the active backend set for one Hybrid call (spec §4.7 "Backend
/// selection"). `splade_available` is the live availability probe (spec §1.1
/// resolved precedence: `use_fts_fallback` disables SPLADE outright,
/// otherwise `config.enable_splade` gates it, otherwise it's a runtime
/// dependency/table check the caller has already performed).
pub fn select_backends(opts: &SearchOptions, config: &RetrievalConfig, splade_available: bool) -> Vec<SourceId> {
    if opts.pure_vector {
        return vec![SourceId::Vector];
    }

    let splade_allowed_by_config = !config.use_fts_fallback && config.enable_splade;
    let splade_requested = opts.enable_splade && splade_allowed_by_config;

    if splade_requested {
        return if splade_available {
            let mut sel = vec![SourceId::Splade];
            if opts.enable_vector {
                sel.push(SourceId::Vector);
            }
            sel
        } else {
            tracing::warn!("splade requested but unavailable, falling back to lexical backends");
            lexical_fallback(opts)
        };
    }

    if splade_allowed_by_config && splade_available {
        let mut sel = vec![SourceId::Splade];
        if opts.enable_vector {
            sel.push(SourceId::Vector);
        }
        return sel;
    }

    lexical_fallback(opts)
}

fn lexical_fallback(opts: &SearchOptions) -> Vec<SourceId> {
    let mut sel = vec![SourceId::Exact];
    if opts.enable_fuzzy {
        sel.push(SourceId::Fuzzy);
    }
    if opts.enable_vector {
        sel.push(SourceId::Vector);
    }
    sel
}
