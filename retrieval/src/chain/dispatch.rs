use rayon::prelude::*;

use codesearch_core::models::{IndexHandle, SearchOptions, SearchResult};

use super::factory::HybridSearchFactory;

/// Fans `HybridSearch::search` out across every discovered directory on a
/// pool sized by `workers` (spec §4.8 "Parallel per-directory search",
/// §5 "long-lived shared pool"). A per-directory build/search failure is
/// logged and contributes an empty list plus one `errors` entry rather than
/// failing the call.
pub fn dispatch_directories(
    factory: &dyn HybridSearchFactory,
    descendants: &[IndexHandle],
    query: &str,
    opts: &SearchOptions,
    workers: usize,
) -> (Vec<SearchResult>, Vec<String>) {
    let pool = match rayon::ThreadPoolBuilder::new().num_threads(workers.max(1)).build() {
        Ok(pool) => pool,
        Err(err) => return (Vec::new(), vec![format!("failed to build worker pool: {err}")]),
    };

    let per_dir: Vec<(Vec<SearchResult>, Option<String>)> = pool.install(|| {
        descendants
            .par_iter()
            .map(|handle| match factory.build(handle) {
                Ok(hybrid) => (hybrid.search(query, opts), None),
                Err(err) => {
                    let message = format!("{}: {err}", handle.dir().display());
                    tracing::debug!(dir = %handle.dir().display(), error = %err, "failed to build hybrid search for directory");
                    (Vec::new(), Some(message))
                }
            })
            .collect()
    });

    let mut results = Vec::new();
    let mut errors = Vec::new();
    for (dir_results, error) in per_dir {
        results.extend(dir_results);
        if let Some(error) = error {
            errors.push(error);
        }
    }
    (results, errors)
}

/// Reduces the effective worker count to 1 whenever a GPU-resident backend
/// is active, to avoid GPU context contention across threads (spec §5
/// "GPU safety").
pub fn effective_workers(requested: usize, gpu_active: bool) -> usize {
    if gpu_active {
        1
    } else {
        requested.max(1)
    }
}
