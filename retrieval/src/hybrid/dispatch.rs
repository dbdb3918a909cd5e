use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use codesearch_core::{BackendResults, SearchResult, SourceId};

/// One backend's unit of work, already bound to its adapter and query.
pub type BackendTask = (SourceId, Box<dyn FnOnce() -> Vec<SearchResult> + Send>);

/// Runs every task on its own thread and collects results under an overall
/// wall-clock deadline and a per-task deadline (spec §4.7 "Parallel
/// dispatch", §5 "Timeouts and cancellation").
///
/// Rust has no cooperative cancellation point to interrupt a backend
/// mid-call the way the original implementation cancels a future; a
/// straggling thread is left to run to completion in the background and its
/// result is discarded, which is externally indistinguishable from
/// cancellation (the source is still treated as empty for this call).
pub fn dispatch_parallel(tasks: Vec<BackendTask>, overall_deadline: Duration, per_task_deadline: Duration) -> BackendResults {
    let expected = tasks.len();
    let (tx, rx) = mpsc::channel();
    for (source, task) in tasks {
        let tx = tx.clone();
        thread::spawn(move || {
            let result = task();
            // Receiver may already be gone if the overall deadline passed;
            // that's fine, the send is just dropped.
            let _ = tx.send((source, result));
        });
    }
    drop(tx);

    let start = Instant::now();
    let mut results: BackendResults = HashMap::new();
    for _ in 0..expected {
        let elapsed = start.elapsed();
        if elapsed >= overall_deadline {
            tracing::warn!(elapsed_ms = elapsed.as_millis() as u64, "hybrid search overall deadline exceeded");
            break;
        }
        let remaining_overall = overall_deadline - elapsed;
        let wait = per_task_deadline.min(remaining_overall);

        match rx.recv_timeout(wait) {
            Ok((source, source_results)) => {
                results.insert(source, source_results);
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                tracing::warn!(wait_ms = wait.as_millis() as u64, "backend future exceeded per-task deadline");
                continue;
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_all_fast_tasks() {
        let tasks: Vec<BackendTask> = vec![
            (SourceId::Exact, Box::new(|| vec![SearchResult::new("a", 1.0, "x")])),
            (SourceId::Fuzzy, Box::new(|| vec![SearchResult::new("b", 1.0, "y")])),
        ];
        let results = dispatch_parallel(tasks, Duration::from_secs(5), Duration::from_secs(2));
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn slow_task_is_treated_as_empty_source() {
        let tasks: Vec<BackendTask> = vec![
            (SourceId::Exact, Box::new(|| vec![SearchResult::new("a", 1.0, "x")])),
            (
                SourceId::Vector,
                Box::new(|| {
                    thread::sleep(Duration::from_millis(200));
                    vec![SearchResult::new("b", 1.0, "y")]
                }),
            ),
        ];
        let results = dispatch_parallel(tasks, Duration::from_secs(5), Duration::from_millis(20));
        assert!(results.contains_key(&SourceId::Exact));
        assert!(!results.contains_key(&SourceId::Vector));
    }
}
