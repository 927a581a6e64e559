//! Bounded-concurrency batch orchestration
//!
//! Every input URL becomes one spawned task. At most `workers` tasks are in
//! flight at a time and results are collected in completion order. A task
//! that panics is turned into an error result for its URL, so the returned
//! collection always holds one result per input.

use crate::analyzer::AnalysisResult;
use crate::AuditError;
use futures::stream::{self, StreamExt};
use std::any::Any;
use std::future::Future;
use tokio::task::JoinError;

/// Runs `task` for every URL with at most `workers` tasks in flight
///
/// # Arguments
///
/// * `urls` - Input URLs, in input order
/// * `workers` - Maximum number of concurrently running tasks
/// * `task` - Produces the analysis future for one URL
///
/// # Returns
///
/// * `Ok(Vec<AnalysisResult>)` - One result per input URL, in completion order
/// * `Err(AuditError)` - `workers` was zero
pub async fn run_batch<F, Fut>(
    urls: &[String],
    workers: usize,
    task: F,
) -> Result<Vec<AnalysisResult>, AuditError>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = AnalysisResult> + Send + 'static,
{
    if workers == 0 {
        return Err(AuditError::InvalidWorkerCount(workers));
    }

    tracing::info!(
        "Analyzing batch of {} URLs with {} workers",
        urls.len(),
        workers
    );

    let results: Vec<AnalysisResult> = stream::iter(urls.iter().cloned())
        .map(|url| {
            let handle = tokio::spawn(task(url.clone()));
            async move {
                match handle.await {
                    Ok(result) => result,
                    Err(err) => {
                        let message = join_error_message(err);
                        tracing::error!("Unexpected error processing {}: {}", url, message);
                        AnalysisResult::failure(url, format!("Unexpected error: {}", message))
                    }
                }
            }
        })
        .buffer_unordered(workers)
        .collect()
        .await;

    tracing::info!("Completed analysis of {} URLs", results.len());

    Ok(results)
}

/// Extracts a readable message from a crashed or cancelled task
fn join_error_message(err: JoinError) -> String {
    if err.is_panic() {
        panic_message(err.into_panic())
    } else {
        err.to_string()
    }
}

fn panic_message(payload: Box<dyn Any + Send + 'static>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "task panicked".to_string()
    }
}
