use crate::core::errors::FetchFailure;

/// Results delivered from worker threads back to the UI thread. Every fetch
/// carries the id of the card it was requested for so the presenter can
/// discard completions that outlived their card.
#[derive(Debug, Clone)]
pub enum TaskResult {
    SentenceFetched { card_id: u64, result: Result<String, FetchFailure> },
}
