use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    core::{
        errors::FetchFailure,
        models::FetchRequest,
    },
    llm,
};

/// Runs fetches on worker threads and hands their results back over an mpsc
/// channel. `poll_results` must only be called from the UI thread; that is
/// what keeps all display mutation on the UI side without any locking.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// One worker per submission, no deduplication: pressing the button again
    /// while a fetch is in flight starts an independent second request.
    pub fn fetch_sentence(&self, endpoint: String, request: FetchRequest, card_id: u64) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(async { llm::api::fetch_example_sentence(&endpoint, &request).await })
                .map_err(FetchFailure::from);

            let _ = sender.send(TaskResult::SentenceFetched { card_id, result });
        });
    }
}
