pub mod guard;
pub mod presenter;
pub mod surface;

#[cfg(test)]
pub mod testing;

pub use presenter::{
    DisplayState,
    SentencePresenter,
};
pub use surface::{
    PageContent,
    ReviewSurface,
};

use crate::{
    config::AddonConfig,
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        ReviewCard,
    },
    llm,
};

/// Action name carried by the injected button's command bridge.
pub const FETCH_ACTION: &str = "get_sentence_for_card";

/// What the host is about to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    ReviewerBottomBar,
    Other,
}

/// The add-on core. The host invokes one method per UI event and calls
/// `poll` from its event-loop tick; everything here runs on the UI thread.
pub struct ReibunAddon {
    config: AddonConfig,
    presenter: SentencePresenter,
    tasks: TaskManager,
    active_card: Option<ReviewCard>,
}

impl ReibunAddon {
    pub fn new(config: AddonConfig) -> Self {
        Self::with_endpoint(config, llm::DEFAULT_ENDPOINT.to_string())
    }

    /// Point the fetcher at an OpenAI-compatible endpoint.
    pub fn with_endpoint(config: AddonConfig, endpoint: String) -> Self {
        Self {
            config,
            presenter: SentencePresenter::new(endpoint),
            tasks: TaskManager::new(),
            active_card: None,
        }
    }

    pub fn config(&self) -> &AddonConfig {
        &self.config
    }

    /// Replace the config snapshot (the settings collaborator saved changes).
    pub fn set_config(&mut self, config: AddonConfig) {
        self.config = config;
    }

    /// Host event: page content about to render.
    pub fn on_render(
        &self,
        target: RenderTarget,
        content: &mut PageContent,
        surface: &dyn ReviewSurface,
    ) {
        if self.presenter.should_offer(target, self.active_card.as_ref(), &self.config) {
            self.presenter.inject_button(content, surface);
        }
    }

    /// Host event: the UI requested an action by name. Returns true when the
    /// action was ours, whether or not the fetch could be submitted.
    pub fn on_action(&mut self, name: &str) -> bool {
        if name != FETCH_ACTION {
            return false;
        }

        let Some(card) = self.active_card.as_ref() else {
            return false;
        };

        if let Err(e) = self.presenter.on_button_pressed(card, &self.config, &self.tasks) {
            eprintln!("Sentence fetch not submitted: {e}");
        }

        true
    }

    /// Host event: a new card is about to be shown (None when leaving the
    /// reviewer). Clears the previous card's box before anything renders.
    pub fn on_card_changed(&mut self, card: Option<ReviewCard>, surface: &mut dyn ReviewSurface) {
        guard::clear_stale_display(self.presenter.display_mut(), surface);
        self.active_card = card;
    }

    /// Drain finished fetches. Call from the host's UI tick; this is the only
    /// place worker results touch the page.
    pub fn poll(&mut self, surface: &mut dyn ReviewSurface) {
        let active_card_id = self.active_card.as_ref().map(|card| card.card_id);

        for result in self.tasks.poll_results() {
            match result {
                TaskResult::SentenceFetched { card_id, result } => {
                    self.presenter.on_fetch_complete(card_id, result, active_card_id, surface);
                }
            }
        }
    }
}
