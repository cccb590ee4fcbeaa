use super::surface::{
    button_html,
    button_style,
    show_sentence_js,
    PageContent,
    ReviewSurface,
};
use crate::{
    config::AddonConfig,
    core::{
        errors::FetchFailure,
        tasks::TaskManager,
        FetchRequest,
        ReibunError,
        ReviewCard,
    },
    review::{
        RenderTarget,
        FETCH_ACTION,
    },
};

/// Lifecycle of the sentence box on the current card. The presenter is the
/// only component that moves this to `Shown`; the guard only clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Absent,
    Shown { card_id: u64 },
}

impl Default for DisplayState {
    fn default() -> Self {
        DisplayState::Absent
    }
}

pub struct SentencePresenter {
    endpoint: String,
    display: DisplayState,
}

impl SentencePresenter {
    pub fn new(endpoint: String) -> Self {
        Self { endpoint, display: DisplayState::default() }
    }

    pub fn display(&self) -> DisplayState {
        self.display
    }

    pub fn display_mut(&mut self) -> &mut DisplayState {
        &mut self.display
    }

    /// The button is only offered on the reviewer bottom bar, and only when
    /// the active card's deck has a policy. Anywhere else nothing is injected,
    /// so no fetch can ever be triggered there.
    pub fn should_offer(
        &self,
        target: RenderTarget,
        card: Option<&ReviewCard>,
        config: &AddonConfig,
    ) -> bool {
        target == RenderTarget::ReviewerBottomBar
            && card.map_or(false, |card| config.policy_for(card.deck_id).is_some())
    }

    /// The page is rebuilt from scratch for every card, so appending here
    /// cannot duplicate controls.
    pub fn inject_button(&self, content: &mut PageContent, surface: &dyn ReviewSurface) {
        content.head.push_str(&button_style());
        content.body.push_str(&button_html(&surface.action_js(FETCH_ACTION)));
    }

    /// Snapshots the policy and key into a request and hands it to a worker,
    /// tagged with the card it was requested for.
    pub fn on_button_pressed(
        &self,
        card: &ReviewCard,
        config: &AddonConfig,
        tasks: &TaskManager,
    ) -> Result<(), ReibunError> {
        let policy = config
            .policy_for(card.deck_id)
            .ok_or(ReibunError::MissingPolicy(card.deck_id))?;

        let index = policy.mode.field_index();
        let word = card
            .fields
            .get(index)
            .map(|field| field.trim())
            .filter(|word| !word.is_empty())
            .ok_or(ReibunError::MissingWordField(index))?
            .to_string();

        let request = FetchRequest {
            word,
            language: policy.language,
            difficulty: policy.difficulty,
            api_key: config.global.api_key.clone(),
        };

        tasks.fetch_sentence(self.endpoint.clone(), request, card.card_id);
        Ok(())
    }

    /// Runs on the UI thread once a worker finishes. Results whose card tag no
    /// longer matches the active card are dropped; the fetch was for a card
    /// that is gone.
    pub fn on_fetch_complete(
        &mut self,
        card_id: u64,
        result: Result<String, FetchFailure>,
        active_card_id: Option<u64>,
        surface: &mut dyn ReviewSurface,
    ) {
        if active_card_id != Some(card_id) {
            println!("Dropping sentence for card {card_id}; a different card is active");
            return;
        }

        let text = match result {
            Ok(sentence) => sentence,
            Err(failure) => format!("Example sentence unavailable: {}", failure.message),
        };

        surface.eval_js(&show_sentence_js(&text));
        self.display = DisplayState::Shown { card_id };
    }
}
