//! Recording fakes for the session, UI and shuffle ports.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use cah::domain::NumberInput;
use cah::{
    ConfigUi, ControlId, GameSession, Interaction, PlayerBounds, Reply, SessionError, SetupView,
    Shuffler, UiError,
};

#[derive(Debug, Default)]
pub struct FakeSession {
    pub origin: Option<String>,
    pub bounds: Option<PlayerBounds>,
    pub resets: usize,
    pub started: Vec<SetupView>,
    /// Returned from `start_lobby` when set.
    pub start_error: Option<SessionError>,
}

impl FakeSession {
    pub fn from_origin(origin: &str) -> Self {
        Self {
            origin: Some(origin.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_start(detail: &str) -> Self {
        Self::with_start_error(SessionError::Start {
            detail: detail.to_string(),
        })
    }

    pub fn with_start_error(err: SessionError) -> Self {
        Self {
            start_error: Some(err),
            ..Self::default()
        }
    }
}

#[async_trait]
impl GameSession for FakeSession {
    fn set_player_bounds(&mut self, bounds: PlayerBounds) {
        self.bounds = Some(bounds);
    }

    fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    fn reset_controls(&mut self) {
        self.resets += 1;
    }

    async fn start_lobby(&mut self, view: &SetupView) -> Result<(), SessionError> {
        if let Some(err) = self.start_error.clone() {
            return Err(err);
        }
        self.started.push(view.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FakeUi {
    pub multi_selects: Vec<(ControlId, String, Vec<(String, bool)>)>,
    pub flags: Vec<(ControlId, String, Vec<(&'static str, bool)>)>,
    pub numbers: Vec<(ControlId, NumberInput)>,
    pub actions: Vec<(ControlId, String)>,
    pub disabled: Vec<ControlId>,
    pub sent: Vec<(Interaction, Reply)>,
    /// Returned from every `send`, after recording the attempt.
    pub send_error: Option<UiError>,
}

impl FakeUi {
    pub fn failing() -> Self {
        Self::with_send_error(UiError::delivery("channel gone"))
    }

    pub fn with_send_error(err: UiError) -> Self {
        Self {
            send_error: Some(err),
            ..Self::default()
        }
    }

    pub fn views(&self) -> Vec<&SetupView> {
        self.sent
            .iter()
            .filter_map(|(_, reply)| match reply {
                Reply::View(view) => Some(view),
                Reply::Private(_) => None,
            })
            .collect()
    }

    pub fn private_messages(&self) -> Vec<(u64, &str)> {
        self.sent
            .iter()
            .filter_map(|(to, reply)| match reply {
                Reply::Private(text) => Some((to.user, text.as_str())),
                Reply::View(_) => None,
            })
            .collect()
    }

    pub fn last_view(&self) -> Option<&SetupView> {
        self.views().into_iter().last()
    }
}

#[async_trait]
impl ConfigUi for FakeUi {
    fn register_multi_select(&mut self, control: ControlId, label: &str, options: &[(String, bool)]) {
        self.multi_selects
            .push((control, label.to_string(), options.to_vec()));
    }

    fn register_flags(&mut self, control: ControlId, label: &str, options: &[(&'static str, bool)]) {
        self.flags.push((control, label.to_string(), options.to_vec()));
    }

    fn register_number(&mut self, control: ControlId, input: NumberInput) {
        self.numbers.push((control, input));
    }

    fn register_action(&mut self, control: ControlId, label: &str) {
        self.actions.push((control, label.to_string()));
    }

    fn disable(&mut self, controls: &[ControlId]) {
        self.disabled.extend_from_slice(controls);
    }

    async fn send(&mut self, to: &Interaction, reply: Reply) -> Result<(), UiError> {
        self.sent.push((to.clone(), reply));
        match &self.send_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// Reverses every deck it is handed and counts the calls.
///
/// The counter is shared so it stays readable after the shuffler is moved
/// into `run_setup`.
#[derive(Debug, Clone, Default)]
pub struct ReversingShuffler {
    calls: Arc<AtomicUsize>,
}

impl ReversingShuffler {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Shuffler for ReversingShuffler {
    fn shuffle(&mut self, cards: &mut [String]) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        cards.reverse();
    }
}
