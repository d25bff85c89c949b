//! Lobby setup flow: pack and rule selection, readiness checks, deck assembly
//! and the hand-off to gameplay.
//!
//! [`run_setup`] registers the lobby inputs, renders the initial view and then
//! feeds each [`LobbyEvent`] through [`SetupController::handle`] until a start
//! request succeeds. Every handler runs to completion before the next event is
//! read, so [`CahState`] is passed explicitly and never shared.

mod events;
mod view;

use futures::{Stream, StreamExt};
use tracing::{debug, info, instrument, warn};

pub use events::{LobbyAction, LobbyEvent, Step};
pub use view::{render_view, Field, SetupView, GAME_COLOR, GAME_TITLE};

use crate::catalog::PackCatalog;
use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::{
    assemble_decks, validate_decks, CahState, Decks, NumberField, PackSelection, PlayerId,
    PlayerState, Rule, Shuffler, StartRejection,
};
use crate::error::SetupError;
use crate::ports::{ConfigUi, ControlId, GameSession, Interaction, PlayerBounds, Reply};

/// Controls closed once the game starts.
pub const LOBBY_CONTROLS: [ControlId; 2] = [ControlId::Join, ControlId::Leave];

/// Outcome of a single lobby event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Started,
}

pub struct SetupController<R> {
    packs: PackSelection,
    shuffler: R,
}

impl<R: Shuffler> SetupController<R> {
    /// Build the candidate pack list for a lobby opened from `origin`.
    pub fn new(catalog: &PackCatalog, origin: Option<&str>, shuffler: R) -> Self {
        let packs = PackSelection::new(catalog.candidates(origin));
        debug!(packs = packs.len(), ?origin, "setup controller created");
        Self { packs, shuffler }
    }

    pub fn packs(&self) -> &PackSelection {
        &self.packs
    }

    pub fn view(&self, state: &CahState) -> SetupView {
        render_view(&self.packs, state)
    }

    /// Register player bounds and configuration inputs.
    pub fn register<S, U>(&self, session: &mut S, ui: &mut U, state: &CahState)
    where
        S: GameSession + ?Sized,
        U: ConfigUi + ?Sized,
    {
        session.set_player_bounds(PlayerBounds {
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        });

        ui.register_multi_select(ControlId::Packs, "Packs", &self.packs.options());
        ui.register_flags(ControlId::Rules, "Rules", &state.flags.options());
        ui.register_number(
            ControlId::MaxPoints,
            NumberField::MaxPoints.input(state.max_points()),
        );
        ui.register_number(
            ControlId::HandCards,
            NumberField::HandCards.input(state.hand_cards()),
        );
        ui.register_action(ControlId::Start, "Start");
    }

    /// Apply a configuration change. `Start` is not handled here.
    pub fn apply(&mut self, state: &mut CahState, action: &LobbyAction) {
        match *action {
            LobbyAction::Join(user) => {
                if state.add_user(user) {
                    info!(user, players = state.human_count(), "player joined");
                } else {
                    debug!(user, "already seated");
                }
            }
            LobbyAction::Leave(user) => {
                if state.remove_user(user) {
                    info!(user, players = state.human_count(), "player left");
                } else {
                    debug!(user, "leave from non-member");
                }
            }
            LobbyAction::TogglePack(index) => {
                if self.packs.toggle(index).is_none() {
                    debug!(index, "pack index out of range");
                }
            }
            LobbyAction::SelectPacks(ref indices) => self.packs.select_only(indices),
            LobbyAction::ToggleRule(rule) => {
                state.flags.toggle(rule);
            }
            LobbyAction::StepNumber(field, step) => {
                state.step_number(field, step.delta());
            }
            LobbyAction::SetNumber(field, value) => {
                state.set_number(field, value);
            }
            LobbyAction::Start => {}
        }
    }

    /// Build, validate and shuffle the decks, then seat Rando if enabled.
    ///
    /// On rejection both decks are left empty and nothing else changes.
    pub fn start(&mut self, state: &mut CahState) -> Result<(), StartRejection> {
        state.white_deck.clear();
        state.black_deck.clear();

        let decks = assemble_decks(self.packs.selected());
        validate_decks(&decks, state.flags, state.human_count(), state.hand_cards())?;

        let Decks {
            mut white,
            mut black,
        } = decks;
        self.shuffler.shuffle(&mut white);
        self.shuffler.shuffle(&mut black);
        state.white_deck = white;
        state.black_deck = black;

        if state.flags.is_enabled(Rule::Rando) {
            state.players.insert(PlayerId::Rando, PlayerState::default());
        }
        Ok(())
    }

    /// Handle one lobby event end to end, including replies.
    #[instrument(skip_all, fields(interaction = event.interaction.id, user = event.interaction.user))]
    pub async fn handle<S, U>(
        &mut self,
        session: &mut S,
        ui: &mut U,
        state: &mut CahState,
        event: LobbyEvent,
    ) -> Result<Flow, SetupError>
    where
        S: GameSession + ?Sized,
        U: ConfigUi + ?Sized,
    {
        let LobbyEvent {
            interaction,
            action,
        } = event;

        if action != LobbyAction::Start {
            self.apply(state, &action);
            deliver(ui, &interaction, Reply::View(self.view(state))).await;
            return Ok(Flow::Continue);
        }

        if let Err(rejection) = self.start(state) {
            warn!(code = %rejection.code(), %rejection, "start rejected");
            deliver(ui, &interaction, Reply::Private(rejection.to_string())).await;
            return Ok(Flow::Continue);
        }

        info!(
            players = state.players.len(),
            white = state.white_deck.len(),
            black = state.black_deck.len(),
            "decks built, starting game"
        );
        ui.disable(&LOBBY_CONTROLS);
        session.reset_controls();
        session.start_lobby(&self.view(state)).await?;
        Ok(Flow::Started)
    }
}

/// Send a reply; delivery failures are logged and the lobby carries on.
async fn deliver<U: ConfigUi + ?Sized>(ui: &mut U, to: &Interaction, reply: Reply) {
    if let Err(err) = ui.send(to, reply).await {
        warn!(code = %err.code(), error = %err, interaction = to.id, "reply not delivered");
    }
}

/// Drive the lobby until the game starts.
///
/// The candidate pack list comes from `catalog` gated by the session's own
/// origin. Completes with `Ok(())` exactly once, after the session's start
/// transition. Rejected start requests keep the lobby open; an event stream
/// that ends first yields [`SetupError::LobbyClosed`].
pub async fn run_setup<S, U, R, E>(
    session: &mut S,
    ui: &mut U,
    state: &mut CahState,
    catalog: &PackCatalog,
    shuffler: R,
    mut events: E,
    opening: &Interaction,
) -> Result<(), SetupError>
where
    S: GameSession + ?Sized,
    U: ConfigUi + ?Sized,
    R: Shuffler,
    E: Stream<Item = LobbyEvent> + Unpin,
{
    let mut controller = SetupController::new(catalog, session.origin(), shuffler);
    controller.register(session, ui, state);
    deliver(ui, opening, Reply::View(controller.view(state))).await;

    while let Some(event) = events.next().await {
        if controller.handle(session, ui, state, event).await? == Flow::Started {
            return Ok(());
        }
    }

    warn!(code = %SetupError::LobbyClosed.code(), "lobby closed before start");
    Err(SetupError::LobbyClosed)
}
