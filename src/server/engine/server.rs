use actix::prelude::*;
use actix::MessageResult;
use log::{debug, error, info, warn};
use std::io;

use crate::config::game::BOARD_SIZE;
use crate::game::error::GameError;
use crate::game::save::{self, SaveStore};
use crate::game::state::GameState;
use crate::server::engine::messages::{GetSnapshot, Initialize, Interact, Load, Move, Save};

/// Sole owner of the live game state.
///
/// Commands arrive through the actor mailbox and are applied one at a time,
/// in submission order. Save and Load hold the mailbox while their file I/O
/// runs on the blocking pool, so no other command observes or mutates the
/// state in between.
pub struct GameEngine {
    state: GameState,
    store: SaveStore,
}

impl GameEngine {
    pub fn new(store: SaveStore) -> Self {
        Self {
            state: GameState::initial(),
            store,
        }
    }

    /// Snapshot on success; errors are logged and forwarded unchanged.
    fn reply(&self, command: &str, result: Result<(), GameError>) -> Result<GameState, GameError> {
        match result {
            Ok(()) => {
                debug!(
                    "[Engine] {} applied: player={} money={}",
                    command,
                    self.state.player(),
                    self.state.money()
                );
                Ok(self.state.clone())
            }
            Err(e) => {
                warn!("[Engine] {} failed: {}", command, e);
                Err(e)
            }
        }
    }
}

impl Actor for GameEngine {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!("[Engine] Started, saves in {}", self.store.dir().display());
    }
}

/// Runs file I/O off the actor's thread.
async fn run_blocking<T, F>(job: F) -> Result<T, GameError>
where
    F: FnOnce() -> Result<T, GameError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| GameError::Io(io::Error::other(e)))?
}

impl Handler<Initialize> for GameEngine {
    type Result = Result<GameState, GameError>;

    fn handle(&mut self, _msg: Initialize, _: &mut Context<Self>) -> Self::Result {
        self.state = GameState::initial();
        self.reply("Initialize", Ok(()))
    }
}

impl Handler<Move> for GameEngine {
    type Result = Result<GameState, GameError>;

    fn handle(&mut self, msg: Move, _: &mut Context<Self>) -> Self::Result {
        self.state.apply_move(msg.0);
        self.reply(&format!("Move({:?})", msg.0), Ok(()))
    }
}

impl Handler<Interact> for GameEngine {
    type Result = Result<GameState, GameError>;

    fn handle(&mut self, _msg: Interact, _: &mut Context<Self>) -> Self::Result {
        let result = self.state.apply_interact();
        self.reply("Interact", result)
    }
}

impl Handler<GetSnapshot> for GameEngine {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _msg: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.state.clone())
    }
}

impl Handler<Save> for GameEngine {
    type Result = AtomicResponse<Self, bool>;

    fn handle(&mut self, msg: Save, _: &mut Context<Self>) -> Self::Result {
        let text = save::encode(&self.state);
        let store = self.store.clone();
        let name = msg.name;

        AtomicResponse::new(Box::pin(
            run_blocking(move || store.write(&name, &text).map(|()| name))
                .into_actor(self)
                .map(|result, _act, _ctx| match result {
                    Ok(name) => {
                        info!("[Engine] Saved game as {:?}", name);
                        true
                    }
                    Err(e) => {
                        error!("[Engine] Save failed: {}", e);
                        false
                    }
                }),
        ))
    }
}

impl Handler<Load> for GameEngine {
    type Result = AtomicResponse<Self, Result<GameState, GameError>>;

    fn handle(&mut self, msg: Load, _: &mut Context<Self>) -> Self::Result {
        let store = self.store.clone();
        let name = msg.name;
        let label = format!("Load({:?})", name);

        AtomicResponse::new(Box::pin(
            run_blocking(move || store.read(&name))
                .into_actor(self)
                .map(move |result, act, _ctx| {
                    let loaded = result
                        .and_then(|text| save::decode(&text, BOARD_SIZE).map_err(GameError::from));
                    match loaded {
                        Ok(state) => {
                            act.state = state;
                            act.reply(&label, Ok(()))
                        }
                        Err(e) => act.reply(&label, Err(e)),
                    }
                }),
        ))
    }
}
