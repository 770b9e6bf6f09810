//! file: tracker.rs
//! author: Jacob Xie
//! date: 2026/10/19 21:26:17 Monday
//! brief: drives a team session against a store

use log::debug;

use crate::{
    error::StoreError,
    game::{Effect, Ladder, Notice, Snake, TeamSession},
    store::KeyValueStore,
};

/// Stores every persist effect in order and hands back the notices. The first
/// failed write stops the batch.
pub async fn execute<S: KeyValueStore>(
    store: &S,
    effects: Vec<Effect>,
) -> Result<Vec<Notice>, StoreError> {
    let mut notices = Vec::new();
    for effect in effects {
        match effect {
            Effect::Persist(record) => store.set_item(&record.key, &record.value).await?,
            Effect::Notify(notice) => notices.push(notice),
        }
    }
    Ok(notices)
}

pub struct ScoreTracker<S> {
    session: TeamSession,
    store: S,
}

impl<S: KeyValueStore> ScoreTracker<S> {
    pub fn new(store: S) -> Self {
        Self {
            session: TeamSession::new(),
            store,
        }
    }

    pub fn session(&self) -> &TeamSession {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Switches to `team` and loads its stored score, if any. Returns whether
    /// a stored score replaced the current one.
    pub async fn initialize(&mut self, team: &str) -> Result<bool, StoreError> {
        self.session.set_team(team);
        let stored = self.store.get_item(&self.session.key()).await?;
        Ok(self.session.restore(stored.as_deref()))
    }

    pub fn start_game(&mut self, initial_score: &str) {
        self.session.start_game(initial_score);
    }

    pub async fn step_clock(&mut self, step_input: &str) -> Result<Vec<Notice>, StoreError> {
        let effects = self.session.step_clock(step_input);
        execute(&self.store, effects).await
    }

    /// Prices the picks, asks `confirm` and only then commits and stores the
    /// new score. Returns whether the update went through.
    pub async fn apply_snake_and_ladder(
        &mut self,
        snake: Option<Snake>,
        ladder: Option<Ladder>,
        confirm: impl FnOnce(&Notice) -> bool,
    ) -> Result<bool, StoreError> {
        let pending = self.session.apply_snake_and_ladder(snake, ladder);
        if !confirm(pending.notice()) {
            debug!("snake and ladder update cancelled");
            return Ok(false);
        }
        let effects = self.session.confirm(pending);
        execute(&self.store, effects).await?;
        Ok(true)
    }

    pub async fn persist(&self) -> Result<(), StoreError> {
        let record = self.session.record();
        self.store.set_item(&record.key, &record.value).await
    }
}
