//! file: lib.rs
//! author: Jacob Xie
//! date: 2026/10/19 20:12:40 Monday
//! brief: headless core of the snake & ladder score tracker

pub mod config;
pub mod error;
pub mod format;
pub mod game;
pub mod store;
pub mod tracker;

pub use error::StoreError;
pub use game::{
    ClockPosition, Effect, Ladder, Notice, PendingUpdate, ScoreRecord, Snake, TeamSession,
};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use tracker::{ScoreTracker, execute};
