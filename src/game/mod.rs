//! file: mod.rs
//! author: Jacob Xie
//! date: 2026/10/19 20:55:03 Monday
//! brief: one team's score, clock and snake/ladder picks

pub mod board;
pub mod clock;
pub mod input;
pub mod notice;

use log::{debug, info, warn};

pub use board::{Ladder, Snake, adjusted_score};
pub use clock::{CLOCK_SIZE, ClockPosition, LAP_BONUS};
pub use notice::{Choice, ChoiceKind, Notice};

use crate::format::format_score;
use input::{parse_leading_int, score_or_zero, step_or_one};

/// Store key holding a team's running score.
pub fn score_key(team: &str) -> String {
    format!("team_{team}_score")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRecord {
    pub key: String,
    pub value: String,
}

impl ScoreRecord {
    pub fn new(team: &str, score: i64) -> Self {
        Self {
            key: score_key(team),
            value: score.to_string(),
        }
    }
}

/// Side effects a transition asks its caller to carry out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Persist(ScoreRecord),
    Notify(Notice),
}

/// A snake/ladder adjustment waiting for the user to say OK. Dropping it is
/// the cancel path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingUpdate {
    team: String,
    snake: Option<Snake>,
    ladder: Option<Ladder>,
    updated_score: i64,
    notice: Notice,
}

impl PendingUpdate {
    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    pub fn updated_score(&self) -> i64 {
        self.updated_score
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamSession {
    team: String,
    score: i64,
    clock: ClockPosition,
    selected_snake: Option<Snake>,
    selected_ladder: Option<Ladder>,
}

impl TeamSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn clock(&self) -> ClockPosition {
        self.clock
    }

    pub fn selected_snake(&self) -> Option<Snake> {
        self.selected_snake
    }

    pub fn selected_ladder(&self) -> Option<Ladder> {
        self.selected_ladder
    }

    pub fn key(&self) -> String {
        score_key(&self.team)
    }

    pub fn record(&self) -> ScoreRecord {
        ScoreRecord::new(&self.team, self.score)
    }

    /// Switches the tracked team. Score and clock carry over until a stored
    /// score is restored for the new team.
    pub fn set_team(&mut self, team: impl Into<String>) {
        self.team = team.into();
        debug!("tracking team {:?}", self.team);
    }

    pub fn select_snake(&mut self, snake: Option<Snake>) {
        self.selected_snake = snake;
    }

    pub fn select_ladder(&mut self, ladder: Option<Ladder>) {
        self.selected_ladder = ladder;
    }

    pub fn submit_team(&self) -> Notice {
        Notice::alert("Team Number", format!("Team number: {}", self.team))
    }

    /// Takes over a score read back from the store. Missing, empty or
    /// unreadable values leave the current score alone; returns whether the
    /// score was replaced.
    pub fn restore(&mut self, stored: Option<&str>) -> bool {
        let Some(raw) = stored.filter(|raw| !raw.is_empty()) else {
            return false;
        };
        match parse_leading_int(raw) {
            Some(score) => {
                debug!("restored score {score} for team {:?}", self.team);
                self.score = score;
                true
            }
            None => {
                warn!(
                    "ignoring unreadable stored score {raw:?} for team {:?}",
                    self.team
                );
                false
            }
        }
    }

    pub fn start_game(&mut self, initial_score: &str) {
        self.score = score_or_zero(initial_score);
        debug!("game started at {}", self.score);
    }

    /// Walks the clock. Landing on twelve adds the lap bonus and asks for the
    /// new score to be stored. The notice reports the score as it was before
    /// the bonus.
    pub fn step_clock(&mut self, step_input: &str) -> Vec<Effect> {
        let step = step_or_one(step_input);
        let position = self.clock.advance(step);
        let shown_score = self.score;

        let mut effects = Vec::with_capacity(2);
        if position.completes_lap() {
            self.score = self.score.saturating_add(LAP_BONUS);
            info!(
                "team {:?} completed a lap, score now {}",
                self.team, self.score
            );
            effects.push(Effect::Persist(self.record()));
        }
        self.clock = position;

        effects.push(Effect::Notify(Notice::alert(
            "Clock Score Updated",
            format!(
                "Current Clock Position: {}\nCurrent Score: {}",
                position.displayed(),
                format_score(shown_score)
            ),
        )));
        effects
    }

    /// Records the picks and prices them against the current score.
    pub fn apply_snake_and_ladder(
        &mut self,
        snake: Option<Snake>,
        ladder: Option<Ladder>,
    ) -> PendingUpdate {
        self.selected_snake = snake;
        self.selected_ladder = ladder;
        self.propose_update()
    }

    /// Prices the current picks. Nothing changes until [`Self::confirm`].
    pub fn propose_update(&self) -> PendingUpdate {
        let snake = self.selected_snake;
        let ladder = self.selected_ladder;
        let updated_score = adjusted_score(self.score, snake, ladder);
        let notice = Notice::confirm(
            "Confirm Update",
            format!(
                "You are updating the score with:\n- Team Number: {}\n- Snake: {}\n- Ladder: {}\nNew Score: {}",
                self.team,
                snake.map_or("", Snake::label),
                ladder.map_or("", Ladder::label),
                format_score(updated_score)
            ),
        );
        PendingUpdate {
            team: self.team.clone(),
            snake,
            ladder,
            updated_score,
            notice,
        }
    }

    /// Commits a priced update. Picks stay selected, so pressing update again
    /// applies them a second time.
    pub fn confirm(&mut self, pending: PendingUpdate) -> Vec<Effect> {
        info!(
            "team {:?} applied snake {:?} and ladder {:?}: {} -> {}",
            pending.team, pending.snake, pending.ladder, self.score, pending.updated_score
        );
        self.score = pending.updated_score;
        vec![Effect::Persist(ScoreRecord::new(
            &pending.team,
            pending.updated_score,
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notices(effects: &[Effect]) -> Vec<&Notice> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Notify(notice) => Some(notice),
                Effect::Persist(_) => None,
            })
            .collect()
    }

    fn persisted(effects: &[Effect]) -> Vec<&ScoreRecord> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Persist(record) => Some(record),
                Effect::Notify(_) => None,
            })
            .collect()
    }

    fn session_at(team: &str, score: i64, clock: i64) -> TeamSession {
        let mut session = TeamSession::new();
        session.set_team(team);
        session.start_game(&score.to_string());
        session.clock = ClockPosition::new(clock);
        session
    }

    #[test]
    fn key_embeds_team_number() {
        assert_eq!(score_key("7"), "team_7_score");
        assert_eq!(session_at("42", 0, 0).key(), "team_42_score");
    }

    #[test]
    fn start_game_falls_back_to_zero() {
        let mut session = session_at("1", 500, 0);
        session.start_game("not a number");
        assert_eq!(session.score(), 0);
        session.start_game("2500000");
        assert_eq!(session.score(), 2_500_000);
    }

    #[test]
    fn restore_ignores_missing_and_garbage() {
        let mut session = session_at("1", 300, 0);
        assert!(!session.restore(None));
        assert!(!session.restore(Some("")));
        assert!(!session.restore(Some("lots")));
        assert_eq!(session.score(), 300);
        assert!(session.restore(Some("0")));
        assert_eq!(session.score(), 0);
        assert!(session.restore(Some("-400000")));
        assert_eq!(session.score(), -400_000);
    }

    #[test]
    fn completing_a_lap_awards_bonus_and_persists() {
        let mut session = session_at("9", 5_000, 11);
        let effects = session.step_clock("1");

        assert_eq!(session.clock().value(), 0);
        assert_eq!(session.score(), 5_000 + LAP_BONUS);
        assert_eq!(
            persisted(&effects),
            vec![&ScoreRecord {
                key: "team_9_score".into(),
                value: "1025000".into(),
            }]
        );

        let notice = notices(&effects)[0];
        assert_eq!(notice.title, "Clock Score Updated");
        assert_eq!(
            notice.message,
            "Current Clock Position: 12\nCurrent Score: 5,000"
        );
    }

    #[test]
    fn partial_steps_only_move_the_clock() {
        let mut session = session_at("9", 5_000, 3);
        let effects = session.step_clock("4");
        assert_eq!(session.clock().value(), 7);
        assert_eq!(session.score(), 5_000);
        assert!(persisted(&effects).is_empty());
        assert_eq!(
            notices(&effects)[0].message,
            "Current Clock Position: 7\nCurrent Score: 5,000"
        );
    }

    #[test]
    fn bad_step_counts_as_one() {
        let mut garbage = session_at("2", 0, 4);
        let mut one = garbage.clone();
        let mut zero = garbage.clone();
        assert_eq!(garbage.step_clock("abc"), one.step_clock("1"));
        assert_eq!(zero.step_clock("0"), session_at("2", 0, 4).step_clock("1"));
        assert_eq!(garbage, one);
        assert_eq!(zero.clock().value(), 5);
    }

    #[test]
    fn snake_eight_wipes_a_million() {
        let mut session = session_at("3", 1_000_000, 0);
        session.select_snake(Snake::from_label("Snake 8"));
        session.select_ladder(Ladder::from_label(""));

        let pending = session.propose_update();
        assert_eq!(pending.updated_score(), 0);
        assert_eq!(session.score(), 1_000_000);
        assert!(pending.notice().needs_confirmation());
        assert_eq!(
            pending.notice().message,
            "You are updating the score with:\n- Team Number: 3\n- Snake: Snake 8\n- Ladder: \nNew Score: 0"
        );

        let effects = session.confirm(pending);
        assert_eq!(session.score(), 0);
        assert_eq!(
            effects,
            vec![Effect::Persist(ScoreRecord::new("3", 0))]
        );
    }

    #[test]
    fn cancelled_update_changes_nothing() {
        let mut session = session_at("3", 10, 2);
        let before = session.clone();
        let pending = session.propose_update();
        drop(pending);
        assert_eq!(session, before);
    }

    #[test]
    fn selections_survive_confirmation() {
        let mut session = session_at("5", 0, 0);
        let pending = session.apply_snake_and_ladder(Some(Snake::Five), Some(Ladder::Two));
        session.confirm(pending);
        assert_eq!(session.score(), 700_000);

        let again = session.propose_update();
        session.confirm(again);
        assert_eq!(session.score(), 1_400_000);
        assert_eq!(session.selected_snake(), Some(Snake::Five));
        assert_eq!(session.selected_ladder(), Some(Ladder::Two));
    }

    #[test]
    fn submit_team_echoes_number() {
        let notice = session_at("17", 0, 0).submit_team();
        assert_eq!(notice.title, "Team Number");
        assert_eq!(notice.message, "Team number: 17");
        assert!(!notice.needs_confirmation());
    }
}
