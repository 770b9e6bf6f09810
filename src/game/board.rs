//! file: board.rs
//! author: Jacob Xie
//! date: 2026/10/19 20:26:51 Monday
//! brief: fixed snake penalties and ladder bonuses

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Snake {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Snake {
    pub const ALL: [Snake; 8] = [
        Snake::One,
        Snake::Two,
        Snake::Three,
        Snake::Four,
        Snake::Five,
        Snake::Six,
        Snake::Seven,
        Snake::Eight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Snake::One => "Snake 1",
            Snake::Two => "Snake 2",
            Snake::Three => "Snake 3",
            Snake::Four => "Snake 4",
            Snake::Five => "Snake 5",
            Snake::Six => "Snake 6",
            Snake::Seven => "Snake 7",
            Snake::Eight => "Snake 8",
        }
    }

    /// Always negative.
    pub fn penalty(self) -> i64 {
        match self {
            Snake::One => -800_000,
            Snake::Two => -500_000,
            Snake::Three => -600_000,
            Snake::Four => -400_000,
            Snake::Five => -300_000,
            Snake::Six => -700_000,
            Snake::Seven => -800_000,
            Snake::Eight => -1_000_000,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|snake| snake.label() == label)
    }
}

impl fmt::Display for Snake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ladder {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
}

impl Ladder {
    pub const ALL: [Ladder; 7] = [
        Ladder::One,
        Ladder::Two,
        Ladder::Three,
        Ladder::Four,
        Ladder::Five,
        Ladder::Six,
        Ladder::Seven,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Ladder::One => "Ladder 1",
            Ladder::Two => "Ladder 2",
            Ladder::Three => "Ladder 3",
            Ladder::Four => "Ladder 4",
            Ladder::Five => "Ladder 5",
            Ladder::Six => "Ladder 6",
            Ladder::Seven => "Ladder 7",
        }
    }

    /// Always positive.
    pub fn bonus(self) -> i64 {
        match self {
            Ladder::One => 600_000,
            Ladder::Two => 1_000_000,
            Ladder::Three => 600_000,
            Ladder::Four => 800_000,
            Ladder::Five => 800_000,
            Ladder::Six => 600_000,
            Ladder::Seven => 1_000_000,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ladder| ladder.label() == label)
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score after applying the optional snake and ladder; absent picks add nothing.
pub fn adjusted_score(score: i64, snake: Option<Snake>, ladder: Option<Ladder>) -> i64 {
    score
        .saturating_add(snake.map_or(0, Snake::penalty))
        .saturating_add(ladder.map_or(0, Ladder::bonus))
}
