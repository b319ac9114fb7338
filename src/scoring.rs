//! Hand and match scoring.
//!
//! Scoring is asymmetric between the team that named trump (the maker) and
//! the defense: sweeping all five tricks is worth 2, making three or four
//! is worth 1, and falling short of three hands the *defense* 2 points
//! (a "euchre"). Exactly one branch fires per hand since tricks sum to 5.

use serde::{Deserialize, Serialize};

use crate::state::Seat;

pub const TRICKS_PER_HAND: u8 = 5;

/// Default match victory threshold. Deliberately exposed as configuration
/// (see [`crate::state::GameConfig`]); traditional play is first to 10.
pub const DEFAULT_WINNING_SCORE: i16 = 2;

/// The two fixed partnerships: seats 0 and 2 are Team A, seats 1 and 3 are
/// Team B. This partition is not configurable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

pub fn team_of(seat: Seat) -> Team {
    if seat % 2 == 0 {
        Team::A
    } else {
        Team::B
    }
}

pub fn team_seats(team: Team) -> [Seat; 2] {
    match team {
        Team::A => [0, 2],
        Team::B => [1, 3],
    }
}

/// Per-team point totals.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub team_a: i16,
    pub team_b: i16,
}

impl Scores {
    pub fn get(self, team: Team) -> i16 {
        match team {
            Team::A => self.team_a,
            Team::B => self.team_b,
        }
    }
}

/// Score one completed hand from tricks taken per seat and the maker seat.
pub fn score_hand(tricks_by_seat: &[u8; 4], maker: Seat) -> Scores {
    let taken_a = tricks_by_seat[0] + tricks_by_seat[2];
    let taken_b = tricks_by_seat[1] + tricks_by_seat[3];
    let making_team = team_of(maker);

    Scores {
        team_a: score_team(taken_a, Team::A, making_team),
        team_b: score_team(taken_b, Team::B, making_team),
    }
}

fn score_team(taken: u8, team: Team, maker: Team) -> i16 {
    let is_maker = team == maker;
    if !is_maker && taken >= 3 {
        2 // euchre
    } else if is_maker && taken == 5 {
        2 // won every trick
    } else if is_maker && taken >= 3 {
        1 // won most
    } else {
        0
    }
}

/// Component-wise sum, used to accumulate match totals.
pub fn add_scores(a: Scores, b: Scores) -> Scores {
    Scores {
        team_a: a.team_a + b.team_a,
        team_b: a.team_b + b.team_b,
    }
}

/// First team at or above the victory threshold, Team A checked first.
/// Simultaneous qualification cannot happen under per-hand increments of
/// at most 2, but the evaluation order is fixed regardless.
pub fn winner(scores: Scores, winning_score: i16) -> Option<Team> {
    if scores.team_a >= winning_score {
        Some(Team::A)
    } else if scores.team_b >= winning_score {
        Some(Team::B)
    } else {
        None
    }
}

/// True once every trick of the hand has been taken.
pub fn hand_over(tricks_by_seat: &[u8; 4]) -> bool {
    tricks_by_seat.iter().sum::<u8>() >= TRICKS_PER_HAND
}

/// Seats of the winning team, or None while the match is live.
pub fn get_winners(scores: Scores, winning_score: i16) -> Option<[Seat; 2]> {
    winner(scores, winning_score).map(team_seats)
}
