//! Assembly of scoreline probability grids and queries over them.

use crate::factorial::Factorial;
use crate::linear::Matrix;
use crate::poisson;

/// An exact scoreline.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}
impl Score {
    pub fn new(home: u8, away: u8) -> Self {
        Self { home, away }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// Fills `scoregrid` with the joint mass of two independent Poisson
/// processes: cell `(h, a)` becomes `P(h; home_rate) · P(a; away_rate)`.
/// Non-finite rates flow through into the cells untouched. The grid bounds
/// the goal counts, so the cells sum to less than 1 by the truncated tail
/// mass.
pub fn from_univariate_poisson(
    home_rate: f64,
    away_rate: f64,
    factorial: &impl Factorial,
    scoregrid: &mut Matrix,
) {
    for home_goals in 0..scoregrid.rows() {
        let home_prob = poisson::univariate(home_goals as u8, home_rate, factorial);
        for away_goals in 0..scoregrid.cols() {
            let away_prob = poisson::univariate(away_goals as u8, away_rate, factorial);
            scoregrid[(home_goals, away_goals)] = home_prob * away_prob;
        }
    }
}

/// Expected home and away goals represented by the grid. Recovered
/// expectations sit slightly below the rates that built the grid, by the
/// truncated tail.
pub fn home_away_expectations(scoregrid: &Matrix) -> (f64, f64) {
    let (mut home_expectation, mut away_expectation) = (0.0, 0.0);

    for home_goals in 0..scoregrid.rows() {
        for away_goals in 0..scoregrid.cols() {
            let prob = scoregrid[(home_goals, away_goals)];
            home_expectation += home_goals as f64 * prob;
            away_expectation += away_goals as f64 * prob;
        }
    }

    (home_expectation, away_expectation)
}

/// A match outcome expressible as a subset of grid cells.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win(Side),
    Draw,
    GoalsUnder(u8),
    GoalsOver(u8),
    CorrectScore(Score),
}
impl Outcome {
    /// Sums the cells of `scoregrid` matching this outcome. A correct score
    /// beyond the grid bounds gathers 0.0.
    pub fn gather(&self, scoregrid: &Matrix) -> f64 {
        match self {
            Outcome::Win(side) => gather_cells(scoregrid, |home, away| match side {
                Side::Home => home > away,
                Side::Away => away > home,
            }),
            Outcome::Draw => gather_cells(scoregrid, |home, away| home == away),
            Outcome::GoalsUnder(goals) => {
                let goals = *goals as usize;
                gather_cells(scoregrid, |home, away| home + away < goals)
            }
            Outcome::GoalsOver(goals) => {
                let goals = *goals as usize;
                gather_cells(scoregrid, |home, away| home + away > goals)
            }
            Outcome::CorrectScore(score) => {
                if (score.home as usize) < scoregrid.rows()
                    && (score.away as usize) < scoregrid.cols()
                {
                    scoregrid[(score.home as usize, score.away as usize)]
                } else {
                    0.0
                }
            }
        }
    }
}

fn gather_cells(scoregrid: &Matrix, included: impl Fn(usize, usize) -> bool) -> f64 {
    let mut prob = 0.0;
    for home_goals in 0..scoregrid.rows() {
        for away_goals in 0..scoregrid.cols() {
            if included(home_goals, away_goals) {
                prob += scoregrid[(home_goals, away_goals)];
            }
        }
    }
    prob
}
