//! Records exchanged with the calculator: fixtures in, probability grids out.

use serde::{Deserialize, Serialize};

use crate::linear::Matrix;
use crate::scoregrid::{self, Outcome, Score};

/// One fixture, historical or scheduled. Goal counts are meaningful only for
/// matches already played; the calculator ignores them on future fixtures.
/// Records are never mutated or retained by the calculator.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub home: String,
    pub away: String,
    pub home_goals: u8,
    pub away_goals: u8,
}
impl Match {
    pub fn new(
        home: impl Into<String>,
        away: impl Into<String>,
        home_goals: u8,
        away_goals: u8,
    ) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            home_goals,
            away_goals,
        }
    }

    /// A fixture yet to be played.
    pub fn upcoming(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self::new(home, away, 0, 0)
    }
}

/// The computed scoreline distribution for one fixture. Cell `(h, a)` of the
/// grid is the probability of the match ending exactly `h:a`. The grid
/// truncates at the configured goal limit, so its cells need not sum to 1.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchProbability {
    pub home: String,
    pub away: String,
    pub scoregrid: Matrix,
}
impl MatchProbability {
    /// Probability of an exact scoreline; 0.0 beyond the grid bounds.
    pub fn score_probability(&self, score: &Score) -> f64 {
        Outcome::CorrectScore(score.clone()).gather(&self.scoregrid)
    }

    pub fn outcome_probability(&self, outcome: &Outcome) -> f64 {
        outcome.gather(&self.scoregrid)
    }

    /// Expected home and away goals represented by the (truncated) grid.
    pub fn expectations(&self) -> (f64, f64) {
        scoregrid::home_away_expectations(&self.scoregrid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upcoming_fixture_has_no_goals() {
        let fixture = Match::upcoming("Arsenal", "Chelsea");
        assert_eq!(
            Match::new("Arsenal", "Chelsea", 0, 0),
            fixture
        );
    }

    #[test]
    fn score_probability_reads_the_grid() {
        let mut scoregrid = Matrix::square(2);
        scoregrid[(1, 0)] = 0.25;
        let probability = MatchProbability {
            home: "Arsenal".into(),
            away: "Chelsea".into(),
            scoregrid,
        };
        assert_eq!(0.25, probability.score_probability(&Score::new(1, 0)));
        assert_eq!(0.0, probability.score_probability(&Score::new(0, 0)));
        assert_eq!(0.0, probability.score_probability(&Score::new(5, 5)));
    }
}
