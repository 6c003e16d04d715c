//! Derivation of expected goals from historical results and assembly of
//! per-fixture scoreline probability grids.

use std::error::Error;
use std::time::Instant;

use anyhow::anyhow;
use thiserror::Error;
use tracing::debug;

use crate::data::{Match, MatchProbability};
use crate::factorial::{Lookup, MAX_FACTORIAL};
use crate::linear::Matrix;
use crate::scoregrid;

pub const DEFAULT_GOAL_LIMIT: u8 = 5;

#[derive(Debug, Error)]
#[error("{0}")]
pub struct ValidationError(#[from] pub Box<dyn Error>);

impl From<anyhow::Error> for ValidationError {
    fn from(value: anyhow::Error) -> Self {
        ValidationError(value.into())
    }
}

/// How a zero league-wide average behaves when used as a strength divisor.
/// `Propagate` keeps IEEE division semantics: a degenerate history surfaces
/// as NaN or infinite cells rather than an error. `Neutral` substitutes a
/// divisor of 1.0, keeping the grid finite for sparse leagues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZeroAverages {
    #[default]
    Propagate,
    Neutral,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Highest goal count represented per side; the grid spans
    /// `(goal_limit + 1)²` cells.
    pub goal_limit: u8,
    pub zero_averages: ZeroAverages,
}
impl Config {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.goal_limit > MAX_FACTORIAL {
            return Err(anyhow!(
                "goal limit ({}) cannot exceed {MAX_FACTORIAL}",
                self.goal_limit
            )
            .into());
        }
        Ok(())
    }
}
impl Default for Config {
    fn default() -> Self {
        Self {
            goal_limit: DEFAULT_GOAL_LIMIT,
            zero_averages: ZeroAverages::default(),
        }
    }
}

/// Computes scoreline probability grids for future fixtures from historical
/// results. Holds only immutable configuration and a factorial table, so one
/// instance may be shared freely across threads.
#[derive(Debug)]
pub struct PoissonCalculator {
    config: Config,
    factorial: Lookup,
}
impl PoissonCalculator {
    pub fn new(config: Config) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            config,
            factorial: Lookup::default(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// One grid per entry of `future_matches`, in input order.
    pub fn compute_all(
        &self,
        future_matches: &[Match],
        past_matches: &[Match],
    ) -> Vec<MatchProbability> {
        let start = Instant::now();
        let probabilities = future_matches
            .iter()
            .map(|fixture| self.compute_one(fixture, past_matches))
            .collect::<Vec<_>>();
        let elapsed = start.elapsed();
        debug!(
            "computed {} scoreline grids from {} past matches in {elapsed:?}",
            probabilities.len(),
            past_matches.len()
        );
        probabilities
    }

    /// The full scoreline grid for a single fixture. Pure: identical inputs
    /// produce identical grids. Degenerate history flows through as
    /// non-finite cells under [`ZeroAverages::Propagate`].
    pub fn compute_one(&self, fixture: &Match, past_matches: &[Match]) -> MatchProbability {
        let zero_averages = self.config.zero_averages;
        let expected_home_goals =
            expected_home_goals(&fixture.home, &fixture.away, past_matches, zero_averages);
        let expected_away_goals =
            expected_away_goals(&fixture.home, &fixture.away, past_matches, zero_averages);
        debug!(
            "{} v {}: expected goals {expected_home_goals}:{expected_away_goals}",
            fixture.home, fixture.away
        );

        let mut scoregrid = Matrix::square(self.config.goal_limit as usize + 1);
        scoregrid::from_univariate_poisson(
            expected_home_goals,
            expected_away_goals,
            &self.factorial,
            &mut scoregrid,
        );

        MatchProbability {
            home: fixture.home.clone(),
            away: fixture.away.clone(),
            scoregrid,
        }
    }
}
impl Default for PoissonCalculator {
    fn default() -> Self {
        Self {
            config: Config::default(),
            factorial: Lookup::default(),
        }
    }
}

fn expected_home_goals(
    home: &str,
    away: &str,
    past_matches: &[Match],
    zero_averages: ZeroAverages,
) -> f64 {
    let attack = home_attack_strength(home, past_matches, zero_averages);
    let defence = away_defensive_strength(away, past_matches, zero_averages);
    let base_rate = average_goals_scored_at_home(home_matches(past_matches, home));
    attack * defence * base_rate
}

fn expected_away_goals(
    home: &str,
    away: &str,
    past_matches: &[Match],
    zero_averages: ZeroAverages,
) -> f64 {
    let attack = away_attack_strength(away, past_matches, zero_averages);
    let defence = home_defensive_strength(home, past_matches, zero_averages);
    // The away base rate averages the home-goals column over the away side's
    // matches, reusing the scored-at-home aggregator for both sides.
    let base_rate = average_goals_scored_at_home(away_matches(past_matches, away));
    attack * defence * base_rate
}

/// Ratio of the home side's scoring rate at home to the league-wide rate.
fn home_attack_strength(home: &str, past_matches: &[Match], zero_averages: ZeroAverages) -> f64 {
    let league_average = average_goals_scored_at_home(past_matches);
    let team_average = average_goals_scored_at_home(home_matches(past_matches, home));
    strength(team_average, league_average, zero_averages)
}

fn away_attack_strength(away: &str, past_matches: &[Match], zero_averages: ZeroAverages) -> f64 {
    let league_average = average_goals_scored_away(past_matches);
    let team_average = average_goals_scored_away(away_matches(past_matches, away));
    strength(team_average, league_average, zero_averages)
}

fn home_defensive_strength(home: &str, past_matches: &[Match], zero_averages: ZeroAverages) -> f64 {
    let league_average = average_goals_conceded_at_home(past_matches);
    let team_average = average_goals_conceded_at_home(home_matches(past_matches, home));
    strength(team_average, league_average, zero_averages)
}

fn away_defensive_strength(away: &str, past_matches: &[Match], zero_averages: ZeroAverages) -> f64 {
    let league_average = average_goals_conceded_away(past_matches);
    let team_average = average_goals_conceded_away(away_matches(past_matches, away));
    strength(team_average, league_average, zero_averages)
}

fn strength(team_average: f64, league_average: f64, zero_averages: ZeroAverages) -> f64 {
    match zero_averages {
        ZeroAverages::Neutral if league_average == 0.0 => team_average,
        _ => team_average / league_average,
    }
}

fn home_matches<'a>(past_matches: &'a [Match], team: &'a str) -> impl Iterator<Item = &'a Match> {
    past_matches.iter().filter(move |m| m.home == team)
}

fn away_matches<'a>(past_matches: &'a [Match], team: &'a str) -> impl Iterator<Item = &'a Match> {
    past_matches.iter().filter(move |m| m.away == team)
}

fn average_goals_scored_at_home<'a>(matches: impl IntoIterator<Item = &'a Match>) -> f64 {
    average_goals(matches, |m| m.home_goals)
}

fn average_goals_scored_away<'a>(matches: impl IntoIterator<Item = &'a Match>) -> f64 {
    average_goals(matches, |m| m.away_goals)
}

// Goals conceded by home sides are the away sides' goals in the same
// matches, and vice versa.
fn average_goals_conceded_at_home<'a>(matches: impl IntoIterator<Item = &'a Match>) -> f64 {
    average_goals_scored_away(matches)
}

fn average_goals_conceded_away<'a>(matches: impl IntoIterator<Item = &'a Match>) -> f64 {
    average_goals_scored_at_home(matches)
}

/// Mean of the selected goal column; defined as 0.0 over an empty set.
fn average_goals<'a>(
    matches: impl IntoIterator<Item = &'a Match>,
    goals: impl Fn(&Match) -> u8,
) -> f64 {
    let (mut sum, mut count) = (0u32, 0u32);
    for m in matches {
        sum += goals(m) as u32;
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    sum as f64 / count as f64
}
