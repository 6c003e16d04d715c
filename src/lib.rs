//! A Poisson model of association football scorelines. Derives per-team
//! attack and defense strength from historical results relative to league
//! averages, converts the ratios into expected goals for each side of a
//! fixture, and produces a bounded grid of exact-scoreline probabilities.

pub mod calculator;
pub mod data;
pub mod factorial;
pub mod linear;
pub mod poisson;
pub mod probs;
pub mod scoregrid;
