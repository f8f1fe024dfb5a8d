//! Group AHP - Collaborative Analytic Hierarchy Process service
//!
//! Experts submit pairwise judgments on a decision model's criteria and
//! alternatives; the engine turns them into group weights, consistency
//! ratios and rankings.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
