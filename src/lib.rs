//! Loyalty points accounting
//!
//! Memberships earn points from purchases according to earning rules, unlock tiers as their
//! balance grows, and spend points on rewards. The [`domain`] module holds the accounting rules;
//! [`commands`] exposes them as `tower` services on top of the [`ports`].

pub mod adapters;
pub mod commands;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
