//! Warikan backend: groups, shared expenses, and the settlement plan that
//! nets out who owes whom.

pub mod config;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod schemas;
pub mod service;
pub mod settlement;
