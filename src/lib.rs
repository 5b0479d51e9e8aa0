pub mod classifier;
pub mod config;
pub mod domain;
pub mod error;
pub mod graph;
pub mod matcher;
pub mod metrics;
pub mod miner;
pub mod registry;
pub mod repo;
pub mod report;

pub use error::{MiningError, Result};
