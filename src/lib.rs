//! Single-storm water balance for road catchments with stormwater measures:
//! rooftop harvesting, hedgerows, mound beds and permeable pavement.
//!
//! Build a [`Scenario`], pass it to [`evaluate`], read the [`BalanceResult`].
pub mod balance;
pub mod config;
pub mod error;
pub mod hydrology;
pub mod io;
pub mod measures;
pub mod score;
pub mod sweep;

pub use balance::{BalanceResult, evaluate};
pub use config::{
    HarvestingConfig, HedgerowConfig, Measures, MoundBedConfig, PermeablePavementConfig,
    Scenario, ScenarioDocument, SiteConfig, SlopeCategory,
};
pub use error::ConfigError;
