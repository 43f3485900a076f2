//! Volume accounting for each mitigation measure.
//!
//! Every function takes its measure's config as an `Option`; `None` means the
//! measure is switched off and all of its volumes are exactly zero.
pub mod harvesting;
pub mod hedgerow;
pub mod mound_bed;
pub mod pavement;

pub use harvesting::{RooftopBalance, rooftop_balance};
pub use hedgerow::{HedgerowInfiltration, hedgerow_infiltration};
pub use mound_bed::{MoundBedBalance, mound_bed_balance};
pub use pavement::{PavementInfiltration, pavement_infiltration};
