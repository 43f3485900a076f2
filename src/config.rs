use crate::error::{ConfigError, finite, fraction, non_negative, positive};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// Qualitative slope condition, used as a runoff amplification proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlopeCategory {
    Low,
    #[default]
    Moderate,
    Steep,
}

impl SlopeCategory {
    pub fn factor(self) -> f64 {
        match self {
            SlopeCategory::Low => 0.95,
            SlopeCategory::Moderate => 1.00,
            SlopeCategory::Steep => 1.05,
        }
    }
}

impl FromStr for SlopeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(SlopeCategory::Low),
            "moderate" => Ok(SlopeCategory::Moderate),
            "steep" => Ok(SlopeCategory::Steep),
            other => Err(format!(
                "unknown slope category '{}' (expected low, moderate or steep)",
                other
            )),
        }
    }
}

impl fmt::Display for SlopeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SlopeCategory::Low => "Low",
            SlopeCategory::Moderate => "Moderate",
            SlopeCategory::Steep => "Steep",
        };
        f.write_str(name)
    }
}

// Design storm and catchment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub storm_depth_mm: f64,
    pub catchment_area_m2: f64,
    pub base_curve_number: f64,
    #[serde(default)]
    pub slope: SlopeCategory,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            storm_depth_mm: 80.0,
            catchment_area_m2: 3000.0,
            base_curve_number: 85.0,
            slope: SlopeCategory::Moderate,
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("site.storm_depth_mm", self.storm_depth_mm)?;
        positive("site.catchment_area_m2", self.catchment_area_m2)?;
        let cn = positive("site.base_curve_number", self.base_curve_number)?;
        if cn > 100.0 {
            return Err(ConfigError::OutOfRange {
                field: "site.base_curve_number",
                value: cn,
                range: "(0, 100]",
            });
        }
        Ok(())
    }
}

// Rooftop rainwater harvesting into barrels/tanks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarvestingConfig {
    pub roof_area_m2: f64,
    pub unit_volume_l: f64,
    pub unit_count: u32,
    pub first_flush_mm: f64,
}

impl Default for HarvestingConfig {
    fn default() -> Self {
        HarvestingConfig {
            roof_area_m2: 400.0,
            unit_volume_l: 1000.0,
            unit_count: 10,
            first_flush_mm: 2.0,
        }
    }
}

impl HarvestingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("harvesting.roof_area_m2", self.roof_area_m2)?;
        non_negative("harvesting.unit_volume_l", self.unit_volume_l)?;
        non_negative("harvesting.first_flush_mm", self.first_flush_mm)?;
        Ok(())
    }
}

// Vegetative hedgerows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HedgerowConfig {
    pub cn_reduction: f64,
    pub infiltration_share: f64,
}

impl Default for HedgerowConfig {
    fn default() -> Self {
        HedgerowConfig {
            cn_reduction: 4.0,
            infiltration_share: 0.10,
        }
    }
}

impl HedgerowConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("hedgerow.cn_reduction", self.cn_reduction)?;
        fraction("hedgerow.infiltration_share", self.infiltration_share)?;
        Ok(())
    }
}

// Mound beds with a porous buried core
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoundBedConfig {
    pub bed_count: u32,
    pub length_m: f64,
    pub width_m: f64,
    pub core_depth_m: f64,
    pub porosity: f64,
    pub border_loss: f64,
    pub intercept_share: f64,
}

impl Default for MoundBedConfig {
    fn default() -> Self {
        MoundBedConfig {
            bed_count: 20,
            length_m: 6.0,
            width_m: 1.2,
            core_depth_m: 0.6,
            porosity: 0.50,
            border_loss: 0.15,
            intercept_share: 0.30,
        }
    }
}

impl MoundBedConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("mound_bed.length_m", self.length_m)?;
        positive("mound_bed.width_m", self.width_m)?;
        positive("mound_bed.core_depth_m", self.core_depth_m)?;
        // porosity is (0, 1], border loss is [0, 1)
        let porosity = positive("mound_bed.porosity", self.porosity)?;
        if porosity > 1.0 {
            return Err(ConfigError::OutOfRange {
                field: "mound_bed.porosity",
                value: porosity,
                range: "(0, 1]",
            });
        }
        let loss = finite("mound_bed.border_loss", self.border_loss)?;
        if !(0.0..1.0).contains(&loss) {
            return Err(ConfigError::OutOfRange {
                field: "mound_bed.border_loss",
                value: loss,
                range: "[0, 1)",
            });
        }
        fraction("mound_bed.intercept_share", self.intercept_share)?;
        Ok(())
    }
}

// Permeable surfacing over part of the catchment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PermeablePavementConfig {
    pub cn_reduction: f64,
    pub infiltration_share: f64,
    pub converted_fraction: f64,
}

impl Default for PermeablePavementConfig {
    fn default() -> Self {
        PermeablePavementConfig {
            cn_reduction: 8.0,
            infiltration_share: 0.40,
            converted_fraction: 0.25,
        }
    }
}

impl PermeablePavementConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("permeable_pavement.cn_reduction", self.cn_reduction)?;
        fraction(
            "permeable_pavement.infiltration_share",
            self.infiltration_share,
        )?;
        fraction(
            "permeable_pavement.converted_fraction",
            self.converted_fraction,
        )?;
        Ok(())
    }
}

/// The set of mitigation measures in a scenario. `None` disables a measure.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Measures {
    pub harvesting: Option<HarvestingConfig>,
    pub hedgerow: Option<HedgerowConfig>,
    pub mound_bed: Option<MoundBedConfig>,
    pub permeable_pavement: Option<PermeablePavementConfig>,
}

impl Measures {
    pub fn none() -> Self {
        Measures::default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(h) = &self.harvesting {
            h.validate()?;
        }
        if let Some(h) = &self.hedgerow {
            h.validate()?;
        }
        if let Some(m) = &self.mound_bed {
            m.validate()?;
        }
        if let Some(p) = &self.permeable_pavement {
            p.validate()?;
        }
        Ok(())
    }
}

/// A validated site + measures bundle, ready for [`crate::balance::evaluate`].
///
/// Only constructible through [`Scenario::new`] (or the loaders built on it),
/// so every value reaching the engine has passed range checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scenario {
    site: SiteConfig,
    measures: Measures,
}

impl Scenario {
    pub fn new(site: SiteConfig, measures: Measures) -> Result<Self, ConfigError> {
        site.validate()?;
        measures.validate()?;
        Ok(Scenario { site, measures })
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn measures(&self) -> &Measures {
        &self.measures
    }

    /// Same scenario with a different site.
    pub fn with_site(&self, site: SiteConfig) -> Result<Self, ConfigError> {
        Scenario::new(site, self.measures)
    }

    /// Same scenario under a different design storm.
    pub fn with_storm_depth(&self, storm_depth_mm: f64) -> Result<Self, ConfigError> {
        self.with_site(SiteConfig {
            storm_depth_mm,
            ..self.site
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let doc: ScenarioDocument = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        doc.into_scenario()
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            site: SiteConfig::default(),
            measures: Measures {
                harvesting: Some(HarvestingConfig::default()),
                hedgerow: Some(HedgerowConfig::default()),
                mound_bed: Some(MoundBedConfig::default()),
                permeable_pavement: None,
            },
        }
    }
}

// A measure table as written in a scenario file; `enabled = false` keeps the
// parameters around but switches the measure off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Toggle<T> {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(flatten)]
    pub config: T,
}

fn enabled_by_default() -> bool {
    true
}

impl<T> Toggle<T> {
    pub fn on(config: T) -> Self {
        Toggle {
            enabled: true,
            config,
        }
    }

    pub fn off(config: T) -> Self {
        Toggle {
            enabled: false,
            config,
        }
    }

    fn active(self) -> Option<T> {
        self.enabled.then_some(self.config)
    }
}

/// On-disk (TOML) form of a scenario. Missing measure tables are disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDocument {
    pub site: SiteConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harvesting: Option<Toggle<HarvestingConfig>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hedgerow: Option<Toggle<HedgerowConfig>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mound_bed: Option<Toggle<MoundBedConfig>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permeable_pavement: Option<Toggle<PermeablePavementConfig>>,
}

impl Default for ScenarioDocument {
    fn default() -> Self {
        ScenarioDocument {
            site: SiteConfig::default(),
            harvesting: Some(Toggle::on(HarvestingConfig::default())),
            hedgerow: Some(Toggle::on(HedgerowConfig::default())),
            mound_bed: Some(Toggle::on(MoundBedConfig::default())),
            permeable_pavement: Some(Toggle::off(PermeablePavementConfig::default())),
        }
    }
}

impl ScenarioDocument {
    pub fn into_scenario(self) -> Result<Scenario, ConfigError> {
        let measures = Measures {
            harvesting: self.harvesting.and_then(Toggle::active),
            hedgerow: self.hedgerow.and_then(Toggle::active),
            mound_bed: self.mound_bed.and_then(Toggle::active),
            permeable_pavement: self.permeable_pavement.and_then(Toggle::active),
        };
        Scenario::new(self.site, measures)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
