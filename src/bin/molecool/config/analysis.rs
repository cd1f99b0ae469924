use anyhow::{Context, Result};

use molecool::{AngleUnit, Config};

use crate::cli::BondOptions;

/// Layers command-line overrides on top of the settings file (or the built-in defaults).
pub fn build_analysis_config(opts: &BondOptions, degrees: bool) -> Result<Config> {
    let mut config = match &opts.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(min_bond) = opts.min_bond {
        config.bonds.min_bond = min_bond;
    }
    if let Some(max_bond) = opts.max_bond {
        config.bonds.max_bond = max_bond;
    }
    if degrees {
        config.angles.unit = AngleUnit::Degrees;
    }

    config.validate().context("Invalid bond window")?;

    log::info!(
        "bond window {} < d < {} Å, angles in {:?}",
        config.bonds.min_bond,
        config.bonds.max_bond,
        config.angles.unit
    );

    Ok(config)
}
