//! Estimate one farm from a JSON profile and print the report.
//!
//! Usage:
//!   estimate_farm <profile.json> [--factors <library.json> --region <name>] [--month <1-12>]

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};

use farm_carbon_rust::{
    season_for_month, CarbonEstimator, EmissionFactors, EstimateError, FactorLibrary, FarmProfile,
    GOVERNMENT_SCHEMES, NATIONAL_AVERAGE_T_PER_HA,
};

struct Args {
    profile_path: PathBuf,
    factors_path: Option<PathBuf>,
    region: Option<String>,
    month: Option<u32>,
}

fn parse_args() -> Result<Args> {
    let mut args = env::args().skip(1);
    let mut profile_path = None;
    let mut factors_path = None;
    let mut region = None;
    let mut month = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--factors" => {
                let value = args.next().context("--factors requires a path")?;
                factors_path = Some(PathBuf::from(value));
            }
            "--region" => {
                region = Some(args.next().context("--region requires a name")?);
            }
            "--month" => {
                let value = args.next().context("--month requires a number")?;
                month = Some(value.parse().context("--month must be a number")?);
            }
            _ if profile_path.is_none() => profile_path = Some(PathBuf::from(arg)),
            _ => bail!("Unexpected argument: {}", arg),
        }
    }

    let profile_path = profile_path.context(
        "Usage: estimate_farm <profile.json> [--factors <library.json> --region <name>] [--month <1-12>]",
    )?;
    if factors_path.is_some() != region.is_some() {
        bail!("--factors and --region must be given together");
    }

    Ok(Args {
        profile_path,
        factors_path,
        region,
        month,
    })
}

fn main() -> Result<()> {
    let args = parse_args().unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(2);
    });

    let contents = fs::read_to_string(&args.profile_path)
        .with_context(|| format!("Failed to read profile: {:?}", args.profile_path))?;
    let profile: FarmProfile = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse profile: {:?}", args.profile_path))?;

    let factors = match (&args.factors_path, &args.region) {
        (Some(path), Some(region)) => {
            let library = FactorLibrary::load(path)?;
            library.region(region)?.clone()
        }
        _ => EmissionFactors::india(),
    };

    let estimator = CarbonEstimator::new(factors);
    let report = estimator.estimate(&profile)?;

    println!("Farm: {}", profile);
    println!();
    println!("Emission breakdown (tonnes CO2e/year):");
    for entry in &report.categories {
        println!("  {:<16} {:>8.2}", entry.category.label(), entry.tonnes_co2e);
    }
    println!("  {:<16} {:>8.2}", "Total", report.total_emissions);

    match report.per_hectare() {
        Ok(rate) => {
            let tier = report.tier()?;
            println!();
            println!("Rate: {:.2} tCO2e/ha/year ({} emitter)", rate, tier.label());
            println!("  {}", tier.advisory());
            println!(
                "  National average: {:.1} tCO2e/ha/year (your farm {:+.2})",
                NATIONAL_AVERAGE_T_PER_HA,
                farm_carbon_rust::advisory::versus_national_average(rate),
            );
        }
        Err(EstimateError::UndefinedRate) => {
            println!();
            println!("Rate: undefined (zero cultivated area)");
        }
        Err(e) => return Err(e.into()),
    }

    if !report.recommendations.is_empty() {
        println!();
        println!("Recommendations:");
        for recommendation in &report.recommendations {
            println!("  - {}", recommendation);
        }
    }

    if let Some(month) = args.month {
        let season = season_for_month(month)?;
        println!();
        println!("{}", season.advisory());
    }

    println!();
    println!("Suggested government schemes:");
    for (name, summary) in GOVERNMENT_SCHEMES {
        println!("  - {}: {}", name, summary);
    }

    Ok(())
}
