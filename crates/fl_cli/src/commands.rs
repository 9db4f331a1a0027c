use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use fl_core::{EngineConfig, Fixture, League, SeasonSummary, Venue};

use crate::presets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format: {other} (expected table or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputFormat::Table => f.write_str("table"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

pub fn run(seasons: u32, year: i32, seed: u64, focus: usize, format: OutputFormat) -> Result<()> {
    let mut league = League::new(
        &presets::default_clubs(),
        focus,
        year,
        seed,
        EngineConfig::default(),
    )
    .context("could not found the league")?;

    let mut champions: Vec<(String, String)> = Vec::new();
    for _ in 0..seasons {
        let summary = league
            .run_season()
            .with_context(|| format!("season {} failed", league.year))?;
        match format {
            OutputFormat::Table => print_season(&summary),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        }
        champions.push((summary.label.clone(), summary.champion.clone()));
    }

    if format == OutputFormat::Table && champions.len() > 1 {
        println!("Champions roll:");
        for (label, champion) in &champions {
            println!("  {label}  {champion}");
        }
    }
    Ok(())
}

pub fn schedule(year: i32, seed: u64, format: OutputFormat) -> Result<()> {
    let mut league = League::new(
        &presets::default_clubs(),
        0,
        year,
        seed,
        EngineConfig::default(),
    )
    .context("could not found the league")?;
    let fixtures = league
        .preview_schedule()
        .context("the season cannot be scheduled")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&fixtures)?),
        OutputFormat::Table => {
            for f in &fixtures {
                let (home, away) = home_and_away(&league, f);
                println!("{}  {home:>20} v {away:<20}", f.date);
            }
            println!("{} fixtures", fixtures.len());
        }
    }
    Ok(())
}

fn home_and_away<'a>(league: &'a League, fixture: &Fixture) -> (&'a str, &'a str) {
    let a = league.clubs()[fixture.a].name.as_str();
    let b = league.clubs()[fixture.b].name.as_str();
    match fixture.venue {
        Venue::HomeA | Venue::Neutral => (a, b),
        Venue::HomeB => (b, a),
    }
}

fn print_season(summary: &SeasonSummary) {
    println!("Season {}  (managing {})", summary.label, summary.focus_club);
    println!("  # {:<20} {:>3} {:>4} {:>4} {:>4}", "Club", "Pts", "GF", "GA", "GD");
    for row in &summary.table {
        println!(
            " {:>2} {:<20} {:>3} {:>4} {:>4} {:>4}",
            row.rank, row.name, row.points, row.goals_for, row.goals_against, row.goal_diff
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parses_both_ways() {
        assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("csv".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
