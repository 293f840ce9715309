//! Bevel CLI
//!
//! Resolves a border document for one layout direction and prints the
//! resulting metrics.
//!
//! Usage:
//!   bevel <file.json>                    Human-readable metrics (ltr)
//!   bevel <file.json> --rtl              Resolve right-to-left
//!   bevel <file.json> --direction rtl    Same, as a keyword
//!   bevel <file.json> --json             Metrics as JSON
//!   bevel <file.json> --explain          Show which slot supplied each value
//!   bevel --inline '{"width":{"all":2,"top":5}}'

use std::fmt::Display;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use bevel_common::warning::warn_once;
use bevel_style::{
    BorderDefaults, BorderMetrics, Cascade, CascadedBorders, ColorValue, LayoutDirection,
};
use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(
    name = "bevel",
    version,
    about = "Resolve cascaded border properties into per-edge metrics"
)]
struct Args {
    /// Border document (JSON) to resolve
    file: Option<PathBuf>,

    /// Resolve an inline JSON document instead of a file
    #[arg(long, conflicts_with = "file")]
    inline: Option<String>,

    /// Layout direction: ltr or rtl [default: ltr]
    #[arg(short, long, value_parser = LayoutDirection::from_keyword)]
    direction: Option<LayoutDirection>,

    /// Resolve right-to-left (shorthand for `--direction rtl`)
    #[arg(long, conflicts_with = "direction")]
    rtl: bool,

    /// Resolver defaults (JSON) replacing the standard ones
    #[arg(long)]
    defaults: Option<PathBuf>,

    /// Print the metrics as JSON
    #[arg(short, long)]
    json: bool,

    /// Show which slot supplied each value
    #[arg(short, long)]
    explain: bool,
}

impl Args {
    /// Direction from `--rtl` or `--direction`, left-to-right when neither is given.
    fn layout_direction(&self) -> LayoutDirection {
        self.direction.unwrap_or_else(|| LayoutDirection::from_rtl(self.rtl))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let direction = args.layout_direction();

    let source = match (&args.inline, &args.file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?,
        (None, None) => bail!("no input: pass a border document file or --inline JSON"),
    };

    let borders = CascadedBorders::from_json(&source).context("failed to load border document")?;
    if borders.is_empty() {
        warn_once("cli", "document specifies no border properties; every value is a default");
    }

    let defaults = match &args.defaults {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read '{}'", path.display()))?;
            BorderDefaults::from_json(&text).context("failed to load resolver defaults")?
        }
        None => BorderDefaults::default(),
    };

    let metrics = borders.resolve_metrics_with(direction, &defaults);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        print_metrics(&borders, &metrics, direction, args.explain);
    }

    Ok(())
}

/// Print metrics one group per section, optionally with the winning slot.
fn print_metrics(
    borders: &CascadedBorders,
    metrics: &BorderMetrics,
    direction: LayoutDirection,
    explain: bool,
) {
    println!("{}", format!("=== Border Metrics ({direction}) ===").bold());
    if explain && direction.is_rtl() {
        println!("{}", "start -> right, end -> left".dimmed());
    }

    println!("\n{}", "widths".cyan());
    for (edge, width) in metrics.widths.iter() {
        let slot = borders.widths.winning_slot(edge, direction);
        print_row(edge, width, slot, explain);
    }

    println!("\n{}", "colors".cyan());
    for (edge, color) in metrics.colors.iter() {
        let slot = borders.colors.winning_slot(edge, direction);
        print_row(edge, format_color(*color), slot, explain);
    }

    println!("\n{}", "radii".cyan());
    for (corner, radius) in metrics.radii.iter() {
        let slot = borders.radii.winning_slot(corner, direction);
        print_row(corner, radius, slot, explain);
    }

    println!("\n{}", "style".cyan());
    let slot = borders.style.all.as_ref().map(|_| "all");
    print_row("all", metrics.style, slot, explain);

    println!();
    if metrics.is_uniform() {
        println!("{}", "uniform border".green());
    }
    if !metrics.has_visible_border() {
        println!("{}", "no visible border".dimmed());
    }
}

fn print_row(target: impl Display, value: impl Display, slot: Option<impl Display>, explain: bool) {
    let target = format!("{target:<12}");
    if explain {
        let source = slot.map_or_else(|| "default".to_string(), |slot| slot.to_string());
        println!("  {target} {value:<10} {}", format!("<- {source}").dimmed());
    } else {
        println!("  {target} {value}");
    }
}

fn format_color(color: Option<ColorValue>) -> String {
    color.map_or_else(|| "unset".to_string(), |color| color.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("bevel").chain(args.iter().copied()))
    }

    #[test]
    fn test_rtl_flag_selects_right_to_left() {
        let args = parse(&["--inline", r#"{"width":{"all":2}}"#, "--rtl"]).unwrap();
        assert!(args.layout_direction().is_rtl());
    }

    #[test]
    fn test_direction_keyword() {
        let args = parse(&["doc.json", "-d", "RTL"]).unwrap();
        assert!(args.layout_direction().is_rtl());
        let args = parse(&["doc.json", "--direction", "ltr"]).unwrap();
        assert!(!args.layout_direction().is_rtl());
    }

    #[test]
    fn test_direction_defaults_to_ltr() {
        let args = parse(&["doc.json"]).unwrap();
        assert_eq!(args.layout_direction(), LayoutDirection::Ltr);
    }

    #[test]
    fn test_rtl_conflicts_with_direction() {
        assert!(parse(&["doc.json", "--rtl", "--direction", "ltr"]).is_err());
        assert!(parse(&["doc.json", "--direction", "sideways"]).is_err());
    }
}
