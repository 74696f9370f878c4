use anyhow::Result;

use crate::cli::{Cli, CompareArgs, OutputFormat};
use crate::commands::{load_lots, print_json};
use crate::common::diag;
use crate::{compare_zones, ComparisonSummary, ProjectionTable, Trend, ZoneId, ZoneTally};

pub fn run(cli: &Cli, args: &CompareArgs) -> Result<()> {
    let (layer, fields) = load_lots(cli, &args.lots, &args.fields)?;

    let projections = match &args.projections {
        Some(path) => ProjectionTable::read(path)?,
        None => ProjectionTable::default(),
    };
    let zone_order: Vec<ZoneId> = if args.zones.is_empty() {
        projections.order().to_vec()
    } else {
        args.zones.iter().map(|z| ZoneId::new(z)).collect()
    };

    let observed = match (fields.zone.as_deref(), fields.hectares.as_deref()) {
        (Some(zone), Some(hectares)) => ZoneTally::from_surface(&layer, zone, hectares),
        _ => {
            if cli.verbose > 0 {
                diag("[compare] no zone or hectares field found; observed hectares are 0");
            }
            ZoneTally::new()
        }
    };

    let summary = compare_zones(&observed, &projections, &zone_order);
    match args.format {
        OutputFormat::Json => print_json(&summary),
        OutputFormat::Table => { print_table(&summary); Ok(()) }
    }
}

fn print_table(summary: &ComparisonSummary) {
    println!("{:<8} {:>15} {:>15} {:>15} {:>10}", "ZONE", "PROJECTED", "ACTUAL", "DIFFERENCE", "%");
    println!("{} {} {} {} {}", "-".repeat(8), "-".repeat(15), "-".repeat(15), "-".repeat(15), "-".repeat(10));

    for row in &summary.rows {
        let marker = match row.trend { Trend::Above => "+", Trend::Below => "-" };
        println!(
            "Zone {:<3} {:>15.0} {:>15.0} {:>+15.0} {:>9.1}% {}",
            row.zone, row.projected, row.actual, row.difference, row.percent, marker
        );
    }

    println!("{} {} {} {} {}", "=".repeat(8), "=".repeat(15), "=".repeat(15), "=".repeat(15), "=".repeat(10));
    println!(
        "{:<8} {:>15.0} {:>15.0} {:>+15.0} {:>9.1}%",
        "TOTAL", summary.total_projected, summary.total_actual, summary.total_difference, summary.total_percent
    );
    println!("Fulfillment: {:.1}%", summary.fulfillment);
}
