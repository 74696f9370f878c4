use anyhow::Result;
use serde::Serialize;

use crate::cli::{Cli, InspectArgs, OutputFormat};
use crate::commands::{load_lots, print_json};
use crate::{client_names, FieldSet, MapSurface, ZoneTally};

/// Clients printed before the list is cut short.
const MAX_LISTED_CLIENTS: usize = 15;

#[derive(Serialize)]
struct Inspection {
    polygons: usize,
    fields: FieldSet,
    clients: Vec<String>,
    zones: Vec<(String, f64)>,
}

pub fn run(cli: &Cli, args: &InspectArgs) -> Result<()> {
    let (layer, fields) = load_lots(cli, &args.lots, &args.fields)?;

    let clients = fields.client.as_deref()
        .map(|field| client_names(&layer, field))
        .unwrap_or_default();
    let zones = match (fields.zone.as_deref(), fields.hectares.as_deref()) {
        (Some(zone), Some(hectares)) => {
            let tally = ZoneTally::from_surface(&layer, zone, hectares);
            tally.zones().into_iter()
                .map(|z| { let ha = tally.get(&z).unwrap_or(0.0); (z.to_string(), ha) })
                .collect()
        }
        _ => Vec::new(),
    };

    let report = Inspection { polygons: layer.len(), fields, clients, zones };
    match args.format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Table => { print_table(&report); Ok(()) }
    }
}

fn print_table(report: &Inspection) {
    println!("Polygons: {}", report.polygons);
    println!("Fields:");
    let named = [
        ("crop", &report.fields.crop),
        ("hectares", &report.fields.hectares),
        ("client", &report.fields.client),
        ("zone", &report.fields.zone),
    ];
    for (label, field) in named {
        println!("  - {:<9} {}", label, field.as_deref().unwrap_or("(not found)"));
    }

    if !report.clients.is_empty() {
        println!("Clients ({}):", report.clients.len());
        for (i, client) in report.clients.iter().take(MAX_LISTED_CLIENTS).enumerate() {
            println!("  {:>2}. {}", i + 1, client);
        }
        if report.clients.len() > MAX_LISTED_CLIENTS {
            println!("  ... and {} more", report.clients.len() - MAX_LISTED_CLIENTS);
        }
    }

    if !report.zones.is_empty() {
        println!("Hectares by zone:");
        for (zone, hectares) in &report.zones {
            println!("  Zone {}: {:.2} ha", zone, hectares);
        }
    }
}
