use anyhow::{bail, Result};

use crate::cli::{Cli, LegendArgs, OutputFormat};
use crate::commands::{load_lots, print_json};
use crate::{CropLegend, CropSurfaces, PrecipLegend};

pub fn run(cli: &Cli, args: &LegendArgs) -> Result<()> {
    if args.precip {
        return print_precip(&PrecipLegend::default(), args.format);
    }

    let Some(path) = &args.lots else { bail!("A lot file is required for the crop legend.") };
    let (layer, fields) = load_lots(cli, path, &args.fields)?;

    let surfaces = match (fields.crop.as_deref(), fields.hectares.as_deref()) {
        (Some(crop), Some(hectares)) => CropSurfaces::from_surface(&layer, crop, hectares),
        _ => CropSurfaces::default(),
    };

    let legend = CropLegend::build(&surfaces, args.top);
    match (args.format, legend) {
        (OutputFormat::Json, legend) => print_json(&legend),
        (OutputFormat::Table, None) => { println!("No crops found"); Ok(()) }
        (OutputFormat::Table, Some(legend)) => {
            println!("Crops ({})", legend.crop_count);
            for entry in &legend.entries {
                println!(
                    "  {} {:<18} {:>10.0}ha ({:.0}%)",
                    entry.color, entry.short_name, entry.hectares, entry.percent
                );
            }
            println!("TOTAL: {:.0} ha", legend.total);
            Ok(())
        }
    }
}

fn print_precip(legend: &PrecipLegend, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json { return print_json(legend) }

    println!("Rainfall (mm)");
    for band in &legend.bands {
        match band.max {
            Some(max) => println!("  {} {:>5} - {:<5} mm", band.color, band.min, max),
            None => println!("  {} > {} mm", band.color, band.min),
        }
    }
    Ok(())
}
