use anyhow::{anyhow, Result};
use serde_json::json;

use crate::cli::{Cli, FilterArgs, OutputFormat};
use crate::commands::{load_lots, print_json};
use crate::common::{diag, write_atomic};
use crate::{bounds_to_array, MapSurface, ViewSession};

pub fn run(cli: &Cli, args: &FilterArgs) -> Result<()> {
    let (layer, fields) = load_lots(cli, &args.lots, &args.fields)?;
    let client_field = fields.client
        .ok_or_else(|| anyhow!("No client field found in {}; use --client-field", args.lots.display()))?;

    if cli.verbose > 0 {
        diag(&format!("[filter] field={} query={:?} polygons={}", client_field, args.query, layer.len()));
    }

    let mut session = ViewSession::new(layer, client_field);
    let result = session.search(&args.query)?;
    let status = session.status();

    match args.format {
        OutputFormat::Json => print_json(&json!({ "status": status, "result": result }))?,
        OutputFormat::Table => {
            println!("{status}");
            if let Some(bounds) = result.matched_bounds {
                let [min_x, min_y, max_x, max_y] = bounds_to_array(&bounds);
                println!("Bounds: [{min_x}, {min_y}] - [{max_x}, {max_y}]");
            }
        }
    }

    if let Some(output) = &args.output {
        let bytes = session.surface().to_geojson_bytes()?;
        write_atomic(output, &bytes, args.force)?;
        if cli.verbose > 0 {
            diag(&format!("[filter] wrote {} polygons -> {}", session.surface().features().len(), output.display()));
        }
    }
    Ok(())
}
