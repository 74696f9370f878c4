pub mod compare;
pub mod filter;
pub mod inspect;
pub mod legend;

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::cli::{Cli, FieldArgs};
use crate::common::diag;
use crate::{FeatureLayer, FieldSet};

/// Read a lot file, resolve its attribute fields and apply the crop base styles.
pub(crate) fn load_lots(cli: &Cli, path: &Path, overrides: &FieldArgs) -> Result<(FeatureLayer, FieldSet)> {
    let mut layer = FeatureLayer::read_geojson(path, cli.verbose)?;
    let fields = FieldSet::detect(&layer).with_overrides(
        overrides.crop_field.as_deref(),
        overrides.hectares_field.as_deref(),
        overrides.client_field.as_deref(),
        overrides.zone_field.as_deref(),
    );
    layer.style_by_crop(fields.crop.as_deref());

    if cli.verbose > 1 {
        diag(&format!(
            "[fields] crop={:?} hectares={:?} client={:?} zone={:?}",
            fields.crop, fields.hectares, fields.client, fields.zone
        ));
    }
    Ok((layer, fields))
}

/// Print a view-model as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
