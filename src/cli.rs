use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

/// Crop-lot map viewer toolkit (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "agrovisor", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List detected fields, clients and zones of a lot file
    Inspect(InspectArgs),

    /// Filter lots by client name
    Filter(FilterArgs),

    /// Compare observed hectares per zone with the projections
    Compare(CompareArgs),

    /// Show the crop legend (or the rainfall legend)
    Legend(LegendArgs),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, ValueEnum)]
pub enum OutputFormat { #[default] Table, Json }

/// Overrides for the auto-detected attribute names.
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Attribute holding the client name
    #[arg(long)]
    pub client_field: Option<String>,

    /// Attribute holding the crop name
    #[arg(long)]
    pub crop_field: Option<String>,

    /// Attribute holding the lot surface in hectares
    #[arg(long)]
    pub hectares_field: Option<String>,

    /// Attribute holding the zone
    #[arg(long)]
    pub zone_field: Option<String>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input lot file (GeoJSON FeatureCollection)
    #[arg(value_hint = ValueHint::FilePath)]
    pub lots: PathBuf,

    #[command(flatten)]
    pub fields: FieldArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Input lot file (GeoJSON FeatureCollection)
    #[arg(value_hint = ValueHint::FilePath)]
    pub lots: PathBuf,

    /// Client name, or part of it (case-insensitive)
    pub query: String,

    /// Write the styled lots to this file (must be a file path; "-" is rejected)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Overwrite if the output file exists
    #[arg(long)]
    pub force: bool,

    #[command(flatten)]
    pub fields: FieldArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Input lot file (GeoJSON FeatureCollection)
    #[arg(value_hint = ValueHint::FilePath)]
    pub lots: PathBuf,

    /// Projection table (JSON); the built-in campaign table is used if omitted
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub projections: Option<PathBuf>,

    /// Zones to report, in order (e.g. 1,2,3,4); defaults to the projection table order
    #[arg(long, value_delimiter = ',')]
    pub zones: Vec<String>,

    #[command(flatten)]
    pub fields: FieldArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct LegendArgs {
    /// Input lot file (GeoJSON FeatureCollection); not needed with --precip
    #[arg(value_hint = ValueHint::FilePath, required_unless_present = "precip")]
    pub lots: Option<PathBuf>,

    /// Number of crops to list
    #[arg(long, default_value_t = crate::DEFAULT_LEGEND_SIZE)]
    pub top: usize,

    /// Show the rainfall legend instead of the crop legend
    #[arg(long)]
    pub precip: bool,

    #[command(flatten)]
    pub fields: FieldArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}
