use std::path::PathBuf;

use footprint::{ProductFilter, SelectionRect};

/// Product footprint filtering CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "footprint", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List the products whose footprint passes a spatial filter
    Filter(FilterArgs),

    /// Print the area of interest around a product as x,y,width,height
    Bounds(BoundsArgs),

    /// List the available filters and their display names
    Filters,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum FilterKind {
    /// Keep every product
    #[value(name = "none")]
    NoFilter,
    /// Keep products whose footprint intersects the selection
    Intersect,
}

impl From<FilterKind> for ProductFilter {
    fn from(kind: FilterKind) -> Self {
        match kind {
            FilterKind::NoFilter => ProductFilter::NoFilter,
            FilterKind::Intersect => ProductFilter::Intersect,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct FilterArgs {
    /// Input GeoJSON FeatureCollection of product footprints
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub products: PathBuf,

    /// Selection rectangle as x,y,width,height
    #[arg(short, long, allow_hyphen_values = true)]
    pub rect: Option<SelectionRect>,

    /// Spatial filter to apply
    #[arg(short, long, value_enum, default_value_t = FilterKind::Intersect)]
    pub filter: FilterKind,

    /// Write matching products to this GeoJSON file instead of printing names
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct BoundsArgs {
    /// Input GeoJSON FeatureCollection of product footprints
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub products: PathBuf,

    /// Product name
    pub name: String,
}
