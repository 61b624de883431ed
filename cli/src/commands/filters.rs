use anyhow::Result;
use footprint::{FilterItems, Footprint, ProductFilter, SelectionRect};

pub fn run(_cli: &crate::cli::Cli) -> Result<()> {
    for filter in ProductFilter::all() {
        let label = FilterItems::<Footprint, SelectionRect>::display_name(&filter);
        println!("{:<10} {label:?}", filter.to_str());
    }
    Ok(())
}
