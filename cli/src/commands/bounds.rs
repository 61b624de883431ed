use anyhow::{anyhow, Result};
use footprint::{ProductList, read_products};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::BoundsArgs) -> Result<()> {
    log::info!("[bounds] loading products from {}", args.products.display());
    let list = ProductList::new(read_products(&args.products)?);

    let index = list.index_of(&args.name)
        .ok_or_else(|| anyhow!("No product named '{}' in {}", args.name, args.products.display()))?;
    let area = list.area_of_interest(index)
        .ok_or_else(|| anyhow!("Product '{}' has no usable footprint bounds", args.name))?;

    println!("{area}");
    Ok(())
}
