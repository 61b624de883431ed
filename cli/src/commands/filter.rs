use anyhow::{Context, Result};
use footprint::{ProductFilter, ProductList, read_products, write_products};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::FilterArgs) -> Result<()> {
    let filter = ProductFilter::from(args.filter);

    log::info!("[filter] loading products from {}", args.products.display());
    let list = ProductList::new(read_products(&args.products)?);

    let matched = list.filtered(filter, args.rect.as_ref())
        .with_context(|| format!("Failed to apply filter '{filter}'"))?;
    log::info!("[filter] {} of {} products passed '{filter}'", matched.len(), list.len());

    match &args.output {
        Some(out_path) => {
            log::info!("[filter] writing products to {}", out_path.display());
            write_products(out_path, matched.iter().copied(), args.force)?;
        }
        None => {
            for product in matched {
                println!("{}", product.name());
            }
        }
    }

    Ok(())
}
