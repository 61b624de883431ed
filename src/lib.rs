#![doc = "Footprint filter public API"]
mod filter;
mod geom;
mod io;
mod product;

#[doc(inline)]
pub use filter::{FilterError, FilterItems, ProductFilter, intersects};

#[doc(inline)]
pub use geom::{Footprint, SelectionRect};

#[doc(inline)]
pub use product::{Product, ProductList};

#[doc(inline)]
pub use io::{read_products, read_products_geojson, write_products, write_products_geojson};
