mod intersect;

pub use intersect::intersects;

use std::{fmt, str::FromStr};

use crate::geom::{Footprint, SelectionRect};
use crate::product::Product;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors raised at the filter boundary.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// A filter that needs a selection was evaluated without one.
    #[error("filter '{filter}' requires a selection rectangle")]
    MissingSelection { filter: &'static str },
    /// Selection rectangle with negative or non-finite values, or unparsable text.
    #[error("invalid selection rectangle: {0}")]
    InvalidRect(String),
    /// Footprint without a single vertex.
    #[error("footprint has no vertices")]
    EmptyFootprint,
    /// Filter name not recognised.
    #[error("unknown filter '{0}'")]
    UnknownFilter(String),
}

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

/// A predicate deciding whether an item passes a filter value.
///
/// `value` is `None` when nothing has been selected yet; each variant decides
/// whether that is acceptable.
pub trait FilterItems<Item: ?Sized, Value: ?Sized> {
    /// Label shown in a filter selector.
    fn display_name(&self) -> &'static str;

    fn matches(&self, item: &Item, value: Option<&Value>) -> Result<bool, FilterError>;
}

/// The spatial filters a product list can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProductFilter {
    /// Accept everything; the default when no selection has been drawn.
    #[default]
    NoFilter,
    /// Corner/vertex intersection with the selection rectangle.
    Intersect,
}

impl ProductFilter {
    /// Variants in selector order.
    pub fn all() -> [ProductFilter; 2] {
        [ProductFilter::NoFilter, ProductFilter::Intersect]
    }

    /// Short machine name, as accepted by `FromStr`.
    pub fn to_str(&self) -> &'static str {
        match self {
            ProductFilter::NoFilter => "none",
            ProductFilter::Intersect => "intersect",
        }
    }

    /// True for variants that never reject anything.
    #[inline] pub fn is_no_op(&self) -> bool { matches!(self, ProductFilter::NoFilter) }
}

impl FilterItems<Footprint, SelectionRect> for ProductFilter {
    fn display_name(&self) -> &'static str {
        match self {
            ProductFilter::NoFilter => "",
            ProductFilter::Intersect => "Intersect",
        }
    }

    fn matches(&self, footprint: &Footprint, selection: Option<&SelectionRect>) -> Result<bool, FilterError> {
        match self {
            ProductFilter::NoFilter => Ok(true),
            ProductFilter::Intersect => {
                let selection = selection.ok_or(FilterError::MissingSelection { filter: self.to_str() })?;
                Ok(intersects(footprint, selection))
            }
        }
    }
}

impl FilterItems<Product, SelectionRect> for ProductFilter {
    fn display_name(&self) -> &'static str {
        <Self as FilterItems<Footprint, SelectionRect>>::display_name(self)
    }

    fn matches(&self, product: &Product, selection: Option<&SelectionRect>) -> Result<bool, FilterError> {
        <Self as FilterItems<Footprint, SelectionRect>>::matches(self, product.footprint(), selection)
    }
}

impl fmt::Display for ProductFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.to_str()) }
}

impl FromStr for ProductFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(ProductFilter::NoFilter),
            "intersect" => Ok(ProductFilter::Intersect),
            other => Err(FilterError::UnknownFilter(other.to_string())),
        }
    }
}
