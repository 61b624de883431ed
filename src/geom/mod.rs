mod bbox;
mod footprint;
mod rect;

pub(crate) use bbox::BoundingBox;
pub use footprint::Footprint;
pub use rect::SelectionRect;
