pub mod bounds;
pub mod filter;
pub mod filters;
