//! Core building blocks: the raster representation, geometry values,
//! processing parameters and the pure processing steps (pad, crop,
//! border trim, alpha trim, bounding box, resize). These are consumed by
//! the high-level `api` module.
pub mod geometry;
pub mod image;
pub mod params;
pub mod processing;
