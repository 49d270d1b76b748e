//! File adapter around the pure geometry core: decode image files into
//! normalized rasters and encode them back. Only built with the `io` feature.
pub mod codec;
pub use codec::{load_image, save_image};
