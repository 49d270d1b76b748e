pub mod bounding_box;
pub mod crop;
pub mod crop_alpha;
pub mod crop_border;
pub mod padding;
pub mod pipeline;
pub mod resize;
pub mod section;
