pub mod canvas_size;
pub mod colour;
pub mod complex;
pub mod escape_outcome;
pub mod pixel_buffer;
pub mod plane_region;
pub mod point;
pub mod viewport;
