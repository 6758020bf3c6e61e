//! Position-dependent 1-D blur pass with mirrored borders.

pub mod mirror;
pub mod pass;

pub use mirror::reflect_index;
pub use pass::apply_blur_pass;
