/// RGBA color with each channel in `[0, 1]`
pub type Colorf32 = glam::Vec4;
