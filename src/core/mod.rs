pub mod dataset;
pub mod scale;
pub mod types;

pub use dataset::{Attribute, Axis, Dataset, Record};
pub use scale::{
    DEFAULT_DOMAIN_MAX_FACTOR, DEFAULT_DOMAIN_MIN_FACTOR, LinearScale, MAX_TICK_COUNT,
    build_scale, build_scale_with_padding,
};
pub use types::{Margins, PlotArea, Viewport};
