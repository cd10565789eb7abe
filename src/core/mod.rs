pub mod scale_math;
pub mod types;
pub mod viewport;

pub use scale_math::{
    closest_candidate, contains, linear_ratio, log_ratio, nice_step, order_of_magnitude,
};
pub use types::{ContainerSize, Orientation, ValueRange};
pub use viewport::{ResolvedViewport, ViewportFn, ViewportLength, ViewportRect, ViewportSource};
