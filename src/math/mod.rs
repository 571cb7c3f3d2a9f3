pub mod distance_2d;
pub mod intersect_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// This is the epsilon used to decide when two floating-point quantities
/// coincide; it is unrelated to the connection tolerance of a trace, which
/// is a caller-supplied distance in network units.
pub const TOLERANCE: f64 = 1e-10;
