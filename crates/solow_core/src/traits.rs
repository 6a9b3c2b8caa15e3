use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in the growth model.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A one-dimensional law of motion for capital per worker.
pub trait AccumulationLaw<T: Scalar> {
    /// Evaluates the net change in capital per worker, `dk/dt`, at `k`.
    fn net_investment(&self, k: T) -> T;
}
