//! FFT Algorithm Implementations
//!
//! This module contains the two formulations of the radix-2 Decimation-in-Time transform.
//!
//! ## Available Algorithms
//!
//! - **Recursive**: splits the input by index parity and reuses the output buffer as
//!   scratch space on every level. Twiddle factors are evaluated as they are needed.
//!
//! - **Iterative**: bit-reverses the input into the output buffer, then runs `log2(n)`
//!   butterfly passes reading twiddle factors from a precomputed table.
//!
//! ## Algorithm Selection
//!
//! - Use the recursive transform for one-off transforms, where building a table does not pay off.
//! - Use the iterative transform with a [`Planner`](crate::planner::Planner) when
//!   transforming many buffers of the same size.
//!
//! Neither applies `1 / n` scaling on the inverse transform, and neither validates its
//! arguments.

pub mod bit_reverse;
pub mod iterative;
pub mod recursive;
