//! # polystack-poly
//!
//! Sparse multivariate polynomial arithmetic over nested variables.
//!
//! This crate provides:
//! - A recursive sparse representation where the variable index is the
//!   nesting depth of the tree rather than a stored field
//! - A canonicalizer keeping that representation unique
//! - Ring arithmetic (add, negate, subtract, scale, multiply)
//! - Degree queries and single-point evaluation
//! - Polynomial composition with per-depth squared-power tables
//!
//! ## Ownership Model
//!
//! Every polynomial exclusively owns its monomial tree. Operations that
//! rewrite a polynomial consume their operands by value and return the
//! result by value; read-only queries borrow. There is never aliasing
//! between two live polynomials.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod compose;
pub mod degree;
pub mod eval;
pub mod poly;

#[cfg(test)]
mod proptests;

pub use eval::coeff_pow;
pub use poly::{Coeff, Exp, Mono, Poly};
