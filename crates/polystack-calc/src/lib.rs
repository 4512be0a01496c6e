//! # polystack-calc
//!
//! A line-oriented stack calculator for nested sparse polynomials.
//!
//! This crate provides:
//! - A parser turning a line of text into an instruction or a
//!   polynomial literal
//! - A LIFO store of polynomials
//! - Instruction dispatch against that store
//!
//! The engine itself lives in `polystack-poly`; nothing here inspects a
//! polynomial beyond its public API.
//!
//! ## Input Language
//!
//! Each line is either an instruction (`ZERO`, `ADD`, `DEG_BY 2`,
//! `AT -5`, `COMPOSE 3`, ...), a polynomial literal such as
//! `(1,2)+((3,0),5)`, a `#` comment, or empty. Malformed lines are
//! reported as `ERROR <line> <kind>` and skipped.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod exec;
pub mod inst;
pub mod parse;
pub mod stack;

pub use error::CalcError;
pub use exec::run;
pub use inst::Inst;
pub use parse::parse_line;
pub use stack::PolyStack;
