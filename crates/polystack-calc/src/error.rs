//! Per-line calculator errors.
//!
//! The `Display` form of each variant is the exact diagnostic text; the
//! REPL prefixes it with `ERROR <line> `.

use thiserror::Error;

/// An error detected while parsing or executing one input line.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// Unknown or malformed instruction word.
    #[error("WRONG COMMAND")]
    WrongCommand,

    /// Malformed polynomial literal.
    #[error("WRONG POLY")]
    WrongPoly,

    /// Missing or malformed `DEG_BY` argument.
    #[error("DEG BY WRONG VARIABLE")]
    DegByWrongVariable,

    /// Missing or malformed `AT` argument.
    #[error("AT WRONG VALUE")]
    AtWrongValue,

    /// Missing or malformed `COMPOSE` argument.
    #[error("COMPOSE WRONG PARAMETER")]
    ComposeWrongParameter,

    /// Too few polynomials on the stack for the instruction.
    #[error("STACK UNDERFLOW")]
    StackUnderflow,
}
