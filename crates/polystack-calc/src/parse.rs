//! Line parser for instructions and polynomial literals.
//!
//! The grammar is strict: a parameterized instruction takes exactly one
//! space before its argument, numeric parsing is overflow-checked, and
//! the whole line must be consumed. One quirk of the original input
//! language is kept: an empty exponent before the closing parenthesis,
//! as in `(1,)`, reads as exponent 0.

use polystack_poly::{Coeff, Exp, Mono, Poly};

use crate::error::CalcError;
use crate::inst::Inst;

/// Parses one input line.
///
/// Returns `Ok(None)` for empty lines and `#` comments, `Ok(Some(inst))`
/// for an instruction or polynomial-literal push, and the diagnostic
/// error otherwise.
///
/// # Errors
///
/// Any [`CalcError`] except `StackUnderflow`, which only execution can
/// detect.
pub fn parse_line(line: &str) -> Result<Option<Inst>, CalcError> {
    match line.as_bytes().first() {
        None | Some(b'#') => Ok(None),
        Some(b) if b.is_ascii_alphabetic() => parse_inst(line).map(Some),
        _ => {
            let mut cur = Cursor::new(line);
            let poly = parse_poly(&mut cur, false)?;
            Ok(Some(Inst::Push(poly)))
        }
    }
}

/// A byte cursor over one line of input.
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Consumes `b` if it is the next byte.
    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn at_end(&self) -> bool {
        self.pos == self.text.len()
    }

    /// Consumes a maximal run of ASCII digits, returning the slice.
    fn digits(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.bump();
        }
        &self.text[start..self.pos]
    }
}

/// Parses a polynomial: either a coefficient or a `+`-joined sequence of
/// parenthesized monomials. Inside a monomial the polynomial is
/// terminated by the `,` before the exponent; at top level it must
/// reach the end of the line.
fn parse_poly(cur: &mut Cursor, in_mono: bool) -> Result<Poly, CalcError> {
    match cur.peek() {
        Some(b'-') | Some(b'0'..=b'9') => {
            let coeff = parse_coeff(cur)?;
            expect_terminator(cur, in_mono)?;
            Ok(Poly::from_coeff(coeff))
        }
        Some(b'(') => {
            cur.bump();
            let mut monos = vec![parse_mono(cur)?];
            while cur.eat(b'+') {
                if !cur.eat(b'(') {
                    return Err(CalcError::WrongPoly);
                }
                monos.push(parse_mono(cur)?);
            }
            expect_terminator(cur, in_mono)?;
            Ok(Poly::from_monos(monos))
        }
        _ => Err(CalcError::WrongPoly),
    }
}

/// After a complete polynomial, a `,` must follow inside a monomial and
/// the line must end at top level.
fn expect_terminator(cur: &mut Cursor, in_mono: bool) -> Result<(), CalcError> {
    let ok = if in_mono { cur.eat(b',') } else { cur.at_end() };
    if ok {
        Ok(())
    } else {
        Err(CalcError::WrongPoly)
    }
}

/// Parses an overflow-checked, optionally negated decimal coefficient.
/// Stops before a `,` or the end of the line; any other byte is an
/// error.
fn parse_coeff(cur: &mut Cursor) -> Result<Coeff, CalcError> {
    let start = cur.pos;
    cur.eat(b'-');
    let digits = cur.digits();
    if digits.is_empty() {
        return Err(CalcError::WrongPoly);
    }
    match cur.peek() {
        None | Some(b',') => {}
        Some(_) => return Err(CalcError::WrongPoly),
    }
    cur.text[start..cur.pos]
        .parse()
        .map_err(|_| CalcError::WrongPoly)
}

/// Parses `poly,exp)` after the opening parenthesis.
fn parse_mono(cur: &mut Cursor) -> Result<Mono, CalcError> {
    let poly = parse_poly(cur, true)?;
    let exp = parse_exp(cur)?;
    Ok(Mono::new(poly, exp))
}

/// Parses an overflow-checked non-negative exponent terminated by `)`.
/// An empty digit run reads as 0.
fn parse_exp(cur: &mut Cursor) -> Result<Exp, CalcError> {
    let digits = cur.digits();
    let exp = if digits.is_empty() {
        0
    } else {
        digits.parse().map_err(|_| CalcError::WrongPoly)?
    };
    if cur.eat(b')') {
        Ok(exp)
    } else {
        Err(CalcError::WrongPoly)
    }
}

/// Parses an instruction line: an uppercase-and-underscore word,
/// optionally followed by one space and an argument.
fn parse_inst(line: &str) -> Result<Inst, CalcError> {
    let word_end = line
        .bytes()
        .position(|b| !(b.is_ascii_uppercase() || b == b'_'))
        .unwrap_or(line.len());
    let (word, rest) = line.split_at(word_end);

    let no_arg = match word {
        "ZERO" => Some(Inst::Zero),
        "IS_COEFF" => Some(Inst::IsCoeff),
        "IS_ZERO" => Some(Inst::IsZero),
        "CLONE" => Some(Inst::Clone),
        "NEG" => Some(Inst::Neg),
        "ADD" => Some(Inst::Add),
        "MUL" => Some(Inst::Mul),
        "SUB" => Some(Inst::Sub),
        "IS_EQ" => Some(Inst::IsEq),
        "DEG" => Some(Inst::Deg),
        "PRINT" => Some(Inst::Print),
        "POP" => Some(Inst::Pop),
        _ => None,
    };
    if let Some(inst) = no_arg {
        return if rest.is_empty() {
            Ok(inst)
        } else {
            Err(CalcError::WrongCommand)
        };
    }

    match word {
        "DEG_BY" => parse_arg(rest, CalcError::DegByWrongVariable, parse_index).map(Inst::DegBy),
        "AT" => parse_arg(rest, CalcError::AtWrongValue, parse_value).map(Inst::At),
        "COMPOSE" => {
            parse_arg(rest, CalcError::ComposeWrongParameter, parse_index).map(Inst::Compose)
        }
        _ => Err(CalcError::WrongCommand),
    }
}

/// Applies the argument parser after the mandatory single space.
///
/// A missing argument reports the instruction's own error; a word glued
/// to anything other than a space is an unknown command.
fn parse_arg<T>(
    rest: &str,
    err: CalcError,
    parse: fn(&str) -> Option<T>,
) -> Result<T, CalcError> {
    match rest.strip_prefix(' ') {
        Some(arg) => parse(arg).ok_or(err),
        None if rest.is_empty() => Err(err),
        None => Err(CalcError::WrongCommand),
    }
}

/// A variable index or composition count: decimal digits only.
fn parse_index(arg: &str) -> Option<usize> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    arg.parse().ok()
}

/// An evaluation point: optionally negated decimal digits.
fn parse_value(arg: &str) -> Option<Coeff> {
    let digits = arg.strip_prefix('-').unwrap_or(arg);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    arg.parse().ok()
}
