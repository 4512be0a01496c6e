//! Instruction execution against a polynomial stack.

use std::mem;

use polystack_poly::Poly;

use crate::error::CalcError;
use crate::inst::Inst;
use crate::stack::PolyStack;

/// Executes one instruction.
///
/// Returns the line to print, if the instruction produces output. When
/// the stack holds fewer polynomials than the instruction needs,
/// nothing is popped and the stack is left as it was.
///
/// # Errors
///
/// [`CalcError::StackUnderflow`] on insufficient operands.
pub fn run(stack: &mut PolyStack, inst: Inst) -> Result<Option<String>, CalcError> {
    match inst {
        Inst::Zero => {
            stack.push(Poly::zero());
            Ok(None)
        }
        Inst::IsCoeff => {
            let top = stack.top().ok_or(CalcError::StackUnderflow)?;
            Ok(Some(flag(top.is_coeff())))
        }
        Inst::IsZero => {
            let top = stack.top().ok_or(CalcError::StackUnderflow)?;
            Ok(Some(flag(top.is_zero())))
        }
        Inst::Clone => {
            let top = stack.top().ok_or(CalcError::StackUnderflow)?;
            let copy = top.clone();
            stack.push(copy);
            Ok(None)
        }
        Inst::Neg => {
            let top = stack.top_mut().ok_or(CalcError::StackUnderflow)?;
            *top = mem::take(top).neg();
            Ok(None)
        }
        Inst::Add => binary(stack, Poly::add),
        Inst::Mul => binary(stack, Poly::mul),
        Inst::Sub => binary(stack, Poly::sub),
        Inst::IsEq => {
            let top = stack.top().ok_or(CalcError::StackUnderflow)?;
            let second = stack.second().ok_or(CalcError::StackUnderflow)?;
            Ok(Some(flag(top == second)))
        }
        Inst::Deg => {
            let top = stack.top().ok_or(CalcError::StackUnderflow)?;
            Ok(Some(top.deg().to_string()))
        }
        Inst::DegBy(idx) => {
            let top = stack.top().ok_or(CalcError::StackUnderflow)?;
            Ok(Some(top.deg_by(idx).to_string()))
        }
        Inst::At(x) => {
            let top = stack.pop().ok_or(CalcError::StackUnderflow)?;
            stack.push(top.at(x));
            Ok(None)
        }
        Inst::Print => {
            let top = stack.top().ok_or(CalcError::StackUnderflow)?;
            Ok(Some(top.to_string()))
        }
        Inst::Pop => {
            stack.pop().ok_or(CalcError::StackUnderflow)?;
            Ok(None)
        }
        Inst::Compose(count) => {
            // one composed polynomial plus `count` substituted ones
            let needed = count.checked_add(1).ok_or(CalcError::StackUnderflow)?;
            if stack.len() < needed {
                return Err(CalcError::StackUnderflow);
            }
            let target = stack.pop().ok_or(CalcError::StackUnderflow)?;
            let args = stack.pop_many(count).ok_or(CalcError::StackUnderflow)?;
            stack.push(target.compose(args));
            Ok(None)
        }
        Inst::Push(poly) => {
            stack.push(poly);
            Ok(None)
        }
    }
}

/// Pops the two topmost polynomials and pushes `op(top, second)`.
fn binary(
    stack: &mut PolyStack,
    op: fn(Poly, Poly) -> Poly,
) -> Result<Option<String>, CalcError> {
    let (top, second) = stack.pop_pair().ok_or(CalcError::StackUnderflow)?;
    stack.push(op(top, second));
    Ok(None)
}

fn flag(value: bool) -> String {
    String::from(if value { "1" } else { "0" })
}
