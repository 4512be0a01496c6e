//! The polynomial stack the calculator operates on.

use polystack_poly::Poly;

/// A LIFO stack of polynomials.
///
/// Purely a container: arity checks and the underflow diagnostic live
/// in the executor, which asks for the operands it needs and maps a
/// refusal to an error.
#[derive(Debug, Default)]
pub struct PolyStack {
    polys: Vec<Poly>,
}

impl PolyStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of polynomials on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// Whether the stack holds no polynomials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// Pushes `poly` on top.
    pub fn push(&mut self, poly: Poly) {
        self.polys.push(poly);
    }

    /// Removes and returns the top polynomial.
    pub fn pop(&mut self) -> Option<Poly> {
        self.polys.pop()
    }

    /// Removes and returns the top two polynomials, topmost first.
    pub fn pop_pair(&mut self) -> Option<(Poly, Poly)> {
        if self.polys.len() < 2 {
            return None;
        }
        let top = self.polys.pop()?;
        let second = self.polys.pop()?;
        Some((top, second))
    }

    /// Removes the `count` polynomials below the top, returned
    /// bottom-to-top. The caller pops the top separately.
    pub fn pop_many(&mut self, count: usize) -> Option<Vec<Poly>> {
        let remaining = self.polys.len().checked_sub(count)?;
        Some(self.polys.split_off(remaining))
    }

    /// The top polynomial, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Poly> {
        self.polys.last()
    }

    /// Mutable access to the top polynomial, if any.
    pub fn top_mut(&mut self) -> Option<&mut Poly> {
        self.polys.last_mut()
    }

    /// The polynomial directly below the top, if any.
    #[must_use]
    pub fn second(&self) -> Option<&Poly> {
        let idx = self.polys.len().checked_sub(2)?;
        self.polys.get(idx)
    }
}
