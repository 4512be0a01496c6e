//! Polynomial composition.
//!
//! `p.compose(q)` substitutes `q[i]` for the variable at nesting depth
//! `i` of `p`, for every `i < k = q.len()`. Substituted depths vanish
//! from the tree shape.
//!
//! Variables at depth >= k have nothing substituted for them. A branch
//! whose exponent at such a depth is nonzero collapses to zero; a pure
//! `x^0` chain degenerates to its constant. This rule is kept exactly as
//! the calculator defines it.
//!
//! Raising `q[i]` to the exponents occurring at depth `i` uses a
//! squared-power table: `q, q^2, q^4, ...` built once per depth by
//! repeated squaring, with `q^e` assembled from the set bits of `e` in
//! O(log e) multiplications.

use crate::poly::{Exp, Poly};

/// Squared powers `q^1, q^2, q^4, ...` of one substituted polynomial.
struct PowerTable {
    powers: Vec<Poly>,
}

impl PowerTable {
    /// Builds a table with `entries` levels of repeated squaring,
    /// consuming `q`. With zero entries `q` is dropped unused: no
    /// monomial needs a positive power of it.
    fn build(q: Poly, entries: usize) -> Self {
        let mut powers = Vec::with_capacity(entries);
        if entries > 0 {
            powers.push(q);
            for i in 1..entries {
                let prev = powers[i - 1].clone();
                powers.push(prev.clone().mul(prev));
            }
        }
        Self { powers }
    }

    /// Assembles `q^exp` from the set bits of `exp`.
    ///
    /// The table must have been built for a maximum exponent at least
    /// `exp`.
    fn pow(&self, exp: Exp) -> Poly {
        let mut result = Poly::one();
        let mut exp = exp;
        let mut level = 0;
        while exp != 0 {
            if exp & 1 == 1 {
                result = result.mul(self.powers[level].clone());
            }
            exp >>= 1;
            level += 1;
        }
        result
    }
}

/// Number of squared-power levels needed for exponents up to `exp`.
fn exp_bits(exp: Exp) -> usize {
    debug_assert!(exp >= 0);
    (Exp::BITS - exp.leading_zeros()) as usize
}

/// Records the maximum exponent occurring at each depth below `k`.
fn collect_max_exps(p: &Poly, depth: usize, maxes: &mut [Exp]) {
    if depth >= maxes.len() {
        return;
    }
    for m in p.monos() {
        maxes[depth] = maxes[depth].max(m.exp());
        collect_max_exps(m.poly(), depth + 1, maxes);
    }
}

/// Rewrites a node at a substituted depth (`depth < k`).
fn compose_node(p: Poly, depth: usize, tables: &[PowerTable]) -> Poly {
    if depth >= tables.len() {
        return collapse_beyond(p, depth, tables);
    }
    let Poly::Monos(monos) = p else {
        return p;
    };

    let mut acc = Poly::zero();
    for m in monos {
        let exp = m.exp();
        let sub = compose_node(m.into_poly(), depth + 1, tables);
        if sub.is_zero() {
            // Contributes 0 regardless of q^exp.
            continue;
        }
        acc = acc.add(tables[depth].pow(exp).mul(sub));
    }
    acc
}

/// Applies the no-substitution-left rule at `depth >= k`.
///
/// Recursion first collapses the sub-polynomial of the exponent-0
/// monomial (if any) to a constant or zero; every other monomial carries
/// a positive power of an unavailable variable and becomes zero.
fn collapse_beyond(p: Poly, depth: usize, tables: &[PowerTable]) -> Poly {
    let Poly::Monos(mut monos) = p else {
        return p;
    };
    match monos.pop() {
        // Sorted descending: only the last monomial can have exponent 0.
        Some(m) if m.exp() == 0 => compose_node(m.into_poly(), depth + 1, tables),
        _ => Poly::zero(),
    }
}

impl Poly {
    /// Composes the polynomial with `args`, substituting `args[i]` for
    /// the variable at nesting depth `i`. Consumes `self` and every
    /// element of `args`.
    #[must_use]
    pub fn compose(self, args: Vec<Poly>) -> Self {
        let mut maxes = vec![0; args.len()];
        collect_max_exps(&self, 0, &mut maxes);

        let tables: Vec<PowerTable> = args
            .into_iter()
            .zip(&maxes)
            .map(|(q, &max_exp)| PowerTable::build(q, exp_bits(max_exp)))
            .collect();

        compose_node(self, 0, &tables)
    }
}
