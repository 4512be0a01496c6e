//! Property-based tests for nested polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::poly::{Coeff, Mono, Poly};

    // Strategy for small coefficients; kept well below overflow range
    // since products of three operands appear in the ring axioms.
    fn small_coeff() -> impl Strategy<Value = Coeff> {
        -20i64..20i64
    }

    // Strategy for nested polynomials up to 3 variables deep with at
    // most 3 monomials per level. Built through `from_monos`, so every
    // generated value is canonical.
    fn small_poly() -> impl Strategy<Value = Poly> {
        let leaf = small_coeff().prop_map(Poly::from_coeff);
        leaf.prop_recursive(3, 24, 3, |inner| {
            proptest::collection::vec((0i32..5, inner), 1..=3).prop_map(|monos| {
                Poly::from_monos(
                    monos
                        .into_iter()
                        .map(|(exp, poly)| Mono::new(poly, exp))
                        .collect(),
                )
            })
        })
    }

    proptest! {
        // Ring axioms

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.clone().add(b.clone()), b.add(a));
        }

        #[test]
        fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(
                a.clone().add(b.clone()).add(c.clone()),
                a.add(b.add(c))
            );
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.clone().mul(b.clone()), b.mul(a));
        }

        #[test]
        fn mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(
                a.clone().mul(b.clone()).mul(c.clone()),
                a.mul(b.mul(c))
            );
        }

        #[test]
        fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.clone().mul(b.clone().add(c.clone()));
            let right = a.clone().mul(b).add(a.mul(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn add_identity(a in small_poly()) {
            prop_assert_eq!(a.clone().add(Poly::zero()), a);
        }

        #[test]
        fn add_inverse(a in small_poly()) {
            prop_assert!(a.clone().add(a.neg()).is_zero());
        }

        #[test]
        fn mul_identity(a in small_poly()) {
            prop_assert_eq!(a.clone().mul(Poly::one()), a);
        }

        #[test]
        fn mul_zero(a in small_poly()) {
            prop_assert!(a.mul(Poly::zero()).is_zero());
        }

        // Canonical form

        #[test]
        fn canonicalization_idempotent(a in small_poly()) {
            match &a {
                Poly::Coeff(_) => {}
                Poly::Monos(monos) => {
                    prop_assert_eq!(Poly::from_monos(monos.clone()), a.clone());
                }
            }
        }

        #[test]
        fn canonical_rejects_degenerate_constant_form(c in small_coeff()) {
            let wrapped = Poly::from_monos(vec![Mono::new(Poly::from_coeff(c), 0)]);
            prop_assert_eq!(wrapped, Poly::from_coeff(c));
        }

        // Degree bounds

        #[test]
        fn add_degree_bound(a in small_poly(), b in small_poly()) {
            let bound = a.deg().max(b.deg());
            prop_assert!(a.add(b).deg() <= bound);
        }

        #[test]
        fn scale_preserves_degree(a in small_poly(), c in 1i64..20) {
            prop_assert_eq!(a.clone().scale(c).deg(), a.deg());
        }

        // Evaluation homomorphisms

        #[test]
        fn eval_respects_add(a in small_poly(), b in small_poly(), x in -3i64..3) {
            let lhs = a.clone().add(b.clone()).at(x);
            let rhs = a.at(x).add(b.at(x));
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn eval_respects_mul(a in small_poly(), b in small_poly(), x in -3i64..3) {
            let lhs = a.clone().mul(b.clone()).at(x);
            let rhs = a.at(x).mul(b.at(x));
            prop_assert_eq!(lhs, rhs);
        }

        // Composition

        #[test]
        fn compose_with_constant_matches_eval(a in small_poly(), x in -3i64..3) {
            // Substituting a constant for x0 only replaces the outermost
            // variable if the deeper ones are substituted too; composing
            // a univariate polynomial is exactly evaluation.
            prop_assume!(a.monos().iter().all(|m| m.poly().is_coeff()));
            let lhs = a.clone().compose(vec![Poly::from_coeff(x)]);
            prop_assert_eq!(lhs, a.at(x));
        }
    }
}
