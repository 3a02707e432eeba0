//! Unification over an explicit substitution map.
//!
//! Each equation is solved against the substitution accumulated so far;
//! failure at any point aborts the whole pass and reports the specific pair
//! of types (or the occurs-check variable) that couldn't unify, rather than
//! just "no substitution exists".

use fl_common::Span;

use crate::equations::Equation;
use crate::error::TypeError;
use crate::subst::Substitution;
use crate::ty::{Type, TypeVar};

/// Unify two types under `subst`, returning the extended substitution, or
/// the `TypeError` that explains why they can never be made equal. `span`
/// is the originating equation's source location, carried through every
/// recursive call so a failure deep inside a `Func`-`Func` pair is still
/// blamed on the equation that introduced it rather than an anonymous
/// sub-type pair.
pub fn unify(x: &Type, y: &Type, subst: Substitution, span: Span) -> Result<Substitution, TypeError> {
    if x == y {
        return Ok(subst);
    }
    match (x, y) {
        (Type::Var(v), _) => unify_variable(*v, y, subst, span),
        (_, Type::Var(v)) => unify_variable(*v, x, subst, span),
        (Type::Func(a1, r1), Type::Func(a2, r2)) => {
            if a1.len() != a2.len() {
                return Err(mismatch(x, y, span));
            }
            let mut subst = unify(r1, r2, subst, span)?;
            for (p, q) in a1.iter().zip(a2.iter()) {
                subst = unify(p, q, subst, span)?;
            }
            Ok(subst)
        }
        _ => Err(mismatch(x, y, span)),
    }
}

fn mismatch(x: &Type, y: &Type, span: Span) -> TypeError {
    TypeError::Mismatch {
        left: x.clone(),
        right: y.clone(),
        span,
    }
}

fn unify_variable(v: TypeVar, ty: &Type, subst: Substitution, span: Span) -> Result<Substitution, TypeError> {
    if let Some(bound) = subst.get(&v.0).cloned() {
        return unify(&bound, ty, subst, span);
    }
    if let Type::Var(other) = ty {
        if let Some(bound) = subst.get(&other.0).cloned() {
            return unify(&Type::Var(v), &bound, subst, span);
        }
    }
    if occurs_in(v, ty, &subst) {
        return Err(TypeError::InfiniteType { var: v, ty: ty.clone(), span });
    }
    let mut subst = subst;
    subst.insert(v.0, ty.clone());
    Ok(subst)
}

/// Whether `v` appears anywhere inside `ty`, chasing already-bound variables.
/// Prevents binding a variable to a type built out of itself, e.g. `a ~ a -> Int`.
fn occurs_in(v: TypeVar, ty: &Type, subst: &Substitution) -> bool {
    match ty {
        Type::Var(other) => {
            if *other == v {
                true
            } else if let Some(bound) = subst.get(&other.0) {
                occurs_in(v, bound, subst)
            } else {
                false
            }
        }
        Type::Func(argtypes, rettype) => {
            occurs_in(v, rettype, subst) || argtypes.iter().any(|a| occurs_in(v, a, subst))
        }
        Type::Int | Type::Bool => false,
    }
}

/// Solve a full list of equations in order, threading the substitution
/// through each one. Stops at the first unsolvable equation.
pub fn solve(equations: &[Equation]) -> Result<Substitution, TypeError> {
    let mut subst = Substitution::new();
    for eq in equations {
        subst = unify(&eq.left, &eq.right, subst, eq.span)?;
    }
    Ok(subst)
}
