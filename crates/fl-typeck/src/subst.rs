//! Substitutions: the `{var -> type}` maps unification accumulates, and the
//! two things done with them once solving is complete -- chase a type all
//! the way down, and pretty-rename its remaining free variables.

use std::collections::HashMap;

use crate::ty::{Type, TypeVar};

/// A substitution is a plain map from variable id to the type it was bound
/// to during unification. Unlike a union-find table, applying one is an
/// explicit, idempotent tree rewrite: every `Var` in the result is either
/// free (absent from the map) or one substitution step away from its bound
/// value, never indirectly through another bound variable.
pub type Substitution = HashMap<u32, Type>;

/// Chase `ty` through `subst` until it is fully resolved. Bound variables are
/// replaced by their binding (recursively, in case the binding is itself a
/// variable); `Func` children are resolved independently so the substitution
/// only needs to be single-step valid, not already-transitively-closed.
pub fn apply(ty: &Type, subst: &Substitution) -> Type {
    if subst.is_empty() {
        return ty.clone();
    }
    match ty {
        Type::Int | Type::Bool => ty.clone(),
        Type::Var(v) => match subst.get(&v.0) {
            Some(bound) => apply(bound, subst),
            None => ty.clone(),
        },
        Type::Func(argtypes, rettype) => Type::Func(
            argtypes.iter().map(|a| apply(a, subst)).collect(),
            Box::new(apply(rettype, subst)),
        ),
    }
}

/// Rename the free type variables remaining in a fully-applied type to
/// `a, b, c, ...` in first-occurrence order, for display.
///
/// Order matters here: a `Func`'s return type is visited *before* its
/// argument types, so `lambda x -> lambda y -> x` (type `a -> (b -> a)`)
/// assigns `a` to the outer return's variable, not to the first parameter.
pub fn pretty_rename(ty: &Type) -> Type {
    let mut namemap: HashMap<u32, u32> = HashMap::new();
    let mut next = 0u32;
    rename(ty, &mut namemap, &mut next)
}

fn rename(ty: &Type, namemap: &mut HashMap<u32, u32>, next: &mut u32) -> Type {
    match ty {
        Type::Int | Type::Bool => ty.clone(),
        Type::Var(v) => {
            let index = *namemap.entry(v.0).or_insert_with(|| {
                let i = *next;
                *next += 1;
                i
            });
            Type::Var(TypeVar::renamed(index))
        }
        Type::Func(argtypes, rettype) => {
            let rettype = rename(rettype, namemap, next);
            let argtypes = argtypes.iter().map(|a| rename(a, namemap, next)).collect();
            Type::Func(argtypes, Box::new(rettype))
        }
    }
}
