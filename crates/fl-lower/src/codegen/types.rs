//! Type to C type-name mapping.
//!
//! Grounded in `typing.py`'s `to_c` methods: `Int`/`Bool` both render as the
//! single C scalar type `int` (the language has no distinct boolean
//! representation), a function's own "C type" is its ultimate return type
//! found by recursing through nested `Func` layers, and an unresolved type
//! variable renders as its own display name -- not a valid C type, but one
//! that can only appear for a declaration whose type was never pinned down
//! by any call site, and `flc build` never runs its output through a C
//! compiler.

use fl_typeck::Type;

/// Render `ty` as a C type name.
pub fn to_c(ty: &Type) -> String {
    match ty {
        Type::Int | Type::Bool => "int".to_string(),
        Type::Func(_, rettype) => to_c(rettype),
        Type::Var(_) => ty.to_string(),
    }
}
