//! Expression to C-text translation.
//!
//! Grounded in `original_source/microml/ast.py`'s per-node `compile(unifier)`
//! methods: each node renders to a single C expression fragment, and a
//! `Lambda` node renders to a bare `(params) { return body; }` block with no
//! type or name prefix -- the prefix is only added at the declaration level
//! (see [`super::lower_decl`]). That means a `Lambda` nested anywhere other
//! than directly as a declaration's own body (e.g. passed as a call
//! argument, which the grammar allows) lowers to text that is not valid C in
//! that position. This mirrors the original rather than working around it;
//! `flc build` only ever writes the text out, it never compiles it.

use std::collections::HashMap;

use fl_parser::{BinOp, Expr, NodeId};
use fl_typeck::subst::{self, Substitution};
use fl_typeck::Type;

use super::types::to_c;

/// Render `expr` as a C expression fragment.
///
/// `annotations` is the raw, pre-substitution `NodeId -> Type` map produced
/// by type-checking; `substitution` resolves it on demand, one node at a
/// time, matching the original's lazy `unifier(node.typ)` lookups rather
/// than pre-applying every node up front.
pub fn lower_expr(
    expr: &Expr,
    annotations: &HashMap<NodeId, Type>,
    substitution: &Substitution,
) -> String {
    match expr {
        Expr::Int { value, .. } => value.to_string(),
        Expr::Bool { value, .. } => if *value { "1" } else { "0" }.to_string(),
        Expr::Ident { name, .. } => name.clone(),
        Expr::BinOp { op, lhs, rhs, .. } => format!(
            "({} {} {})",
            lower_expr(lhs, annotations, substitution),
            op.symbol(),
            lower_expr(rhs, annotations, substitution),
        ),
        Expr::If {
            cond,
            then_branch,
            else_branch,
            ..
        } => format!(
            "({} ? {} : {})",
            lower_expr(cond, annotations, substitution),
            lower_expr(then_branch, annotations, substitution),
            lower_expr(else_branch, annotations, substitution),
        ),
        Expr::Lambda { params, body, id, .. } => {
            let param_types = lambda_param_types(*id, annotations, substitution);
            let param_list = params
                .iter()
                .zip(param_types.iter())
                .map(|(name, ty)| format!("{ty} {name}"))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "({param_list}) {{\n  return {};\n}}",
                lower_expr(body, annotations, substitution),
            )
        }
        Expr::App { callee, args, .. } => {
            let rendered_args = args
                .iter()
                .map(|arg| lower_expr(arg, annotations, substitution))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{callee}({rendered_args})")
        }
    }
}

/// Read a lambda node's own resolved type back out of the annotation map to
/// recover its parameter types -- equation generation already constrains a
/// `Lambda` node's type to `Func(argtypes, rettype)`, so no separate
/// parameter-type table needs to be threaded through.
fn lambda_param_types(
    id: NodeId,
    annotations: &HashMap<NodeId, Type>,
    substitution: &Substitution,
) -> Vec<String> {
    let raw = annotations
        .get(&id)
        .expect("a lambda node is always annotated");
    match subst::apply(raw, substitution) {
        Type::Func(argtypes, _) => argtypes.iter().map(to_c).collect(),
        other => unreachable!("a lambda's own type is always a Func, got {other}"),
    }
}
