//! Name-assignment pass: walks an expression tree once, binding every node
//! to a fresh type variable (or its literal's fixed type) and resolving
//! every bare name against the scope it appears in.
//!
//! This mirrors `assign_typenames` threading an ever-growing symbol table
//! down through the tree; the only structural difference is that an `App`
//! node's callee is a bare `String`, not a sub-expression, so its resolved
//! type is recorded in `callee_types` alongside the per-node annotation map
//! instead of living on a child node.

use std::collections::HashMap;

use fl_parser::{Expr, NodeId};
use rustc_hash::FxHashMap;

use crate::error::TypeError;
use crate::ty::{FreshVarGen, Type};

/// Maps a name in scope to the type assigned to it.
pub type SymTab = FxHashMap<String, Type>;

/// The result of a name-assignment pass over one expression tree.
pub struct Assignment {
    /// Every node's own type (a fresh variable, except literals).
    pub annotations: HashMap<NodeId, Type>,
    /// For each `App` node, the resolved type of its callee.
    pub callee_types: HashMap<NodeId, Type>,
    /// For each `Lambda` node, its parameters' fresh types in declaration order.
    pub lambda_param_types: HashMap<NodeId, Vec<Type>>,
}

pub fn assign_typenames(expr: &Expr, symtab: &SymTab, gen: &mut FreshVarGen) -> Result<Assignment, TypeError> {
    let mut assignment = Assignment {
        annotations: HashMap::new(),
        callee_types: HashMap::new(),
        lambda_param_types: HashMap::new(),
    };
    walk(expr, symtab, gen, &mut assignment)?;
    Ok(assignment)
}

fn walk(expr: &Expr, symtab: &SymTab, gen: &mut FreshVarGen, out: &mut Assignment) -> Result<(), TypeError> {
    match expr {
        Expr::Int { id, .. } => {
            out.annotations.insert(*id, Type::Int);
        }
        Expr::Bool { id, .. } => {
            out.annotations.insert(*id, Type::Bool);
        }
        Expr::Ident { id, name, span } => {
            let ty = lookup(symtab, name, *span)?;
            out.annotations.insert(*id, ty);
        }
        Expr::Lambda { id, params, body, .. } => {
            out.annotations.insert(*id, gen.fresh());
            let mut local = symtab.clone();
            let mut param_types = Vec::with_capacity(params.len());
            for name in params {
                let ty = gen.fresh();
                local.insert(name.clone(), ty.clone());
                param_types.push(ty);
            }
            out.lambda_param_types.insert(*id, param_types);
            walk(body, &local, gen, out)?;
        }
        Expr::BinOp { id, lhs, rhs, .. } => {
            out.annotations.insert(*id, gen.fresh());
            walk(lhs, symtab, gen, out)?;
            walk(rhs, symtab, gen, out)?;
        }
        Expr::If {
            id,
            cond,
            then_branch,
            else_branch,
            ..
        } => {
            out.annotations.insert(*id, gen.fresh());
            walk(cond, symtab, gen, out)?;
            walk(then_branch, symtab, gen, out)?;
            walk(else_branch, symtab, gen, out)?;
        }
        Expr::App { id, callee, args, span } => {
            out.annotations.insert(*id, gen.fresh());
            let callee_ty = lookup(symtab, callee, *span)?;
            out.callee_types.insert(*id, callee_ty);
            for arg in args {
                walk(arg, symtab, gen, out)?;
            }
        }
    }
    Ok(())
}

fn lookup(symtab: &SymTab, name: &str, span: fl_common::Span) -> Result<Type, TypeError> {
    symtab.get(name).cloned().ok_or_else(|| TypeError::UnboundName {
        name: name.to_string(),
        span,
    })
}
