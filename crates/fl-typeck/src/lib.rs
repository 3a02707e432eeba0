//! Hindley-Milner type checker for microml.
//!
//! Each declaration is checked in three passes over its body: [`assign`]
//! binds every node to a fresh type variable (or a literal's fixed type),
//! [`equations`] reads off the constraints those nodes must satisfy, and
//! [`unify`] solves them against an explicit substitution. [`infer_decl`]
//! composes the three into the single entry point a driver calls once per
//! declaration.

pub mod assign;
pub mod equations;
pub mod error;
pub mod subst;
pub mod ty;
pub mod unify;

use std::collections::HashMap;

use fl_parser::{Decl, Expr, NodeId};

pub use assign::SymTab;
pub use error::TypeError;
pub use ty::{FreshVarGen, Type, TypeVar};

/// Every node's fully-applied type, plus the declaration body's own type
/// (what the driver registers in the symbol table for later declarations).
pub struct InferResult {
    pub annotations: HashMap<NodeId, Type>,
    pub decl_type: Type,
}

/// Run the full assign -> generate -> solve pipeline over one declaration's
/// body. `gen` is shared across every declaration a driver checks in one
/// session, so this declaration's variables never collide with an earlier
/// one's when their equations are later solved together.
pub fn infer_decl(body: &Expr, symtab: &SymTab, gen: &mut FreshVarGen) -> Result<InferResult, TypeError> {
    let assignment = assign::assign_typenames(body, symtab, gen)?;
    let eqs = equations::generate_equations(body, &assignment);
    let subst = unify::solve(&eqs)?;

    let annotations = assignment
        .annotations
        .iter()
        .map(|(id, ty)| (*id, subst::apply(ty, &subst)))
        .collect();
    let decl_type = subst::apply(
        assignment
            .annotations
            .get(&body.id())
            .expect("the body's own node is always annotated"),
        &subst,
    );

    Ok(InferResult { annotations, decl_type })
}

/// Type-check a whole declaration, returning the inference result together
/// with a display-ready (pretty-renamed) type for its body.
pub fn infer(decl: &Decl, symtab: &SymTab, gen: &mut FreshVarGen) -> Result<(InferResult, Type), TypeError> {
    let result = infer_decl(&decl.body, symtab, gen)?;
    let display_type = subst::pretty_rename(&result.decl_type);
    Ok((result, display_type))
}
