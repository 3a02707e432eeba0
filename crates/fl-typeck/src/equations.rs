//! Constraint generation: a second walk over the expression tree, using the
//! annotations from [`crate::assign`] to produce the list of equations the
//! unifier must solve.
//!
//! Every equation states that the types of two previously-assigned type
//! slots must be equal. Literal nodes already carry their final type from
//! the assignment pass (there's no variable left to constrain), so unlike
//! `generate_equations`'s uniform per-node-kind walk, this doesn't emit a
//! trivial `Int == Int` equation for them.

use fl_common::Span;
use fl_parser::{Expr, NodeId};

use crate::assign::Assignment;
use crate::ty::Type;

/// One constraint the unifier must satisfy: the types of two previously
/// assigned type slots must be equal. `span` is the source location of the
/// expression the equation is about, carried through so a unification
/// failure can point back at it instead of just naming two types.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    pub left: Type,
    pub right: Type,
    pub span: Span,
}

impl Equation {
    fn new(left: Type, right: Type, span: Span) -> Self {
        Self { left, right, span }
    }
}

pub fn generate_equations(expr: &Expr, assignment: &Assignment) -> Vec<Equation> {
    let mut eqs = Vec::new();
    walk(expr, assignment, &mut eqs);
    eqs
}

fn ty_of(assignment: &Assignment, id: NodeId) -> Type {
    assignment
        .annotations
        .get(&id)
        .cloned()
        .expect("every node is annotated before equations are generated")
}

fn walk(expr: &Expr, assignment: &Assignment, eqs: &mut Vec<Equation>) {
    match expr {
        Expr::Int { .. } | Expr::Bool { .. } | Expr::Ident { .. } => {}
        Expr::BinOp { id, op, lhs, rhs, .. } => {
            walk(lhs, assignment, eqs);
            walk(rhs, assignment, eqs);
            eqs.push(Equation::new(ty_of(assignment, lhs.id()), Type::Int, lhs.span()));
            eqs.push(Equation::new(ty_of(assignment, rhs.id()), Type::Int, rhs.span()));
            let result = if op.is_comparison() { Type::Bool } else { Type::Int };
            eqs.push(Equation::new(ty_of(assignment, *id), result, expr.span()));
        }
        Expr::If {
            id,
            cond,
            then_branch,
            else_branch,
            ..
        } => {
            walk(cond, assignment, eqs);
            walk(then_branch, assignment, eqs);
            walk(else_branch, assignment, eqs);
            eqs.push(Equation::new(ty_of(assignment, cond.id()), Type::Bool, cond.span()));
            eqs.push(Equation::new(ty_of(assignment, *id), ty_of(assignment, then_branch.id()), then_branch.span()));
            eqs.push(Equation::new(ty_of(assignment, *id), ty_of(assignment, else_branch.id()), else_branch.span()));
        }
        Expr::App { id, args, .. } => {
            for arg in args {
                walk(arg, assignment, eqs);
            }
            let callee_ty = assignment
                .callee_types
                .get(id)
                .cloned()
                .expect("every App node has a resolved callee type");
            let argtypes = args.iter().map(|a| ty_of(assignment, a.id())).collect();
            eqs.push(Equation::new(callee_ty, Type::func(argtypes, ty_of(assignment, *id)), expr.span()));
        }
        Expr::Lambda { id, body, .. } => {
            walk(body, assignment, eqs);
            let param_types = assignment
                .lambda_param_types
                .get(id)
                .cloned()
                .expect("every Lambda node has recorded param types");
            eqs.push(Equation::new(ty_of(assignment, *id), Type::func(param_types, ty_of(assignment, body.id())), expr.span()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::{assign_typenames, SymTab};
    use crate::ty::FreshVarGen;
    use fl_parser::{parse_decl, TerminationMode};

    fn equations_for(source: &str, symtab: &SymTab) -> Vec<Equation> {
        let (decl, _) = parse_decl(source, TerminationMode::Strict).expect("parses");
        let mut gen = FreshVarGen::new();
        let assignment = assign_typenames(&decl.body, symtab, &mut gen).expect("assigns");
        generate_equations(&decl.body, &assignment)
    }

    #[test]
    fn literal_produces_no_equations() {
        assert!(equations_for("x = 42", &SymTab::default()).is_empty());
    }

    #[test]
    fn binop_constrains_operands_to_int() {
        let eqs = equations_for("x = 1 + 2", &SymTab::default());
        assert!(eqs.iter().any(|e| e.right == Type::Int));
        assert!(eqs.iter().any(|e| e.left == Type::Int && e.right == Type::Int));
    }

    #[test]
    fn comparison_result_is_bool() {
        let eqs = equations_for("x = 1 < 2", &SymTab::default());
        assert!(eqs.iter().any(|e| e.right == Type::Bool));
    }

    #[test]
    fn if_constrains_condition_to_bool_and_branches_equal() {
        let eqs = equations_for("x = if true then 1 else 2", &SymTab::default());
        assert!(eqs.iter().any(|e| e.right == Type::Bool));
        assert_eq!(eqs.len(), 3);
    }

    #[test]
    fn lambda_constrains_its_own_type_to_func() {
        let eqs = equations_for("id = lambda x -> x", &SymTab::default());
        assert_eq!(eqs.len(), 1);
        assert!(matches!(eqs[0].right, Type::Func(..)));
    }
}
