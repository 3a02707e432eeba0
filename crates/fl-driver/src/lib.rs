//! Session driver: parses one declaration at a time, type-checks it against
//! the session's growing symbol table and equation list, and keeps the
//! ordered list of declarations an interpreter or lowerer later consumes.
//!
//! Mirrors the `Compiler.compile` loop: a declaration's equations are
//! appended to the session's equation list and the *entire* list is solved
//! again on every call (never an incremental delta), so a later declaration
//! can retroactively pin down a type variable an earlier one left free in
//! the symbol table. Nothing is committed to session state until the whole
//! pipeline for the new declaration succeeds -- a failed declaration leaves
//! the symbol table, equation list, and code list exactly as they were.

use fl_common::error::CoreError;
use fl_parser::{Decl, NodeId};
use fl_typeck::{FreshVarGen, SymTab, Type};
use std::collections::HashMap;

/// One successfully type-checked declaration, in the form an interpreter or
/// lowerer needs: the parsed body, its nodes' pre-substitution types, and
/// the substitution that was in effect when it was compiled. Equations
/// already solved can only gain new bindings later, never lose the ones a
/// past declaration relied on, so this substitution stays valid even as the
/// session's equation list keeps growing.
pub struct CompiledDecl {
    pub decl: Decl,
    pub annotations: HashMap<NodeId, Type>,
    pub substitution: fl_typeck::subst::Substitution,
}

/// The outcome of one `compile` call: enough for a REPL-style caller to
/// print `name :: type` and a redefinition warning, without the driver
/// itself performing any I/O.
pub struct CompileOutcome {
    /// Byte offset to resume parsing from (see [`fl_parser::TerminationMode`]).
    pub stop: u32,
    pub name: String,
    pub inferred_type: Type,
    pub redefined: bool,
}

/// Tracks one compilation session: the symbol table, the accumulated
/// equation list, the fresh-variable counter, and the ordered code list.
pub struct Driver {
    interactive: bool,
    symtab: SymTab,
    gen: FreshVarGen,
    equations: Vec<fl_typeck::equations::Equation>,
    code: Vec<CompiledDecl>,
    main: Option<usize>,
}

impl Driver {
    /// `interactive` selects the parser's termination mode: `true` stops at
    /// the end of one declaration and reports where to resume (for feeding a
    /// file or REPL input incrementally); `false` requires end-of-input to
    /// immediately follow the declaration.
    pub fn new(interactive: bool) -> Self {
        let mut symtab = SymTab::default();
        symtab.insert(
            "print".to_string(),
            Type::func(vec![Type::Int], Type::Int),
        );
        Self {
            interactive,
            symtab,
            gen: FreshVarGen::new(),
            equations: Vec::new(),
            code: Vec::new(),
            main: None,
        }
    }

    pub fn code(&self) -> &[CompiledDecl] {
        &self.code
    }

    pub fn main(&self) -> Option<usize> {
        self.main
    }

    pub fn symtab(&self) -> &SymTab {
        &self.symtab
    }

    /// Parse, type-check, and (on success) register one declaration from
    /// the front of `source`.
    pub fn compile(&mut self, source: &str) -> Result<CompileOutcome, CoreError> {
        let mode = if self.interactive {
            fl_parser::TerminationMode::Interactive
        } else {
            fl_parser::TerminationMode::Strict
        };
        let (decl, stop) = fl_parser::parse_decl(source, mode)?;

        let redefined = self.symtab.contains_key(&decl.name);

        let assignment =
            fl_typeck::assign::assign_typenames(&decl.body, &self.symtab, &mut self.gen)?;
        let mut new_equations = fl_typeck::equations::generate_equations(&decl.body, &assignment);

        let mut equations = self.equations.clone();
        equations.append(&mut new_equations);
        let substitution = fl_typeck::unify::solve(&equations)?;

        let decl_type = fl_typeck::subst::apply(
            assignment
                .annotations
                .get(&decl.body.id())
                .expect("a declaration's body is always annotated"),
            &substitution,
        );
        let inferred_type = fl_typeck::subst::pretty_rename(&decl_type);

        // Every fallible step is behind us; commit.
        if redefined {
            self.remove_stale_entry(&decl.name);
        }
        self.equations = equations;
        self.symtab.insert(decl.name.clone(), decl_type);
        if decl.name == "main" {
            self.main = Some(self.code.len());
        }
        let name = decl.name.clone();
        self.code.push(CompiledDecl {
            decl,
            annotations: assignment.annotations,
            substitution,
        });

        Ok(CompileOutcome {
            stop,
            name,
            inferred_type,
            redefined,
        })
    }

    /// Remove the prior code-list entry for a redefined name, decrementing
    /// `main`'s tracked index if the removed entry came before it.
    fn remove_stale_entry(&mut self, name: &str) {
        let mut main_found = false;
        for i in 0..self.code.len() {
            if self.code[i].decl.name == "main" {
                main_found = true;
            }
            if self.code[i].decl.name == name {
                self.code.remove(i);
                if !main_found {
                    self.main = self.main.map(|m| m - 1);
                }
                break;
            }
        }
    }
}
