//! C-text generation from typed declarations.
//!
//! Grounded in `original_source/microml/compiler.py`'s `Compiler.execute`:
//! the assembled program is a fixed `PRELUDE` followed by every non-`main`
//! declaration's lowered text in insertion order, followed by `main` last.
//! No topological sort is needed -- the language has no forward references
//! or recursion, so a driver's insertion order already has every callee
//! lowered before its caller.

pub mod expr;
pub mod types;

use std::fmt;

use fl_driver::CompiledDecl;
use fl_parser::Expr;

use self::expr::lower_expr;
use self::types::to_c;

/// The fixed C preamble every lowered program opens with: the standard I/O
/// include and the `print` builtin's definition, verbatim from
/// `compiler.py`'s `PRELUDE` constant.
pub const PRELUDE: &str = "#include <stdio.h>\n\nint print(int in) {\n  printf(\"%d\\n\", in);\n  return 0;\n}\n";

#[derive(Debug, Clone, PartialEq)]
pub enum LowerError {
    /// Nothing has been compiled yet -- `execute()`'s `self.code == []` check.
    NothingCompiled,
    /// No declaration named `main` has been compiled -- `execute()`'s
    /// `self.main == -1` check.
    NoMain,
}

impl fmt::Display for LowerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LowerError::NothingCompiled => write!(f, "Nothing to execute!"),
            LowerError::NoMain => write!(f, "No `main` function specified!"),
        }
    }
}

impl std::error::Error for LowerError {}

/// Lower one declaration to a top-level C definition: a plain
/// `T name = expr;` for a non-lambda body, or `T name(params) { return
/// body; }` for a lambda body, where `T` is the body's own resolved C type
/// (a lambda's is its ultimate return type, per [`to_c`]).
fn lower_decl(compiled: &CompiledDecl) -> String {
    let decl_type = compiled
        .annotations
        .get(&compiled.decl.body.id())
        .expect("a declaration's body is always annotated");
    let decl_type = fl_typeck::subst::apply(decl_type, &compiled.substitution);
    let c_type = to_c(&decl_type);
    let name = &compiled.decl.name;

    match &compiled.decl.body {
        Expr::Lambda { params, body, .. } => {
            let param_types = match &decl_type {
                fl_typeck::Type::Func(argtypes, _) => argtypes.iter().map(to_c).collect::<Vec<_>>(),
                _ => unreachable!("a lambda declaration's own type is always a Func"),
            };
            let param_list = params
                .iter()
                .zip(param_types.iter())
                .map(|(p, t)| format!("{t} {p}"))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "{c_type} {name}({param_list}) {{\n  return {};\n}}",
                lower_expr(body, &compiled.annotations, &compiled.substitution),
            )
        }
        body => format!(
            "{c_type} {name} = {};",
            lower_expr(body, &compiled.annotations, &compiled.substitution),
        ),
    }
}

/// Assemble a whole session's compiled declarations into one C source
/// string: the prelude, then every non-`main` declaration in insertion
/// order, then `main` last.
pub fn lower_program(code: &[CompiledDecl], main: Option<usize>) -> Result<String, LowerError> {
    if code.is_empty() {
        return Err(LowerError::NothingCompiled);
    }
    let main = main.ok_or(LowerError::NoMain)?;

    let mut pieces = vec![PRELUDE.to_string()];
    for (i, compiled) in code.iter().enumerate() {
        if i != main {
            pieces.push(lower_decl(compiled));
        }
    }
    pieces.push(lower_decl(&code[main]));

    Ok(pieces.join("\n"))
}
