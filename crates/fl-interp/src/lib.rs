//! Tree-walking evaluator for microml.
//!
//! Grounded in `original_source/microml/ast.py`'s per-node `eval` methods,
//! adapted two ways: declarations are bound to their *evaluated* value
//! rather than the raw expression node (the original's `Decl.eval` stores
//! `self.expr` itself in the environment, which only happens to work
//! because every example program only ever references an earlier
//! declaration through application; referencing a non-lambda declaration
//! inside an arithmetic expression would hand arithmetic a bare AST node),
//! and integer division is checked, truncating division rather than
//! Python's float-producing `/` (the type system already types `/`'s
//! result as `Int`, so the original's float result doesn't match its own
//! type signature).

pub mod error;
pub mod value;

use fl_driver::CompiledDecl;
use fl_parser::{BinOp, Expr};
use rustc_hash::FxHashMap;

pub use error::InterpError;
pub use value::{Builtin, Closure, Environment, Value};

/// Evaluate every declaration in `code`, in order, then invoke `main` (if
/// `main` is `Some`) with no arguments.
pub fn interpret(code: &[CompiledDecl], main: Option<usize>) -> Result<(), InterpError> {
    let mut env = Environment::root();
    let mut print_scope = FxHashMap::default();
    print_scope.insert("print".to_string(), Value::Builtin(Builtin::Print));
    env = env.child(print_scope);

    for compiled in code {
        let value = eval(&compiled.decl.body, &env)?;
        let mut scope = FxHashMap::default();
        scope.insert(compiled.decl.name.clone(), value);
        env = env.child(scope);
    }

    if main.is_some() {
        let main_value = env.get("main").expect("main was just bound above");
        apply(&main_value, Vec::new())?;
    }

    Ok(())
}

fn eval<'a>(expr: &'a Expr, env: &Environment<'a>) -> Result<Value<'a>, InterpError> {
    match expr {
        Expr::Int { value, .. } => Ok(Value::Int(*value)),
        Expr::Bool { value, .. } => Ok(Value::Bool(*value)),
        Expr::Ident { name, .. } => env
            .get(name)
            .ok_or_else(|| InterpError::UnboundName(name.clone())),
        Expr::BinOp { op, lhs, rhs, .. } => {
            let left = eval(lhs, env)?;
            let right = eval(rhs, env)?;
            eval_binop(*op, left, right)
        }
        Expr::If {
            cond,
            then_branch,
            else_branch,
            ..
        } => match eval(cond, env)? {
            Value::Bool(true) => eval(then_branch, env),
            Value::Bool(false) => eval(else_branch, env),
            _ => unreachable!("the type checker guarantees an if-condition is Bool"),
        },
        Expr::Lambda { params, body, .. } => Ok(Value::Closure(std::rc::Rc::new(Closure {
            params,
            body,
            env: env.clone(),
        }))),
        Expr::App { callee, args, .. } => {
            let callee_value = env
                .get(callee)
                .ok_or_else(|| InterpError::UnboundName(callee.clone()))?;
            let arg_values = args
                .iter()
                .map(|arg| eval(arg, env))
                .collect::<Result<Vec<_>, _>>()?;
            apply(&callee_value, arg_values)
        }
    }
}

fn eval_binop(op: BinOp, left: Value<'_>, right: Value<'_>) -> Result<Value<'_>, InterpError> {
    let (Value::Int(a), Value::Int(b)) = (left, right) else {
        unreachable!("the type checker guarantees both operands of a binary op are Int")
    };
    Ok(match op {
        BinOp::Add => Value::Int(a + b),
        BinOp::Sub => Value::Int(a - b),
        BinOp::Mul => Value::Int(a * b),
        BinOp::Div => {
            if b == 0 {
                return Err(InterpError::DivisionByZero);
            }
            Value::Int(a / b)
        }
        BinOp::Eq => Value::Bool(a == b),
        BinOp::Neq => Value::Bool(a != b),
        BinOp::Lt => Value::Bool(a < b),
        BinOp::Leq => Value::Bool(a <= b),
        BinOp::Gt => Value::Bool(a > b),
        BinOp::Geq => Value::Bool(a >= b),
    })
}

fn apply<'a>(callee: &Value<'a>, args: Vec<Value<'a>>) -> Result<Value<'a>, InterpError> {
    match callee {
        Value::Closure(closure) => {
            if closure.params.len() != args.len() {
                return Err(InterpError::ArityMismatch {
                    expected: closure.params.len(),
                    got: args.len(),
                });
            }
            let mut scope = FxHashMap::default();
            for (name, value) in closure.params.iter().zip(args) {
                scope.insert(name.clone(), value);
            }
            let call_env = closure.env.child(scope);
            eval(closure.body, &call_env)
        }
        Value::Builtin(Builtin::Print) => {
            if args.len() != 1 {
                return Err(InterpError::ArityMismatch {
                    expected: 1,
                    got: args.len(),
                });
            }
            match &args[0] {
                Value::Int(n) => {
                    println!("{n}");
                    Ok(Value::Int(0))
                }
                _ => unreachable!("the type checker guarantees print's argument is Int"),
            }
        }
        Value::Int(_) | Value::Bool(_) => Err(InterpError::NotCallable),
    }
}
