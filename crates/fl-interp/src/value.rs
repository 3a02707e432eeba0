//! Run-time values and the persistent environment chain closures capture.
//!
//! A lambda's closure is `Rc`-shared rather than deep-cloned: every
//! environment a declaration's body can see is built once, top-to-bottom,
//! and later declarations' closures just hold a reference to the frame as
//! it stood at their own point of declaration -- matching a value closing
//! over the environment at declaration time, not at call time.

use std::rc::Rc;

use fl_parser::Expr;
use rustc_hash::FxHashMap;

/// A value reachable during evaluation. Borrows directly from the AST a
/// driver's code list owns, so no `Expr` is ever copied.
#[derive(Clone)]
pub enum Value<'a> {
    Int(i64),
    Bool(bool),
    Closure(Rc<Closure<'a>>),
    Builtin(Builtin),
}

pub struct Closure<'a> {
    pub params: &'a [String],
    pub body: &'a Expr,
    pub env: Environment<'a>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Builtin {
    Print,
}

enum Frame<'a> {
    Root,
    Scope {
        parent: Environment<'a>,
        bindings: FxHashMap<String, Value<'a>>,
    },
}

#[derive(Clone)]
pub struct Environment<'a>(Rc<Frame<'a>>);

impl<'a> Environment<'a> {
    pub fn root() -> Self {
        Environment(Rc::new(Frame::Root))
    }

    /// Build a child scope binding `bindings` on top of this environment.
    pub fn child(&self, bindings: FxHashMap<String, Value<'a>>) -> Self {
        Environment(Rc::new(Frame::Scope {
            parent: self.clone(),
            bindings,
        }))
    }

    pub fn get(&self, name: &str) -> Option<Value<'a>> {
        match &*self.0 {
            Frame::Root => None,
            Frame::Scope { parent, bindings } => {
                bindings.get(name).cloned().or_else(|| parent.get(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(name: &str, value: Value<'static>) -> FxHashMap<String, Value<'static>> {
        let mut map = FxHashMap::default();
        map.insert(name.to_string(), value);
        map
    }

    #[test]
    fn lookup_finds_bindings_in_an_enclosing_scope() {
        let root = Environment::root();
        let outer = root.child(binding("x", Value::Int(1)));
        let inner = outer.child(binding("y", Value::Int(2)));
        assert!(matches!(inner.get("x"), Some(Value::Int(1))));
        assert!(matches!(inner.get("y"), Some(Value::Int(2))));
    }

    #[test]
    fn a_shadowing_binding_wins_over_an_outer_one() {
        let root = Environment::root();
        let outer = root.child(binding("x", Value::Int(1)));
        let inner = outer.child(binding("x", Value::Int(2)));
        assert!(matches!(inner.get("x"), Some(Value::Int(2))));
    }

    #[test]
    fn unbound_name_is_none() {
        let root = Environment::root();
        assert!(root.get("x").is_none());
    }
}
