// lang/src/ast.rs
use serde::Serialize;

/// A variable occurrence or binder name. The name is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A parsed lambda term.
///
/// The tree is built once by the parser and read-only afterwards; every
/// node is exclusively owned by its parent. An abstraction binds exactly
/// one variable — multi-parameter surface syntax is desugared into
/// nested nodes before this type is ever constructed. Serializes as a
/// `type`-tagged value for generic inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Expr {
    Variable(Variable),
    Abstraction { param: Variable, body: Box<Expr> },
    Application { func: Box<Expr>, argument: Box<Expr> },
}

impl Expr {
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(Variable::new(name))
    }

    pub fn abstraction(param: Variable, body: Expr) -> Self {
        Expr::Abstraction {
            param,
            body: Box::new(body),
        }
    }

    pub fn application(func: Expr, argument: Expr) -> Self {
        Expr::Application {
            func: Box::new(func),
            argument: Box::new(argument),
        }
    }
}
