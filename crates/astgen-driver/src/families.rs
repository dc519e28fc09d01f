//! Built-in AST families for the interpreter's `Expr` and `Stmt` trees.

use crate::error::DriverError;
use astgen_emit::EmissionRequest;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// A named, built-in emission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Expr,
    Stmt,
}

impl Family {
    /// Every built-in family, in generation order.
    pub const ALL: [Family; 2] = [Family::Expr, Family::Stmt];

    /// Lowercase name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Family::Expr => "expr",
            Family::Stmt => "stmt",
        }
    }

    /// Output path relative to the project root.
    pub fn default_path(self) -> PathBuf {
        PathBuf::from("src/ast").join(format!("{}.rs", self.name()))
    }

    /// The request describing this family.
    pub fn request(self) -> EmissionRequest {
        match self {
            Family::Expr => expr_request(),
            Family::Stmt => stmt_request(),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "expr" => Ok(Family::Expr),
            "stmt" => Ok(Family::Stmt),
            _ => Err(DriverError::UnknownFamily(s.to_string())),
        }
    }
}

fn expr_request() -> EmissionRequest {
    EmissionRequest::new("Expr")
        .imports([
            "crate::{ast::stmt::*, token::Token, parser::types::Property}",
            "std::{rc::Rc, cell::Cell}",
        ])
        .literals(
            "LiteralValue",
            [
                "List -> Rc<Vec<Expr>>",
                "String -> Rc<str>",
                "Number -> f64",
                "Char -> char",
                "True",
                "False",
                "Nil",
            ],
        )
        .variants([
            "Function ->
                keyword: Token, name: Option<Token>,
                params: Option<Rc<Vec<Token>>>, body: Option<Rc<Vec<Stmt>>>",
            "Set ->
                setee: Box<Expr>, key: GetAccessor,
                value: Box<Expr>, blame: Token",
            "Super ->
                blame: Token, accessor: SuperAccessor,
                env_distance: Cell<u32>",
            "Call -> calee: Box<Expr>, closing_paren: Token, arguments: Vec<Expr>",
            "Assignment -> name: Token, value: Box<Expr>, env_distance: Cell<u32>",
            "Binary -> left: Box<Expr>, operator: Token, right: Box<Expr>",
            "Get -> getee: Box<Expr>, key: GetAccessor, blame: Token",
            "Identifier -> name: Token, env_distance: Cell<u32>",
            "Object -> blame: Token, properties: Vec<Property>",
            "This -> blame: Token, env_distance: Cell<u32>",
            "Unary -> operator: Token, right: Box<Expr>",
            "Grouping -> expression: Box<Expr>",
            // No arrow: the member carries the literal enum directly.
            "Literal(LiteralValue)",
        ])
        .trailing_code(EXPR_ACCESSORS)
}

const EXPR_ACCESSORS: &str = "
pub enum GetAccessor {
\tDotName(Rc<str>),
\tDotEval(Box<Expr>),
\tSubscriptionNumber(f64),
\tSubscriptionEval(Box<Expr>),
}

pub enum SuperAccessor {
\tMethod(Token),
\tCall(Vec<Expr>),
}
";

fn stmt_request() -> EmissionRequest {
    EmissionRequest::new("Stmt")
        .imports(["crate::token::Token", "crate::ast::expr::Expr"])
        .variants([
            "For ->
                condition: Option<Expr>, body: Box<Stmt>,
                closer: Option<Box<Stmt>>",
            "If ->
                condition: Expr, then: Box<Stmt>,
                otherwise: Option<Box<Stmt>>",
            "Declaration ->
                name: Token, initializer: Option<Expr>,
                mutable: bool",
            "Class ->
                name: Token, methods: Vec<Expr>,
                superclass: Option<Expr>",
            "Return -> keyword: Token, expression: Option<Expr>",
            "Expression -> expression: Expr",
            "Block -> statements: Vec<Stmt>",
            "Continue -> keyword: Token",
            "Print -> expression: Expr",
            "Break -> keyword: Token",
        ])
}
