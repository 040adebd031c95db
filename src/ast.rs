/// Represents a binary arithmetic operator.
///
/// The declaration order is the precedence rank used by the tree builder:
/// later variants bind more loosely and are preferred as split points.
/// Operators that share a binding tier (see [`Operator::precedence`]) are
/// told apart only by their position in the expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operator {
    /// Exponentiation (`^`)
    Power,
    /// Multiplication (`*`)
    Product,
    /// Integer division (`/`)
    Division,
    /// Addition (`+`)
    Addition,
    /// Subtraction (`-`)
    Subtraction,
}

impl Operator {
    /// Maps an operator symbol to its operator.
    ///
    /// ## Example
    /// ```
    /// use linecalc::ast::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('^'), Some(Operator::Power));
    /// assert_eq!(Operator::from_symbol('%'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '^' => Some(Self::Power),
            '*' => Some(Self::Product),
            '/' => Some(Self::Division),
            '+' => Some(Self::Addition),
            '-' => Some(Self::Subtraction),
            _ => None,
        }
    }

    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Power => '^',
            Self::Product => '*',
            Self::Division => '/',
            Self::Addition => '+',
            Self::Subtraction => '-',
        }
    }

    /// Returns the binding tier of the operator.
    ///
    /// A higher tier binds more loosely. `*` and `/` share a tier, as do `+`
    /// and `-`, so mixed chains of either pair group left to right.
    ///
    /// ## Example
    /// ```
    /// use linecalc::ast::Operator;
    ///
    /// assert!(Operator::Power.precedence() < Operator::Product.precedence());
    /// assert_eq!(Operator::Product.precedence(), Operator::Division.precedence());
    /// assert_eq!(Operator::Addition.precedence(), Operator::Subtraction.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Power => 0,
            Self::Product | Self::Division => 1,
            Self::Addition | Self::Subtraction => 2,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of the expression tree.
///
/// `Expr` is built bottom-up by the parser from a token slice and consumed
/// top-down exactly once by the evaluator. Every interior node owns its two
/// children, so the tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeric literal.
    Value(i64),
    /// An operator applied to two sub-expressions.
    BinaryOp {
        /// The operator applied at this node.
        op:    Operator,
        /// Left operand, evaluated first.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Creates a `BinaryOp` node from two owned subtrees.
    ///
    /// ## Example
    /// ```
    /// use linecalc::ast::{Expr, Operator};
    ///
    /// let expr = Expr::binary(Operator::Addition, Expr::Value(1), Expr::Value(2));
    /// assert_eq!(expr.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn binary(op: Operator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Value(_) => 1,
            Self::BinaryOp { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }
}

/// Writes the tree fully parenthesized, e.g. `((8 - 3) - 2)`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(n) => write!(f, "{n}"),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
