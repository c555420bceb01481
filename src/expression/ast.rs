/// Binary arithmetic operators an interior node can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Binding strength used when rendering: additive 1, multiplicative 2.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }

    /// Applies the operator with IEEE-754 semantics.
    #[inline]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
        }
    }
}

/// Arithmetic expression tree. Each interior node owns its two children.
#[derive(Debug, PartialEq)]
pub enum Expression {
    Number(f64),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn number(value: f64) -> Self {
        Expression::Number(value)
    }

    pub fn add(left: Expression, right: Expression) -> Self {
        Expression::Add(Box::new(left), Box::new(right))
    }

    pub fn subtract(left: Expression, right: Expression) -> Self {
        Expression::Subtract(Box::new(left), Box::new(right))
    }

    pub fn multiply(left: Expression, right: Expression) -> Self {
        Expression::Multiply(Box::new(left), Box::new(right))
    }

    pub fn divide(left: Expression, right: Expression) -> Self {
        Expression::Divide(Box::new(left), Box::new(right))
    }

    /// Builds the interior node for `op`.
    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        match op {
            Operator::Add => Expression::add(left, right),
            Operator::Subtract => Expression::subtract(left, right),
            Operator::Multiply => Expression::multiply(left, right),
            Operator::Divide => Expression::divide(left, right),
        }
    }

    /// Borrowed view of this node as a leaf or an operator with its operands.
    pub fn node(&self) -> Node<'_> {
        match self {
            Expression::Number(n) => Node::Leaf(*n),
            Expression::Add(l, r) => Node::Binary(Operator::Add, l, r),
            Expression::Subtract(l, r) => Node::Binary(Operator::Subtract, l, r),
            Expression::Multiply(l, r) => Node::Binary(Operator::Multiply, l, r),
            Expression::Divide(l, r) => Node::Binary(Operator::Divide, l, r),
        }
    }

    /// The operator of an interior node, `None` for a leaf.
    pub fn operator(&self) -> Option<Operator> {
        match self.node() {
            Node::Leaf(_) => None,
            Node::Binary(op, _, _) => Some(op),
        }
    }

    /// Borrows both children of an interior node.
    pub fn operands(&self) -> Option<(&Expression, &Expression)> {
        match self.node() {
            Node::Leaf(_) => None,
            Node::Binary(_, l, r) => Some((l, r)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expression::Number(_))
    }
}

/// See [`Expression::node`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    Leaf(f64),
    Binary(Operator, &'a Expression, &'a Expression),
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Expression::Number(value)
    }
}
