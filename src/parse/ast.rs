use crate::common::*;
use crate::error::RollError;

type EResult = Result<Float, RollError>;

#[enum_dispatch::enum_dispatch]
pub trait Eval {
    fn eval(&self) -> EResult;
}

#[derive(Debug, Clone, PartialEq)]
#[enum_dispatch::enum_dispatch(Eval)]
pub enum Node {
    Literal(Literal),
    Grouping(Grouping),
    Unary(Unary),
    Power(Power),
    Chain(Chain),
}

impl Node {
    pub(crate) fn new_literal(x: Float) -> Self {
        Literal(x).into()
    }

    pub(crate) fn new_grouping(inner: Node) -> Self {
        Grouping(Box::new(inner)).into()
    }

    pub(crate) fn new_unary(op: UnaryOperator, value: Node) -> Self {
        Unary {
            op,
            value: Box::new(value),
        }
        .into()
    }

    pub(crate) fn new_power(base: Node, exponent: Node) -> Self {
        Power {
            base: Box::new(base),
            exponent: Box::new(exponent),
        }
        .into()
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Literal(pub Float);

impl Eval for Literal {
    fn eval(&self) -> EResult {
        Ok(self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grouping(pub Box<Node>);

impl Eval for Grouping {
    fn eval(&self) -> EResult {
        self.0.eval()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    pub op: UnaryOperator,
    pub value: Box<Node>,
}

impl Eval for Unary {
    fn eval(&self) -> EResult {
        self.value.eval().map(|x| self.op.apply(x))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Power {
    pub base: Box<Node>,
    pub exponent: Box<Node>,
}

impl Eval for Power {
    fn eval(&self) -> EResult {
        Ok(self.base.eval()?.powf(self.exponent.eval()?))
    }
}

/// A run of left-associative operators of one precedence level, e.g.
/// `1 - 2 + 3`. Kept flat so long sums do not nest.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub first: Box<Node>,
    pub rest: Vec<(BinaryOperator, Node)>,
}

impl Chain {
    pub fn new(first: Node) -> Self {
        Self {
            first: Box::new(first),
            rest: Vec::new(),
        }
    }

    pub fn push(&mut self, op: BinaryOperator, rhs: Node) {
        self.rest.push((op, rhs));
    }

    /// Collapses a chain with no operators back into its only operand.
    pub fn into_node(self) -> Node {
        if self.rest.is_empty() {
            *self.first
        } else {
            self.into()
        }
    }
}

impl Eval for Chain {
    fn eval(&self) -> EResult {
        self.rest.iter().try_fold(self.first.eval()?, |acc, (op, rhs)| {
            let rhs = rhs.eval()?;
            Ok(match op {
                BinaryOperator::Add => acc + rhs,
                BinaryOperator::Sub => acc - rhs,
                BinaryOperator::Mul => acc * rhs,
                BinaryOperator::Div if rhs == 0.0 => return Err(RollError::DivisionByZero),
                BinaryOperator::Div => acc / rhs,
                BinaryOperator::Pow => acc.powf(rhs),
            })
        })
    }
}
