use super::{ast::*, lexer::*};
use crate::common::*;
use crate::error::RollError;
use logos_iter::LogosIter;

type PResult<T = Node> = Result<T, RollError>;

/// How deep parentheses, signs and exponents may nest.
const MAX_DEPTH: usize = 256;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            lexer: lexer(s),
            depth: 0,
        }
    }

    pub fn parse(mut self) -> PResult {
        let node = self.parse_expression()?;
        match self.advance() {
            None => Ok(node),
            found => self.unexpected(found),
        }
    }

    fn advance(&mut self) -> Option<TokenKind> {
        self.lexer.next()
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn matches_any(&mut self, options: &[TokenKind]) -> bool {
        self.lexer
            .peek()
            .map_or(false, |peeked| options.contains(peeked))
    }

    fn consume(&mut self, expected: TokenKind) -> PResult<()> {
        match self.advance() {
            Some(found) if found == expected => Ok(()),
            found => self.unexpected(found),
        }
    }

    fn next_binary_op(&mut self, options: &[TokenKind]) -> Option<BinaryOperator> {
        if self.matches_any(options) {
            self.advance().and_then(|t| t.as_binary_op())
        } else {
            None
        }
    }

    fn next_unary_op(&mut self) -> Option<UnaryOperator> {
        if self.matches_any(TokenKind::UNARY_OPS) {
            self.advance().and_then(|t| t.as_unary_op())
        } else {
            None
        }
    }

    fn unexpected<T>(&mut self, found: Option<TokenKind>) -> PResult<T> {
        match found {
            Some(kind) => tracing::trace!(
                position = self.lexer.span().start,
                found = %kind,
                "unexpected token in arithmetic"
            ),
            None => tracing::trace!("unexpected end of arithmetic"),
        }
        Err(RollError::MalformedArithmetic)
    }

    fn parse_expression(&mut self) -> PResult {
        self.parse_addition()
    }

    fn parse_addition(&mut self) -> PResult {
        let mut chain = Chain::new(self.parse_multiplication()?);

        while let Some(op) = self.next_binary_op(TokenKind::ADDITION_OPS) {
            let rhs = self.parse_multiplication()?;
            chain.push(op, rhs);
        }

        Ok(chain.into_node())
    }

    fn parse_multiplication(&mut self) -> PResult {
        let mut chain = Chain::new(self.parse_unary()?);

        while let Some(op) = self.next_binary_op(TokenKind::MULTIPLICATION_OPS) {
            let rhs = self.parse_unary()?;
            chain.push(op, rhs);
        }

        Ok(chain.into_node())
    }

    fn parse_unary(&mut self) -> PResult {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            tracing::trace!(depth = self.depth, "arithmetic nested too deeply");
            return Err(RollError::MalformedArithmetic);
        }
        let ret = self.parse_unary_prefix();
        self.depth -= 1;
        ret
    }

    fn parse_unary_prefix(&mut self) -> PResult {
        let op = match self.next_unary_op() {
            Some(op) => op,
            None => return self.parse_power(),
        };

        let value = if self.matches_any(TokenKind::UNARY_OPS) {
            self.parse_unary()?
        } else {
            self.parse_atom()?
        };

        // A signed operand cannot be the base of `**`; `(-2)**2` must be
        // written with parentheses.
        if self.matches(TokenKind::StarStar) {
            let found = self.advance();
            return self.unexpected(found);
        }

        Ok(Node::new_unary(op, value))
    }

    fn parse_power(&mut self) -> PResult {
        let base = self.parse_atom()?;

        if self.matches(TokenKind::StarStar) {
            self.advance();
            let exponent = self.parse_unary()?;
            Ok(Node::new_power(base, exponent))
        } else {
            Ok(base)
        }
    }

    fn parse_atom(&mut self) -> PResult {
        match self.advance() {
            Some(TokenKind::Number(x)) => Ok(Node::new_literal(x)),
            Some(TokenKind::LeftParen) => {
                let inner = self.parse_expression()?;
                self.consume(TokenKind::RightParen)?;
                Ok(Node::new_grouping(inner))
            }
            found => self.unexpected(found),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> PResult {
        Parser::new(s).parse()
    }

    fn check(s: &str, expected: Node) {
        let parsed = parse(s).unwrap();
        assert_eq!(parsed, expected);
    }

    fn check_eval(s: &str, expected: Float) {
        let parsed = parse(s).unwrap();
        assert_eq!(parsed.eval().unwrap(), expected);
    }

    fn check_malformed(s: &str) {
        assert_eq!(parse(s), Err(RollError::MalformedArithmetic), "{:?}", s);
    }

    fn chain(first: Node, rest: Vec<(BinaryOperator, Node)>) -> Node {
        Chain {
            first: Box::new(first),
            rest,
        }
        .into()
    }

    #[test]
    fn test_parse_nums() {
        check("32", Node::new_literal(32.0));
        check("3.2", Node::new_literal(3.2));
        check(".67", Node::new_literal(0.67));
    }

    #[test]
    fn test_parse_unary() {
        check(
            "-2",
            Node::new_unary(UnaryOperator::Neg, Node::new_literal(2.0)),
        );
        check(
            "-+-2",
            Node::new_unary(
                UnaryOperator::Neg,
                Node::new_unary(
                    UnaryOperator::Pos,
                    Node::new_unary(UnaryOperator::Neg, Node::new_literal(2.0)),
                ),
            ),
        );
        check(
            "-(1)",
            Node::new_unary(
                UnaryOperator::Neg,
                Node::new_grouping(Node::new_literal(1.0)),
            ),
        );
    }

    #[test]
    fn test_parse_binary() {
        use BinaryOperator::*;

        check(
            "1+2*3",
            chain(
                Node::new_literal(1.0),
                vec![(
                    Add,
                    chain(Node::new_literal(2.0), vec![(Mul, Node::new_literal(3.0))]),
                )],
            ),
        );
        check(
            "8-2-1",
            chain(
                Node::new_literal(8.0),
                vec![(Sub, Node::new_literal(2.0)), (Sub, Node::new_literal(1.0))],
            ),
        );
    }

    #[test]
    fn test_parse_power() {
        check(
            "2**3**2",
            Node::new_power(
                Node::new_literal(2.0),
                Node::new_power(Node::new_literal(3.0), Node::new_literal(2.0)),
            ),
        );
    }

    #[test]
    fn test_eval() {
        check_eval("2+3*4", 14.0);
        check_eval("(2+3)*4", 20.0);
        check_eval("10/4", 2.5);
        check_eval("8-2-1", 5.0);
        check_eval("8/2/2", 2.0);
        check_eval("2*-3", -6.0);
        check_eval("-(2+3)", -5.0);
        check_eval("2-+3", -1.0);
        check_eval("2**3**2", 512.0);
        check_eval("2**-1", 0.5);
        check_eval("(-2)**2", 4.0);
        check_eval("1.+.5", 1.5);
    }

    #[test]
    fn test_malformed() {
        check_malformed("");
        check_malformed("()");
        check_malformed("(1+2");
        check_malformed("1+2)");
        check_malformed("1+");
        check_malformed("*1");
        check_malformed("1**");
        check_malformed("1***2");
        check_malformed("2--3");
        check_malformed("2++3");
        check_malformed("-2**2");
        check_malformed("-(2)**2");
        check_malformed("2(3)");
        check_malformed("1.2.3");
        check_malformed(".");
    }

    #[test]
    fn test_leading_zeros() {
        check_malformed("08");
        check_malformed("010");
        check_malformed("00.5");
        check_malformed("1+007");
        check_eval("0", 0.0);
        check_eval("0.5+10", 10.5);
        check_eval("100-0.25", 99.75);
    }

    #[test]
    fn test_nesting_limit() {
        let shallow = format!("{}1{}", "(".repeat(100), ")".repeat(100));
        check_eval(&shallow, 1.0);

        let deep = format!("{}1{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        check_malformed(&deep);
    }

    #[test]
    fn test_long_flat_chain() {
        let sum = vec!["1"; 10_000].join("+");
        check_eval(&sum, 10_000.0);
    }
}
