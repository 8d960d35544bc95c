use crate::{
    ExpressionError,
    ast::{Node, Op},
    builtin::{self, Builtin, NAMESPACES},
    token::{Spanned, Token},
};

/// Maximum depth of the syntax tree: parentheses, unary signs, powers,
/// calls, and every operator in a `+ - * / %` chain.
pub(crate) const MAX_DEPTH: usize = 200;

/// Parses a full token stream into a syntax tree.
pub(crate) fn parse(tokens: &[Spanned]) -> Result<Node, ExpressionError> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };

    let node = parser.expr()?;
    match parser.peek() {
        None => Ok(node),
        Some(spanned) => Err(unexpected(spanned, "an operator or end of input")),
    }
}

struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.pos)
    }

    fn peek_token(&self) -> Option<&Token> {
        self.peek().map(|spanned| &spanned.token)
    }

    fn advance(&mut self) -> Option<&Spanned> {
        let spanned = self.tokens.get(self.pos);
        if spanned.is_some() {
            self.pos += 1;
        }
        spanned
    }

    fn expect(&mut self, token: &Token, expected: &'static str) -> Result<(), ExpressionError> {
        match self.advance() {
            Some(spanned) if spanned.token == *token => Ok(()),
            Some(spanned) => Err(unexpected(spanned, expected)),
            None => Err(ExpressionError::UnexpectedEnd { expected }),
        }
    }

    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ExpressionError>,
    ) -> Result<T, ExpressionError> {
        self.descend()?;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Counts one more level of tree depth against [`MAX_DEPTH`].
    fn descend(&mut self) -> Result<(), ExpressionError> {
        if self.depth >= MAX_DEPTH {
            return Err(ExpressionError::TooDeep { limit: MAX_DEPTH });
        }
        self.depth += 1;
        Ok(())
    }

    /// Left-associative chains grow the tree one level per operator, so each
    /// operator counts against the depth limit until the chain ends.
    fn expr(&mut self) -> Result<Node, ExpressionError> {
        let depth = self.depth;
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek_token() {
                Some(Token::Plus) => Op::Add,
                Some(Token::Minus) => Op::Sub,
                _ => break,
            };
            self.advance();
            self.descend()?;
            lhs = Node::op(op, lhs, self.term()?);
        }
        self.depth = depth;
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Node, ExpressionError> {
        let depth = self.depth;
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek_token() {
                Some(Token::Star) => Op::Mul,
                Some(Token::Slash) => Op::Div,
                Some(Token::Percent) => Op::Rem,
                _ => break,
            };
            self.advance();
            self.descend()?;
            lhs = Node::op(op, lhs, self.unary()?);
        }
        self.depth = depth;
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Node, ExpressionError> {
        self.nested(|p| match p.peek_token() {
            Some(Token::Plus) => {
                p.advance();
                p.unary()
            }
            Some(Token::Minus) => {
                p.advance();
                Ok(Node::Neg(Box::new(p.unary()?)))
            }
            _ => p.power(),
        })
    }

    fn power(&mut self) -> Result<Node, ExpressionError> {
        let base = self.primary()?;
        if self.peek_token() == Some(&Token::Power) {
            self.advance();
            let exponent = self.unary()?;
            return Ok(Node::op(Op::Pow, base, exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Node, ExpressionError> {
        const EXPECTED: &str = "a number, name, or `(`";

        let Some(spanned) = self.advance().cloned() else {
            return Err(ExpressionError::UnexpectedEnd { expected: EXPECTED });
        };

        match spanned.token {
            Token::Number(value) => Ok(Node::Const(value)),
            Token::LParen => self.nested(|p| {
                let inner = p.expr()?;
                p.expect(&Token::RParen, "`)`")?;
                Ok(inner)
            }),
            Token::Ident(first) => self.name(first, spanned.column),
            _ => Err(unexpected(&spanned, EXPECTED)),
        }
    }

    /// Resolves a (possibly namespaced) name and any call arguments.
    fn name(&mut self, first: String, column: usize) -> Result<Node, ExpressionError> {
        let namespaced = self.peek_token() == Some(&Token::Dot);
        let name = if namespaced {
            self.advance();
            let member = match self.advance() {
                Some(Spanned {
                    token: Token::Ident(member),
                    ..
                }) => member.clone(),
                Some(spanned) => return Err(unexpected(spanned, "a name after `.`")),
                None => {
                    return Err(ExpressionError::UnexpectedEnd {
                        expected: "a name after `.`",
                    });
                }
            };
            if !NAMESPACES.contains(&first.as_str()) {
                return Err(ExpressionError::UnknownName {
                    column,
                    name: format!("{first}.{member}"),
                });
            }
            member
        } else {
            first
        };

        let builtin = builtin::resolve(&name)
            .filter(|builtin| !(namespaced && *builtin == Builtin::Variable))
            .ok_or_else(|| ExpressionError::UnknownName {
                column,
                name: name.clone(),
            })?;

        let args = if self.peek_token() == Some(&Token::LParen) {
            self.advance();
            Some(self.nested(Self::args)?)
        } else {
            None
        };

        match (builtin, args) {
            (Builtin::Variable | Builtin::Constant(_), Some(_)) => {
                Err(ExpressionError::NotCallable { column, name })
            }
            (Builtin::Variable, None) => Ok(Node::Var),
            (Builtin::Constant(value), None) => Ok(Node::Const(value)),
            (Builtin::Unary(_) | Builtin::Binary(_) | Builtin::Variadic(_), None) => {
                Err(ExpressionError::MissingCall { column, name })
            }
            (Builtin::Unary(func), Some(args)) => {
                let [arg] = exact(name, "1", args)?;
                Ok(Node::Unary(func, Box::new(arg)))
            }
            (Builtin::Binary(func), Some(args)) => {
                let [a, b] = exact(name, "2", args)?;
                Ok(Node::Binary(func, Box::new(a), Box::new(b)))
            }
            (Builtin::Variadic(func), Some(args)) => {
                if args.len() < 2 {
                    return Err(ExpressionError::Arity {
                        name,
                        expected: "at least 2",
                        found: args.len(),
                    });
                }
                Ok(Node::Variadic(func, args))
            }
        }
    }

    /// Parses a comma-separated argument list after the opening `(`.
    fn args(&mut self) -> Result<Vec<Node>, ExpressionError> {
        let mut args = Vec::new();
        if self.peek_token() == Some(&Token::RParen) {
            self.advance();
            return Ok(args);
        }
        loop {
            args.push(self.expr()?);
            match self.advance() {
                Some(Spanned {
                    token: Token::Comma,
                    ..
                }) => {}
                Some(Spanned {
                    token: Token::RParen,
                    ..
                }) => return Ok(args),
                Some(spanned) => return Err(unexpected(spanned, "`,` or `)`")),
                None => return Err(ExpressionError::UnexpectedEnd { expected: "`,` or `)`" }),
            }
        }
    }
}

/// Converts a list of arguments into a fixed-size array or an arity error.
fn exact<const N: usize>(
    name: String,
    expected: &'static str,
    args: Vec<Node>,
) -> Result<[Node; N], ExpressionError> {
    let found = args.len();
    args.try_into().map_err(|_| ExpressionError::Arity {
        name,
        expected,
        found,
    })
}

fn unexpected(spanned: &Spanned, expected: &'static str) -> ExpressionError {
    ExpressionError::UnexpectedToken {
        column: spanned.column,
        found: spanned.token.to_string(),
        expected,
    }
}
