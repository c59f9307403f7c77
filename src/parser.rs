use crate::error::{ErrorKind, EvalError};
use crate::resolver::{FunctionResolver, VariableResolver};
use crate::scanner::{Scanner, Span, Token};
use log::{debug, trace};

/// Recursive descent evaluator. Every rule consumes its tokens and yields the
/// value of the sub-expression directly; no tree is built.
///
/// ```text
/// expr    := term (('+'|'-') term)*
/// term    := primary (('*'|'/') primary)*
/// primary := NUMBER | '(' expr ')' | ('+'|'-') primary
///          | IDENT ('(' (expr (',' expr)*)? ')')?
/// ```
pub(crate) struct Parser<'a, 'r, V: ?Sized, F: ?Sized, const LIMIT: usize> {
    scanner: Scanner<'a>,
    variables: Option<&'r V>,
    functions: Option<&'r F>,
}

impl<'a, 'r, V, F, const LIMIT: usize> Parser<'a, 'r, V, F, LIMIT>
where
    V: VariableResolver + ?Sized,
    F: FunctionResolver + ?Sized,
{
    pub(crate) fn new(
        input: &'a str,
        variables: Option<&'r V>,
        functions: Option<&'r F>,
    ) -> Self {
        Self {
            scanner: Scanner::new(input),
            variables,
            functions,
        }
    }

    /// Evaluates the whole input, which must hold exactly one expression.
    pub(crate) fn parse(mut self) -> Result<f64, EvalError> {
        let value = self.parse_additive()?;

        match self.scanner.peek()? {
            Token::End => Ok(value),
            token => Err(self.unexpected(token)),
        }
    }

    fn parse_additive(&mut self) -> Result<f64, EvalError> {
        let mut value = self.parse_multiplicative()?;

        loop {
            match self.scanner.peek()? {
                Token::Plus => {
                    self.scanner.advance();
                    value += self.parse_multiplicative()?;
                }
                Token::Minus => {
                    self.scanner.advance();
                    value -= self.parse_multiplicative()?;
                }
                _ => return Ok(value),
            }
        }
    }

    // Division by zero is left to IEEE-754.
    fn parse_multiplicative(&mut self) -> Result<f64, EvalError> {
        let mut value = self.parse_primary()?;

        loop {
            match self.scanner.peek()? {
                Token::Star => {
                    self.scanner.advance();
                    value *= self.parse_primary()?;
                }
                Token::Slash => {
                    self.scanner.advance();
                    value /= self.parse_primary()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn parse_primary(&mut self) -> Result<f64, EvalError> {
        match self.scanner.peek()? {
            Token::Number(value) => {
                self.scanner.advance();
                Ok(value)
            }
            Token::Open => {
                self.scanner.advance();
                let value = self.parse_additive()?;
                self.expect_close()?;
                Ok(value)
            }
            Token::Plus => {
                self.scanner.advance();
                self.parse_primary()
            }
            Token::Minus => {
                self.scanner.advance();
                Ok(-self.parse_primary()?)
            }
            Token::Identifier(span) => {
                self.scanner.advance();
                if self.scanner.peek()? == Token::Open {
                    self.parse_call(span)
                } else {
                    self.resolve_variable(span)
                }
            }
            token => Err(self.unexpected(token)),
        }
    }

    fn resolve_variable(&self, span: Span) -> Result<f64, EvalError> {
        let name = self.scanner.slice(span);
        let Some(variables) = self.variables else {
            debug!("Variable '{}' used without a variable callback", name);
            return Err(EvalError::new(
                ErrorKind::MissingVariableCallback,
                span.start,
            ));
        };

        let value = variables.resolve(name);
        trace!("Variable {} = {}", name, value);
        Ok(value)
    }

    /// Parses an argument list into a fixed buffer of `LIMIT` slots and calls
    /// the function resolver. The lookahead is the opening parenthesis.
    fn parse_call(&mut self, span: Span) -> Result<f64, EvalError> {
        self.scanner.advance();

        let mut args = [0.0; LIMIT];
        let mut count = 0;

        if self.scanner.peek()? != Token::Close {
            loop {
                if count == LIMIT {
                    debug!("Argument limit of {} exceeded", LIMIT);
                    return Err(EvalError::new(
                        ErrorKind::TooManyArguments { limit: LIMIT },
                        self.scanner.token_start(),
                    ));
                }

                args[count] = self.parse_additive()?;
                count += 1;

                match self.scanner.peek()? {
                    Token::Comma => {
                        self.scanner.advance();
                        self.scanner.peek()?;
                    }
                    Token::Close => break,
                    token => return Err(self.unexpected(token)),
                }
            }
        }
        self.expect_close()?;

        let name = self.scanner.slice(span);
        let Some(functions) = self.functions else {
            debug!("Function '{}' called without a function callback", name);
            return Err(EvalError::new(
                ErrorKind::MissingFunctionCallback,
                span.start,
            ));
        };

        let value = functions.call(name, &args[..count]);
        trace!("Call {}({:?}) = {}", name, &args[..count], value);
        Ok(value)
    }

    fn expect_close(&mut self) -> Result<(), EvalError> {
        match self.scanner.peek()? {
            Token::Close => {
                self.scanner.advance();
                Ok(())
            }
            token => Err(self.unexpected(token)),
        }
    }

    fn unexpected(&self, token: Token) -> EvalError {
        let position = self.scanner.token_start();
        debug!("Unexpected {} at {}", token.kind(), position);
        EvalError::new(ErrorKind::UnexpectedToken(token.kind()), position)
    }
}
