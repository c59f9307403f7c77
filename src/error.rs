use crate::scanner::TokenKind;
use thiserror::Error;

/// The closed set of conditions that abort an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("unexpected character")]
    UnexpectedCharacter,
    #[error("unexpected {0}")]
    UnexpectedToken(TokenKind),
    #[error("too many arguments (argument limit: {limit})")]
    TooManyArguments { limit: usize },
    #[error("no variable callback set")]
    MissingVariableCallback,
    #[error("no function callback set")]
    MissingFunctionCallback,
}

/// Error produced by a failed evaluation.
///
/// `position` is the byte offset into the evaluated input where the failure
/// was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at position {position}")]
pub struct EvalError {
    pub kind: ErrorKind,
    pub position: usize,
}

impl EvalError {
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// The human readable message without the position suffix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_messages() {
        let cases = [
            (TokenKind::End, "unexpected end"),
            (TokenKind::Plus, "unexpected plus"),
            (TokenKind::Minus, "unexpected minus"),
            (TokenKind::Star, "unexpected star"),
            (TokenKind::Slash, "unexpected slash"),
            (TokenKind::Open, "unexpected opened parentheses"),
            (TokenKind::Close, "unexpected closed parentheses"),
            (TokenKind::Comma, "unexpected comma"),
            (TokenKind::Number, "unexpected number"),
            (TokenKind::Identifier, "unexpected identifier"),
        ];

        for (kind, message) in cases {
            assert_eq!(ErrorKind::UnexpectedToken(kind).to_string(), message);
        }
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            ErrorKind::UnexpectedCharacter.to_string(),
            "unexpected character"
        );
        assert_eq!(
            ErrorKind::TooManyArguments { limit: 16 }.to_string(),
            "too many arguments (argument limit: 16)"
        );
        assert_eq!(
            ErrorKind::MissingVariableCallback.to_string(),
            "no variable callback set"
        );
        assert_eq!(
            ErrorKind::MissingFunctionCallback.to_string(),
            "no function callback set"
        );
    }

    #[test]
    fn test_display_includes_position() {
        let error = EvalError::new(ErrorKind::UnexpectedToken(TokenKind::End), 3);
        assert_eq!(error.to_string(), "unexpected end at position 3");
        assert_eq!(error.message(), "unexpected end");
    }
}
