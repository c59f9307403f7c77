use crate::error::{ErrorKind, EvalError};
use log::trace;
use std::fmt;

/// The C `isspace` set: ASCII whitespace plus vertical tab.
fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == b'\x0B'
}

/// Half-open `[start, end)` byte range into the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    End,
    Plus,
    Minus,
    Star,
    Slash,
    Open,
    Close,
    Comma,
    Number(f64),
    Identifier(Span),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::End => TokenKind::End,
            Token::Plus => TokenKind::Plus,
            Token::Minus => TokenKind::Minus,
            Token::Star => TokenKind::Star,
            Token::Slash => TokenKind::Slash,
            Token::Open => TokenKind::Open,
            Token::Close => TokenKind::Close,
            Token::Comma => TokenKind::Comma,
            Token::Number(_) => TokenKind::Number,
            Token::Identifier(_) => TokenKind::Identifier,
        }
    }
}

/// Payload-free token discriminant, used when reporting unexpected tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    End,
    Plus,
    Minus,
    Star,
    Slash,
    Open,
    Close,
    Comma,
    Number,
    Identifier,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::End => "end",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Star => "star",
            TokenKind::Slash => "slash",
            TokenKind::Open => "opened parentheses",
            TokenKind::Close => "closed parentheses",
            TokenKind::Comma => "comma",
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
        };
        f.write_str(name)
    }
}

/// Lazy tokenizer with a single memoized token of lookahead.
///
/// Nothing is scanned until [`Scanner::peek`] is called, and repeated peeks
/// return the cached token until [`Scanner::advance`] commits it.
pub struct Scanner<'a> {
    input: &'a str,
    // End of the last consumed token.
    consumed: usize,
    // Start and end of the lookahead token.
    start: usize,
    next: usize,
    lookahead: Option<Token>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            consumed: 0,
            start: 0,
            next: 0,
            lookahead: None,
        }
    }

    pub fn peek(&mut self) -> Result<Token, EvalError> {
        if let Some(token) = self.lookahead {
            return Ok(token);
        }

        let bytes = self.input.as_bytes();
        let mut pos = self.consumed;
        while pos < bytes.len() && is_space(bytes[pos]) {
            pos += 1;
        }
        self.start = pos;

        let (token, end) = self.classify(pos)?;
        trace!("Scanned {:?} at {}..{}", token, pos, end);

        self.next = end;
        self.lookahead = Some(token);
        Ok(token)
    }

    /// Commits the peeked token. Does nothing if no token is pending.
    pub fn advance(&mut self) {
        if self.lookahead.take().is_some() {
            self.consumed = self.next;
        }
    }

    /// Byte offset where the lookahead token begins.
    pub fn token_start(&self) -> usize {
        self.start
    }

    pub fn slice(&self, span: Span) -> &'a str {
        &self.input[span.start..span.end]
    }

    fn classify(&self, pos: usize) -> Result<(Token, usize), EvalError> {
        let bytes = self.input.as_bytes();
        let Some(&byte) = bytes.get(pos) else {
            return Ok((Token::End, pos));
        };

        let single = match byte {
            b'+' => Some(Token::Plus),
            b'-' => Some(Token::Minus),
            b'*' => Some(Token::Star),
            b'/' => Some(Token::Slash),
            b'(' => Some(Token::Open),
            b')' => Some(Token::Close),
            b',' => Some(Token::Comma),
            _ => None,
        };
        if let Some(token) = single {
            return Ok((token, pos + 1));
        }

        if let Some(end) = scan_number(bytes, pos) {
            if let Ok(value) = self.input[pos..end].parse::<f64>() {
                return Ok((Token::Number(value), end));
            }
        }

        if byte.is_ascii_alphabetic() || byte == b'_' {
            let mut end = pos + 1;
            while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
                end += 1;
            }
            return Ok((Token::Identifier(Span { start: pos, end }), end));
        }

        trace!("Unexpected byte {:#04x} at {}", byte, pos);
        Err(EvalError::new(ErrorKind::UnexpectedCharacter, pos))
    }
}

/// Returns the end of the decimal literal starting at `start`, if any.
///
/// Accepts `1`, `1.`, `1.5`, `.5` with an optional exponent. The exponent is
/// only taken when at least one digit follows it.
fn scan_number(bytes: &[u8], start: usize) -> Option<usize> {
    let digits = |mut pos: usize| {
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        pos
    };

    let mut pos = digits(start);
    let integral = pos > start;

    if bytes.get(pos) == Some(&b'.') {
        let fraction_end = digits(pos + 1);
        if integral || fraction_end > pos + 1 {
            pos = fraction_end;
        }
    }

    if pos == start {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exponent = pos + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = digits(exponent);
        if exponent_end > exponent {
            pos = exponent_end;
        }
    }

    Some(pos)
}
