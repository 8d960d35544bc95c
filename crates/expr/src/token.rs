use std::fmt;

use crate::ExpressionError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Power,
    LParen,
    RParen,
    Comma,
    Dot,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "number {value}"),
            Token::Ident(name) => write!(f, "`{name}`"),
            Token::Plus => f.write_str("`+`"),
            Token::Minus => f.write_str("`-`"),
            Token::Star => f.write_str("`*`"),
            Token::Slash => f.write_str("`/`"),
            Token::Percent => f.write_str("`%`"),
            Token::Power => f.write_str("`**`"),
            Token::LParen => f.write_str("`(`"),
            Token::RParen => f.write_str("`)`"),
            Token::Comma => f.write_str("`,`"),
            Token::Dot => f.write_str("`.`"),
        }
    }
}

/// A token with its 1-based starting column.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub(crate) token: Token,
    pub(crate) column: usize,
}

/// Splits source text into tokens.
pub(crate) fn tokenize(src: &str) -> Result<Vec<Spanned>, ExpressionError> {
    let chars: Vec<char> = src.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let column = i + 1;

        if ch.is_whitespace() {
            i += 1;
            continue;
        }

        let next_is_digit = chars.get(i + 1).is_some_and(char::is_ascii_digit);
        let starts_number = ch.is_ascii_digit() || (ch == '.' && next_is_digit);

        let token = if starts_number {
            let end = scan_number(&chars, i);
            let text: String = chars[i..end].iter().collect();
            let value = text
                .parse::<f64>()
                .map_err(|_| ExpressionError::InvalidNumber { column, text })?;
            i = end;
            Token::Number(value)
        } else if ch.is_alphabetic() || ch == '_' {
            let end = i + chars[i..]
                .iter()
                .take_while(|c| c.is_alphanumeric() || **c == '_')
                .count();
            let name: String = chars[i..end].iter().collect();
            i = end;
            Token::Ident(name)
        } else {
            let (token, width) = match (ch, chars.get(i + 1)) {
                ('*', Some('*')) => (Token::Power, 2),
                ('^', _) => (Token::Power, 1),
                ('+', _) => (Token::Plus, 1),
                ('-', _) => (Token::Minus, 1),
                ('*', _) => (Token::Star, 1),
                ('/', _) => (Token::Slash, 1),
                ('%', _) => (Token::Percent, 1),
                ('(', _) => (Token::LParen, 1),
                (')', _) => (Token::RParen, 1),
                (',', _) => (Token::Comma, 1),
                ('.', _) => (Token::Dot, 1),
                _ => return Err(ExpressionError::UnexpectedChar { column, ch }),
            };
            i += width;
            token
        };

        tokens.push(Spanned { token, column });
    }

    Ok(tokens)
}

/// Returns the end index of the number starting at `start`.
///
/// Accepts `12`, `1.5`, `.5`, `3.` and an optional exponent like `1e-3`.
fn scan_number(chars: &[char], start: usize) -> usize {
    let digits = |from: usize| {
        from + chars[from..]
            .iter()
            .take_while(|c| c.is_ascii_digit())
            .count()
    };

    let mut end = digits(start);
    if chars.get(end) == Some(&'.') {
        end = digits(end + 1);
    }

    if matches!(chars.get(end), Some('e' | 'E')) {
        let sign = usize::from(matches!(chars.get(end + 1), Some('+' | '-')));
        if chars.get(end + 1 + sign).is_some_and(char::is_ascii_digit) {
            end = digits(end + 1 + sign);
        }
    }

    end
}
