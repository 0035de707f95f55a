//! Single-pass context-sensitive tokenizer.
//!
//! The scanner walks the whitespace-stripped input once, attempting at each
//! cursor position, in order: a three-argument function call, a signed
//! number, parentheses and the argument separator, leftover absolute-value
//! bars, a maximal-munch registry match, and finally a variable (maximal run
//! of letters). Whether a `+`/`-` starts a number or acts as an operator
//! depends only on the kind of the previously emitted token.

use crate::core::error::{EvalError, Span};
use crate::core::token::{Token, TokenKind};
use crate::registry::{Element, Registry};

/// Scan the preprocessed expression into raw tokens.
///
/// The result still needs the normalization passes in
/// [`normalize`](crate::parser::normalize); `tokenize` in the parent module
/// runs the full pipeline.
pub(crate) fn scan(input: &str, registry: &Registry) -> Result<Vec<Token>, EvalError> {
    let chars: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut tokens: Vec<Token> = Vec::new();
    let mut bar_open = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // three-argument function call: emits its whole token group at once
        if let Some(consumed) = scan_three_arg_call(&chars, i, registry, &mut tokens)? {
            i += consumed;
            continue;
        }

        // signed or unsigned number literal
        let signed_start = (c == '+' || c == '-')
            && sign_starts_number(tokens.last(), c, registry)
            && is_digit_at(&chars, i + 1);
        if c.is_ascii_digit() || signed_start {
            let (token, consumed) = scan_number(&chars, i);
            tokens.push(token);
            i += consumed;
            continue;
        }

        // parentheses and separator
        match c {
            '(' => {
                tokens.push(Token::left_paren());
                i += 1;
                continue;
            }
            ')' => {
                tokens.push(Token::right_paren());
                i += 1;
                continue;
            }
            ';' => {
                tokens.push(Token::new(TokenKind::Semicolon, ";"));
                i += 1;
                continue;
            }
            // leftover bars; normally all bars were expanded by the
            // preprocessor, so this is a safety net only
            '|' => {
                if bar_open {
                    tokens.push(Token::right_paren());
                } else {
                    tokens.push(Token::function("abs"));
                    tokens.push(Token::left_paren());
                }
                bar_open = !bar_open;
                i += 1;
                continue;
            }
            _ => {}
        }

        // maximal-munch registry match
        if let Some(element) = munch(&chars, i, registry) {
            let symbol = element.symbol();
            match element {
                Element::Constant { .. } => tokens.push(Token::new(TokenKind::Constant, symbol)),
                Element::Postfix { .. } => {
                    validate_postfix_position(tokens.last(), symbol, i)?;
                    tokens.push(Token::operator(symbol));
                }
                Element::Binary { .. } | Element::Prefix { .. } => {
                    tokens.push(Token::operator(symbol));
                }
                Element::Function { .. } => tokens.push(Token::function(symbol)),
                Element::ThreeArg { .. } => {
                    // reachable only when the call shape was wrong
                    return Err(EvalError::syntax_at(
                        format!("{symbol} expects three ';'-separated arguments"),
                        Span::at(i),
                    ));
                }
                Element::LeftParen { .. }
                | Element::RightParen { .. }
                | Element::Separator { .. } => {
                    // punctuation was consumed by the explicit branch above
                    return Err(EvalError::syntax_at(
                        format!("unexpected '{symbol}'"),
                        Span::at(i),
                    ));
                }
            }
            i += symbol.chars().count();
            continue;
        }

        // variable: maximal run of letters
        if c.is_alphabetic() {
            let start = i;
            let mut end = i;
            while end < chars.len() && chars[end].is_alphabetic() {
                end += 1;
            }
            let name: String = chars[start..end].iter().collect();
            tokens.push(Token::new(TokenKind::Variable, name));
            i = end;
            continue;
        }

        return Err(EvalError::syntax_at(
            format!("unexpected character '{c}'"),
            Span::at(i),
        ));
    }

    Ok(tokens)
}

/// Decide whether a `+`/`-` at the cursor begins a number literal, judging
/// only by the previously emitted token.
fn sign_starts_number(previous: Option<&Token>, sign: char, registry: &Registry) -> bool {
    match previous {
        None => true,
        Some(token) => match token.kind {
            TokenKind::Number
            | TokenKind::RightParen
            | TokenKind::Constant
            | TokenKind::Variable => false,
            // "(-x" is a sign, "(+x" is the standalone plus operator
            TokenKind::LeftParen => sign == '-',
            TokenKind::Operator => !registry
                .find(&token.lexeme)
                .is_some_and(Element::is_postfix),
            TokenKind::Function | TokenKind::Semicolon => true,
            TokenKind::Text => false,
        },
    }
}

fn is_digit_at(chars: &[char], index: usize) -> bool {
    chars.get(index).is_some_and(char::is_ascii_digit)
}

/// Consume a number literal at the cursor: optional sign, digits, optional
/// fraction. A leading `+` is normalized away.
fn scan_number(chars: &[char], start: usize) -> (Token, usize) {
    let mut i = start;
    let mut lexeme = String::new();
    if chars[i] == '+' || chars[i] == '-' {
        if chars[i] == '-' {
            lexeme.push('-');
        }
        i += 1;
    }
    while i < chars.len() && chars[i].is_ascii_digit() {
        lexeme.push(chars[i]);
        i += 1;
    }
    if i < chars.len() && chars[i] == '.' && is_digit_at(chars, i + 1) {
        lexeme.push('.');
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            lexeme.push(chars[i]);
            i += 1;
        }
    }
    (Token::number(lexeme), i - start)
}

/// `!` may only follow a value-producing token.
fn validate_postfix_position(
    previous: Option<&Token>,
    symbol: &str,
    position: usize,
) -> Result<(), EvalError> {
    let valid = previous.is_some_and(|token| {
        matches!(
            token.kind,
            TokenKind::Number | TokenKind::RightParen | TokenKind::Variable | TokenKind::Constant
        )
    });
    if valid {
        Ok(())
    } else {
        Err(EvalError::syntax_at(
            format!("'{symbol}' must follow a number, variable, constant or ')'"),
            Span::at(position),
        ))
    }
}

/// Longest registry symbol starting at the cursor, if any.
fn munch<'r>(chars: &[char], start: usize, registry: &'r Registry) -> Option<&'r Element> {
    let longest = registry.max_token_length().min(chars.len() - start);
    for length in (1..=longest).rev() {
        let candidate: String = chars[start..start + length].iter().collect();
        if let Some(element) = registry.find(&candidate) {
            return Some(element);
        }
    }
    None
}

/// Try to match `symbol(a;b;selector)` for a registered three-argument
/// function at the cursor. On success the number/number/selector/function
/// token group is emitted and the consumed length returned.
fn scan_three_arg_call(
    chars: &[char],
    start: usize,
    registry: &Registry,
    tokens: &mut Vec<Token>,
) -> Result<Option<usize>, EvalError> {
    for symbol in registry.three_argument_candidates() {
        let name_len = symbol.chars().count();
        if !window_matches(chars, start, symbol) {
            continue;
        }
        if chars.get(start + name_len) != Some(&'(') {
            continue;
        }

        // find the matching ')' by depth counting
        let open = start + name_len;
        let mut depth = 1usize;
        let mut close = None;
        let mut j = open + 1;
        while j < chars.len() {
            match chars[j] {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        close = Some(j);
                        break;
                    }
                }
                _ => {}
            }
            j += 1;
        }
        let Some(close) = close else {
            return Err(EvalError::syntax_at(
                format!("unmatched '(' in call to {symbol}"),
                Span::at(open),
            ));
        };

        let inside: String = chars[open + 1..close].iter().collect();
        let parts: Vec<&str> = inside.split(';').collect();
        if parts.len() != 3 {
            return Err(EvalError::syntax_at(
                format!("{symbol} expects three ';'-separated arguments"),
                Span::between(open, close + 1),
            ));
        }
        let first = plain_number_lexeme(parts[0]).ok_or_else(|| {
            EvalError::syntax_at(
                format!("{symbol} argument 1 must be a plain number"),
                Span::between(open, close + 1),
            )
        })?;
        let second = plain_number_lexeme(parts[1]).ok_or_else(|| {
            EvalError::syntax_at(
                format!("{symbol} argument 2 must be a plain number"),
                Span::between(open, close + 1),
            )
        })?;
        if parts[2].is_empty() {
            return Err(EvalError::syntax_at(
                format!("{symbol} selector argument is empty"),
                Span::between(open, close + 1),
            ));
        }

        tokens.push(Token::number(first));
        tokens.push(Token::number(second));
        tokens.push(Token::new(TokenKind::Text, parts[2]));
        tokens.push(Token::function(*symbol));
        return Ok(Some(close + 1 - start));
    }
    Ok(None)
}

fn window_matches(chars: &[char], start: usize, symbol: &str) -> bool {
    let mut offset = start;
    for expected in symbol.chars() {
        if chars.get(offset) != Some(&expected) {
            return false;
        }
        offset += 1;
    }
    true
}

/// Validate a `-?digits(.digits)?` literal, normalizing a leading `+` away.
fn plain_number_lexeme(part: &str) -> Option<String> {
    let trimmed = part.strip_prefix('+').unwrap_or(part);
    let mut chars = trimmed.chars().peekable();
    let mut lexeme = String::new();
    if chars.peek() == Some(&'-') {
        lexeme.push('-');
        chars.next();
    }
    let mut integer_digits = 0;
    while chars.peek().is_some_and(char::is_ascii_digit) {
        lexeme.push(chars.next()?);
        integer_digits += 1;
    }
    if integer_digits == 0 {
        return None;
    }
    if chars.peek() == Some(&'.') {
        lexeme.push('.');
        chars.next();
        let mut fraction_digits = 0;
        while chars.peek().is_some_and(char::is_ascii_digit) {
            lexeme.push(chars.next()?);
            fraction_digits += 1;
        }
        if fraction_digits == 0 {
            return None;
        }
    }
    if chars.next().is_some() {
        return None;
    }
    Some(lexeme)
}
