// src/literal.rs - Parser for Python-style mapping literals embedded in log lines
//
// Only literal syntax is accepted: containers, strings, numbers and the
// constants True/False/None. Nothing is ever evaluated.

use serde_json::{Map, Number, Value};

const MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LiteralError {
    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("expected {expected} at offset {offset}")]
    Expected {
        expected: &'static str,
        offset: usize,
    },

    #[error("unknown name '{name}' at offset {offset}")]
    UnknownName { name: String, offset: usize },

    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    #[error("invalid escape sequence at offset {offset}")]
    InvalidEscape { offset: usize },

    #[error("invalid number '{text}' at offset {offset}")]
    InvalidNumber { text: String, offset: usize },

    #[error("integer {text} does not fit in 64 bits")]
    IntegerOutOfRange { text: String },

    #[error("float {text} is not finite")]
    NonFiniteFloat { text: String },

    #[error("unhashable dict key at offset {offset}")]
    UnhashableKey { offset: usize },

    #[error("literal nested deeper than {0} levels")]
    TooDeep(usize),

    #[error("trailing input at offset {offset}")]
    TrailingInput { offset: usize },

    #[error("expected a mapping literal, found {found}")]
    NotAMapping { found: &'static str },
}

/// Parse `text` as a mapping literal such as `{'a': [1], 'b': [2.5]}`.
///
/// Key order is preserved. Non-string keys (numbers, booleans, None) are
/// stored under their Python repr.
pub fn parse_mapping(text: &str) -> Result<Map<String, Value>, LiteralError> {
    match parse_value(text)? {
        Value::Object(map) => Ok(map),
        other => Err(LiteralError::NotAMapping {
            found: kind_name(&other),
        }),
    }
}

/// Parse a single literal value; the whole input must be consumed.
pub fn parse_value(text: &str) -> Result<Value, LiteralError> {
    let mut parser = LiteralParser::new(text);
    let value = parser.parse_value(0)?;
    parser.skip_whitespace();
    if parser.pos < text.len() {
        return Err(LiteralError::TrailingInput { offset: parser.pos });
    }
    Ok(value)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "None",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

struct LiteralParser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> LiteralParser<'a> {
    fn new(src: &'a str) -> Self {
        LiteralParser { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.pos += ch.len_utf8();
            } else if ch == '\\' && self.peek_nth(1) == Some('\n') {
                // explicit line joining
                self.pos += 2;
            } else {
                break;
            }
        }
    }

    fn unexpected(&self) -> LiteralError {
        match self.peek() {
            Some(ch) => LiteralError::UnexpectedChar {
                ch,
                offset: self.pos,
            },
            None => LiteralError::UnexpectedEnd,
        }
    }

    fn expect(&mut self, want: char, expected: &'static str) -> Result<(), LiteralError> {
        self.skip_whitespace();
        match self.peek() {
            Some(ch) if ch == want => {
                self.pos += ch.len_utf8();
                Ok(())
            }
            Some(_) => Err(LiteralError::Expected {
                expected,
                offset: self.pos,
            }),
            None => Err(LiteralError::UnexpectedEnd),
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value, LiteralError> {
        if depth > MAX_DEPTH {
            return Err(LiteralError::TooDeep(MAX_DEPTH));
        }
        self.skip_whitespace();

        if self.string_start().is_some() {
            return self.parse_strings();
        }

        match self.peek() {
            Some('{') => self.parse_brace(depth),
            Some('[') => {
                self.bump();
                let items = self.parse_items(']', depth)?;
                Ok(Value::Array(items))
            }
            Some('(') => self.parse_paren(depth),
            Some('+') | Some('-') => {
                let negative = self.bump() == Some('-');
                self.skip_whitespace();
                match self.peek() {
                    Some(ch) if ch.is_ascii_digit() || ch == '.' => self.parse_number(negative),
                    _ => Err(self.unexpected()),
                }
            }
            Some(ch) if ch.is_ascii_digit() || ch == '.' => self.parse_number(false),
            Some(ch) if ch.is_alphabetic() || ch == '_' => self.parse_name(),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_name(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }
        match &self.src[start..self.pos] {
            "True" => Ok(Value::Bool(true)),
            "False" => Ok(Value::Bool(false)),
            "None" => Ok(Value::Null),
            name => Err(LiteralError::UnknownName {
                name: name.to_string(),
                offset: start,
            }),
        }
    }

    /// `{}` is an empty dict; otherwise the first entry decides dict vs set.
    fn parse_brace(&mut self, depth: usize) -> Result<Value, LiteralError> {
        self.bump();
        self.skip_whitespace();
        if self.peek() == Some('}') {
            self.bump();
            return Ok(Value::Object(Map::new()));
        }

        let mut key_offset = self.pos;
        let first = self.parse_value(depth + 1)?;
        self.skip_whitespace();

        if self.peek() != Some(':') {
            let mut items = vec![first];
            match self.peek() {
                Some(',') => {
                    self.bump();
                    items.extend(self.parse_items('}', depth)?);
                }
                Some('}') => {
                    self.bump();
                }
                _ => {
                    return Err(LiteralError::Expected {
                        expected: "',' or '}'",
                        offset: self.pos,
                    })
                }
            }
            return Ok(Value::Array(items));
        }

        let mut map = Map::new();
        let mut key = first;
        loop {
            self.expect(':', "':'")?;
            let value = self.parse_value(depth + 1)?;
            map.insert(dict_key(key, key_offset)?, value);

            self.skip_whitespace();
            match self.bump() {
                Some(',') => {
                    self.skip_whitespace();
                    if self.peek() == Some('}') {
                        self.bump();
                        break;
                    }
                    key_offset = self.pos;
                    key = self.parse_value(depth + 1)?;
                }
                Some('}') => break,
                Some(_) => {
                    return Err(LiteralError::Expected {
                        expected: "',' or '}'",
                        offset: self.pos - 1,
                    })
                }
                None => return Err(LiteralError::UnexpectedEnd),
            }
        }
        Ok(Value::Object(map))
    }

    /// `(x)` is just `x`; a comma makes it a tuple.
    fn parse_paren(&mut self, depth: usize) -> Result<Value, LiteralError> {
        self.bump();
        self.skip_whitespace();
        if self.peek() == Some(')') {
            self.bump();
            return Ok(Value::Array(Vec::new()));
        }

        let first = self.parse_value(depth + 1)?;
        self.skip_whitespace();
        match self.bump() {
            Some(')') => Ok(first),
            Some(',') => {
                let mut items = vec![first];
                items.extend(self.parse_items(')', depth)?);
                Ok(Value::Array(items))
            }
            Some(_) => Err(LiteralError::Expected {
                expected: "',' or ')'",
                offset: self.pos - 1,
            }),
            None => Err(LiteralError::UnexpectedEnd),
        }
    }

    /// Comma-separated items up to and including `close`. Trailing comma allowed.
    fn parse_items(&mut self, close: char, depth: usize) -> Result<Vec<Value>, LiteralError> {
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some(close) {
                self.bump();
                return Ok(items);
            }
            items.push(self.parse_value(depth + 1)?);

            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(ch) if ch == close => {
                    self.bump();
                    return Ok(items);
                }
                Some(_) => {
                    return Err(LiteralError::Expected {
                        expected: "',' or closing bracket",
                        offset: self.pos,
                    })
                }
                None => return Err(LiteralError::UnexpectedEnd),
            }
        }
    }

    fn parse_number(&mut self, negative: bool) -> Result<Value, LiteralError> {
        let start = self.pos;
        let radix = match (self.peek(), self.peek_nth(1)) {
            (Some('0'), Some('x' | 'X')) => 16,
            (Some('0'), Some('o' | 'O')) => 8,
            (Some('0'), Some('b' | 'B')) => 2,
            _ => 10,
        };

        if radix != 10 {
            self.pos += 2;
            let digits_start = self.pos;
            while let Some(ch) = self.peek() {
                if ch.is_ascii_alphanumeric() || ch == '_' {
                    self.pos += 1;
                } else {
                    break;
                }
            }
            let text = &self.src[start..self.pos];
            let digits = self.src[digits_start..self.pos].replace('_', "");
            let magnitude = u64::from_str_radix(&digits, radix).map_err(|e| {
                if matches!(e.kind(), std::num::IntErrorKind::PosOverflow) {
                    LiteralError::IntegerOutOfRange {
                        text: text.to_string(),
                    }
                } else {
                    LiteralError::InvalidNumber {
                        text: text.to_string(),
                        offset: start,
                    }
                }
            })?;
            return integer_value(magnitude, negative, text);
        }

        let mut is_float = false;
        self.take_digits();
        if self.peek() == Some('.') {
            is_float = true;
            self.bump();
            self.take_digits();
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            is_float = true;
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            self.take_digits();
        }

        let text = &self.src[start..self.pos];
        let invalid = || LiteralError::InvalidNumber {
            text: text.to_string(),
            offset: start,
        };
        if matches!(self.peek(), Some('j' | 'J')) || text == "." || text.starts_with("._") {
            return Err(invalid());
        }
        let cleaned = text.replace('_', "");

        if is_float {
            let magnitude: f64 = cleaned.parse().map_err(|_| invalid())?;
            let value = if negative { -magnitude } else { magnitude };
            return Number::from_f64(value)
                .map(Value::Number)
                .ok_or_else(|| LiteralError::NonFiniteFloat {
                    text: text.to_string(),
                });
        }

        // Python rejects leading zeros on non-zero decimal integers
        if cleaned.len() > 1 && cleaned.starts_with('0') && cleaned.bytes().any(|b| b != b'0') {
            return Err(invalid());
        }
        let magnitude: u64 = cleaned.parse().map_err(|e: std::num::ParseIntError| {
            if matches!(e.kind(), std::num::IntErrorKind::PosOverflow) {
                LiteralError::IntegerOutOfRange {
                    text: text.to_string(),
                }
            } else {
                invalid()
            }
        })?;
        integer_value(magnitude, negative, text)
    }

    fn take_digits(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() || ch == '_' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// If a string literal starts here, returns (prefix length, is_raw).
    fn string_start(&self) -> Option<(usize, bool)> {
        let rest = self.rest();
        let prefix_len = rest
            .bytes()
            .take_while(|b| b.is_ascii_alphabetic())
            .count();
        if prefix_len > 2 {
            return None;
        }
        let prefix = rest[..prefix_len].to_ascii_lowercase();
        if !matches!(prefix.as_str(), "" | "r" | "u" | "b" | "br" | "rb") {
            return None;
        }
        match rest[prefix_len..].chars().next() {
            Some('\'') | Some('"') => Some((prefix_len, prefix.contains('r'))),
            _ => None,
        }
    }

    /// One or more adjacent string literals, concatenated.
    fn parse_strings(&mut self) -> Result<Value, LiteralError> {
        let mut text = String::new();
        while let Some((prefix_len, raw)) = self.string_start() {
            self.pos += prefix_len;
            self.parse_string(raw, &mut text)?;
            self.skip_whitespace();
        }
        Ok(Value::String(text))
    }

    fn parse_string(&mut self, raw: bool, out: &mut String) -> Result<(), LiteralError> {
        let start = self.pos;
        let quote = self.bump().ok_or(LiteralError::UnexpectedEnd)?;
        let triple = self.peek() == Some(quote) && self.peek_nth(1) == Some(quote);
        if triple {
            self.pos += 2;
        }
        let unterminated = LiteralError::UnterminatedString { offset: start };

        loop {
            let ch = self.bump().ok_or_else(|| unterminated.clone())?;
            match ch {
                c if c == quote => {
                    if !triple {
                        return Ok(());
                    }
                    if self.peek() == Some(quote) && self.peek_nth(1) == Some(quote) {
                        self.pos += 2;
                        return Ok(());
                    }
                    out.push(c);
                }
                '\n' if !triple => return Err(unterminated),
                '\\' => {
                    let escape_offset = self.pos - 1;
                    let next = self.bump().ok_or_else(|| unterminated.clone())?;
                    if raw {
                        out.push('\\');
                        out.push(next);
                    } else {
                        self.unescape(next, escape_offset, out)?;
                    }
                }
                c => out.push(c),
            }
        }
    }

    fn unescape(&mut self, ch: char, offset: usize, out: &mut String) -> Result<(), LiteralError> {
        match ch {
            '\n' => {}
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\x0b'),
            'x' => out.push(self.hex_escape(2, offset)?),
            'u' => out.push(self.hex_escape(4, offset)?),
            'U' => out.push(self.hex_escape(8, offset)?),
            '0'..='7' => {
                let mut code = ch.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match self.peek().and_then(|c| c.to_digit(8)) {
                        Some(d) => {
                            code = code * 8 + d;
                            self.bump();
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(code).ok_or(LiteralError::InvalidEscape { offset })?);
            }
            // Python keeps unrecognised escapes verbatim
            other => {
                out.push('\\');
                out.push(other);
            }
        }
        Ok(())
    }

    fn hex_escape(&mut self, len: usize, offset: usize) -> Result<char, LiteralError> {
        let end = self.pos + len;
        let digits = self
            .src
            .get(self.pos..end)
            .filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or(LiteralError::InvalidEscape { offset })?;
        let code =
            u32::from_str_radix(digits, 16).map_err(|_| LiteralError::InvalidEscape { offset })?;
        self.pos = end;
        char::from_u32(code).ok_or(LiteralError::InvalidEscape { offset })
    }
}

fn integer_value(magnitude: u64, negative: bool, text: &str) -> Result<Value, LiteralError> {
    if !negative {
        return Ok(Value::Number(magnitude.into()));
    }
    if magnitude <= i64::MAX as u64 + 1 {
        Ok(Value::Number((magnitude as i64).wrapping_neg().into()))
    } else {
        Err(LiteralError::IntegerOutOfRange {
            text: format!("-{}", text),
        })
    }
}

fn dict_key(key: Value, offset: usize) -> Result<String, LiteralError> {
    match key {
        Value::String(s) => Ok(s),
        Value::Array(_) | Value::Object(_) => Err(LiteralError::UnhashableKey { offset }),
        scalar => Ok(repr(&scalar)),
    }
}

/// Render a value the way Python's `repr` would print the literal.
pub fn repr(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => quote_string(s),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(repr).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Object(map) => {
            let parts: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", quote_string(k), repr(v)))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
    }
}

pub fn format_number(n: &Number) -> String {
    if n.is_f64() {
        n.as_f64().map(format_float).unwrap_or_else(|| n.to_string())
    } else {
        n.to_string()
    }
}

/// Python float repr: shortest round-trip digits, always a '.0' or exponent,
/// exponent form outside [1e-4, 1e16).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let magnitude = value.abs();
    if (1e-4..1e16).contains(&magnitude) {
        let text = value.to_string();
        if text.contains('.') {
            text
        } else {
            format!("{}.0", text)
        }
    } else {
        let text = format!("{:e}", value);
        match text.split_once('e') {
            Some((mantissa, exponent)) => {
                let exponent: i32 = exponent.parse().unwrap_or(0);
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exponent.abs())
            }
            None => text,
        }
    }
}

fn quote_string(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_simple_mapping() {
        let map = parse_mapping("{'a': [1], 'b': [2.5]}").unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map["a"], json!([1]));
        assert_eq!(map["b"], json!([2.5]));
    }

    #[test]
    fn test_key_order_preserved() {
        let map = parse_mapping("{'zeta': [1], 'alpha': [2], 'mid': [3]}").unwrap();
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_constants_and_strings() {
        let map = parse_mapping(r#"{"flag": [True], 'none': [None], 'name': ["it's"], 'off': (False,)}"#)
            .unwrap();
        assert_eq!(map["flag"], json!([true]));
        assert_eq!(map["none"], json!([null]));
        assert_eq!(map["name"], json!(["it's"]));
        assert_eq!(map["off"], json!([false]));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse_value("-3").unwrap(), json!(-3));
        assert_eq!(parse_value("+7").unwrap(), json!(7));
        assert_eq!(parse_value("1_000").unwrap(), json!(1000));
        assert_eq!(parse_value("0x1f").unwrap(), json!(31));
        assert_eq!(parse_value("0b101").unwrap(), json!(5));
        assert_eq!(parse_value("1.").unwrap(), json!(1.0));
        assert_eq!(parse_value(".5").unwrap(), json!(0.5));
        assert_eq!(parse_value("-2.5e-3").unwrap(), json!(-0.0025));
        assert_eq!(parse_value("-9223372036854775808").unwrap(), json!(i64::MIN));
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(matches!(
            parse_value("007"),
            Err(LiteralError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_value("99999999999999999999999"),
            Err(LiteralError::IntegerOutOfRange { .. })
        ));
        assert!(matches!(
            parse_value("1e999"),
            Err(LiteralError::NonFiniteFloat { .. })
        ));
        assert!(parse_value("3j").is_err());
    }

    #[test]
    fn test_tuples_and_parens() {
        assert_eq!(parse_value("(1, 2)").unwrap(), json!([1, 2]));
        assert_eq!(parse_value("(1,)").unwrap(), json!([1]));
        assert_eq!(parse_value("()").unwrap(), json!([]));
        assert_eq!(parse_value("(5)").unwrap(), json!(5));
    }

    #[test]
    fn test_sets_and_empty_dict() {
        assert_eq!(parse_value("{1, 2,}").unwrap(), json!([1, 2]));
        assert_eq!(parse_value("{}").unwrap(), json!({}));
    }

    #[test]
    fn test_string_escapes_and_prefixes() {
        assert_eq!(parse_value(r"'a\tb\n'").unwrap(), json!("a\tb\n"));
        assert_eq!(parse_value(r"'\x41é'").unwrap(), json!("Aé"));
        assert_eq!(parse_value(r"r'\d+'").unwrap(), json!("\\d+"));
        assert_eq!(parse_value(r"'\q'").unwrap(), json!("\\q"));
        assert_eq!(parse_value("'ab' \"cd\"").unwrap(), json!("abcd"));
        assert_eq!(parse_value("'''multi\nline'''").unwrap(), json!("multi\nline"));
        assert_eq!(parse_value("b'raw'").unwrap(), json!("raw"));
    }

    #[test]
    fn test_nested_and_trailing_commas() {
        let map = parse_mapping("{'m': [[1, 2], {'k': 'v'}], 'n': [3,],}").unwrap();
        assert_eq!(map["m"], json!([[1, 2], {"k": "v"}]));
        assert_eq!(map["n"], json!([3]));
    }

    #[test]
    fn test_non_string_keys_use_repr() {
        let map = parse_mapping("{1: [0], None: [1], 2.0: [2]}").unwrap();
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, vec!["1", "None", "2.0"]);
    }

    #[test]
    fn test_duplicate_key_keeps_first_position() {
        let map = parse_mapping("{'a': [1], 'b': [2], 'a': [3]}").unwrap();
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map["a"], json!([3]));
    }

    #[test]
    fn test_malformed_literals() {
        assert!(matches!(
            parse_mapping("{'a': [1]"),
            Err(LiteralError::UnexpectedEnd)
        ));
        assert!(matches!(
            parse_mapping("{'a': [1]}}"),
            Err(LiteralError::TrailingInput { offset: 10 })
        ));
        assert!(matches!(
            parse_mapping("{'a' [1]}"),
            Err(LiteralError::Expected { .. })
        ));
        assert!(matches!(
            parse_mapping("{'a: [1]}"),
            Err(LiteralError::UnterminatedString { offset: 1 })
        ));
        assert!(matches!(
            parse_mapping("{'a': os.system('x')}"),
            Err(LiteralError::UnknownName { .. })
        ));
        assert!(matches!(
            parse_mapping("{[1]: 2}"),
            Err(LiteralError::UnhashableKey { .. })
        ));
        assert!(matches!(
            parse_mapping("[1, 2]"),
            Err(LiteralError::NotAMapping { found: "a sequence" })
        ));
        assert!(parse_mapping("").is_err());
    }

    #[test]
    fn test_depth_limit() {
        let deep = format!("{}{}", "[".repeat(500), "]".repeat(500));
        assert!(matches!(parse_value(&deep), Err(LiteralError::TooDeep(_))));
    }

    #[test]
    fn test_format_float_matches_python_repr() {
        assert_eq!(format_float(4.0), "4.0");
        assert_eq!(format_float(2.5), "2.5");
        assert_eq!(format_float(-0.1), "-0.1");
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(1.5e-7), "1.5e-07");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(123456.789), "123456.789");
        assert_eq!(format_float(0.0001), "0.0001");
    }

    #[test]
    fn test_repr_containers() {
        assert_eq!(repr(&json!([1, 2.0, "x", null, true])), "[1, 2.0, 'x', None, True]");
        assert_eq!(repr(&json!({"k": "it's"})), "{'k': \"it's\"}");
        assert_eq!(repr(&json!("a\nb")), "'a\\nb'");
    }
}
