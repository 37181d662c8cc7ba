//! Rule string tokenizer
//!
//! Splits on `(`, `)`, `AND` and `OR`, dropping the whitespace around them.
//! Whatever lies between delimiters is a raw condition. Keywords are matched
//! case-sensitively and without word boundaries, so an attribute such as
//! `ORDERS` is split at its leading `OR`.

use once_cell::sync::Lazy;
use regex::Regex;
use rulekit_core::LogicalOperator;

static DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*(\(|\)|AND|OR)\s*").expect("delimiter is a valid regex"));

/// Atomic rule string token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    LeftParen,
    RightParen,
    Operator(LogicalOperator),
    /// Raw `attribute comparator value` text, trimmed
    Condition(&'a str),
}

/// Split a rule string into tokens, skipping blank fragments
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for caps in DELIMITER.captures_iter(input) {
        let (Some(whole), Some(delim)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        push_fragment(&mut tokens, &input[last..whole.start()]);
        tokens.push(match delim.as_str() {
            "(" => Token::LeftParen,
            ")" => Token::RightParen,
            "AND" => Token::Operator(LogicalOperator::And),
            _ => Token::Operator(LogicalOperator::Or),
        });
        last = whole.end();
    }
    push_fragment(&mut tokens, &input[last..]);

    tokens
}

fn push_fragment<'a>(tokens: &mut Vec<Token<'a>>, fragment: &'a str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        tokens.push(Token::Condition(fragment));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_condition() {
        assert_eq!(tokenize("age > 30"), vec![Token::Condition("age > 30")]);
    }

    #[test]
    fn test_operators_and_parens() {
        assert_eq!(
            tokenize("(age > 30 AND salary < 5000) OR dept = 'HR'"),
            vec![
                Token::LeftParen,
                Token::Condition("age > 30"),
                Token::Operator(LogicalOperator::And),
                Token::Condition("salary < 5000"),
                Token::RightParen,
                Token::Operator(LogicalOperator::Or),
                Token::Condition("dept = 'HR'"),
            ]
        );
    }

    #[test]
    fn test_no_spaces_around_keywords() {
        assert_eq!(
            tokenize("a>1AND b<2"),
            vec![
                Token::Condition("a>1"),
                Token::Operator(LogicalOperator::And),
                Token::Condition("b<2"),
            ]
        );
    }

    #[test]
    fn test_lowercase_keywords_are_not_delimiters() {
        assert_eq!(tokenize("a > 1 and b < 2"), vec![Token::Condition("a > 1 and b < 2")]);
    }

    #[test]
    fn test_keyword_inside_word_is_split() {
        assert_eq!(
            tokenize("ORDERS > 5"),
            vec![Token::Operator(LogicalOperator::Or), Token::Condition("DERS > 5")]
        );
    }

    #[test]
    fn test_blank_input() {
        assert!(tokenize("   ").is_empty());
        assert_eq!(tokenize("()"), vec![Token::LeftParen, Token::RightParen]);
    }
}
