//! Rule string parser
//!
//! Shunting-yard conversion of the token stream into postfix order, then a
//! stack reduction of the postfix items into a single tree.
//!
//! Precedence: `AND` (2) binds tighter than `OR` (1), and operators of equal
//! precedence associate to the left, so `a AND b OR c` is `(a AND b) OR c`
//! and `a OR b OR c` is `(a OR b) OR c`.

use crate::condition::parse_condition;
use crate::error::{ParseError, Result};
use crate::tokenizer::{tokenize, Token};
use rulekit_core::{LogicalOperator, Node, DEFAULT_MAX_TREE_DEPTH};
use serde::{Deserialize, Serialize};

/// Limits applied while parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Maximum parenthesis nesting
    pub max_nesting: usize,

    /// Maximum depth of the produced tree (a single condition has depth 1)
    pub max_tree_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_nesting: 32,
            max_tree_depth: DEFAULT_MAX_TREE_DEPTH,
        }
    }
}

/// Operator stack entry
enum StackEntry {
    LeftParen,
    Operator(LogicalOperator),
}

/// Postfix output item
enum OutputItem {
    Operand(Node),
    Operator(LogicalOperator),
}

/// Rule string parser
#[derive(Debug, Clone, Default)]
pub struct RuleParser {
    options: ParserOptions,
}

impl RuleParser {
    /// Create a parser with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom limits
    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse a rule string into a tree.
    ///
    /// Fails on the first malformed condition, on unbalanced parentheses, and
    /// whenever the reduction does not end with exactly one root.
    pub fn parse(&self, rule_string: &str) -> Result<Node> {
        let tokens = tokenize(rule_string);
        let postfix = self.to_postfix(&tokens)?;
        let root = self.reduce(postfix)?;

        log::debug!("Parsed rule '{}' into tree of depth {}", rule_string, root.depth());
        Ok(root)
    }

    /// Shunting-yard pass. Conditions are parsed as soon as they are seen and
    /// go straight to the output.
    fn to_postfix(&self, tokens: &[Token<'_>]) -> Result<Vec<OutputItem>> {
        let mut stack: Vec<StackEntry> = Vec::new();
        let mut output = Vec::new();
        let mut nesting = 0usize;

        for (position, token) in tokens.iter().enumerate() {
            match *token {
                Token::Operator(op) => {
                    while let Some(&StackEntry::Operator(top)) = stack.last() {
                        if top.precedence() < op.precedence() {
                            break;
                        }
                        stack.pop();
                        output.push(OutputItem::Operator(top));
                    }
                    stack.push(StackEntry::Operator(op));
                }
                Token::LeftParen => {
                    nesting += 1;
                    if nesting > self.options.max_nesting {
                        return Err(ParseError::NestingTooDeep {
                            depth: nesting,
                            max: self.options.max_nesting,
                        });
                    }
                    stack.push(StackEntry::LeftParen);
                }
                Token::RightParen => {
                    loop {
                        match stack.pop() {
                            Some(StackEntry::Operator(op)) => output.push(OutputItem::Operator(op)),
                            Some(StackEntry::LeftParen) => break,
                            None => return Err(ParseError::UnmatchedParenthesis { position }),
                        }
                    }
                    nesting -= 1;
                }
                Token::Condition(raw) => {
                    output.push(OutputItem::Operand(Node::operand(parse_condition(raw)?)));
                }
            }
        }

        while let Some(entry) = stack.pop() {
            match entry {
                StackEntry::Operator(op) => output.push(OutputItem::Operator(op)),
                StackEntry::LeftParen => return Err(ParseError::UnclosedParenthesis),
            }
        }

        Ok(output)
    }

    /// Fold postfix items into a tree. The first subtree popped for an
    /// operator is its right child, the second its left.
    fn reduce(&self, postfix: Vec<OutputItem>) -> Result<Node> {
        let mut built: Vec<(Node, usize)> = Vec::new();

        for item in postfix {
            match item {
                OutputItem::Operand(node) => built.push((node, 1)),
                OutputItem::Operator(op) => {
                    let (Some((right, right_depth)), Some((left, left_depth))) =
                        (built.pop(), built.pop())
                    else {
                        return Err(ParseError::MissingOperand {
                            operator: op.to_string(),
                        });
                    };

                    let depth = left_depth.max(right_depth) + 1;
                    if depth > self.options.max_tree_depth {
                        return Err(ParseError::TreeTooDeep {
                            depth,
                            max: self.options.max_tree_depth,
                        });
                    }
                    built.push((Node::operator(op, left, right), depth));
                }
            }
        }

        if built.len() != 1 {
            return Err(ParseError::Structural { roots: built.len() });
        }
        built
            .pop()
            .map(|(root, _)| root)
            .ok_or(ParseError::Structural { roots: 0 })
    }
}
