//! Implements a parser for Boolean equations.
//!
//! The module provides a parser for equations by implementing [`FromStr`] for
//! [`Equation`]. The parser is often used implicitly through the [`parse`] method.
//!
//! **Example**:
//! The following example parses a string into an [`Equation`]:
//! ```rust
//! use verity_bool::syntax::Equation;
//!
//! // parse a string into `Equation`:
//! let equation: Equation = "A(B+C)".parse().unwrap();
//!
//! assert_eq!("A*(B+C)", equation.canonical());
//! assert_eq!("ABC+*", equation.postfix_text());
//! ```
//!
//! Parsing happens in three steps. The raw text is first *canonicalized*:
//! uppercased, stripped of unsupported characters and extended with the `*`
//! operators that juxtaposition implies. The canonical text is then converted to
//! reverse-Polish order by the shunting-yard algorithm, and its variable symbols
//! are collected for truth table enumeration.
//!
//! [`Equation`]: crate::syntax::Equation
//! [`FromStr`]: std::str::FromStr
//! [`parse`]: ::std::str#parse
use crate::syntax::{Equation, Operator, Token};
use std::{collections::BTreeSet, str::FromStr};
use thiserror::Error;

/// Is the type of errors returned by the parser.
///
/// Parse errors are per equation: a rejected equation does not prevent other
/// equations from being parsed and tabulated.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    #[error("unmatched `)` at column {column} of `{canonical}`")]
    UnmatchedCloseParen { canonical: String, column: usize },
    #[error("unmatched `(` at column {column} of `{canonical}`")]
    UnmatchedOpenParen { canonical: String, column: usize },
    #[error("unexpected character `{character}` at column {column}")]
    UnexpectedCharacter { character: char, column: usize },
}

/// Returns the canonical form of `text`: every letter is uppercased, characters
/// outside the equation syntax are deleted, and an explicit `*` is inserted
/// wherever juxtaposition implies a conjunction.
///
/// Characters are dropped silently, so whitespace and stray punctuation never
/// fail canonicalization. The function is idempotent.
///
/// **Example**:
/// ```rust
/// use verity_bool::parser::canonicalize;
///
/// assert_eq!("A*B", canonicalize("ab"));
/// assert_eq!("A*!B", canonicalize("A !B"));
/// assert_eq!("(A+B)*C", canonicalize("(A + B)C"));
/// ```
pub fn canonicalize(text: &str) -> String {
    let tokens: Vec<Token> = text
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter_map(Token::classify)
        .collect();

    let mut canonical = String::with_capacity(tokens.len() * 2);
    for (i, token) in tokens.iter().enumerate() {
        canonical.push(token.symbol());
        if let Some(next) = tokens.get(i + 1) {
            if implies_conjunction(token, next) {
                canonical.push('*');
            }
        }
    }

    canonical
}

// Juxtaposition means conjunction: `AB`, `A(`, `)B`, `A!B` and the like.
fn implies_conjunction(left: &Token, right: &Token) -> bool {
    let joins_left = left.is_value() || matches!(left, Token::RightParen);
    let joins_right = right.is_value()
        || matches!(right, Token::Operator(Operator::Not) | Token::LeftParen);

    joins_left && joins_right
}

/// Converts a canonical string to a sequence of tokens in reverse-Polish order,
/// using the shunting-yard algorithm.
///
/// Value tokens move straight to the output; operators pass through a stack that
/// pops while its top operator binds strictly tighter than the incoming one, so
/// operators of equal precedence associate left to right and repeated `!` stacks
/// correctly. Parentheses are consumed by the conversion and never appear in the
/// output.
///
/// An unmatched parenthesis on either side fails the conversion with an error
/// carrying the offending column of the canonical string.
pub fn to_postfix(canonical: &str) -> Result<Vec<Token>, Error> {
    let mut output = Vec::new();
    let mut stack: Vec<(usize, Token)> = Vec::new();

    for (i, symbol) in canonical.chars().enumerate() {
        let column = i + 1;
        let token = Token::classify(symbol).ok_or(Error::UnexpectedCharacter {
            character: symbol,
            column,
        })?;

        match token {
            Token::Variable(_) | Token::Literal(_) => output.push(token),
            Token::Operator(operator) => {
                while let Some((_, Token::Operator(top))) = stack.last() {
                    if top.precedence() > operator.precedence() {
                        if let Some((_, popped)) = stack.pop() {
                            output.push(popped);
                        }
                    } else {
                        break;
                    }
                }
                stack.push((column, token));
            }
            Token::LeftParen => stack.push((column, token)),
            Token::RightParen => loop {
                match stack.pop() {
                    Some((_, Token::LeftParen)) => break,
                    Some((_, operator)) => output.push(operator),
                    None => {
                        return Err(Error::UnmatchedCloseParen {
                            canonical: canonical.into(),
                            column,
                        })
                    }
                }
            },
        }
    }

    // flush the remaining operators; a leftover `(` has no matching `)`.
    while let Some((column, token)) = stack.pop() {
        match token {
            Token::LeftParen => {
                return Err(Error::UnmatchedOpenParen {
                    canonical: canonical.into(),
                    column,
                })
            }
            operator => output.push(operator),
        }
    }

    Ok(output)
}

/// Collects the distinct variable symbols of a canonical string. The resulting
/// set iterates in alphabetical order.
pub fn extract_variables(canonical: &str) -> BTreeSet<char> {
    canonical
        .chars()
        .filter_map(Token::classify)
        .filter_map(|token| match token {
            Token::Variable(symbol) => Some(symbol),
            _ => None,
        })
        .collect()
}

impl FromStr for Equation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = canonicalize(s);
        let postfix = to_postfix(&canonical)?;
        let variables = extract_variables(&canonical);

        Ok(Equation::new(s.into(), canonical, postfix, variables))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn canonicalize_folds_case() {
        assert_eq!("A", canonicalize("a"));
        assert_eq!("A*B+C", canonicalize("a*b+C"));
    }

    #[test]
    fn canonicalize_drops_unsupported_characters() {
        assert_eq!("A*B", canonicalize("A * B"));
        assert_eq!("A+B", canonicalize("A@ +\tB#"));
        assert_eq!("", canonicalize("2 3 9 ?"));
        assert_eq!("", canonicalize(""));
        assert_eq!("1+0", canonicalize("1 % + _ 0"));
    }

    #[test]
    fn canonicalize_inserts_implicit_and() {
        assert_eq!("A*B", canonicalize("AB"));
        assert_eq!("A*B*C", canonicalize("ABC"));
        assert_eq!("A*(B+C)", canonicalize("A(B+C)"));
        assert_eq!("A*!B", canonicalize("A!B"));
        assert_eq!("(A+B)*C", canonicalize("(A+B)C"));
        assert_eq!("(A+B)*(C+D)", canonicalize("(A+B)(C+D)"));
        assert_eq!("(A+B)*!C", canonicalize("(A+B)!C"));
        assert_eq!("!A*!B", canonicalize("!A!B"));
        assert_eq!("A*1", canonicalize("A1"));
        assert_eq!("1*0", canonicalize("1 0"));
    }

    #[test]
    fn canonicalize_leaves_explicit_operators_alone() {
        assert_eq!("A*B", canonicalize("A*B"));
        assert_eq!("!A+!B", canonicalize("!A+!B"));
        assert_eq!("!(A*B)", canonicalize("!(A*B)"));
    }

    #[test]
    fn canonicalize_is_idempotent() {
        for text in &["AB", "A(B+C)", "a !b c", "(A+B)(C+D)", "1 0", "!!a"] {
            let once = canonicalize(text);
            assert_eq!(once, canonicalize(&once));
        }
    }

    #[test]
    fn to_postfix_emits_values_in_order() {
        assert_eq!("AB*", postfix_text("A*B"));
        assert_eq!("AB+", postfix_text("A+B"));
        assert_eq!("A!", postfix_text("!A"));
        assert_eq!("10*", postfix_text("1*0"));
        assert_eq!("", postfix_text(""));
    }

    #[test]
    fn to_postfix_orders_by_precedence() {
        // `*` binds tighter than `+`:
        assert_eq!("ABC*+", postfix_text("A+B*C"));
        assert_eq!("AB*C+", postfix_text("A*B+C"));
        // `!` binds tightest:
        assert_eq!("A!B*", postfix_text("!A*B"));
        assert_eq!("AB!+", postfix_text("A+!B"));
    }

    #[test]
    fn to_postfix_does_not_pop_equal_precedence() {
        // repeated `!` stacks rather than popping itself:
        assert_eq!("A!!", postfix_text("!!A"));
        // same-precedence binary operators associate left to right:
        assert_eq!("AB*C*", postfix_text("A*B*C"));
        assert_eq!("AB+C+", postfix_text("A+B+C"));
    }

    #[test]
    fn to_postfix_consumes_parentheses() {
        assert_eq!("AB+C*", postfix_text("(A+B)*C"));
        assert_eq!("ABC+*", postfix_text("A*(B+C)"));
        assert_eq!("AB*!", postfix_text("!(A*B)"));
        assert_eq!("A", postfix_text("((A))"));
    }

    #[test]
    fn to_postfix_length_counts_values_and_operators() {
        for text in &["A*B", "(A+B)*C", "!A*!B+C", "A*(B+(C+D))", "1+0"] {
            let postfix = to_postfix(text).unwrap();
            let expected = text
                .chars()
                .filter_map(Token::classify)
                .filter(|t| t.is_value() || matches!(t, Token::Operator(_)))
                .count();
            assert_eq!(expected, postfix.len());
        }
    }

    #[test]
    fn to_postfix_rejects_unmatched_close_paren() {
        assert_eq!(
            Err(Error::UnmatchedCloseParen {
                canonical: ")A".into(),
                column: 1
            }),
            to_postfix(")A")
        );
        assert_eq!(
            Err(Error::UnmatchedCloseParen {
                canonical: "A+B)".into(),
                column: 4
            }),
            to_postfix("A+B)")
        );
        assert_eq!(
            Err(Error::UnmatchedCloseParen {
                canonical: "(A))".into(),
                column: 4
            }),
            to_postfix("(A))")
        );
    }

    #[test]
    fn to_postfix_rejects_unmatched_open_paren() {
        assert_eq!(
            Err(Error::UnmatchedOpenParen {
                canonical: "(A*B".into(),
                column: 1
            }),
            to_postfix("(A*B")
        );
        assert_eq!(
            Err(Error::UnmatchedOpenParen {
                canonical: "A*((B+C)".into(),
                column: 3
            }),
            to_postfix("A*((B+C)")
        );
    }

    #[test]
    fn to_postfix_rejects_foreign_characters() {
        // the contract of `to_postfix` is defined over canonical strings:
        assert_eq!(
            Err(Error::UnexpectedCharacter {
                character: 'a',
                column: 1
            }),
            to_postfix("a*B")
        );
        assert_eq!(
            Err(Error::UnexpectedCharacter {
                character: ' ',
                column: 2
            }),
            to_postfix("A B")
        );
    }

    #[test]
    fn extract_variables_collects_distinct_symbols() {
        assert_eq!(vec!['A', 'B', 'C'], letters(&extract_variables("A*B+!C")));
        assert_eq!(vec!['A'], letters(&extract_variables("A*A+A")));
        assert!(extract_variables("1*0").is_empty());
        assert!(extract_variables("").is_empty());
    }

    #[test]
    fn extract_variables_is_sorted() {
        assert_eq!(vec!['A', 'C', 'Z'], letters(&extract_variables("Z*C+A")));
    }

    #[test]
    fn parse_equation() {
        let eqn = equation("a b");
        assert_eq!("a b", eqn.original());
        assert_eq!("A*B", eqn.canonical());
        assert_eq!("AB*", eqn.postfix_text());
        assert_eq!(vec!['A', 'B'], letters(eqn.variables()));
    }

    #[test]
    fn parse_reports_unbalanced_parentheses() {
        assert_eq!(
            Err(Error::UnmatchedOpenParen {
                canonical: "(A*B".into(),
                column: 1
            }),
            "(A*B".parse::<Equation>()
        );
        assert!("A)".parse::<Equation>().is_err());
        // canonicalization runs first, so the reported column is canonical:
        assert_eq!(
            Err(Error::UnmatchedCloseParen {
                canonical: "A*B)".into(),
                column: 4
            }),
            "ab)".parse::<Equation>()
        );
    }

    fn postfix_text(canonical: &str) -> String {
        to_postfix(canonical)
            .unwrap()
            .iter()
            .map(Token::symbol)
            .collect()
    }
}
