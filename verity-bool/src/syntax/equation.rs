/*! Defines Boolean equations, the values produced by the parser and consumed by
the evaluator and the truth table. */

use super::Token;
use crate::eval::{self, Assignment};
use std::{collections::BTreeSet, fmt};

/// Represents a Boolean equation, holding the raw text it was parsed from together
/// with the derived forms the rest of the system works on.
///
/// An `Equation` is constructed once by the parser and is never mutated afterwards:
/// `canonical` is a pure function of `original` and `postfix` is a pure function of
/// `canonical`. Truth values are supplied from the outside at evaluation time, so a
/// constructed equation may be evaluated any number of times.
///
/// **Example**:
/// ```rust
/// use verity_bool::syntax::Equation;
///
/// let equation: Equation = "a(B + c)".parse().unwrap();
///
/// assert_eq!("a(B + c)", equation.original());
/// assert_eq!("A*(B+C)", equation.canonical());
/// assert_eq!("ABC+*", equation.postfix_text());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Equation {
    original: String,
    canonical: String,
    postfix: Vec<Token>,
    variables: BTreeSet<char>,
}

impl Equation {
    pub(crate) fn new(
        original: String,
        canonical: String,
        postfix: Vec<Token>,
        variables: BTreeSet<char>,
    ) -> Self {
        Self {
            original,
            canonical,
            postfix,
            variables,
        }
    }

    /// Returns the raw text the receiver was parsed from, preserved verbatim for
    /// display.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Returns the canonical form of the receiver: uppercased, stripped of
    /// unsupported characters and with implicit conjunctions made explicit.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Returns the tokens of the receiver in reverse-Polish order.
    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    /// Returns the reverse-Polish form of the receiver as text.
    pub fn postfix_text(&self) -> String {
        self.postfix.iter().map(Token::symbol).collect()
    }

    /// Returns the set of distinct variable symbols appearing in the receiver.
    /// The set iterates in alphabetical order.
    pub fn variables(&self) -> &BTreeSet<char> {
        &self.variables
    }

    /// Evaluates the receiver against `assignment`.
    ///
    /// Variables missing from `assignment` read as false. Evaluating an equation
    /// whose reverse-Polish form is malformed (for example, parsed from empty
    /// input) fails with an [`eval::Error`].
    ///
    /// **Example**:
    /// ```rust
    /// use verity_bool::syntax::Equation;
    ///
    /// let equation: Equation = "A*!B".parse().unwrap();
    /// let assignment = vec![('A', true), ('B', false)].into_iter().collect();
    ///
    /// assert_eq!(true, equation.evaluate(&assignment).unwrap());
    /// ```
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, eval::Error> {
        eval::evaluate(&self.postfix, assignment)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.original)
    }
}

impl fmt::Debug for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}
