use crate::{eval::Assignment, syntax::Equation};
use std::collections::BTreeSet;

pub fn equation(text: &str) -> Equation {
    text.parse().unwrap()
}

pub fn equations(texts: &[&str]) -> Vec<Equation> {
    texts.iter().map(|text| equation(text)).collect()
}

pub fn assignment(values: &[(char, bool)]) -> Assignment {
    values.iter().copied().collect()
}

pub fn letters(variables: &BTreeSet<char>) -> Vec<char> {
    variables.iter().copied().collect()
}
