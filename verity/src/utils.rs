use crate::{
    constants::*,
    terminal::{Palette, Style},
    trace::TABLE,
};
use anyhow::Error;
use itertools::Itertools;
use verity_bool::{
    syntax::Equation,
    table::{Row, TruthTable},
};

pub(crate) fn palette(color: bool) -> Palette {
    let mut palette = Palette::new();
    if color {
        palette.insert(
            STYLE_LOGO,
            Style::new().foreground(59).attribute(term::Attr::Dim),
        );
        palette.insert(
            STYLE_INFO,
            Style::new().foreground(59).attribute(term::Attr::Bold),
        );
        palette.insert(
            STYLE_ERROR,
            Style::new().foreground(160).attribute(term::Attr::Bold),
        );
        palette.insert(
            STYLE_TABLE_HEADER,
            Style::new().foreground(252).attribute(term::Attr::Bold),
        );
        palette.insert(STYLE_TABLE_ROWS, Style::new().foreground(252));
    }

    palette
}

/// Prints the index, original, canonical and reverse-Polish forms of every
/// equation, in the layout of the `--debug` flag.
pub(crate) fn print_breakdown(equations: &[Equation], palette: &Palette) {
    palette.set(STYLE_INFO);
    for (index, equation) in equations.iter().enumerate() {
        println!("{}. {}", index + 1, equation.original());
        println!("   {}", equation.canonical());
        println!("   {}", equation.postfix_text());
    }
    println!();
}

/// Prints the truth table of `equations` and, when `compare` is set, a verdict on
/// whether all equations evaluate identically on every row.
pub(crate) fn print_table(
    equations: &[Equation],
    compare: bool,
    palette: &Palette,
) -> Result<(), Error> {
    let table = TruthTable::new(equations);

    info!(
        event = TABLE,
        variables = ?table.variables().iter().join(" "),
        rows = table.row_count() as u64,
    );

    let header = render_header(table.variables(), equations);
    palette.set(STYLE_TABLE_HEADER);
    println!("{}", header);
    println!("{}", "-".repeat(header.chars().count()));

    palette.set(STYLE_TABLE_ROWS);
    let mut uniform = true;
    for row in table.rows() {
        let row = row.map_err(|e| Error::new(e).context("failed to evaluate the equations"))?;
        uniform &= row.uniform();
        println!("{}", render_row(&row, equations));
    }

    if compare {
        palette.set(STYLE_INFO);
        if uniform {
            println!("The equation(s) are equal.");
        } else {
            println!("The equation(s) are not equal.");
        }
    }

    Ok(())
}

// Header: variable columns, a `| ` separator, then the original equation texts.
fn render_header(variables: &[char], equations: &[Equation]) -> String {
    let mut header = String::new();
    for variable in variables {
        header.push(*variable);
        header.push(' ');
    }
    header.push_str("| ");
    header.push_str(&equations.iter().map(Equation::original).join(" "));

    header
}

// Each result lines up under the first character of its equation in the header,
// so the padding before it is the previous equation's displayed width.
fn render_row(row: &Row, equations: &[Equation]) -> String {
    let mut line = String::new();
    for value in row.inputs() {
        line.push(bit(*value));
        line.push(' ');
    }
    line.push_str("| ");

    let mut padding = 0;
    for (equation, value) in equations.iter().zip(row.outputs()) {
        line.push_str(&" ".repeat(padding));
        line.push(bit(*value));
        padding = equation.original().chars().count();
    }

    line
}

fn bit(value: bool) -> char {
    if value {
        '1'
    } else {
        '0'
    }
}
