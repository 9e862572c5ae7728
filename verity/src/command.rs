use crate::terminal::Palette;
use crate::trace::{subscriber::JsonLogger, DEFAULT_JSON_LOG_FILE, PARSE, REJECT};
use crate::{constants::*, utils::*};
use anyhow::Error;
use std::fs;
use structopt::StructOpt;
use verity_bool::syntax::Equation;

#[derive(StructOpt)]
#[structopt(
    name = "Verity",
    about = "A tool for printing truth tables of Boolean equations"
)]
#[structopt(raw(setting = "structopt::clap::AppSettings::ColoredHelp"))]
pub(super) struct Command {
    #[structopt(
        name = "EQUATION",
        help = "Equations to tabulate, such as \"A*B+!C\" or \"a(b+c)\""
    )]
    equations: Vec<String>,
    #[structopt(
        short = "d",
        long = "debug",
        help = "Print the canonical and reverse-Polish forms of each equation."
    )]
    debug: bool,
    #[structopt(
        short = "c",
        long = "compare",
        help = "Report whether all equations evaluate identically on every row."
    )]
    compare: bool,
    #[structopt(long = "no-color", help = "Disable colored output.")]
    no_color: bool,
    #[structopt(
        short = "l",
        long = "log",
        parse(from_os_str),
        help = "Path to the log file."
    )]
    log: Option<std::path::PathBuf>,
}

impl Command {
    pub fn run(self) -> Result<(), Error> {
        let Command {
            equations,
            debug,
            compare,
            no_color,
            log,
        } = self;
        let palette = palette(!no_color);

        let log = log.map(|l| l.to_str().unwrap_or(DEFAULT_JSON_LOG_FILE).to_owned());

        if !no_color {
            palette.set(STYLE_LOGO);
            println!("{}", ASCII_ART);
        }

        let run = || process(&equations, debug, compare, &palette);

        if let Some(log) = log {
            let log = fs::File::create(log).expect("cannot create the log file");
            let logger = JsonLogger::new(log);
            tracing::subscriber::with_default(logger, run)
        } else {
            run()
        }
    }
}

fn process(inputs: &[String], debug: bool, compare: bool, palette: &Palette) -> Result<(), Error> {
    let mut equations = Vec::new();
    for input in inputs {
        match input.parse::<Equation>() {
            Ok(equation) => {
                info!(
                    event = PARSE,
                    equation = ?equation.original(),
                    canonical = ?equation.canonical(),
                    postfix = ?equation.postfix_text(),
                );
                equations.push(equation);
            }
            Err(e) => {
                warn!(event = REJECT, equation = ?input);
                palette.set(STYLE_ERROR);
                println!("cannot parse `{}`: {}", input, e);
            }
        }
    }

    if equations.is_empty() {
        return Err(anyhow::anyhow!("no equations to tabulate"));
    }

    if debug {
        print_breakdown(&equations, palette);
    }

    print_table(&equations, compare, palette)
}
