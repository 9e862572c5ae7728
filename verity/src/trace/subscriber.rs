use serde_derive::Serialize;
use std::{fmt, fs::File, io::Write, sync::Mutex};
use tracing::*;

/// Thread safe logger that writes equation and truth table records of the run
/// into a given log file as JSON.
pub struct JsonLogger {
    log_file: Mutex<File>,
}

impl JsonLogger {
    pub fn new(log_file: File) -> Self {
        Self {
            log_file: Mutex::new(log_file),
        }
    }

    fn write(&self, record: &impl serde::Serialize) {
        let _ = self.log_file.lock().map(|mut file| {
            if let Ok(json) = serde_json::to_string_pretty(record) {
                let _ = file.write_all(json.as_bytes());
                let _ = file.write_all(b"\n");
            }
        });
    }
}

impl subscriber::Subscriber for JsonLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true // for now
    }

    fn new_span(&self, _span: &span::Attributes) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &span::Record) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event) {
        let mut record = Recorder::new();
        event.record(&mut record);

        let event_type = record.event.clone();
        match event_type.as_deref() {
            Some(super::PARSE) | Some(super::REJECT) => {
                if let Ok(equation) = EquationRecord::try_from(record) {
                    self.write(&equation);
                }
            }
            Some(super::TABLE) => {
                if let Ok(table) = TableRecord::try_from(record) {
                    self.write(&table);
                }
            }
            _ => (),
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

/// A record, containing information about an equation as it is parsed into its
/// canonical and reverse-Polish forms, or rejected by the parser.
#[derive(Serialize)]
struct EquationRecord {
    event: String,
    equation: String,
    canonical: Option<String>,
    postfix: Option<String>,
}

impl EquationRecord {
    fn try_from(value: Recorder) -> Result<Self, ()> {
        if value.event.is_none() | value.equation.is_none() {
            Err(())
        } else {
            Ok(EquationRecord {
                event: value.event.unwrap(),
                equation: value.equation.unwrap(),
                canonical: value.canonical,
                postfix: value.postfix,
            })
        }
    }
}

/// A record, containing information about a generated truth table: its variable
/// columns and its row count.
#[derive(Serialize)]
struct TableRecord {
    event: String,
    variables: String,
    rows: u64,
}

impl TableRecord {
    fn try_from(value: Recorder) -> Result<Self, ()> {
        if value.event.is_none() | value.variables.is_none() | value.rows.is_none() {
            Err(())
        } else {
            Ok(TableRecord {
                event: value.event.unwrap(),
                variables: value.variables.unwrap(),
                rows: value.rows.unwrap(),
            })
        }
    }
}

/// Generic trace visitor to collect as many fields as it can. Based on the
/// triggering event, `Recorder` is converted to its corresponding log record.
struct Recorder {
    event: Option<String>,
    equation: Option<String>,
    canonical: Option<String>,
    postfix: Option<String>,
    variables: Option<String>,
    rows: Option<u64>,
}

impl Recorder {
    fn new() -> Recorder {
        Recorder {
            event: None,
            equation: None,
            canonical: None,
            postfix: None,
            variables: None,
            rows: None,
        }
    }
}

impl field::Visit for Recorder {
    fn record_u64(&mut self, field: &field::Field, value: u64) {
        match field.name().as_ref() {
            super::ROWS_FIELD => self.rows = Some(value),
            _ => (),
        }
    }

    fn record_str(&mut self, field: &field::Field, value: &str) {
        match field.name().as_ref() {
            super::EVENT_FIELD => self.event = Some(value.to_owned()),
            _ => (),
        }
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        match field.name().as_ref() {
            super::EQUATION_FIELD => self.equation = Some(format!("{:?}", value)),
            super::CANONICAL_FIELD => self.canonical = Some(format!("{:?}", value)),
            super::POSTFIX_FIELD => self.postfix = Some(format!("{:?}", value)),
            super::VARIABLES_FIELD => self.variables = Some(format!("{:?}", value)),
            _ => (),
        }
    }
}
