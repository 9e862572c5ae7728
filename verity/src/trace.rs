pub mod subscriber;

pub const DEFAULT_JSON_LOG_FILE: &str = "log.json";

// equation log record fields:
pub const EVENT_FIELD: &str = "event";
pub const EQUATION_FIELD: &str = "equation";
pub const CANONICAL_FIELD: &str = "canonical";
pub const POSTFIX_FIELD: &str = "postfix";

// truth table log record fields:
pub const VARIABLES_FIELD: &str = "variables";
pub const ROWS_FIELD: &str = "rows";

// log event types:
/// An equation was parsed.
pub const PARSE: &str = "@parse";

/// An equation was rejected by the parser.
pub const REJECT: &str = "@reject";

/// A truth table was generated.
pub const TABLE: &str = "@table";
