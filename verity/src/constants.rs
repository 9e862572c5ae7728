use crate::terminal::StyleId;

pub(crate) const ASCII_ART: &str = r#"
       ─────────────────────────────
       █████████████████████████████
       ▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇
     █▀▀█   ██▀▀████▀▀▀████▀▀█   ██▀▀█
     █                               █
     █▄▄█   ██▄▄████▄▄▄████▄▄█   ██▄▄█
       ███████ verity  1.0 ██████████
       ▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇
       ─────────────────────────────
"#;
pub(crate) const STYLE_LOGO: StyleId = 0;
pub(crate) const STYLE_INFO: StyleId = 1;
pub(crate) const STYLE_ERROR: StyleId = 2;
pub(crate) const STYLE_TABLE_HEADER: StyleId = 3;
pub(crate) const STYLE_TABLE_ROWS: StyleId = 4;
