use validarfc_core::{RfcFormat, RfcKind, normalize};

use super::CommandStrategy;

/// Input for the offline check command.
#[derive(Debug, Clone)]
pub struct CheckInput {
    pub rfc: String,
    pub strict: bool,
}

/// Strategy for matching a single RFC without touching storage.
#[derive(Debug, Clone, Copy)]
pub struct CheckStrategy;

impl CommandStrategy for CheckStrategy {
    type Input = CheckInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let format = if input.strict {
            RfcFormat::Strict
        } else {
            RfcFormat::Lexical
        };
        println!("{}", describe(&input.rfc, format));
        Ok(())
    }
}

fn describe(raw: &str, format: RfcFormat) -> String {
    let rfc = normalize(raw);
    if rfc.is_empty() {
        return "(empty): invalid".to_string();
    }
    if !format.is_match(&rfc) {
        return format!("{rfc}: invalid ({format})");
    }
    match RfcKind::classify(&rfc) {
        Some(kind) => format!("{rfc}: valid, {kind} ({format})"),
        None => format!("{rfc}: valid ({format})"),
    }
}
