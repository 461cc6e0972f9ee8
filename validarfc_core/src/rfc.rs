//! Lexical RFC matching.
//!
//! An RFC (Registro Federal de Contribuyentes) is 3 or 4 letters, six
//! digits, and an optional three-character homoclave. Matching is purely
//! lexical; no check digit is computed.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Letters (Ñ and & included), six ASCII digits, optional 3-char suffix.
const LEXICAL_PATTERN: &str = r"^[A-ZÑ&]{3,4}[0-9]{6}(?:[A-Z0-9]{3})?$";

/// Same prefix, but the digits must read as `YYMMDD` and the homoclave is
/// mandatory, ending in a digit or `A`.
const STRICT_PATTERN: &str =
    r"^[A-ZÑ&]{3,4}[0-9]{2}(?:0[1-9]|1[0-2])(?:0[1-9]|[12][0-9]|3[01])[A-Z0-9]{2}[0-9A]$";

static LEXICAL: OnceLock<Regex> = OnceLock::new();
static STRICT: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn lexical() -> &'static Regex {
    LEXICAL.get_or_init(|| {
        Regex::new(LEXICAL_PATTERN).expect("Static regex pattern is guaranteed to be valid")
    })
}

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn strict() -> &'static Regex {
    STRICT.get_or_init(|| {
        Regex::new(STRICT_PATTERN).expect("Static regex pattern is guaranteed to be valid")
    })
}

/// Match `rfc` against the fixed lexical pattern.
///
/// The input is taken as-is: no trimming, no case folding. Callers that
/// accept user input should run it through [`normalize`] first.
#[must_use]
pub fn is_valid_rfc(rfc: &str) -> bool {
    lexical().is_match(rfc)
}

/// Canonical form of user input: uppercase, without whitespace or dashes.
///
/// `"abc-123456 xy1"` becomes `"ABC123456XY1"`.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_uppercase)
        .collect()
}

/// Which pattern a validator applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RfcFormat {
    /// Shape only: letters, six digits, optional homoclave.
    #[default]
    Lexical,
    /// Shape plus a plausible birth/incorporation date and a full homoclave.
    Strict,
}

impl RfcFormat {
    #[must_use]
    pub fn is_match(self, rfc: &str) -> bool {
        match self {
            Self::Lexical => is_valid_rfc(rfc),
            Self::Strict => strict().is_match(rfc),
        }
    }
}

impl std::fmt::Display for RfcFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical => write!(f, "lexical"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for RfcFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lexical" => Ok(Self::Lexical),
            "strict" => Ok(Self::Strict),
            _ => Err(anyhow::anyhow!("unknown rfc format: {s}")),
        }
    }
}

/// Taxpayer type implied by the letter prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RfcKind {
    /// Individual, four-letter prefix.
    PersonaFisica,
    /// Legal entity, three-letter prefix.
    PersonaMoral,
}

impl RfcKind {
    /// Classify a lexically valid RFC. Returns `None` for anything that
    /// does not match.
    #[must_use]
    pub fn classify(rfc: &str) -> Option<Self> {
        if !is_valid_rfc(rfc) {
            return None;
        }
        match rfc.chars().take_while(|c| !c.is_ascii_digit()).count() {
            4 => Some(Self::PersonaFisica),
            3 => Some(Self::PersonaMoral),
            _ => None,
        }
    }
}

impl std::fmt::Display for RfcKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PersonaFisica => write!(f, "persona física"),
            Self::PersonaMoral => write!(f, "persona moral"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_company_rfc_with_homoclave() {
        assert!(is_valid_rfc("ABC123456XY1"));
    }

    #[test]
    fn rejects_short_input() {
        assert!(!is_valid_rfc("AB1"));
        assert!(!is_valid_rfc(""));
    }

    #[test]
    fn homoclave_is_optional_but_exactly_three_chars() {
        assert!(is_valid_rfc("ABCD123456"));
        assert!(is_valid_rfc("ABCD123456XYZ"));
        assert!(!is_valid_rfc("ABC123456XY"));
        assert!(!is_valid_rfc("ABC123456XY12"));
    }

    #[test]
    fn letter_prefix_is_three_or_four() {
        assert!(!is_valid_rfc("AB123456"));
        assert!(!is_valid_rfc("ABCDE123456"));
        assert!(!is_valid_rfc("ABC12345"));
    }

    #[test]
    fn enye_and_ampersand_count_as_letters() {
        assert!(is_valid_rfc("ÑAB123456"));
        assert!(is_valid_rfc("A&B123456AB1"));
        assert!(is_valid_rfc("MUÑO800101AB1"));
    }

    #[test]
    fn matcher_does_not_fold_case_or_trim() {
        assert!(!is_valid_rfc("abc123456xy1"));
        assert!(!is_valid_rfc(" ABC123456XY1"));
        assert!(!is_valid_rfc("ABC123456XY1\n"));
    }

    #[test]
    fn only_ascii_digits_match() {
        // Fullwidth digits are Unicode `\d` but not part of an RFC.
        assert!(!is_valid_rfc("ABC１２３４５６"));
        assert!(!is_valid_rfc("ABC١٢٣٤٥٦"));
    }

    #[test]
    fn normalize_uppercases_and_strips_separators() {
        assert_eq!(normalize("  abc-123456 xy1 "), "ABC123456XY1");
        assert_eq!(normalize("ñab123456"), "ÑAB123456");
        assert_eq!(normalize("\tGODE-561231-GR8\n"), "GODE561231GR8");
        assert!(is_valid_rfc(&normalize("abc123456xy1")));
    }

    #[test]
    fn strict_requires_a_plausible_date() {
        assert!(RfcFormat::Strict.is_match("GODE561231GR8"));
        assert!(RfcFormat::Strict.is_match("ABC990101ABA"));
        assert!(!RfcFormat::Strict.is_match("ABC991301AB1"));
        assert!(!RfcFormat::Strict.is_match("ABC990100AB1"));
        // Lexically fine, but month 34 does not exist.
        assert!(RfcFormat::Lexical.is_match("ABC123456XY1"));
        assert!(!RfcFormat::Strict.is_match("ABC123456XY1"));
    }

    #[test]
    fn strict_requires_homoclave() {
        assert!(RfcFormat::Lexical.is_match("ABC990101"));
        assert!(!RfcFormat::Strict.is_match("ABC990101"));
        assert!(!RfcFormat::Strict.is_match("ABC990101ABB"));
    }

    #[test]
    fn format_parses_from_config_strings() {
        assert_eq!("strict".parse::<RfcFormat>().ok(), Some(RfcFormat::Strict));
        assert_eq!(
            "lexical".parse::<RfcFormat>().ok(),
            Some(RfcFormat::Lexical)
        );
        assert!("checksum".parse::<RfcFormat>().is_err());
        assert_eq!(RfcFormat::default(), RfcFormat::Lexical);
    }

    #[test]
    fn classify_by_prefix_length() {
        assert_eq!(
            RfcKind::classify("GODE561231GR8"),
            Some(RfcKind::PersonaFisica)
        );
        assert_eq!(
            RfcKind::classify("ABC123456XY1"),
            Some(RfcKind::PersonaMoral)
        );
        assert_eq!(RfcKind::classify("AB1"), None);
    }
}
