//! Kind module - the category of a stored credential

use std::fmt;

/// Category of a credential record
///
/// The kind decides which optional fields a record can carry:
/// - Website: username and site URL
/// - Email: email address
/// - Card: card holder, number, expiry and CVV
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Website or app login
    Website,

    /// Email account
    Email,

    /// Credit or debit card
    Card,
}

impl RecordKind {
    /// All kinds, in the order the dashboard shows them
    pub const ALL: [RecordKind; 3] = [RecordKind::Card, RecordKind::Website, RecordKind::Email];

    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Website => "website",
            RecordKind::Email => "email",
            RecordKind::Card => "card",
        }
    }

    /// Parse a kind from a string
    ///
    /// Case-insensitive. The plural dashboard tab names are accepted too.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "website" | "websites" => Some(RecordKind::Website),
            "email" | "emails" => Some(RecordKind::Email),
            "card" | "cards" => Some(RecordKind::Card),
            _ => None,
        }
    }

    /// Label used for the per-kind dashboard counters
    pub fn display_name(&self) -> &'static str {
        match self {
            RecordKind::Website => "Websites",
            RecordKind::Email => "Email Accounts",
            RecordKind::Card => "Cards",
        }
    }

    /// Label for the secret field of this kind
    ///
    /// Cards keep their PIN in the same field as other kinds keep a password.
    pub fn secret_label(&self) -> &'static str {
        match self {
            RecordKind::Card => "PIN/Password",
            RecordKind::Website | RecordKind::Email => "Password",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in RecordKind::ALL {
            assert_eq!(RecordKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!(RecordKind::parse("Website"), Some(RecordKind::Website));
        assert_eq!(RecordKind::parse("EMAIL"), Some(RecordKind::Email));
        assert_eq!(RecordKind::parse("Cards"), Some(RecordKind::Card));
        assert_eq!(RecordKind::parse("note"), None);
        assert_eq!(RecordKind::parse(""), None);
    }

    #[test]
    fn test_secret_label() {
        assert_eq!(RecordKind::Card.secret_label(), "PIN/Password");
        assert_eq!(RecordKind::Email.secret_label(), "Password");
    }
}
