//! Kind-specific record fields

use crate::RecordKind;

/// Shown in place of a card verification value that is not revealed
pub const CVV_MASK: &str = "***";

const CVV_LABEL: &str = "CVV";

/// Optional fields of a record, one variant per [`RecordKind`]
///
/// Each variant carries only the fields that make sense for its kind, so a
/// card number on a website login cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDetails {
    /// Website or app login
    Website {
        /// Login name
        username: Option<String>,
        /// Site address, e.g. `https://github.com`
        website_url: Option<String>,
    },

    /// Email account
    Email {
        /// The account address
        email_address: Option<String>,
    },

    /// Credit or debit card
    Card {
        /// Name printed on the card
        card_holder_name: Option<String>,
        /// Card number, possibly masked by the user
        card_number: Option<String>,
        /// Expiry in `MM/YY` form (not validated)
        expiry_date: Option<String>,
        /// Card verification value
        cvv: Option<String>,
    },
}

impl RecordDetails {
    /// Website details with no fields set
    pub fn website() -> Self {
        RecordDetails::Website {
            username: None,
            website_url: None,
        }
    }

    /// Email details with no fields set
    pub fn email() -> Self {
        RecordDetails::Email { email_address: None }
    }

    /// Card details with no fields set
    pub fn card() -> Self {
        RecordDetails::Card {
            card_holder_name: None,
            card_number: None,
            expiry_date: None,
            cvv: None,
        }
    }

    /// Empty details for the given kind
    pub fn empty(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Website => Self::website(),
            RecordKind::Email => Self::email(),
            RecordKind::Card => Self::card(),
        }
    }

    /// The kind these details belong to
    pub fn kind(&self) -> RecordKind {
        match self {
            RecordDetails::Website { .. } => RecordKind::Website,
            RecordDetails::Email { .. } => RecordKind::Email,
            RecordDetails::Card { .. } => RecordKind::Card,
        }
    }

    /// Set a field by its name
    ///
    /// Returns `false` when the field does not exist for this kind. Field
    /// names accept both snake_case and the short forms used on the command
    /// line (`url`, `email`, `holder`, `number`, `expiry`).
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        let value = Some(value.into());
        let slot = match (self, name) {
            (RecordDetails::Website { username, .. }, "username" | "user") => username,
            (RecordDetails::Website { website_url, .. }, "website_url" | "website" | "url") => {
                website_url
            }
            (RecordDetails::Email { email_address }, "email_address" | "email") => email_address,
            (RecordDetails::Card { card_holder_name, .. }, "card_holder_name" | "holder") => {
                card_holder_name
            }
            (RecordDetails::Card { card_number, .. }, "card_number" | "number") => card_number,
            (RecordDetails::Card { expiry_date, .. }, "expiry_date" | "expiry") => expiry_date,
            (RecordDetails::Card { cvv, .. }, "cvv") => cvv,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Present fields as `(label, value)` pairs, in display order
    ///
    /// The CVV reads as [`CVV_MASK`] unless `reveal` is set.
    pub fn fields(&self, reveal: bool) -> Vec<(&'static str, &str)> {
        let pairs: Vec<(&'static str, &Option<String>)> = match self {
            RecordDetails::Website {
                username,
                website_url,
            } => vec![("Website", website_url), ("Username", username)],
            RecordDetails::Email { email_address } => vec![("Email", email_address)],
            RecordDetails::Card {
                card_holder_name,
                card_number,
                expiry_date,
                cvv,
            } => vec![
                ("Card Holder", card_holder_name),
                ("Card Number", card_number),
                ("Expires", expiry_date),
                (CVV_LABEL, cvv),
            ],
        };

        pairs
            .into_iter()
            .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
            .map(|(label, value)| match label {
                CVV_LABEL if !reveal => (label, CVV_MASK),
                _ => (label, value),
            })
            .collect()
    }

    /// Turn empty strings into absent fields
    ///
    /// A blank form input means "not provided".
    pub fn normalized(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        match self {
            RecordDetails::Website {
                username,
                website_url,
            } => RecordDetails::Website {
                username: keep(username),
                website_url: keep(website_url),
            },
            RecordDetails::Email { email_address } => RecordDetails::Email {
                email_address: keep(email_address),
            },
            RecordDetails::Card {
                card_holder_name,
                card_number,
                expiry_date,
                cvv,
            } => RecordDetails::Card {
                card_holder_name: keep(card_holder_name),
                card_number: keep(card_number),
                expiry_date: keep(expiry_date),
                cvv: keep(cvv),
            },
        }
    }
}
