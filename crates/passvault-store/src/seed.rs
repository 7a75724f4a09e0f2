//! Demo records a fresh session starts with

use passvault_domain::{CredentialRecord, RecordDetails, RecordId};

/// 2024-01-10T00:00:00Z in milliseconds
const JAN_10_2024: u64 = 1_704_844_800_000;
/// 2024-01-15T00:00:00Z in milliseconds
const JAN_15_2024: u64 = 1_705_276_800_000;
/// 2024-01-20T00:00:00Z in milliseconds
const JAN_20_2024: u64 = 1_705_708_800_000;

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// The three sample credentials shown on the demo dashboard
///
/// Each call produces fresh ids.
pub fn demo_records() -> Vec<CredentialRecord> {
    vec![
        CredentialRecord {
            id: RecordId::new(),
            title: "GitHub".to_string(),
            secret: "gh_secure123".to_string(),
            details: RecordDetails::Website {
                username: some("john_doe"),
                website_url: some("https://github.com"),
            },
            created_at: JAN_15_2024,
        },
        CredentialRecord {
            id: RecordId::new(),
            title: "Visa Credit Card".to_string(),
            secret: "1234".to_string(),
            details: RecordDetails::Card {
                card_holder_name: some("John Doe"),
                card_number: some("**** **** **** 1234"),
                expiry_date: some("12/26"),
                cvv: some("123"),
            },
            created_at: JAN_10_2024,
        },
        CredentialRecord {
            id: RecordId::new(),
            title: "Personal Gmail".to_string(),
            secret: "email_pass456".to_string(),
            details: RecordDetails::Email {
                email_address: some("john.doe@gmail.com"),
            },
            created_at: JAN_20_2024,
        },
    ]
}
