use serde::{Deserialize, Deserializer, Serialize};

use crate::Booking;

/// Every response carries a `success` flag and, on failure, usually a
/// human-readable `message`.
pub trait Envelope {
    fn success(&self) -> bool;
    fn into_message(self) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookingGroups {
    /// A missing or null list reads as empty. Records that cannot be read
    /// are skipped so the rest of the listing still shows.
    #[serde(default, deserialize_with = "deserialize_records")]
    pub all: Vec<Booking>,
}

fn deserialize_records<'de, D>(deserializer: D) -> Result<Vec<Booking>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    let records = raw
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            match serde_json::from_value::<Booking>(value) {
                Ok(booking) => Some(booking),
                Err(e) => {
                    tracing::warn!(index, "Skipping unreadable booking: {e}");
                    None
                }
            }
        })
        .collect();
    Ok(records)
}

/// Response of the admin listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingsList {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookings: Option<BookingGroups>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl BookingsList {
    pub fn into_bookings(self) -> Vec<Booking> {
        self.bookings.map(|groups| groups.all).unwrap_or_default()
    }
}

impl Envelope for BookingsList {
    fn success(&self) -> bool {
        self.success
    }

    fn into_message(self) -> Option<String> {
        self.message
    }
}

/// Response of the create and delete actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

impl Envelope for ActionResponse {
    fn success(&self) -> bool {
        self.success
    }

    fn into_message(self) -> Option<String> {
        self.message
    }
}
