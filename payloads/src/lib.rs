pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

use jiff::civil::{Date, DateTime};
use jiff::{Timestamp, tz::TimeZone};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Tag the backend uses for operator-created blocks.
pub const ADMIN_BOOKING_TYPE: &str = "admin";

/// Opaque record identifier.
///
/// The backend may hand these out as strings or integers; both are kept as
/// their string form since the client only ever echoes them back in a path.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(from = "TextOrNumber", into = "String")]
pub struct BookingId(pub String);

/// A scalar the backend may send either quoted or as a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl TextOrNumber {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

impl From<TextOrNumber> for BookingId {
    fn from(raw: TextOrNumber) -> Self {
        BookingId(raw.into_text())
    }
}

impl From<BookingId> for String {
    fn from(id: BookingId) -> Self {
        id.0
    }
}

impl From<&str> for BookingId {
    fn from(id: &str) -> Self {
        BookingId(id.to_string())
    }
}

/// Which part of the property a record covers.
///
/// The form only offers the three known variants, but records coming back
/// from the server may carry anything, which is preserved in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomType {
    #[default]
    Entire,
    Room1,
    Room2,
    Other(String),
}

impl RoomType {
    /// Room types selectable when creating a block, in display order.
    pub const SELECTABLE: [RoomType; 3] =
        [RoomType::Entire, RoomType::Room1, RoomType::Room2];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Entire => "entire",
            Self::Room1 => "room1",
            Self::Room2 => "room2",
            Self::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Entire => "Entire Apartment",
            Self::Room1 => "Room 1",
            Self::Room2 => "Room 2",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for RoomType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "entire" => Self::Entire,
            "room1" => Self::Room1,
            "room2" => Self::Room2,
            _ => Self::Other(raw),
        }
    }
}

impl From<RoomType> for String {
    fn from(room_type: RoomType) -> Self {
        room_type.as_str().to_string()
    }
}

/// The date range and room shared by both kinds of record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stay {
    pub room_type: RoomType,
    pub check_in: Date,
    pub check_out: Date,
}

impl Stay {
    /// Whole days from check-in to check-out.
    ///
    /// Ordering is never validated, so a check-out before check-in yields a
    /// negative count rather than being clamped.
    pub fn nights(&self) -> i32 {
        (self.check_out - self.check_in).get_days()
    }
}

/// An operator-created range marking a room unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminBlock {
    pub id: BookingId,
    pub stay: Stay,
    /// Free-text reason entered when the block was created.
    pub notes: Option<String>,
}

/// A guest reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBooking {
    pub id: BookingId,
    pub stay: Stay,
    /// The raw tag, kept so the record serializes back unchanged.
    pub booking_type: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub guests: Option<u32>,
    pub price: Option<Decimal>,
    pub id_type: Option<String>,
    pub payment_status: Option<String>,
}

impl UserBooking {
    pub fn is_paid(&self) -> bool {
        self.payment_status.as_deref() == Some("paid")
    }
}

/// A record from the admin listing, split on its `booking_type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BookingRecord", into = "BookingRecord")]
pub enum Booking {
    AdminBlock(AdminBlock),
    UserBooking(UserBooking),
}

impl Booking {
    pub fn id(&self) -> &BookingId {
        match self {
            Self::AdminBlock(block) => &block.id,
            Self::UserBooking(booking) => &booking.id,
        }
    }

    pub fn stay(&self) -> &Stay {
        match self {
            Self::AdminBlock(block) => &block.stay,
            Self::UserBooking(booking) => &booking.stay,
        }
    }

    pub fn is_admin_block(&self) -> bool {
        matches!(self, Self::AdminBlock(_))
    }
}

/// Flat wire shape of a record as the backend sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: BookingId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_type: Option<String>,
    pub room_type: RoomType,
    #[serde(deserialize_with = "deserialize_stay_date")]
    pub check_in: Date,
    #[serde(deserialize_with = "deserialize_stay_date")]
    pub check_out: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_loose_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    /// Display-only; a value that is not a whole number reads as absent.
    #[serde(
        default,
        deserialize_with = "deserialize_guests",
        skip_serializing_if = "Option::is_none"
    )]
    pub guests: Option<u32>,
    /// Display-only; a value that is not a number reads as absent.
    #[serde(
        default,
        deserialize_with = "deserialize_price",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<BookingRecord> for Booking {
    fn from(record: BookingRecord) -> Self {
        let stay = Stay {
            room_type: record.room_type,
            check_in: record.check_in,
            check_out: record.check_out,
        };
        if record.booking_type.as_deref() == Some(ADMIN_BOOKING_TYPE) {
            Booking::AdminBlock(AdminBlock {
                id: record.id,
                stay,
                notes: record.notes,
            })
        } else {
            Booking::UserBooking(UserBooking {
                id: record.id,
                stay,
                booking_type: record.booking_type,
                name: record.name,
                email: record.email,
                phone: record.phone,
                guests: record.guests,
                price: record.price,
                id_type: record.id_type,
                payment_status: record.payment_status,
            })
        }
    }
}

impl From<Booking> for BookingRecord {
    fn from(booking: Booking) -> Self {
        match booking {
            Booking::AdminBlock(block) => BookingRecord {
                id: block.id,
                booking_type: Some(ADMIN_BOOKING_TYPE.to_string()),
                room_type: block.stay.room_type,
                check_in: block.stay.check_in,
                check_out: block.stay.check_out,
                name: None,
                email: None,
                phone: None,
                guests: None,
                price: None,
                id_type: None,
                payment_status: None,
                notes: block.notes,
            },
            Booking::UserBooking(booking) => BookingRecord {
                id: booking.id,
                booking_type: booking.booking_type,
                room_type: booking.stay.room_type,
                check_in: booking.stay.check_in,
                check_out: booking.stay.check_out,
                name: booking.name,
                email: booking.email,
                phone: booking.phone,
                guests: booking.guests,
                price: booking.price,
                id_type: booking.id_type,
                payment_status: booking.payment_status,
                notes: None,
            },
        }
    }
}

/// Records split into admin blocks and user bookings, each in the order the
/// server returned them.
#[derive(Debug, Default, PartialEq)]
pub struct Partitioned<'a> {
    pub admin_blocks: Vec<&'a AdminBlock>,
    pub user_bookings: Vec<&'a UserBooking>,
}

impl Partitioned<'_> {
    pub fn total(&self) -> usize {
        self.admin_blocks.len() + self.user_bookings.len()
    }
}

pub fn partition(bookings: &[Booking]) -> Partitioned<'_> {
    let mut partitioned = Partitioned::default();
    for booking in bookings {
        match booking {
            Booking::AdminBlock(block) => partitioned.admin_blocks.push(block),
            Booking::UserBooking(booking) => {
                partitioned.user_bookings.push(booking)
            }
        }
    }
    partitioned
}

/// Parse a stay date sent either as a plain ISO date or as a full
/// timestamp, keeping only the calendar date.
pub fn parse_stay_date(raw: &str) -> Result<Date, jiff::Error> {
    if let Ok(date) = raw.parse::<Date>() {
        return Ok(date);
    }
    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return Ok(timestamp.to_zoned(TimeZone::UTC).date());
    }
    raw.parse::<DateTime>().map(|datetime| datetime.date())
}

fn deserialize_loose_text<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(raw.map(TextOrNumber::into_text))
}

fn deserialize_guests<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = deserialize_loose_text(deserializer)?;
    Ok(raw.and_then(|text| text.trim().parse().ok()))
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = deserialize_loose_text(deserializer)?;
    Ok(raw.and_then(|text| {
        let text = text.trim();
        text.parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(text))
            .ok()
    }))
}

fn deserialize_stay_date<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_stay_date(&raw).map_err(serde::de::Error::custom)
}
