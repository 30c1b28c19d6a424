//! Mock data for the booking backend stand-in.
//!
//! Used by the development server and the client integration tests. The
//! dataset mixes upcoming and past guest bookings with a couple of admin
//! blocks so every part of the dashboard has something to show.

use crate::backend::MockBackend;
use jiff::{Span, civil::Date};
use payloads::{ADMIN_BOOKING_TYPE, BookingId, BookingRecord, RoomType};
use rust_decimal::Decimal;

/// Realistic records relative to a given day.
pub struct DevDataset {
    pub guest_bookings: Vec<BookingId>,
    pub admin_blocks: Vec<BookingId>,
}

impl DevDataset {
    pub fn create(backend: &MockBackend, today: Date) -> anyhow::Result<Self> {
        let day = |offset: i64| today.checked_add(Span::new().days(offset));

        let guest_bookings = vec![
            backend.insert(guest_booking(
                "Adaeze Okafor",
                RoomType::Entire,
                day(3)?,
                day(6)?,
                "paid",
                Decimal::from(135_000),
            )),
            backend.insert(guest_booking(
                "Tunde Bello",
                RoomType::Room1,
                day(10)?,
                day(12)?,
                "pending",
                Decimal::from(50_000),
            )),
            backend.insert(guest_booking(
                "Grace Eze",
                RoomType::Room2,
                day(-4)?,
                day(-1)?,
                "paid",
                Decimal::new(7_250_050, 2),
            )),
        ];
        tracing::info!("🛏️ Created {} guest bookings", guest_bookings.len());

        let admin_blocks = vec![
            backend.insert(admin_block(
                RoomType::Room1,
                day(14)?,
                day(16)?,
                Some("Deep cleaning"),
            )),
            backend.insert(admin_block(RoomType::Entire, day(30)?, day(31)?, None)),
        ];
        tracing::info!("🚧 Created {} admin blocks", admin_blocks.len());

        Ok(Self {
            guest_bookings,
            admin_blocks,
        })
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Dataset summary:");
        tracing::info!("   guest bookings: {:?}", self.guest_bookings);
        tracing::info!("   admin blocks:   {:?}", self.admin_blocks);
    }
}

/// A guest booking with an id to be assigned on insert.
pub fn guest_booking(
    name: &str,
    room_type: RoomType,
    check_in: Date,
    check_out: Date,
    payment_status: &str,
    price: Decimal,
) -> BookingRecord {
    let email = format!(
        "{}@example.com",
        name.to_lowercase().replace(' ', ".")
    );
    BookingRecord {
        id: BookingId(String::new()),
        booking_type: Some("user".into()),
        room_type,
        check_in,
        check_out,
        name: Some(name.into()),
        email: Some(email),
        phone: Some("+234 800 000 0000".into()),
        guests: Some(2),
        price: Some(price),
        id_type: Some("passport".into()),
        payment_status: Some(payment_status.into()),
        notes: None,
    }
}

/// An admin block with an id to be assigned on insert.
pub fn admin_block(
    room_type: RoomType,
    check_in: Date,
    check_out: Date,
    notes: Option<&str>,
) -> BookingRecord {
    BookingRecord {
        id: BookingId(String::new()),
        booking_type: Some(ADMIN_BOOKING_TYPE.into()),
        room_type,
        check_in,
        check_out,
        name: None,
        email: None,
        phone: None,
        guests: None,
        price: None,
        id_type: None,
        payment_status: None,
        notes: notes.map(Into::into),
    }
}
