use jiff::civil::date;
use payloads::{Booking, BookingId, RoomType, partition};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use test_helpers::{
    assert_rejected, assert_status_code, block_details_a,
    block_details_reversed, mock, spawn_app,
};

#[tokio::test]
async fn block_then_list_then_delete() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.client.block_date(&block_details_a()).await?;

    let bookings = app.client.list_bookings().await?;
    assert_eq!(bookings.len(), 1);
    let Booking::AdminBlock(block) = &bookings[0] else {
        panic!("expected an admin block, got {:?}", bookings[0]);
    };
    assert_eq!(block.stay.room_type, RoomType::Room1);
    assert_eq!(block.stay.check_in, date(2025, 3, 1));
    assert_eq!(block.stay.nights(), 3);
    assert_eq!(block.notes.as_deref(), Some("Maintenance"));

    app.client.delete_booking(&block.id).await?;
    assert!(app.client.list_bookings().await?.is_empty());

    let counts = app.backend.request_counts();
    assert_eq!((counts.block, counts.list, counts.delete), (1, 2, 1));

    Ok(())
}

#[tokio::test]
async fn reversed_block_is_sent_as_is() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.client.block_date(&block_details_reversed()).await?;

    let bookings = app.client.list_bookings().await?;
    let Booking::AdminBlock(block) = &bookings[0] else {
        panic!("expected an admin block");
    };
    assert_eq!(block.stay.nights(), -2);
    // an empty reason does not become a note
    assert_eq!(block.notes, None);

    Ok(())
}

#[tokio::test]
async fn listing_is_partitioned_in_server_order() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let booking_a = app.backend.insert(mock::guest_booking(
        "Ada Obi",
        RoomType::Entire,
        date(2025, 4, 1),
        date(2025, 4, 3),
        "paid",
        Decimal::from(90_000),
    ));
    app.client.block_date(&block_details_a()).await?;
    let booking_b = app.backend.insert(mock::guest_booking(
        "Femi Ade",
        RoomType::Room2,
        date(2025, 4, 5),
        date(2025, 4, 6),
        "pending",
        Decimal::from(25_000),
    ));

    let bookings = app.client.list_bookings().await?;
    let partitioned = partition(&bookings);

    assert_eq!(partitioned.admin_blocks.len(), 1);
    let user_ids: Vec<&BookingId> = partitioned
        .user_bookings
        .iter()
        .map(|booking| &booking.id)
        .collect();
    assert_eq!(user_ids, [&booking_a, &booking_b]);
    assert!(partitioned.user_bookings[0].is_paid());
    assert!(!partitioned.user_bookings[1].is_paid());

    Ok(())
}

#[tokio::test]
async fn delete_unknown_booking_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.delete_booking(&BookingId::from("404")).await;
    assert_rejected(result, "Booking not found");

    Ok(())
}

#[tokio::test]
async fn rejected_block_carries_server_message() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend
        .reject_blocks_with(Some("Dates overlap an existing booking".into()));

    let result = app.client.block_date(&block_details_a()).await;
    assert_rejected(result, "Dates overlap an existing booking");
    assert!(app.backend.records().is_empty());

    Ok(())
}

#[tokio::test]
async fn unavailable_listing_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.set_listing_available(false);

    let result = app.client.list_bookings().await;
    assert_rejected(result, "Bookings are temporarily unavailable");

    Ok(())
}

#[tokio::test]
async fn unknown_path_is_an_api_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let client = payloads::APIClient::new(format!(
        "http://127.0.0.1:{}/missing",
        app.port
    ));

    assert_status_code(client.list_bookings().await, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn dev_dataset_lists_every_record() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let dataset = mock::DevDataset::create(&app.backend, date(2025, 3, 1))?;

    let bookings = app.client.list_bookings().await?;
    let partitioned = partition(&bookings);
    assert_eq!(
        partitioned.user_bookings.len(),
        dataset.guest_bookings.len()
    );
    assert_eq!(partitioned.admin_blocks.len(), dataset.admin_blocks.len());

    Ok(())
}
