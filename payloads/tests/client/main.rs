mod bookings;

use test_helpers::spawn_app;

#[tokio::test]
async fn empty_listing() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let bookings = app.client.list_bookings().await?;
    assert!(bookings.is_empty());
    assert_eq!(app.backend.request_counts().list, 1);

    Ok(())
}
