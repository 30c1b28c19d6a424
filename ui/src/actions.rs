//! Network actions behind the dashboard.
//!
//! Each action reports progress through `dispatch`, so the same code drives
//! the page's reducer and the tests below.

use payloads::{APIClient, Booking, BookingId, ClientError, requests};

use crate::state::{BlockForm, DashboardAction, Notice, RequestCounter};

pub const MISSING_DATES: &str = "Please select check-in and check-out dates";
pub const BLOCK_CREATED: &str = "Date blocked successfully!";
pub const BOOKING_DELETED: &str = "Booking deleted successfully!";

/// The three backend calls the dashboard makes.
#[allow(async_fn_in_trait)]
pub trait BookingsApi {
    async fn list_bookings(&self) -> Result<Vec<Booking>, ClientError>;

    async fn block_date(
        &self,
        details: &requests::BlockDate,
    ) -> Result<Option<String>, ClientError>;

    async fn delete_booking(
        &self,
        id: &BookingId,
    ) -> Result<Option<String>, ClientError>;
}

impl BookingsApi for APIClient {
    async fn list_bookings(&self) -> Result<Vec<Booking>, ClientError> {
        APIClient::list_bookings(self).await
    }

    async fn block_date(
        &self,
        details: &requests::BlockDate,
    ) -> Result<Option<String>, ClientError> {
        APIClient::block_date(self, details).await
    }

    async fn delete_booking(
        &self,
        id: &BookingId,
    ) -> Result<Option<String>, ClientError> {
        APIClient::delete_booking(self, id).await
    }
}

/// Replace the record list with a fresh listing. On failure the previous
/// list stays on screen.
pub async fn load_bookings(
    api: &impl BookingsApi,
    generations: &RequestCounter,
    dispatch: &impl Fn(DashboardAction),
) {
    let generation = generations.next();
    dispatch(DashboardAction::LoadStarted(generation));

    let bookings = match api.list_bookings().await {
        Ok(bookings) => {
            tracing::debug!(generation, count = bookings.len(), "Loaded bookings");
            Some(bookings)
        }
        Err(ClientError::Rejected(message)) => {
            tracing::warn!(?message, "Booking listing was rejected");
            dispatch(DashboardAction::Notify(Notice::error(
                "Failed to fetch bookings",
            )));
            None
        }
        Err(e) => {
            tracing::error!("Error fetching bookings: {e}");
            dispatch(DashboardAction::Notify(Notice::error(
                "Error loading bookings",
            )));
            None
        }
    };

    dispatch(DashboardAction::LoadFinished {
        generation,
        bookings,
    });
}

/// Submit the block form. The form is only reset once the server accepts
/// it, so a failed attempt can be corrected and retried.
pub async fn submit_block(
    api: &impl BookingsApi,
    generations: &RequestCounter,
    form: &BlockForm,
    dispatch: &impl Fn(DashboardAction),
) {
    let Some(request) = form.to_request() else {
        dispatch(DashboardAction::Notify(Notice::error(MISSING_DATES)));
        return;
    };

    dispatch(DashboardAction::RequestStarted);
    let outcome = api.block_date(&request).await;
    dispatch(DashboardAction::RequestFinished);

    match outcome {
        Ok(_) => {
            tracing::info!(
                room_type = request.room_type.as_str(),
                check_in = %request.check_in_date,
                check_out = %request.check_out_date,
                "Blocked dates"
            );
            dispatch(DashboardAction::Notify(Notice::success(BLOCK_CREATED)));
            dispatch(DashboardAction::ResetForm);
            load_bookings(api, generations, dispatch).await;
        }
        Err(ClientError::Rejected(message)) => {
            tracing::warn!(?message, "Block request was rejected");
            dispatch(DashboardAction::Notify(Notice::error(
                message.unwrap_or_else(|| "Failed to block date".into()),
            )));
        }
        Err(e) => {
            tracing::error!("Error blocking date: {e}");
            dispatch(DashboardAction::Notify(Notice::error(
                "Error blocking date",
            )));
        }
    }
}

/// Delete a record the operator has already confirmed. Nothing is removed
/// locally; the follow-up listing is the source of truth.
pub async fn delete_booking(
    api: &impl BookingsApi,
    generations: &RequestCounter,
    id: &BookingId,
    dispatch: &impl Fn(DashboardAction),
) {
    dispatch(DashboardAction::RequestStarted);
    let outcome = api.delete_booking(id).await;
    dispatch(DashboardAction::RequestFinished);

    match outcome {
        Ok(_) => {
            tracing::info!(%id, "Deleted booking");
            dispatch(DashboardAction::Notify(Notice::success(BOOKING_DELETED)));
            load_bookings(api, generations, dispatch).await;
        }
        Err(ClientError::Rejected(message)) => {
            tracing::warn!(%id, ?message, "Delete was rejected");
            dispatch(DashboardAction::Notify(Notice::error(
                message.unwrap_or_else(|| "Failed to delete booking".into()),
            )));
        }
        Err(e) => {
            tracing::error!("Error deleting booking {id}: {e}");
            dispatch(DashboardAction::Notify(Notice::error(
                "Error deleting booking",
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DashboardState, FormEdit, NoticeKind};
    use futures::executor::block_on;
    use jiff::civil::date;
    use payloads::RoomType;
    use reqwest::StatusCode;
    use std::cell::RefCell;

    #[derive(Clone)]
    enum Reply {
        Ok,
        Rejected(Option<&'static str>),
        Unreachable,
    }

    impl Reply {
        fn into_result<T>(self, ok: T) -> Result<T, ClientError> {
            match self {
                Reply::Ok => Ok(ok),
                Reply::Rejected(message) => {
                    Err(ClientError::Rejected(message.map(Into::into)))
                }
                Reply::Unreachable => Err(ClientError::APIError(
                    StatusCode::BAD_GATEWAY,
                    "Bad Gateway".into(),
                )),
            }
        }
    }

    /// Scripted backend that records which calls were made.
    struct FakeApi {
        calls: RefCell<Vec<String>>,
        listing: RefCell<Vec<Booking>>,
        list_reply: Reply,
        action_reply: Reply,
    }

    impl FakeApi {
        fn new(list_reply: Reply, action_reply: Reply) -> Self {
            Self {
                calls: RefCell::default(),
                listing: RefCell::default(),
                list_reply,
                action_reply,
            }
        }

        fn serving(self, ids: &[&str]) -> Self {
            *self.listing.borrow_mut() = records(ids);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl BookingsApi for FakeApi {
        async fn list_bookings(&self) -> Result<Vec<Booking>, ClientError> {
            self.calls.borrow_mut().push("list".into());
            self.list_reply.clone().into_result(self.listing.borrow().clone())
        }

        async fn block_date(
            &self,
            details: &requests::BlockDate,
        ) -> Result<Option<String>, ClientError> {
            self.calls.borrow_mut().push(format!(
                "block {} {}..{}",
                details.room_type.as_str(),
                details.check_in_date,
                details.check_out_date
            ));
            self.action_reply.clone().into_result(None)
        }

        async fn delete_booking(
            &self,
            id: &BookingId,
        ) -> Result<Option<String>, ClientError> {
            self.calls.borrow_mut().push(format!("delete {id}"));
            self.action_reply.clone().into_result(None)
        }
    }

    fn records(ids: &[&str]) -> Vec<Booking> {
        ids.iter()
            .map(|id| {
                serde_json::from_value(serde_json::json!({
                    "id": id,
                    "booking_type": "user",
                    "room_type": "room1",
                    "check_in": "2025-03-01",
                    "check_out": "2025-03-04"
                }))
                .unwrap()
            })
            .collect()
    }

    fn ids(state: &DashboardState) -> Vec<String> {
        state.bookings.iter().map(|b| b.id().to_string()).collect()
    }

    fn notice(state: &DashboardState) -> Option<(NoticeKind, String)> {
        state
            .notice
            .as_ref()
            .map(|notice| (notice.kind, notice.text.clone()))
    }

    fn filled_form() -> BlockForm {
        BlockForm {
            room_type: RoomType::Room2,
            check_in: Some(date(2025, 3, 1)),
            check_out: Some(date(2025, 3, 4)),
            reason: "Painting".into(),
        }
    }

    /// State that already shows records `a` and `b`.
    fn loaded_state() -> RefCell<DashboardState> {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::LoadStarted(1));
        state.apply(DashboardAction::LoadFinished {
            generation: 1,
            bookings: Some(records(&["a", "b"])),
        });
        RefCell::new(state)
    }

    #[test]
    fn load_replaces_records() {
        let api = FakeApi::new(Reply::Ok, Reply::Ok).serving(&["x", "y", "z"]);
        let state = loaded_state();
        let dispatch = |action: DashboardAction| state.borrow_mut().apply(action);

        block_on(load_bookings(&api, &RequestCounter::default(), &dispatch));

        let state = state.borrow();
        assert_eq!(ids(&state), ["x", "y", "z"]);
        assert!(!state.is_loading());
        assert_eq!(state.notice, None);
    }

    #[test]
    fn rejected_load_keeps_records() {
        let api = FakeApi::new(Reply::Rejected(Some("db down")), Reply::Ok);
        let state = loaded_state();
        let dispatch = |action: DashboardAction| state.borrow_mut().apply(action);

        block_on(load_bookings(&api, &RequestCounter::default(), &dispatch));

        let state = state.borrow();
        assert_eq!(ids(&state), ["a", "b"]);
        assert_eq!(
            notice(&state),
            Some((NoticeKind::Error, "Failed to fetch bookings".into()))
        );
        assert!(!state.is_loading());
    }

    #[test]
    fn unreachable_load_keeps_records() {
        let api = FakeApi::new(Reply::Unreachable, Reply::Ok);
        let state = loaded_state();
        let dispatch = |action: DashboardAction| state.borrow_mut().apply(action);

        block_on(load_bookings(&api, &RequestCounter::default(), &dispatch));

        let state = state.borrow();
        assert_eq!(ids(&state), ["a", "b"]);
        assert_eq!(
            notice(&state),
            Some((NoticeKind::Error, "Error loading bookings".into()))
        );
    }

    #[test]
    fn empty_load_leaves_no_records() {
        let api = FakeApi::new(Reply::Ok, Reply::Ok).serving(&[]);
        let state = loaded_state();
        let dispatch = |action: DashboardAction| state.borrow_mut().apply(action);

        block_on(load_bookings(&api, &RequestCounter::default(), &dispatch));

        let state = state.borrow();
        assert!(state.bookings.is_empty());
        assert_eq!(state.partitioned().total(), 0);
    }

    #[test]
    fn submit_without_dates_makes_no_call() {
        let api = FakeApi::new(Reply::Ok, Reply::Ok);
        let state = RefCell::new(DashboardState::default());
        let dispatch = |action: DashboardAction| state.borrow_mut().apply(action);

        let mut form = filled_form();
        form.check_out = None;
        block_on(submit_block(&api, &RequestCounter::default(), &form, &dispatch));

        assert!(api.calls().is_empty());
        assert_eq!(
            notice(&state.borrow()),
            Some((NoticeKind::Error, MISSING_DATES.into()))
        );
    }

    #[test]
    fn successful_submit_resets_form_and_reloads() {
        let api = FakeApi::new(Reply::Ok, Reply::Ok).serving(&["a", "b", "c"]);
        let state = loaded_state();
        let dispatch = |action: DashboardAction| state.borrow_mut().apply(action);
        for edit in [
            FormEdit::RoomType(RoomType::Room2),
            FormEdit::CheckIn(Some(date(2025, 3, 1))),
            FormEdit::CheckOut(Some(date(2025, 3, 4))),
            FormEdit::Reason("Painting".into()),
        ] {
            dispatch(DashboardAction::EditForm(edit));
        }

        let form = state.borrow().form.clone();
        block_on(submit_block(&api, &RequestCounter::default(), &form, &dispatch));

        assert_eq!(api.calls(), ["block room2 2025-03-01..2025-03-04", "list"]);
        let state = state.borrow();
        assert_eq!(
            notice(&state),
            Some((NoticeKind::Success, BLOCK_CREATED.into()))
        );
        assert_eq!(state.form, BlockForm::default());
        assert_eq!(ids(&state), ["a", "b", "c"]);
        assert!(!state.is_loading());
    }

    #[test]
    fn reversed_dates_are_still_submitted() {
        let api = FakeApi::new(Reply::Ok, Reply::Ok);
        let state = RefCell::new(DashboardState::default());
        let dispatch = |action: DashboardAction| state.borrow_mut().apply(action);

        let mut form = filled_form();
        form.check_in = Some(date(2025, 3, 9));
        block_on(submit_block(&api, &RequestCounter::default(), &form, &dispatch));

        assert_eq!(api.calls()[0], "block room2 2025-03-09..2025-03-04");
    }

    #[test]
    fn rejected_submit_keeps_form_and_shows_server_message() {
        let api = FakeApi::new(Reply::Ok, Reply::Rejected(Some("Dates overlap")));
        let state = RefCell::new(DashboardState::default());
        let dispatch = |action: DashboardAction| state.borrow_mut().apply(action);
        let form = filled_form();
        dispatch(DashboardAction::EditForm(FormEdit::Reason("Painting".into())));

        block_on(submit_block(&api, &RequestCounter::default(), &form, &dispatch));

        assert_eq!(api.calls().len(), 1, "no reload after a rejection");
        let state = state.borrow();
        assert_eq!(
            notice(&state),
            Some((NoticeKind::Error, "Dates overlap".into()))
        );
        assert_eq!(state.form.reason, "Painting");
        assert!(!state.is_loading());
    }

    #[test]
    fn submit_failures_fall_back_to_generic_messages() {
        for (reply, expected) in [
            (Reply::Rejected(None), "Failed to block date"),
            (Reply::Unreachable, "Error blocking date"),
        ] {
            let api = FakeApi::new(Reply::Ok, reply);
            let state = RefCell::new(DashboardState::default());
            let dispatch = |action: DashboardAction| state.borrow_mut().apply(action);

            block_on(submit_block(
                &api,
                &RequestCounter::default(),
                &filled_form(),
                &dispatch,
            ));

            assert_eq!(
                notice(&state.borrow()),
                Some((NoticeKind::Error, expected.into()))
            );
        }
    }

    #[test]
    fn successful_delete_reloads() {
        let api = FakeApi::new(Reply::Ok, Reply::Ok).serving(&["a"]);
        let state = loaded_state();
        let dispatch = |action: DashboardAction| state.borrow_mut().apply(action);

        block_on(delete_booking(
            &api,
            &RequestCounter::default(),
            &BookingId::from("b"),
            &dispatch,
        ));

        assert_eq!(api.calls(), ["delete b", "list"]);
        let state = state.borrow();
        assert_eq!(ids(&state), ["a"]);
        assert_eq!(
            notice(&state),
            Some((NoticeKind::Success, BOOKING_DELETED.into()))
        );
    }

    #[test]
    fn failed_delete_keeps_the_record() {
        for (reply, expected) in [
            (Reply::Rejected(Some("Booking not found")), "Booking not found"),
            (Reply::Rejected(None), "Failed to delete booking"),
            (Reply::Unreachable, "Error deleting booking"),
        ] {
            let api = FakeApi::new(Reply::Ok, reply).serving(&["a"]);
            let state = loaded_state();
            let dispatch = |action: DashboardAction| state.borrow_mut().apply(action);

            block_on(delete_booking(
                &api,
                &RequestCounter::default(),
                &BookingId::from("b"),
                &dispatch,
            ));

            assert_eq!(api.calls(), ["delete b"]);
            let state = state.borrow();
            assert_eq!(ids(&state), ["a", "b"]);
            assert_eq!(notice(&state), Some((NoticeKind::Error, expected.into())));
        }
    }

    #[test]
    fn reload_after_action_uses_a_newer_generation() {
        let api = FakeApi::new(Reply::Ok, Reply::Ok).serving(&["fresh"]);
        let generations = RequestCounter::default();
        let state = RefCell::new(DashboardState::default());
        let dispatch = |action: DashboardAction| state.borrow_mut().apply(action);

        // An initial listing is still in flight when the delete settles.
        let initial = generations.next();
        dispatch(DashboardAction::LoadStarted(initial));
        block_on(delete_booking(
            &api,
            &generations,
            &BookingId::from("gone"),
            &dispatch,
        ));
        dispatch(DashboardAction::LoadFinished {
            generation: initial,
            bookings: Some(records(&["gone", "fresh"])),
        });

        let state = state.borrow();
        assert_eq!(ids(&state), ["fresh"]);
        assert!(!state.is_loading());
    }
}
