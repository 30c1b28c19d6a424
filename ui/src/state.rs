use jiff::civil::Date;
use payloads::{Booking, BookingId, Partitioned, RoomType, partition, requests};
use std::cell::Cell;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

/// How long a notice stays on screen.
pub const NOTICE_DURATION_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    BlockDates,
    AllBookings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient banner shown after an action settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, text)
    }
}

/// Fields of the block-creation form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockForm {
    pub room_type: RoomType,
    pub check_in: Option<Date>,
    pub check_out: Option<Date>,
    pub reason: String,
}

impl BlockForm {
    /// Build the request, or `None` if either date is missing. The order of
    /// the two dates is deliberately left unchecked.
    pub fn to_request(&self) -> Option<requests::BlockDate> {
        Some(requests::BlockDate {
            room_type: self.room_type.clone(),
            check_in_date: self.check_in?,
            check_out_date: self.check_out?,
            reason: self.reason.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    RoomType(RoomType),
    CheckIn(Option<Date>),
    CheckOut(Option<Date>),
    Reason(String),
}

pub enum DashboardAction {
    SelectTab(ActiveTab),
    EditForm(FormEdit),
    ResetForm,
    /// A listing request with this generation was sent.
    LoadStarted(u64),
    /// A listing request settled. `bookings` is `None` on failure.
    LoadFinished {
        generation: u64,
        bookings: Option<Vec<Booking>>,
    },
    /// A create or delete request was sent.
    RequestStarted,
    RequestFinished,
    Notify(Notice),
    DismissNotice(Uuid),
    /// Ask for confirmation before deleting a record.
    RequestDelete(BookingId),
    CloseDeleteDialog,
}

/// Everything the dashboard page renders from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    /// Records from the most recent successful listing, in server order.
    pub bookings: Vec<Booking>,
    pub form: BlockForm,
    pub active_tab: ActiveTab,
    pub notice: Option<Notice>,
    /// Record awaiting delete confirmation.
    pub pending_delete: Option<BookingId>,
    in_flight: usize,
    latest_load: u64,
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn partitioned(&self) -> Partitioned<'_> {
        partition(&self.bookings)
    }

    pub fn pending_delete_booking(&self) -> Option<&Booking> {
        let id = self.pending_delete.as_ref()?;
        self.bookings.iter().find(|booking| booking.id() == id)
    }

    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::SelectTab(tab) => self.active_tab = tab,
            DashboardAction::EditForm(edit) => match edit {
                FormEdit::RoomType(room_type) => self.form.room_type = room_type,
                FormEdit::CheckIn(date) => self.form.check_in = date,
                FormEdit::CheckOut(date) => self.form.check_out = date,
                FormEdit::Reason(reason) => self.form.reason = reason,
            },
            DashboardAction::ResetForm => self.form = BlockForm::default(),
            DashboardAction::LoadStarted(generation) => {
                self.in_flight += 1;
                self.latest_load = self.latest_load.max(generation);
            }
            DashboardAction::LoadFinished {
                generation,
                bookings,
            } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                // Older listings must not overwrite a newer one.
                if generation < self.latest_load {
                    tracing::debug!(generation, "Discarding stale listing");
                    return;
                }
                if let Some(bookings) = bookings {
                    self.bookings = bookings;
                }
            }
            DashboardAction::RequestStarted => self.in_flight += 1,
            DashboardAction::RequestFinished => {
                self.in_flight = self.in_flight.saturating_sub(1)
            }
            DashboardAction::Notify(notice) => self.notice = Some(notice),
            DashboardAction::DismissNotice(id) => {
                if self.notice.as_ref().is_some_and(|notice| notice.id == id) {
                    self.notice = None;
                }
            }
            DashboardAction::RequestDelete(id) => self.pending_delete = Some(id),
            DashboardAction::CloseDeleteDialog => self.pending_delete = None,
        }
    }
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = Rc::unwrap_or_clone(self);
        state.apply(action);
        Rc::new(state)
    }
}

/// Hands out increasing generation numbers for listing requests.
#[derive(Debug, Clone, Default)]
pub struct RequestCounter(Rc<Cell<u64>>);

impl RequestCounter {
    pub fn next(&self) -> u64 {
        let generation = self.0.get() + 1;
        self.0.set(generation);
        generation
    }
}
