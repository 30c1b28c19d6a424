//! In-memory stand-in for the booking backend's admin endpoints.
//!
//! Records live in a mutex-guarded vector. There is no overlap detection and
//! no persistence; the point is to give the client something real to talk
//! to over HTTP.

use actix_cors::Cors;
use actix_web::dev::{HttpServiceFactory, Server};
use actix_web::{App, HttpResponse, HttpServer, delete, get, post, web};
use payloads::{
    ADMIN_BOOKING_TYPE, Booking, BookingId, BookingRecord, requests,
    responses,
};
use std::net::TcpListener;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// How many times each endpoint has been hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestCounts {
    pub list: usize,
    pub block: usize,
    pub delete: usize,
}

#[derive(Default)]
struct MockState {
    records: Vec<BookingRecord>,
    last_id: u64,
    listing_unavailable: bool,
    block_rejection: Option<String>,
    requests: RequestCounts,
}

impl MockState {
    fn allocate_id(&mut self) -> BookingId {
        self.last_id += 1;
        BookingId(self.last_id.to_string())
    }
}

/// Shared handle to the mock's state. Cloning shares the same records.
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a record as-is. If its id is empty, a fresh one is assigned.
    pub fn insert(&self, mut record: BookingRecord) -> BookingId {
        let mut state = self.lock();
        if record.id.0.is_empty() {
            record.id = state.allocate_id();
        }
        let id = record.id.clone();
        state.records.push(record);
        id
    }

    pub fn records(&self) -> Vec<BookingRecord> {
        self.lock().records.clone()
    }

    pub fn request_counts(&self) -> RequestCounts {
        self.lock().requests
    }

    /// Make the listing answer `success: false` until re-enabled.
    pub fn set_listing_available(&self, available: bool) {
        self.lock().listing_unavailable = !available;
    }

    /// Reject every block request with a 409 carrying `message`.
    pub fn reject_blocks_with(&self, message: Option<String>) {
        self.lock().block_rejection = message;
    }
}

pub struct MockConfig {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
}

impl MockConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let ip = var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".into());
        let port = match var("PORT") {
            Ok(port) => port.parse()?,
            Err(_) => 8000,
        };
        Ok(MockConfig { ip, port })
    }
}

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(
    config: &mut MockConfig,
    backend: MockBackend,
) -> std::io::Result<Server> {
    let backend = web::Data::new(backend);

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .service(admin_services())
            .app_data(backend.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

fn admin_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(list_bookings)
        .service(block_date)
        .service(delete_booking)
}

#[tracing::instrument(skip(backend))]
#[get("/admin/bookings")]
async fn list_bookings(backend: web::Data<MockBackend>) -> HttpResponse {
    let mut state = backend.lock();
    state.requests.list += 1;

    if state.listing_unavailable {
        return HttpResponse::Ok().json(responses::BookingsList {
            success: false,
            bookings: None,
            message: Some("Bookings are temporarily unavailable".into()),
        });
    }

    let all: Vec<Booking> =
        state.records.iter().cloned().map(Booking::from).collect();
    tracing::debug!(count = all.len(), "Listing bookings");
    HttpResponse::Ok().json(responses::BookingsList {
        success: true,
        bookings: Some(responses::BookingGroups { all }),
        message: None,
    })
}

#[tracing::instrument(skip(backend), ret)]
#[post("/admin/block-date")]
async fn block_date(
    details: web::Json<requests::BlockDate>,
    backend: web::Data<MockBackend>,
) -> HttpResponse {
    let details = details.into_inner();
    let mut state = backend.lock();
    state.requests.block += 1;

    if let Some(message) = &state.block_rejection {
        return HttpResponse::Conflict()
            .json(responses::ActionResponse::failed(message.clone()));
    }

    let id = state.allocate_id();
    let notes = Some(details.reason).filter(|reason| !reason.trim().is_empty());
    state.records.push(BookingRecord {
        id,
        booking_type: Some(ADMIN_BOOKING_TYPE.to_string()),
        room_type: details.room_type,
        check_in: details.check_in_date,
        check_out: details.check_out_date,
        name: None,
        email: None,
        phone: None,
        guests: None,
        price: None,
        id_type: None,
        payment_status: None,
        notes,
    });
    HttpResponse::Ok()
        .json(responses::ActionResponse::ok("Dates blocked successfully"))
}

#[tracing::instrument(skip(backend), ret)]
#[delete("/admin/bookings/{id}")]
async fn delete_booking(
    id: web::Path<String>,
    backend: web::Data<MockBackend>,
) -> HttpResponse {
    let id = BookingId(id.into_inner());
    let mut state = backend.lock();
    state.requests.delete += 1;

    match state.records.iter().position(|record| record.id == id) {
        Some(index) => {
            state.records.remove(index);
            HttpResponse::Ok()
                .json(responses::ActionResponse::ok("Booking deleted"))
        }
        None => HttpResponse::NotFound()
            .json(responses::ActionResponse::failed("Booking not found")),
    }
}
