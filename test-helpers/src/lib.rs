pub mod backend;
pub mod mock;
pub mod telemetry;

use backend::{MockBackend, MockConfig};
use jiff::civil::date;
use payloads::{ClientError, RoomType, requests};
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub backend: MockBackend,
    pub client: payloads::APIClient,
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error");
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let backend = MockBackend::default();
    let mut config = MockConfig {
        ip: "127.0.0.1".into(),
        port,
    };

    let server = backend::build(&mut config, backend.clone())
        .expect("Failed to bind mock backend");
    tokio::spawn(server);

    TestApp {
        port: config.port,
        backend,
        client: payloads::APIClient::new(format!(
            "http://127.0.0.1:{}",
            config.port
        )),
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(ClientError::APIError(code, _)) => assert_eq!(code, expected),
        _ => panic!("Expected APIError"),
    };
}

/// Assert that the server answered `success: false` with the given message.
pub fn assert_rejected<T>(result: Result<T, ClientError>, expected: &str) {
    match result {
        Err(ClientError::Rejected(message)) => {
            assert_eq!(message.as_deref(), Some(expected))
        }
        Err(e) => panic!("Expected a rejection, got {e:?}"),
        Ok(_) => panic!("Expected a rejection, got success"),
    }
}

pub fn block_details_a() -> requests::BlockDate {
    requests::BlockDate {
        room_type: RoomType::Room1,
        check_in_date: date(2025, 3, 1),
        check_out_date: date(2025, 3, 4),
        reason: "Maintenance".into(),
    }
}

/// A block with its dates in the wrong order, which the client sends
/// anyway.
pub fn block_details_reversed() -> requests::BlockDate {
    requests::BlockDate {
        room_type: RoomType::Entire,
        check_in_date: date(2025, 6, 10),
        check_out_date: date(2025, 6, 8),
        reason: String::new(),
    }
}
