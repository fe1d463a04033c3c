use account_auth::config::{EnvConfig, MailConfig};
use account_auth::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub const TEST_SECRET: &str = "test-secret-key";

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "test".to_string(), // Not used in tests
        secret_key: TEST_SECRET.to_string(),
        mail: MailConfig {
            api_key: "test".to_string(),
            // Unroutable unless a test swaps in a mail stub endpoint.
            endpoint: "http://127.0.0.1:9/emails".to_string(),
            from_address: "noreply@accounts.test".to_string(),
        },
    }
}

// Test data helpers
pub mod test_data {
    use account_auth::types::user::RRegister;

    #[allow(dead_code)]
    pub fn sample_registration() -> RRegister {
        registration("testuser", "test@example.com", "password123")
    }

    pub fn registration(username: &str, email: &str, password: &str) -> RRegister {
        RRegister {
            first_name: Some("Test".to_string()),
            last_name: Some("User".to_string()),
            email: Some(email.to_string()),
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }
}

/// Minimal HTTP sink standing in for the mail API: accepts POSTs, records
/// the request bodies, answers 200.
#[allow(dead_code)]
pub mod mail_stub {
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    pub async fn spawn() -> (String, Arc<Mutex<Vec<String>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let captured: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&captured);

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                let sink = Arc::clone(&sink);
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut tmp = [0u8; 4096];
                    loop {
                        let Ok(n) = stream.read(&mut tmp).await else {
                            return;
                        };
                        if n == 0 {
                            return;
                        }
                        buf.extend_from_slice(&tmp[..n]);
                        let Some(body_start) = find_body_start(&buf) else {
                            continue;
                        };
                        let content_length = parse_content_length(&buf[..body_start]);
                        if buf.len() >= body_start + content_length {
                            let body = String::from_utf8_lossy(
                                &buf[body_start..body_start + content_length],
                            )
                            .into_owned();
                            sink.lock().unwrap().push(body);
                            let _ = stream
                                .write_all(
                                    b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\n{}",
                                )
                                .await;
                            let _ = stream.shutdown().await;
                            return;
                        }
                    }
                });
            }
        });

        (format!("http://{}/emails", addr), captured)
    }

    fn find_body_start(buf: &[u8]) -> Option<usize> {
        buf.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4)
    }

    fn parse_content_length(head: &[u8]) -> usize {
        let head = String::from_utf8_lossy(head);
        head.lines()
            .find_map(|line| {
                let (key, value) = line.split_once(':')?;
                if key.trim().eq_ignore_ascii_case("content-length") {
                    value.trim().parse().ok()
                } else {
                    None
                }
            })
            .unwrap_or(0)
    }
}
