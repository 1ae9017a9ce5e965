use std::path::PathBuf;

/// Phone numbers with pre-recorded fixture data. Each number corresponds to
/// a distinct test scenario in the fixture corpus.
const DEFAULT_ALLOWED_NUMBERS: &[&str] = &[
    "1111111111",
    "2222222222",
    "3333333333",
    "4444444444",
    "5555555555",
    "6666666666",
    "7777777777",
    "8888888888",
    "9999999999",
    "1010101010",
    "1212121212",
    "1313131313",
    "1414141414",
    "2020202020",
    "2121212121",
    "2525252525",
];

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_DIR: &str = "test_data_dir";

/// Process-wide configuration, read once at startup and immutable afterwards.
///
/// The allow-list is the set of phone numbers permitted to use the mock
/// service. Tool requests for any identity outside this set are rejected
/// before the fixture store is touched.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub data_dir: PathBuf,
    allowed_numbers: Vec<String>,
}

impl AppConfig {
    pub fn new(port: u16, allowed_numbers: Vec<String>, data_dir: impl Into<PathBuf>) -> Self {
        AppConfig {
            port,
            data_dir: data_dir.into(),
            allowed_numbers,
        }
    }

    /// Read configuration from the environment:
    ///
    /// - `PORT` — listening port (default 8080)
    /// - `FINMOCK_ALLOWED_NUMBERS` — comma-separated allow-list override
    /// - `FINMOCK_DATA_DIR` — fixture corpus root (default `test_data_dir`)
    ///
    /// Unset or unparsable values fall back to defaults rather than failing
    /// startup.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let allowed_numbers = match std::env::var("FINMOCK_ALLOWED_NUMBERS") {
            Ok(raw) => parse_allowed_numbers(&raw),
            Err(_) => DEFAULT_ALLOWED_NUMBERS
                .iter()
                .map(|n| n.to_string())
                .collect(),
        };

        let data_dir = std::env::var("FINMOCK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        AppConfig::new(port, allowed_numbers, data_dir)
    }

    pub fn is_allowed(&self, phone_number: &str) -> bool {
        self.allowed_numbers.iter().any(|n| n == phone_number)
    }

    /// The allow-list in its configured order, used to render login choices.
    pub fn allowed_numbers(&self) -> &[String] {
        &self.allowed_numbers
    }
}

fn parse_allowed_numbers(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            Some(trimmed.to_string())
        })
        .collect()
}
