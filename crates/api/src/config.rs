/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Largest accepted request body, receipt included (default: 10 MiB).
    pub max_upload_bytes: usize,
    /// Base URL uploaded receipts are published under.
    pub public_base_url: String,
    /// Start with the four fixture bills (default: `true`).
    pub seed_fixtures: bool,
    /// Email of the employee seeded as the current user.
    pub employee_email: String,
    /// Password stored alongside the seeded employee.
    pub employee_password: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                 |
    /// | `PUBLIC_BASE_URL`      | `http://localhost:3000`    |
    /// | `SEED_FIXTURES`        | `true`                     |
    /// | `EMPLOYEE_EMAIL`       | `employee@tld.com`         |
    /// | `EMPLOYEE_PASSWORD`    | `employee`                 |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{port}"));

        let seed_fixtures: bool = std::env::var("SEED_FIXTURES")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("SEED_FIXTURES must be true or false");

        let employee_email =
            std::env::var("EMPLOYEE_EMAIL").unwrap_or_else(|_| "employee@tld.com".into());
        let employee_password =
            std::env::var("EMPLOYEE_PASSWORD").unwrap_or_else(|_| "employee".into());

        Self {
            host,
            port,
            request_timeout_secs,
            max_upload_bytes,
            public_base_url,
            seed_fixtures,
            employee_email,
            employee_password,
        }
    }
}
