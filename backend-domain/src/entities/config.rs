#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub default_warhit_limit: usize,
    pub max_warhit_limit: usize,
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub clickhouse_url: String,
    pub clickhouse_database: String,
    pub clickhouse_user: Option<String>,
    pub clickhouse_password: Option<String>,
}
