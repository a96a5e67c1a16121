use std::env;

pub struct Config {
    pub indexer_api_url: String,
    pub baker_address: String,
    pub cycle: i64,
    pub cycles_back: i64,
    pub parallel_limit: usize,
    pub request_timeout_secs: u64,
    pub cache_ttl_secs: u64,
    pub cache_capacity: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            indexer_api_url: env::var("TZKT_API_URL")
                .unwrap_or_else(|_| "https://api.tzkt.io".to_string()),
            baker_address: env::var("BAKER_ADDRESS").expect("BAKER_ADDRESS must be set"),
            cycle: env::var("CYCLE")
                .expect("CYCLE must be set")
                .parse()
                .expect("CYCLE must be a number"),
            cycles_back: env::var("CYCLES_BACK")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .unwrap(),
            parallel_limit: env::var("PARALLEL_LIMIT")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .unwrap(),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap(),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .unwrap(),
            cache_capacity: env::var("CACHE_CAPACITY")
                .unwrap_or_else(|_| "1024".to_string())
                .parse()
                .unwrap(),
        }
    }
}
