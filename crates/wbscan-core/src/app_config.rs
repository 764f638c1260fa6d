use std::net::SocketAddr;

/// Runtime configuration shared by the relay and the CLI.
///
/// All values come from environment variables with working defaults, so a
/// bare `wbscan` invocation against a locally running relay needs no setup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the relay the pipeline routes upstream requests through.
    pub relay_url: String,
    /// Address the relay binds to.
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Per-request timeout for both the pipeline client and the relay's
    /// outbound fetch.
    pub request_timeout_secs: u64,
    /// User-agent the pipeline presents to the relay.
    pub user_agent: String,
    /// Fixed pause between sequential page fetches. Self-imposed throttle;
    /// the upstream blocks clients that hammer the catalog endpoints.
    pub inter_page_delay_ms: u64,
    /// Hard cap on pages fetched per retrieval.
    pub max_pages: u32,
}
