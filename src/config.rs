//! Configuration for TriCache
//!
//! Centralized configuration with sensible defaults.

/// Default address shared by the stream (TCP) and datagram (UDP) listeners
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:1111";

/// Default address of the HTTP listener
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:1112";

/// Default size of the per-message read buffer
pub const DEFAULT_BUFFER_SIZE: usize = 2048;

/// Main configuration for a TriCache server
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Address bound by both the TCP and the UDP listener
    pub listen_addr: String,

    /// Address bound by the HTTP listener
    pub http_addr: String,

    /// Largest message accepted from a single read or datagram (bytes)
    pub buffer_size: usize,

    /// Stream read timeout (milliseconds), 0 waits forever
    pub read_timeout_ms: u64,

    /// How accepted stream connections are scheduled
    pub stream_mode: StreamMode,
}

/// Scheduling of accepted stream connections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamMode {
    /// Serve each connection to completion before accepting the next
    #[default]
    Sequential,

    /// Spawn a task per connection and keep accepting
    Concurrent,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            read_timeout_ms: 5000,
            stream_mode: StreamMode::Sequential,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the TCP/UDP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the HTTP listen address
    pub fn http_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.http_addr = addr.into();
        self
    }

    /// Set the per-message buffer size (in bytes)
    pub fn buffer_size(mut self, size: usize) -> Self {
        self.config.buffer_size = size;
        self
    }

    /// Set the stream read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set how stream connections are scheduled
    pub fn stream_mode(mut self, mode: StreamMode) -> Self {
        self.config.stream_mode = mode;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
