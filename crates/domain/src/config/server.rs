#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,

    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 9000,
            bind_address: "0.0.0.0".to_string(),
        }
    }
}
