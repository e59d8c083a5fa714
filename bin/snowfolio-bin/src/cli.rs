use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct TrackerCli {
    /// Zapper API base endpoint
    #[arg(
        long,
        env = "ZAPPER_API_ENDPOINT",
        default_value = "https://api.zapper.fi"
    )]
    pub zapper_api_endpoint: String,

    /// Zapper API key
    #[arg(long, env = "ZAPPER_API_KEY")]
    pub zapper_api_key: String,

    /// Redis connection URL
    #[arg(long, env = "REDIS_URL", default_value = "redis://127.0.0.1:6379")]
    pub redis_url: String,

    /// API host
    #[arg(long, env = "API_HOST", default_value = "127.0.0.1")]
    pub api_host: String,

    /// API port
    #[arg(long, env = "API_PORT", default_value = "3000")]
    pub api_port: u16,
}
