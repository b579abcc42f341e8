use clap::Parser;
use once_cell::sync::Lazy;

pub static APP_CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenvy::dotenv().ok();
    Config::parse()
});

#[derive(Debug, Clone, Parser)]
pub struct Config {
    /// MongoDB connection string, e.g. `mongodb://mongo:27017`.
    #[clap(long, env)]
    pub mongo_uri: String,

    #[clap(long, env, default_value = "info")]
    pub log_level: String,

    /// Application name reported to the server in the connection handshake.
    #[clap(long, env, default_value = "employees-db")]
    pub app_name: String,
}
