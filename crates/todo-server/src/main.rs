use clap::Parser;
use std::io;

use todo_server::logging::init_logging;
use todo_server::{run_server, ServerConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server")]
#[command(about = "Session-scoped todo lists over HTTP")]
#[command(version)]
struct Cli {
    /// Enable debug mode
    #[arg(long, env = "DEBUG", default_value = "false")]
    debug: bool,

    /// Interface to bind (falls back to HOST)
    #[arg(long)]
    host: Option<String>,

    /// Server port (falls back to PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Session cookie name (falls back to SESSION_COOKIE)
    #[arg(long)]
    cookie_name: Option<String>,
}

impl Cli {
    fn into_config(self) -> ServerConfig {
        let mut config = ServerConfig::from_env();
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(cookie_name) = self.cookie_name {
            config.cookie_name = cookie_name;
        }
        config
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let debug = cli.debug;
    init_logging(debug);

    let config = cli.into_config();
    log::info!("Starting todo server on {}", config.bind_address());
    if debug {
        log::debug!("Debug mode enabled");
        log::debug!("Server configuration: {:?}", config);
    }

    run_server(config).await
}
