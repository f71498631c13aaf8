use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    middleware::{Condition, Logger},
    web, App, HttpServer,
};
use clap::Parser;
use tonic::transport::Server;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use bookstore::{
    config::{BookstoreConfig, ConfigError, LogFormat, SeedSet},
    fault::FaultInjector,
    grpc::{services::BookstoreServiceImpl, BookstoreServer},
    http::{self, AppState},
    store::Store,
};

#[derive(Parser)]
#[command(name = "bookstore-server")]
#[command(about = "Bookstore test backend serving gRPC and HTTP with fault injection")]
#[command(version)]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// HTTP API bind address (overrides config file)
    #[arg(long)]
    pub http_addr: Option<String>,

    /// gRPC API bind address (overrides config file)
    #[arg(long)]
    pub grpc_addr: Option<String>,

    /// Initial data set (overrides config file)
    #[arg(long, value_enum)]
    pub seed: Option<SeedSet>,

    /// Log level (overrides config file)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Generate default configuration file and exit
    #[arg(long)]
    pub generate_config: Option<PathBuf>,

    /// Validate configuration file and exit
    #[arg(long)]
    pub validate_config: bool,

    /// List default configuration file locations
    #[arg(long)]
    pub list_config_paths: bool,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Handle utility commands first
    if let Some(config_path) = args.generate_config {
        return generate_default_config(config_path);
    }

    if args.list_config_paths {
        return list_config_paths();
    }

    let config = load_configuration(&args).map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Configuration error: {}", e),
        )
    })?;

    if args.validate_config {
        println!("✅ Configuration is valid");
        println!("🌐 HTTP Address: {}", config.server.http_addr);
        println!("🔌 gRPC Address: {}", config.server.grpc_addr);
        println!("📚 Seed: {:?}", config.store.seed);
        println!("💥 Fault signal key: {}", config.fault.signal_key);
        println!("📊 Log Level: {}", config.logging.level);
        return Ok(());
    }

    setup_logging(&config)?;

    tracing::info!("🚀 Starting bookstore");
    tracing::info!(
        "📁 Configuration loaded from: {}",
        args.config
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string())
    );

    let store = Arc::new(Store::from_config(&config.store));
    let faults = Arc::new(FaultInjector::new(&config.fault));
    if config.fault.enabled {
        tracing::info!(
            "💥 Fault injection via '{}' metadata: {:?}",
            config.fault.signal_key,
            faults.faults().iter().map(|f| f.name).collect::<Vec<_>>()
        );
    }

    // Start gRPC server in a separate task
    let grpc_server = config.server.enable_grpc.then(|| {
        let grpc_addr = config.server.grpc_addr;
        let service = BookstoreServiceImpl::new(store.clone(), faults.clone())
            .with_request_logging(config.logging.log_requests);

        tokio::spawn(async move {
            tracing::info!("🔌 Starting gRPC server on {}", grpc_addr);

            Server::builder()
                .add_service(BookstoreServer::new(service))
                .serve_with_shutdown(grpc_addr, async {
                    let _ = tokio::signal::ctrl_c().await;
                })
                .await
                .map_err(std::io::Error::other)
        })
    });

    let http_server = config.server.enable_http.then(|| {
        run_http_server(
            config.server.http_addr,
            AppState::new(store.clone(), faults.clone()),
            config.logging.log_requests,
            config.server.shutdown_timeout_secs(),
        )
    });

    let http_task = async move {
        match http_server {
            Some(server) => server.await,
            None => std::future::pending().await,
        }
    };

    let grpc_task = async move {
        match grpc_server {
            Some(handle) => handle.await,
            None => std::future::pending().await,
        }
    };

    // Run both servers concurrently
    tokio::select! {
        result = http_task => {
            match &result {
                Ok(()) => tracing::info!("✅ HTTP server stopped"),
                Err(e) => tracing::error!("❌ HTTP server error: {:?}", e),
            }
            result
        }
        result = grpc_task => {
            match result {
                Ok(Ok(())) => {
                    tracing::info!("✅ gRPC server completed successfully");
                    Ok(())
                }
                Ok(Err(e)) => {
                    tracing::error!("❌ gRPC server error: {:?}", e);
                    Err(e)
                }
                Err(e) => {
                    tracing::error!("❌ gRPC server task error: {:?}", e);
                    Err(std::io::Error::other(e))
                }
            }
        }
    }
}

async fn run_http_server(
    http_addr: SocketAddr,
    state: AppState,
    log_requests: bool,
    shutdown_timeout: u64,
) -> std::io::Result<()> {
    tracing::info!("🌐 Starting HTTP server on {}", http_addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(Condition::new(log_requests, Logger::default()))
            .configure(http::configure)
    })
    .shutdown_timeout(shutdown_timeout)
    .bind(http_addr)?
    .run()
    .await
}

/// Load configuration with CLI overrides
fn load_configuration(args: &Args) -> Result<BookstoreConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => BookstoreConfig::from_file(path)?,
        None => BookstoreConfig::load_default()?,
    };

    if let Some(ref http_addr) = args.http_addr {
        config.server.http_addr = http_addr
            .parse()
            .map_err(|e| ConfigError::Validation(format!("Invalid HTTP address: {}", e)))?;
    }

    if let Some(ref grpc_addr) = args.grpc_addr {
        config.server.grpc_addr = grpc_addr
            .parse()
            .map_err(|e| ConfigError::Validation(format!("Invalid gRPC address: {}", e)))?;
    }

    if let Some(seed) = args.seed {
        config.store.seed = seed;
    }

    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    // Validate final configuration
    config.validate()?;
    Ok(config)
}

/// Setup logging based on configuration
fn setup_logging(config: &BookstoreConfig) -> std::io::Result<()> {
    use tracing_subscriber::fmt::time::ChronoUtc;

    let invalid = |e: String| std::io::Error::new(std::io::ErrorKind::InvalidInput, e);

    let level = config
        .logging
        .level
        .parse::<tracing::Level>()
        .map_err(|e| invalid(format!("Invalid log level: {}", e)))?;

    let env_filter = EnvFilter::from_default_env()
        .add_directive(
            format!("bookstore={}", level)
                .parse()
                .map_err(|e| invalid(format!("Invalid log directive: {}", e)))?,
        )
        .add_directive(
            format!("bookstore_server={}", level)
                .parse()
                .map_err(|e| invalid(format!("Invalid log directive: {}", e)))?,
        );

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(ChronoUtc::rfc_3339())
        .with_span_events(FmtSpan::CLOSE);

    match (&config.logging.format, config.logging.enable_colors) {
        (LogFormat::Json, _) => subscriber.json().init(),
        (LogFormat::Compact, colors) => subscriber.compact().with_ansi(colors).init(),
        (LogFormat::Pretty, colors) => subscriber.pretty().with_ansi(colors).init(),
    }

    Ok(())
}

/// Generate a default configuration file
fn generate_default_config(path: PathBuf) -> std::io::Result<()> {
    let config = BookstoreConfig::default();

    config
        .to_file(&path)
        .map_err(|e| std::io::Error::other(format!("Failed to write config: {}", e)))?;

    println!(
        "✅ Generated default configuration file: {}",
        path.display()
    );
    println!("🚀 Start with: bookstore-server --config {}", path.display());

    Ok(())
}

/// List default configuration file locations
fn list_config_paths() -> std::io::Result<()> {
    println!("📍 Default configuration file locations (in order of precedence):");
    println!();

    for (i, path) in BookstoreConfig::default_config_paths().iter().enumerate() {
        let exists = if path.exists() { "✅" } else { "❌" };
        println!("  {}. {} {}", i + 1, exists, path.display());
    }

    Ok(())
}
