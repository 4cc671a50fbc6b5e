//! Schools-api: paginated schools collection service.

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use schools_api::{Args, Config, SchoolServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug {
        Level::DEBUG
    } else if args.silent {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from(args);
    let server = SchoolServer::from_config(config)?;

    println!(
        r#"
Schools service is starting at {}

  GET  {base}/schools?offset=0&limit=100
  POST {base}/schools
  GET  {base}/schools/{{id}}
  PUT  {base}/schools/{{id}}

Press Ctrl+C to stop the server.
"#,
        server.bind_address(),
        base = server.base_url()
    );

    server.run().await
}
