use std::env;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fidash=info".into()),
        )
        .init();

    let raw_args: Vec<String> = env::args().collect();
    if raw_args.get(1).map(|s| s.as_str()) == Some("serve") {
        let port = raw_args
            .get(2)
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);
        let upstream = env::var("ADVISOR_API_URL")
            .unwrap_or_else(|_| fidash::api::DEFAULT_UPSTREAM.to_string());
        if let Err(e) = fidash::api::run_http_server(port, &upstream).await {
            eprintln!("Server error: {e}");
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = fidash::api::run_cli().await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
