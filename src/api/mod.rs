use axum::{
    Router,
    extract::{Json, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::client::{AdvisorClient, AdvisorRequest, DebtCritical};
use crate::core::ReportView;
use crate::render::{render_dashboard, render_error_page, render_report_table};

pub const DEFAULT_UPSTREAM: &str = "http://127.0.0.1:8000";

const INDEX_HTML: &str = include_str!("../../web/index.html");

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliDebtCritical {
    No,
    Yes,
}

impl From<CliDebtCritical> for DebtCritical {
    fn from(value: CliDebtCritical) -> Self {
        match value {
            CliDebtCritical::No => DebtCritical::No,
            CliDebtCritical::Yes => DebtCritical::Yes,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
    Table,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReportQuery {
    age: Option<u32>,
    income: Option<f64>,
    expenses: Option<f64>,
    debt: Option<f64>,
    #[serde(alias = "debtCritical")]
    debt_critical: Option<DebtCritical>,
    emergency: Option<f64>,
    savings: Option<f64>,
    investments: Option<f64>,
}

#[derive(Parser, Debug)]
#[command(
    name = "fidash",
    about = "Financial freedom dashboard (advisor report fetched over HTTP, rendered as HTML, JSON, or a terminal table)"
)]
struct Cli {
    #[arg(long, default_value_t = 25)]
    age: u32,
    #[arg(long, default_value_t = 100000.0, help = "Monthly income in rupees")]
    income: f64,
    #[arg(long, default_value_t = 60000.0, help = "Monthly expenses in rupees")]
    expenses: f64,
    #[arg(long, default_value_t = 200000.0, help = "Total outstanding debt in rupees")]
    debt: f64,
    #[arg(
        long,
        value_enum,
        default_value_t = CliDebtCritical::No,
        help = "Whether the debt is high-interest"
    )]
    debt_critical: CliDebtCritical,
    #[arg(
        long,
        default_value_t = 150000.0,
        help = "Emergency fund balance in rupees"
    )]
    emergency: f64,
    #[arg(long, default_value_t = 200000.0)]
    savings: f64,
    #[arg(long, default_value_t = 500000.0)]
    investments: f64,
    #[arg(long, default_value = DEFAULT_UPSTREAM, help = "Advisor service base URL")]
    api_url: String,
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Html,
        help = "Report output format"
    )]
    format: OutputFormat,
    #[arg(
        long,
        default_value = "fi-report.html",
        help = "Output file path for the html format"
    )]
    out: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn validate_request(request: &AdvisorRequest) -> Result<(), String> {
    if request.age == 0 {
        return Err("--age must be > 0".to_string());
    }

    for (name, value) in [
        ("--income", request.income),
        ("--expenses", request.expenses),
        ("--debt", request.debt),
        ("--emergency", request.emergency),
        ("--savings", request.savings),
        ("--investments", request.investments),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(format!("{name} must be >= 0"));
        }
    }

    Ok(())
}

fn advisor_request_from_cli(cli: &Cli) -> Result<AdvisorRequest, String> {
    let request = AdvisorRequest {
        age: cli.age,
        income: cli.income,
        expenses: cli.expenses,
        debt: cli.debt,
        debt_critical: cli.debt_critical.into(),
        emergency: cli.emergency,
        savings: cli.savings,
        investments: cli.investments,
    };
    validate_request(&request)?;
    Ok(request)
}

pub async fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    let request = advisor_request_from_cli(&cli)?;
    let client = AdvisorClient::new(&cli.api_url);
    let report = client
        .fetch_report(&request)
        .await
        .map_err(|e| e.to_string())?;
    let view = ReportView::build(&report, request.age);

    match cli.format {
        OutputFormat::Html => {
            std::fs::write(&cli.out, render_dashboard(&view))
                .map_err(|e| format!("failed to write {}: {e}", cli.out))?;
            println!("Dashboard written to {}", cli.out);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&view).map_err(|e| e.to_string())?;
            println!("{json}");
        }
        OutputFormat::Table => print!("{}", render_report_table(&view)),
    }

    Ok(())
}

pub async fn run_http_server(port: u16, upstream: &str) -> std::io::Result<()> {
    let client = AdvisorClient::new(upstream);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/dashboard", get(dashboard_handler))
        .route("/api/report", get(report_handler))
        .fallback(not_found_handler)
        .with_state(client);

    let listener = TcpListener::bind(addr).await?;
    info!("fetching advisor reports from {upstream}");
    println!("Financial dashboard listening on http://{addr}");
    println!("Local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn dashboard_handler(
    State(client): State<AdvisorClient>,
    Query(query): Query<ReportQuery>,
) -> Response {
    let request = match advisor_request_from_query(query) {
        Ok(request) => request,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };

    match client.fetch_report(&request).await {
        Ok(report) => {
            let view = ReportView::build(&report, request.age);
            with_cache_control(Html(render_dashboard(&view)))
        }
        Err(err) => {
            error!("advisor fetch failed: {err}");
            with_cache_control((
                StatusCode::BAD_GATEWAY,
                Html(render_error_page(&err.to_string())),
            ))
        }
    }
}

async fn report_handler(
    State(client): State<AdvisorClient>,
    Query(query): Query<ReportQuery>,
) -> Response {
    let request = match advisor_request_from_query(query) {
        Ok(request) => request,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };

    match client.fetch_report(&request).await {
        Ok(report) => json_response(StatusCode::OK, ReportView::build(&report, request.age)),
        Err(err) => {
            error!("advisor fetch failed: {err}");
            error_response(StatusCode::BAD_GATEWAY, &err.to_string())
        }
    }
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn advisor_request_from_json(json: &str) -> Result<AdvisorRequest, String> {
    let query = serde_json::from_str::<ReportQuery>(json)
        .map_err(|e| format!("Invalid report query payload: {e}"))?;
    advisor_request_from_query(query)
}

fn advisor_request_from_query(query: ReportQuery) -> Result<AdvisorRequest, String> {
    let mut request = AdvisorRequest::default();

    if let Some(v) = query.age {
        request.age = v;
    }
    if let Some(v) = query.income {
        request.income = v;
    }
    if let Some(v) = query.expenses {
        request.expenses = v;
    }
    if let Some(v) = query.debt {
        request.debt = v;
    }
    if let Some(v) = query.debt_critical {
        request.debt_critical = v;
    }
    if let Some(v) = query.emergency {
        request.emergency = v;
    }
    if let Some(v) = query.savings {
        request.savings = v;
    }
    if let Some(v) = query.investments {
        request.investments = v;
    }

    validate_request(&request)?;
    Ok(request)
}
