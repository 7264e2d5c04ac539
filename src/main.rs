use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use proposal_ai::analysis::{
    analysis_router, AnalysisEngine, AnalysisResult, ProposalAnalysisService, ProposalCategory,
    ProposalDraft,
};
use proposal_ai::config::{AppConfig, AppEnvironment};
use proposal_ai::error::AppError;
use proposal_ai::telemetry;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

const SERVICE_NAME: &str = "Proposal Scoring Service";

#[derive(Clone)]
struct AppState {
    environment: AppEnvironment,
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Proposal Scoring Service",
    about = "Score community funding proposals from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single proposal and print the analysis breakdown
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Proposal title (10-100 characters)
    #[arg(long)]
    title: String,
    /// Proposal description (50-2000 characters)
    #[arg(long)]
    description: String,
    /// Requested funding amount in units
    #[arg(long)]
    amount: f64,
    /// Optional category (education|healthcare|environment|community|technology|other)
    #[arg(long, value_parser = parse_category)]
    category: Option<ProposalCategory>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Analyze(args) => run_analyze(args),
    }
}

fn parse_category(raw: &str) -> Result<ProposalCategory, String> {
    ProposalCategory::parse(raw).ok_or_else(|| {
        format!(
            "unknown category '{raw}' (expected education|healthcare|environment|community|technology|other)"
        )
    })
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        environment: config.environment,
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let service = Arc::new(ProposalAnalysisService::new(AnalysisEngine::with_extractor(
        config.engine.extractor,
    )));

    let app = Router::new()
        .route("/", get(banner_endpoint))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(analysis_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        environment = config.environment.label(),
        extractor = %config.engine.extractor,
        %addr,
        "proposal scoring service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service =
        ProposalAnalysisService::new(AnalysisEngine::with_extractor(config.engine.extractor));

    let draft = ProposalDraft {
        title: args.title,
        description: args.description,
        amount: args.amount,
        category: args.category,
    };

    let result = service.analyze_draft(draft)?;
    render_analysis(&result);

    Ok(())
}

async fn banner_endpoint(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "message": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "environment": state.environment.label(),
    }))
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn render_analysis(result: &AnalysisResult) {
    let view = result.to_view();

    println!("Proposal analysis");
    println!(
        "Overall score: {:.2}/10 ({})",
        view.score,
        view.sentiment.label()
    );
    println!(
        "Dimensions: impact {:.2}, feasibility {:.2}, clarity {:.2}, budget {:.2}",
        view.impact_score, view.feasibility_score, view.clarity_score, view.budget_appropriateness
    );
    println!(
        "Confidence: {:.2} (processed in {:.3}s)",
        view.confidence, view.processing_time
    );

    println!("\nSummary");
    println!("{}", view.summary);

    println!("\nRecommendations");
    for recommendation in &view.recommendations {
        println!("- {recommendation}");
    }

    if view.risk_factors.is_empty() {
        println!("\nRisk factors: none");
    } else {
        println!("\nRisk factors");
        for risk in &view.risk_factors {
            println!("- {risk}");
        }
    }

    println!("\nStrengths");
    for strength in &view.strengths {
        println!("- {strength}");
    }
}
