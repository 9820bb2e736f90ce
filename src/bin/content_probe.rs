use anyhow::Context;
use clap::Parser;
use lakeside_content::core::outcome::Fetched;
use lakeside_content::core::resources::{catalog, ResourceKind};
use lakeside_content::domain::ports::ContentSource;
use lakeside_content::utils::{logger, validation};
use lakeside_content::StrapiClient;
use serde_json::Value;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "content-probe")]
#[command(about = "Check every content resource against the content service")]
struct Args {
    /// 內容服務的 base origin
    #[arg(long, env = "STRAPI_API_URL", default_value = "http://localhost:1337")]
    content_base_url: String,

    /// 每次請求的逾時秒數
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    validation::validate_origin("content_base_url", &args.content_base_url)
        .context("invalid content service origin")?;

    let client =
        StrapiClient::with_timeout(&args.content_base_url, Duration::from_secs(args.timeout_secs))
            .context("failed to build HTTP client")?;

    println!("🚀 檢查內容服務: {}", client.origin());
    println!();

    let entries = catalog();
    let mut unavailable = Vec::new();

    for entry in &entries {
        let started = Instant::now();
        let fetched = client.fetch(&entry.query).await;
        let elapsed = started.elapsed();

        let summary = match &fetched {
            Fetched::Found(Value::Array(items)) => format!("live, {} records", items.len()),
            Fetched::Found(_) if entry.kind == ResourceKind::List => {
                "live, unexpected single record".to_string()
            }
            Fetched::Found(_) => "live".to_string(),
            Fetched::Empty => "empty".to_string(),
            Fetched::Failed(e) => {
                unavailable.push(entry.route);
                format!("unavailable ({})", e)
            }
        };

        let marker = if matches!(fetched, Fetched::Failed(_)) {
            "❌"
        } else {
            "✅"
        };

        println!(
            "  {} {:<22} -> {:<24} {} 耗時 {:?}",
            marker, entry.route, entry.collection, summary, elapsed
        );
    }

    println!();
    println!(
        "📊 總計: {} 個資源, {} 個無法取得",
        entries.len(),
        unavailable.len()
    );

    if !unavailable.is_empty() {
        eprintln!("❌ 無法取得: {}", unavailable.join(", "));
        std::process::exit(1);
    }

    println!("🎉 所有資源皆可取得");
    Ok(())
}
