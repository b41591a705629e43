use async_trait::async_trait;
use billtext::config::IngestSettings;
use billtext::parser::parse_bill_xml;
use billtext::runtime::fetcher::HttpFetcher;
use billtext::runtime::orchestrator::ingest_bills;
use billtext::runtime::types::{IngestContext, RecordStore, UnitStatus};
use billtext::types::ExtractedRecord;
use serde_json::json;
use std::io::Write;
use std::time::Duration;

type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;

const USAGE: &str = "Usage:\n  billtext parse <xml_file>\n  billtext fetch <bill_id>...";

/// Writes one JSON object per record to stdout.
struct JsonLinesStore;

#[async_trait]
impl RecordStore for JsonLinesStore {
    async fn store_records(
        &self,
        bill_id: &str,
        records: &[ExtractedRecord],
    ) -> Result<(), String> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for record in records {
            let line = json!({
                "billId": bill_id,
                "heading": record.heading,
                "content": record.content,
            });
            writeln!(out, "{line}").map_err(|e| format!("Failed to write record: {e}"))?;
        }
        Ok(())
    }
}

fn run_parse(path: &str) -> Result<(), DynError> {
    let xml = std::fs::read_to_string(path)?;
    let extraction = parse_bill_xml(&xml)?;
    if let Some(unrecognized) = &extraction.unrecognized {
        tracing::warn!(
            "{}: no bill or resolution root (found {:?})",
            path,
            unrecognized.root_names
        );
    }
    println!("{}", serde_json::to_string_pretty(&extraction.records)?);
    Ok(())
}

async fn run_fetch(bill_ids: Vec<String>) -> Result<(), DynError> {
    let settings = IngestSettings::load_default()?;
    let fetcher = HttpFetcher::new(reqwest::Client::new());
    let store = JsonLinesStore;
    let context = IngestContext {
        fetcher: &fetcher,
        store: &store,
        api_base_url: &settings.api_base_url,
        api_key: settings.api_key.as_deref(),
        policy: settings.record_policy(),
        request_delay: Duration::from_millis(settings.request_delay_ms),
    };

    let outcomes = ingest_bills(&context, &bill_ids).await;
    let failed = outcomes
        .iter()
        .filter(|o| matches!(o.status, UnitStatus::Failed(_)))
        .count();
    if failed > 0 {
        return Err(format!("{failed} of {} bills failed", outcomes.len()).into());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), DynError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let mut args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }

    let command = args.remove(0);
    match command.as_str() {
        "parse" if args.len() == 1 => run_parse(&args[0]),
        "fetch" if !args.is_empty() => run_fetch(args).await,
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }
}
