use crate::bill_id::BillId;
use crate::error::IngestError;
use crate::parser::parse_bill_xml;
use crate::runtime::congress::CongressApi;
use crate::runtime::logging::{log_event, LogLevel};
use crate::runtime::types::{IngestContext, UnitOutcome, UnitStatus};
use serde_json::json;

/// Fetch, parse and store each bill in turn, pausing between bills for the API rate limit.
pub async fn ingest_bills(context: &IngestContext<'_>, bill_ids: &[String]) -> Vec<UnitOutcome> {
    log_event(
        LogLevel::Info,
        "Starting ingest",
        Some(json!({ "bills": bill_ids.len() })),
    );

    let mut outcomes = Vec::with_capacity(bill_ids.len());
    for (index, raw_id) in bill_ids.iter().enumerate() {
        if index > 0 && !context.request_delay.is_zero() {
            tokio::time::sleep(context.request_delay).await;
        }

        let outcome = match ingest_bill(context, raw_id).await {
            Ok((status, records_stored)) => {
                log_event(
                    LogLevel::Info,
                    &format!("{raw_id}: {}", status.as_str()),
                    Some(json!({ "records": records_stored })),
                );
                UnitOutcome {
                    bill_id: raw_id.clone(),
                    status,
                    records_stored,
                }
            }
            Err(err) => {
                log_event(
                    LogLevel::Error,
                    &format!("{raw_id} failed"),
                    Some(json!({ "error": err.to_string() })),
                );
                UnitOutcome {
                    bill_id: raw_id.clone(),
                    status: UnitStatus::Failed(err.to_string()),
                    records_stored: 0,
                }
            }
        };
        outcomes.push(outcome);
    }

    log_event(LogLevel::Info, "All bills complete", None);
    outcomes
}

async fn ingest_bill(
    context: &IngestContext<'_>,
    raw_id: &str,
) -> Result<(UnitStatus, usize), IngestError> {
    let bill = BillId::parse(raw_id)?;
    let api = CongressApi::new(context.fetcher, context.api_base_url, context.api_key);
    let xml = api.fetch_bill_xml(&bill).await?;

    let extraction = parse_bill_xml(&xml)?;
    let Some(kind) = extraction.kind else {
        return Ok((UnitStatus::Skipped, 0));
    };
    if kind != bill.bill_type.expected_kind() {
        log_event(
            LogLevel::Warn,
            &format!("{bill}: markup root does not match bill type"),
            Some(json!({ "found": kind.tag(), "expected": bill.bill_type.expected_kind().tag() })),
        );
    }

    let parsed = extraction.records.len();
    let records = context.policy.apply(extraction.records);
    log_event(
        LogLevel::Debug,
        &format!("{bill}: kept {} of {} records", records.len(), parsed),
        None,
    );

    context
        .store
        .store_records(&bill.to_string(), &records)
        .await
        .map_err(IngestError::Store)?;

    Ok((UnitStatus::Completed, records.len()))
}
