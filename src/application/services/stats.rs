use std::time::Instant;

use tracing::{error, info};

use crate::domain::records::BookRecord;
use crate::domain::repositories::BookRecordRepository;
use crate::domain::stats::{self, ReadingStats};

/// Records and the statistics computed from them, for one page render.
pub struct Dashboard {
    pub records: Vec<BookRecord>,
    pub stats: ReadingStats,
}

/// Load every stored record. A storage failure is logged and yields no records.
pub async fn load_records(repo: &dyn BookRecordRepository) -> Vec<BookRecord> {
    match repo.list_records().await {
        Ok(records) => records,
        Err(err) => {
            error!(error = %err, "error loading book data, continuing with no records");
            Vec::new()
        }
    }
}

pub async fn load_dashboard(repo: &dyn BookRecordRepository) -> Dashboard {
    let records = load_records(repo).await;
    let stats = compute_timed(&records);
    Dashboard { records, stats }
}

/// Run the aggregator and log how long it took.
pub fn compute_timed(records: &[BookRecord]) -> ReadingStats {
    let start = Instant::now();
    let computed = stats::compute(records);
    info!(
        duration_ms = start.elapsed().as_millis(),
        records = records.len(),
        years = computed.yearly_totals.len(),
        sources = computed.source_performance.len(),
        "stats computed"
    );
    computed
}
