use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;

use pharmgen_core::ProductRecord;

use crate::builders::{BuildContext, build_commercial, build_compounding};

/// How many records of each type to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetCounts {
    pub commercial: u32,
    pub compounding: u32,
    /// Progress is logged every N records of each type.
    pub progress_every: u32,
}

impl DatasetCounts {
    pub fn new(commercial: u32, compounding: u32) -> Self {
        Self {
            commercial,
            compounding,
            progress_every: 200,
        }
    }

    pub fn total(&self) -> usize {
        self.commercial as usize + self.compounding as usize
    }
}

/// Build every commercial then every compounding record, then shuffle.
///
/// The stream is consumed in builder-call order followed by the shuffle, so
/// a fixed seed reproduces the same sequence.
pub fn assemble_dataset<R: Rng + ?Sized>(
    counts: DatasetCounts,
    ctx: &BuildContext,
    rng: &mut R,
) -> Vec<ProductRecord> {
    let mut records = Vec::with_capacity(counts.total());

    for index in 1..=counts.commercial {
        records.push(build_commercial(index, ctx, rng));
        log_progress("commercial", index, counts.progress_every);
    }

    for index in 1..=counts.compounding {
        records.push(build_compounding(index, ctx, rng));
        log_progress("compounding", index, counts.progress_every);
    }

    records.shuffle(rng);
    info!(records = records.len(), "dataset shuffled");
    records
}

fn log_progress(kind: &'static str, index: u32, every: u32) {
    if every > 0 && index % every == 0 {
        info!(kind, generated = index, "records generated");
    }
}
