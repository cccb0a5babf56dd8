use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use termcolor::Color;
use tracing::{info, warn};

use sharedstreets_core::batch::{hash_features, Feature, HashedFeature};
use sharedstreets_core::config::{validate_config, CoreConfig};

use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BatchItem {
    Ok(HashedFeature),
    Err { index: usize, code: String, error: String },
}

#[derive(Debug, Serialize)]
pub struct BatchOut {
    pub total: usize,
    pub failed: usize,
    pub items: Vec<BatchItem>,
}

pub fn run(input_path: &str) -> Result<()> {
    let cfg = CoreConfig::default();
    validate_config(&cfg)?;

    let features: Vec<Feature> = input::read_json_file(input_path)?;
    info!(count = features.len(), "hashing batch");

    let items: Vec<BatchItem> = hash_features(&features, &cfg.limits)
        .into_iter()
        .enumerate()
        .map(|(index, r)| match r {
            Ok(h) => BatchItem::Ok(h),
            Err(e) => {
                warn!(index, error = %e, "feature rejected");
                BatchItem::Err {
                    index,
                    code: e.code().to_string(),
                    error: e.to_string(),
                }
            }
        })
        .collect();

    let failed = items.iter().filter(|i| matches!(i, BatchItem::Err { .. })).count();
    let out = BatchOut {
        total: items.len(),
        failed,
        items,
    };

    if output::is_json() {
        return output::print(&out);
    }
    for item in &out.items {
        match item {
            BatchItem::Ok(h) => output::emit(h)?,
            BatchItem::Err { index, error, .. } => {
                let mut stdout = output::stdout();
                output::write_label(&mut stdout, "error", Color::Red)?;
                writeln!(stdout, "#{index}  {error}")?;
            }
        }
    }
    Ok(())
}
