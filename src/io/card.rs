//! Read/write yardage card JSON files.
//!
//! A card JSON is the portable record of one computed table:
//! - the inputs it was computed for (baseline and today's speed, offsets)
//! - every row, including absent estimates
//! - the wedge partials table
//!
//! The schema is defined by `domain::CardFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::app::pipeline::CardOutput;
use crate::domain::{CardConfig, CardFile};
use crate::error::AppError;

/// Build the serializable card for a pipeline run.
pub fn card_file(output: &CardOutput, config: &CardConfig) -> CardFile {
    CardFile {
        tool: "yardage".to_string(),
        generated_at: Utc::now(),
        driver_chs_baseline: config.driver_chs_mph,
        chs_today: output.request.chs_today,
        shape_p: config.shape_p,
        manual_offset: output.request.manual_offset,
        choke_down_yd: output.request.choke_down_yd,
        rows: output.rows.clone(),
        partial_scheme: config.partials.scheme.clone(),
        partials: output.partials.clone(),
    }
}

/// Write a card JSON file.
pub fn write_card_json(path: &Path, card: &CardFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create card JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, card)
        .map_err(|e| AppError::internal(format!("Failed to write card JSON: {e}")))?;
    info!(path = %path.display(), rows = card.rows.len(), "wrote card JSON");
    Ok(())
}

/// Read a card JSON file.
pub fn read_card_json(path: &Path) -> Result<CardFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open card JSON '{}': {e}", path.display())))?;
    let card: CardFile =
        serde_json::from_reader(file).map_err(|e| AppError::input(format!("Invalid card JSON: {e}")))?;
    Ok(card)
}
