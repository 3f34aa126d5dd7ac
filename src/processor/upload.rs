use std::path::Path;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::db::{repository, DbPool};
use crate::error::{ProcessingError, Result};
use crate::models::city::{CityDirectory, CityLookup};
use crate::models::processing_result::FileProcessingResult;
use crate::processor::{csv_parser, trip_builder};

#[derive(Debug, Clone)]
pub struct UploadLimits {
    pub max_bytes: u64,
    pub extension: String,
}

impl UploadLimits {
    pub const DEFAULT_MAX_BYTES: u64 = 10_485_760; // 10 MB
    pub const DEFAULT_EXTENSION: &'static str = ".csv";
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_bytes: Self::DEFAULT_MAX_BYTES,
            extension: Self::DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// Boundary checks applied before the file content is looked at.
pub fn validate_upload(path: &Path, size: u64, limits: &UploadLimits) -> Result<()> {
    if size == 0 {
        return Err(ProcessingError::upload("The uploaded file is empty."));
    }

    if size > limits.max_bytes {
        return Err(ProcessingError::upload(format!(
            "File size exceeds maximum allowed size of {} MB.",
            limits.max_bytes / 1024 / 1024
        )));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if !name.ends_with(&limits.extension.to_lowercase()) {
        return Err(ProcessingError::upload(format!(
            "Only {} files are supported.",
            limits.extension
        )));
    }

    Ok(())
}

/// Parse events out of `content` and derive this batch's trips.
pub fn process_content(content: &[u8], cities: &impl CityLookup) -> Result<FileProcessingResult> {
    let events = csv_parser::parse_events(content, cities)?;

    if events.is_empty() {
        info!("No equipment event generated from file processing");
        return Ok(FileProcessingResult {
            message: "File processed successfully, but no equipment event were generated."
                .to_string(),
            ..Default::default()
        });
    }

    let trips = trip_builder::build_trips(&events);

    if trips.is_empty() {
        info!("No trips generated from file processing");
        return Ok(FileProcessingResult {
            message: "File processed successfully, but no trips were generated.".to_string(),
            trip_count: 0,
            trips,
            equipment_events: events,
        });
    }

    Ok(FileProcessingResult {
        message: format!("Events processed successfully. {} trip(s) created.", trips.len()),
        trip_count: trips.len(),
        trips,
        equipment_events: events,
    })
}

/// Validate, parse and persist one uploaded file.
///
/// Events and trips are stored together, and only when the upload produced trips.
pub async fn handle_upload(
    pool: &DbPool,
    path: &Path,
    limits: &UploadLimits,
) -> anyhow::Result<FileProcessingResult> {
    let upload_id = Uuid::new_v4();
    let span = info_span!("upload", %upload_id, file = %path.display());

    async move {
        let size = tokio::fs::metadata(path)
            .await
            .map_err(ProcessingError::from)?
            .len();
        if let Err(e) = validate_upload(path, size, limits) {
            warn!("File validation failed: {}", e);
            return Err(e.into());
        }

        info!("Processing equipment events from file: {}", path.display());

        let cities = CityDirectory::new(repository::load_cities(pool).await?);
        if cities.is_empty() {
            warn!("No Canadian cities found in database");
        } else {
            info!("Loaded {} reference cities", cities.len());
        }

        let content = tokio::fs::read(path).await.map_err(ProcessingError::from)?;
        let result = process_content(&content, &cities)?;

        if result.trip_count > 0 {
            let mut tx = pool.begin().await?;
            repository::insert_events(&mut tx, upload_id, &result.equipment_events).await?;
            repository::insert_trips(&mut tx, upload_id, &result.trips).await?;
            tx.commit().await?;

            info!(
                "Successfully processed {} trips from file: {}",
                result.trip_count,
                path.display()
            );
        }

        Ok::<_, anyhow::Error>(result)
    }
    .instrument(span)
    .await
}
