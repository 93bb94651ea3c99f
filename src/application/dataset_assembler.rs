// Dataset assembler - Builds the position dataset from per-receiver log files
use crate::application::position_source::{LoadError, PositionSource};
use crate::domain::position::{Dataset, EcefObservation, PositionSample};
use crate::domain::receiver::ReceiverFileGroup;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to load {} for receiver {receiver}", path.display())]
pub struct AssemblyError {
    pub receiver: String,
    pub path: PathBuf,
    #[source]
    pub source: LoadError,
}

#[derive(Clone)]
pub struct DatasetAssembler {
    source: Arc<dyn PositionSource>,
}

impl DatasetAssembler {
    pub fn new(source: Arc<dyn PositionSource>) -> Self {
        Self { source }
    }

    /// Load every receiver's files in declared order and convert all rows.
    ///
    /// Rows keep file-list order, then in-file order; nothing is sorted by
    /// time. The first failing file aborts the whole assembly.
    pub fn assemble(&self, groups: &[ReceiverFileGroup]) -> Result<Dataset, AssemblyError> {
        let mut tagged: Vec<(EcefObservation, &str)> = Vec::new();

        for group in groups {
            let rows = self.load_group(group)?;
            tracing::info!("Receiver {}: {} rows from {} files", group.name, rows.len(), group.files.len());
            tagged.extend(rows.into_iter().map(|row| (row, group.name.as_str())));
        }

        let samples: Vec<PositionSample> = tagged
            .into_iter()
            .map(|(row, receiver)| {
                let geodetic = row.to_geodetic();
                PositionSample::new(row, receiver.to_string(), geodetic)
            })
            .collect();

        tracing::info!("Assembled {} rows for {} receivers", samples.len(), groups.len());
        Ok(Dataset::new(samples))
    }

    fn load_group(&self, group: &ReceiverFileGroup) -> Result<Vec<EcefObservation>, AssemblyError> {
        let mut rows = Vec::new();

        for path in &group.files {
            let file_rows = self.source.load(path).map_err(|source| AssemblyError {
                receiver: group.name.clone(),
                path: path.clone(),
                source,
            })?;

            tracing::debug!("Loaded {} rows from {}", file_rows.len(), path.display());
            rows.extend(file_rows);
        }

        Ok(rows)
    }
}
