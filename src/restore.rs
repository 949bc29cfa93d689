use std::path::PathBuf;

use crate::asset::{SavedState, TransformRecord};
use crate::scene::{ObjectHandle, ObjectRegistry, TransformField};
use crate::Error;

/// Applies a saved state document onto the objects of a registry.
///
/// A missing document is reported once and leaves the registry untouched. Names that
/// have no live object are skipped without a diagnostic, and their records are never
/// read; they are listed in [`RestoreReport::skipped`] instead. Any other failure,
/// including a malformed record for a live object, aborts the pass, leaving the entries
/// applied so far in place.
pub struct Restorer {
    state_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    MissingFile { path: PathBuf },
    Completed(RestoreReport),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreReport {
    pub restored: Vec<String>,
    pub skipped: Vec<String>,
}

impl Restorer {
    pub fn new(state_path: impl Into<PathBuf>) -> Self {
        Self {
            state_path: state_path.into(),
        }
    }

    pub fn restore(&self, registry: &mut dyn ObjectRegistry) -> Result<RestoreOutcome, Error> {
        let Some(state) = SavedState::load(&self.state_path)? else {
            tracing::error!("{} not found", self.state_path.display());

            return Ok(RestoreOutcome::MissingFile {
                path: self.state_path.clone(),
            });
        };

        tracing::debug!(
            "loaded {} records from {}",
            state.len(),
            self.state_path.display()
        );

        apply(&state, registry).map(RestoreOutcome::Completed)
    }
}

pub fn apply(state: &SavedState, registry: &mut dyn ObjectRegistry) -> Result<RestoreReport, Error> {
    let mut report = RestoreReport::default();

    for (name, value) in state.iter() {
        let Some(object) = registry.find_by_name_mut(name) else {
            report.skipped.push(name.to_owned());
            continue;
        };

        let record = TransformRecord::from_value(name, value)?;
        apply_record(object, name, &record)?;

        tracing::info!("Restored {}", object.name());
        report.restored.push(name.to_owned());
    }

    Ok(report)
}

fn apply_record(
    object: &mut dyn ObjectHandle,
    name: &str,
    record: &TransformRecord,
) -> Result<(), Error> {
    let rejected = |field: TransformField| {
        move |reason| Error::Rejected {
            object: name.to_owned(),
            field,
            reason,
        }
    };

    object
        .set_location(record.location)
        .map_err(rejected(TransformField::Location))?;
    object
        .set_rotation_euler(record.rotation_euler)
        .map_err(rejected(TransformField::RotationEuler))?;
    object
        .set_scale(record.scale)
        .map_err(rejected(TransformField::Scale))?;

    Ok(())
}
