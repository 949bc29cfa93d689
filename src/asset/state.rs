use std::path::Path;

use glam::DVec3;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::asset::read_optional;
use crate::scene::Transform;
use crate::Error;

/// Stored placement of one object. Each vector must be exactly three numbers.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformRecord {
    pub location: DVec3,
    pub rotation_euler: DVec3,
    pub scale: DVec3,
}

impl TransformRecord {
    /// Reads the record stored for `object`.
    pub fn from_value(object: &str, value: &Value) -> Result<Self, Error> {
        TransformRecord::deserialize(value).map_err(|source| Error::Record {
            object: object.to_owned(),
            source,
        })
    }
}

impl From<TransformRecord> for Transform {
    fn from(record: TransformRecord) -> Self {
        Transform {
            location: record.location,
            rotation_euler: record.rotation_euler,
            scale: record.scale,
        }
    }
}

impl From<Transform> for TransformRecord {
    fn from(transform: Transform) -> Self {
        TransformRecord {
            location: transform.location,
            rotation_euler: transform.rotation_euler,
            scale: transform.scale,
        }
    }
}

/// Object name to stored transform, in document order.
///
/// Only the top level is checked on load. Each record is read when it is applied, so a
/// malformed record for an object that is not in the scene is never looked at.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SavedState {
    objects: IndexMap<String, Value>,
}

impl SavedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
        Ok(serde_json::from_slice(data)?)
    }

    /// `Ok(None)` when nothing exists at `path`.
    pub fn load(path: &Path) -> Result<Option<Self>, Error> {
        read_optional(path)?
            .map(|data| Self::from_slice(&data))
            .transpose()
    }

    pub fn insert(&mut self, name: impl Into<String>, record: Value) {
        self.objects.insert(name.into(), record);
    }

    pub fn record(&self, name: &str) -> Option<Result<TransformRecord, Error>> {
        self.objects
            .get(name)
            .map(|value| TransformRecord::from_value(name, value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.objects
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
