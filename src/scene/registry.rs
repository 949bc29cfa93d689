use std::fmt;

use glam::DVec3;

/// The three transform fields a restore writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformField {
    Location,
    RotationEuler,
    Scale,
}

impl fmt::Display for TransformField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransformField::Location => "location",
            TransformField::RotationEuler => "rotation_euler",
            TransformField::Scale => "scale",
        })
    }
}

/// A host refusing to take a value.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("component {index} is not finite ({value})")]
    NotFinite { index: usize, value: f64 },

    #[error("{0}")]
    Other(String),
}

impl Rejection {
    pub fn check_finite(value: DVec3) -> Result<(), Rejection> {
        let bad = value
            .to_array()
            .into_iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite());

        match bad {
            Some((index, value)) => Err(Rejection::NotFinite { index, value }),
            None => Ok(()),
        }
    }
}

/// A live object whose transform can be overwritten.
pub trait ObjectHandle {
    fn name(&self) -> &str;
    fn set_location(&mut self, location: DVec3) -> Result<(), Rejection>;
    fn set_rotation_euler(&mut self, rotation_euler: DVec3) -> Result<(), Rejection>;
    fn set_scale(&mut self, scale: DVec3) -> Result<(), Rejection>;
}

/// Name-keyed view of the objects owned by a host.
pub trait ObjectRegistry {
    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut dyn ObjectHandle>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
