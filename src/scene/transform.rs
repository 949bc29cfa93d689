use glam::DVec3;

/// Placement of an object: location, Euler rotation in radians and per-axis scale.
///
/// Components are kept in double precision so values read from a state document are
/// assigned without rounding.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform {
    pub location: DVec3,
    pub rotation_euler: DVec3,
    pub scale: DVec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        location: DVec3::ZERO,
        rotation_euler: DVec3::ZERO,
        scale: DVec3::ONE,
    };
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use glam::dvec3;

    use super::*;

    #[test]
    fn default_is_identity() {
        let transform = Transform::default();

        assert_eq!(transform.location, DVec3::ZERO);
        assert_eq!(transform.rotation_euler, DVec3::ZERO);
        assert_eq!(transform.scale, DVec3::ONE);
    }

    #[test]
    fn vectors_are_json_arrays() {
        let transform = Transform {
            location: dvec3(0.0, 0.0, 1.2),
            ..Transform::IDENTITY
        };

        let json = serde_json::to_value(transform).unwrap();

        assert_eq!(json["location"], serde_json::json!([0.0, 0.0, 1.2]));
        assert_eq!(json["scale"], serde_json::json!([1.0, 1.0, 1.0]));
    }
}
