use crate::scene::{Scene, Spatial};
use crate::Error;

#[derive(serde::Serialize, serde::Deserialize)]
struct SceneData {
    nodes: Vec<Spatial>,
}

/// Builds a scene from `{"nodes": [{"name": .., "transform": {..}}, ..]}`.
pub fn import_scenejson(data: &[u8]) -> Result<Scene, Error> {
    let sc: SceneData = serde_json::from_slice(data)?;
    let mut scene = Scene::new();

    for node in sc.nodes {
        scene.add_node(node);
    }

    Ok(scene)
}

pub fn export_scenejson(scene: &Scene) -> Result<String, Error> {
    let sc = SceneData {
        nodes: scene.nodes().map(|(_, spatial)| spatial.clone()).collect(),
    };

    Ok(serde_json::to_string_pretty(&sc)?)
}

#[cfg(test)]
mod tests {
    use glam::dvec3;

    use super::*;

    #[test]
    fn transform_defaults_to_identity() {
        let scene = import_scenejson(br#"{"nodes": [{"name": "LampBase"}]}"#).unwrap();

        let id = scene.find_by_name("LampBase").unwrap();
        let spatial = scene.spatial(id).unwrap();
        assert_eq!(spatial.transform().scale, dvec3(1.0, 1.0, 1.0));
    }

    #[test]
    fn export_then_import_keeps_nodes() {
        let scene = import_scenejson(
            br#"{"nodes": [
                {"name": "LampBase"},
                {"name": "LampShade", "transform": {
                    "location": [0.0, 0.0, 1.2],
                    "rotation_euler": [0.0, 0.0, 0.78539816],
                    "scale": [1.0, 1.0, 1.0]
                }}
            ]}"#,
        )
        .unwrap();

        let json = export_scenejson(&scene).unwrap();
        let reimported = import_scenejson(json.as_bytes()).unwrap();

        let before: Vec<_> = scene.nodes().map(|(_, s)| s.clone()).collect();
        let after: Vec<_> = reimported.nodes().map(|(_, s)| s.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn missing_nodes_key_is_a_parse_error() {
        let err = import_scenejson(b"{}").unwrap_err();

        assert!(matches!(err, Error::Parse(_)));
    }
}
