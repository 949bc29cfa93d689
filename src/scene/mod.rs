mod registry;
mod transform;

use glam::DVec3;
use slab::Slab;

pub use self::registry::*;
pub use self::transform::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId {
    index: usize,
}

impl NodeId {
    fn new(index: usize) -> Self {
        Self { index }
    }
}

/// In-process scene: named nodes, each carrying a transform.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Slab<Spatial>,
}

impl Scene {
    pub fn new() -> Self {
        Self { nodes: Slab::new() }
    }

    pub fn add_node(&mut self, node: Spatial) -> NodeId {
        NodeId::new(self.nodes.insert(node))
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Spatial)> {
        self.nodes
            .iter()
            .map(|(id, spatial)| (NodeId::new(id), spatial))
    }

    pub fn spatial(&self, handle: NodeId) -> Option<&Spatial> {
        self.nodes.get(handle.index)
    }

    pub fn spatial_mut(&mut self, handle: NodeId) -> Option<&mut Spatial> {
        self.nodes.get_mut(handle.index)
    }

    /// First node carrying `name`, in insertion order.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes()
            .find(|(_, spatial)| spatial.name == name)
            .map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl ObjectRegistry for Scene {
    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut dyn ObjectHandle> {
        let id = self.find_by_name(name)?;

        self.spatial_mut(id).map(|spatial| spatial as &mut dyn ObjectHandle)
    }

    fn len(&self) -> usize {
        Scene::len(self)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spatial {
    name: String,
    #[serde(default)]
    transform: Transform,
}

impl Spatial {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::default(),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }
}

impl ObjectHandle for Spatial {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_location(&mut self, location: DVec3) -> Result<(), Rejection> {
        Rejection::check_finite(location)?;
        self.transform.location = location;
        Ok(())
    }

    fn set_rotation_euler(&mut self, rotation_euler: DVec3) -> Result<(), Rejection> {
        Rejection::check_finite(rotation_euler)?;
        self.transform.rotation_euler = rotation_euler;
        Ok(())
    }

    fn set_scale(&mut self, scale: DVec3) -> Result<(), Rejection> {
        Rejection::check_finite(scale)?;
        self.transform.scale = scale;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::dvec3;

    use super::*;

    fn lamp() -> Scene {
        let mut scene = Scene::new();
        scene.add_node(Spatial::new("LampBase"));
        scene.add_node(Spatial::new("LampShade"));
        scene
    }

    #[test]
    fn find_by_name() {
        let scene = lamp();

        let id = scene.find_by_name("LampShade").unwrap();

        assert_eq!(scene.spatial(id).unwrap().name(), "LampShade");
        assert_eq!(scene.find_by_name("Lampshade"), None);
    }

    #[test]
    fn duplicate_names_resolve_to_first() {
        let mut scene = Scene::new();
        let first = scene.add_node(Spatial::new("Cube"));
        scene.add_node(Spatial::new("Cube"));

        assert_eq!(scene.find_by_name("Cube"), Some(first));
    }

    #[test]
    fn registry_lookup_mutates_in_place() {
        let mut scene = lamp();

        let handle = scene.find_by_name_mut("LampBase").unwrap();
        handle.set_location(dvec3(1.0, 2.0, 3.0)).unwrap();

        let id = scene.find_by_name("LampBase").unwrap();
        assert_eq!(
            scene.spatial(id).unwrap().transform().location,
            dvec3(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn rejected_value_leaves_field_untouched() {
        let mut spatial = Spatial::new("Cube");

        let result = spatial.set_scale(dvec3(1.0, f64::NAN, 1.0));

        assert!(matches!(result, Err(Rejection::NotFinite { index: 1, .. })));
        assert_eq!(spatial.transform().scale, DVec3::ONE);
    }

    #[test]
    fn zero_scale_is_accepted() {
        let mut spatial = Spatial::new("Cube");

        spatial.set_scale(DVec3::ZERO).unwrap();

        assert_eq!(spatial.transform().scale, DVec3::ZERO);
    }
}
