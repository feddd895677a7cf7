//! A 3D triangle mesh as specified by its per-mesh and per-vertex properties.

use std::sync::LazyLock;

use tessera_common::Result;

use crate::arraylike::ArrayLike;
use crate::batch::Batch;
use crate::components::{
    ClassId, Color, InstanceKey, Material, MeshProperties, Position3D, Vector3D,
};
use crate::record::Record;
use crate::schema::{FieldSpec, RecordSchema};

/// A 3D triangle mesh.
///
/// `vertex_positions` is required and governs the per-vertex dimension:
/// every present per-vertex field must have as many elements. Mesh-wide
/// fields (`mesh_properties`, `mesh_material`) are exempt.
///
/// ```
/// use tessera_types::archetypes::Mesh3D;
/// use tessera_types::datatypes::{Material, MeshProperties};
///
/// let record = Mesh3D::new(vec![[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 0.0]])
///     .with_vertex_colors(vec![[0, 0, 255, 255], [0, 255, 0, 255], [255, 0, 0, 255]])
///     .with_mesh_properties(MeshProperties::from_triangle_indices([2, 1, 0]))
///     .with_mesh_material(Material::from_albedo_factor([0xcc, 0x00, 0xcc, 0xff]))
///     .into_record()?;
/// assert_eq!(record.present_field_count(), 4);
/// # Ok::<(), tessera_common::error::Error>(())
/// ```
pub struct Mesh3D {
    vertex_positions: ArrayLike<Position3D>,
    mesh_properties: Option<ArrayLike<MeshProperties>>,
    vertex_normals: Option<ArrayLike<Vector3D>>,
    vertex_colors: Option<ArrayLike<Color>>,
    mesh_material: Option<ArrayLike<Material>>,
    class_ids: Option<ArrayLike<ClassId>>,
    instance_keys: Option<ArrayLike<InstanceKey>>,
}

static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
    RecordSchema::new(Mesh3D::NAME, vec![
        FieldSpec::required::<Position3D>("vertex_positions").co_indexed(),
        FieldSpec::optional::<MeshProperties>("mesh_properties"),
        FieldSpec::optional::<Vector3D>("vertex_normals").co_indexed(),
        FieldSpec::optional::<Color>("vertex_colors").co_indexed(),
        FieldSpec::optional::<Material>("mesh_material"),
        FieldSpec::optional::<ClassId>("class_ids").co_indexed(),
        FieldSpec::optional::<InstanceKey>("instance_keys").co_indexed(),
    ])
    .expect("valid Mesh3D schema")
});

impl Mesh3D {
    pub const NAME: &'static str = "tessera.archetypes.Mesh3D";

    pub fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    pub fn new(vertex_positions: impl Into<ArrayLike<Position3D>>) -> Mesh3D {
        Mesh3D {
            vertex_positions: vertex_positions.into(),
            mesh_properties: None,
            vertex_normals: None,
            vertex_colors: None,
            mesh_material: None,
            class_ids: None,
            instance_keys: None,
        }
    }

    pub fn with_mesh_properties(
        mut self,
        mesh_properties: impl Into<ArrayLike<MeshProperties>>,
    ) -> Mesh3D {
        self.mesh_properties = Some(mesh_properties.into());
        self
    }

    pub fn with_vertex_normals(
        mut self,
        vertex_normals: impl Into<ArrayLike<Vector3D>>,
    ) -> Mesh3D {
        self.vertex_normals = Some(vertex_normals.into());
        self
    }

    pub fn with_vertex_colors(mut self, vertex_colors: impl Into<ArrayLike<Color>>) -> Mesh3D {
        self.vertex_colors = Some(vertex_colors.into());
        self
    }

    pub fn with_mesh_material(mut self, mesh_material: impl Into<ArrayLike<Material>>) -> Mesh3D {
        self.mesh_material = Some(mesh_material.into());
        self
    }

    pub fn with_class_ids(mut self, class_ids: impl Into<ArrayLike<ClassId>>) -> Mesh3D {
        self.class_ids = Some(class_ids.into());
        self
    }

    pub fn with_instance_keys(
        mut self,
        instance_keys: impl Into<ArrayLike<InstanceKey>>,
    ) -> Mesh3D {
        self.instance_keys = Some(instance_keys.into());
        self
    }

    /// Normalizes every field and assembles the immutable record.
    pub fn into_record(self) -> Result<Record> {
        let vertex_positions = Batch::required(Some(self.vertex_positions))?;
        Self::schema().assemble(vec![
            ("vertex_positions", Some(vertex_positions)),
            ("mesh_properties", Batch::optional(self.mesh_properties)?),
            ("vertex_normals", Batch::optional(self.vertex_normals)?),
            ("vertex_colors", Batch::optional(self.vertex_colors)?),
            ("mesh_material", Batch::optional(self.mesh_material)?),
            ("class_ids", Batch::optional(self.class_ids)?),
            ("instance_keys", Batch::optional(self.instance_keys)?),
        ])
    }

    /// A record carrying no mesh data: required fields empty, optional
    /// fields absent.
    pub fn clear() -> Result<Record> {
        Self::schema().clear()
    }
}
