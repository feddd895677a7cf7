//! A batch of 3D points with per-point attributes.

use std::sync::LazyLock;

use tessera_common::Result;

use crate::arraylike::ArrayLike;
use crate::batch::Batch;
use crate::components::{ClassId, Color, Position3D, Radius, Text};
use crate::record::Record;
use crate::schema::{FieldSpec, RecordSchema};

/// A batch of 3D points.
///
/// All optional fields are per-point and must match the number of positions
/// when present.
pub struct Points3D {
    positions: ArrayLike<Position3D>,
    radii: Option<ArrayLike<Radius>>,
    colors: Option<ArrayLike<Color>>,
    labels: Option<ArrayLike<Text>>,
    class_ids: Option<ArrayLike<ClassId>>,
}

static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
    RecordSchema::new(Points3D::NAME, vec![
        FieldSpec::required::<Position3D>("positions").co_indexed(),
        FieldSpec::optional::<Radius>("radii").co_indexed(),
        FieldSpec::optional::<Color>("colors").co_indexed(),
        FieldSpec::optional::<Text>("labels").co_indexed(),
        FieldSpec::optional::<ClassId>("class_ids").co_indexed(),
    ])
    .expect("valid Points3D schema")
});

impl Points3D {
    pub const NAME: &'static str = "tessera.archetypes.Points3D";

    pub fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    pub fn new(positions: impl Into<ArrayLike<Position3D>>) -> Points3D {
        Points3D {
            positions: positions.into(),
            radii: None,
            colors: None,
            labels: None,
            class_ids: None,
        }
    }

    pub fn with_radii(mut self, radii: impl Into<ArrayLike<Radius>>) -> Points3D {
        self.radii = Some(radii.into());
        self
    }

    pub fn with_colors(mut self, colors: impl Into<ArrayLike<Color>>) -> Points3D {
        self.colors = Some(colors.into());
        self
    }

    pub fn with_labels(mut self, labels: impl Into<ArrayLike<Text>>) -> Points3D {
        self.labels = Some(labels.into());
        self
    }

    pub fn with_class_ids(mut self, class_ids: impl Into<ArrayLike<ClassId>>) -> Points3D {
        self.class_ids = Some(class_ids.into());
        self
    }

    pub fn into_record(self) -> Result<Record> {
        let positions = Batch::required(Some(self.positions))?;
        Self::schema().assemble(vec![
            ("positions", Some(positions)),
            ("radii", Batch::optional(self.radii)?),
            ("colors", Batch::optional(self.colors)?),
            ("labels", Batch::optional(self.labels)?),
            ("class_ids", Batch::optional(self.class_ids)?),
        ])
    }

    pub fn clear() -> Result<Record> {
        Self::schema().clear()
    }
}
