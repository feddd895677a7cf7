//! [`Record`]: an assembled, immutable archetype instance.

use crate::batch::Batch;
use crate::schema::{FieldSpec, RecordSchema};

/// An ordered set of named batches representing one loggable entity's full
/// set of fields.
///
/// Records are produced by [`RecordSchema::assemble`] or
/// [`RecordSchema::clear`] and never mutated afterwards; the transport layer
/// consumes them as name-tagged columnar buffers.
#[derive(Clone, Debug)]
pub struct Record {
    schema: RecordSchema,
    fields: Vec<Option<Batch>>,
}

impl Record {
    pub(crate) fn from_parts(schema: RecordSchema, fields: Vec<Option<Batch>>) -> Record {
        debug_assert_eq!(schema.fields().len(), fields.len());
        Record { schema, fields }
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// The batch held by the named field, or `None` when the field is absent
    /// (or not part of the schema).
    pub fn field(&self, name: &str) -> Option<&Batch> {
        self.schema
            .fields()
            .iter()
            .position(|spec| spec.name() == name)
            .and_then(|pos| self.fields[pos].as_ref())
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Iterates every field in schema declaration order, present or absent.
    pub fn fields(&self) -> impl Iterator<Item = (&FieldSpec, Option<&Batch>)> {
        self.schema
            .fields()
            .iter()
            .zip(self.fields.iter().map(|slot| slot.as_ref()))
    }

    pub fn present_field_count(&self) -> usize {
        self.fields.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn absent_field_count(&self) -> usize {
        self.fields.len() - self.present_field_count()
    }
}
