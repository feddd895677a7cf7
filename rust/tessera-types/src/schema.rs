//! Data-driven record (archetype) descriptors.
//!
//! A [`RecordSchema`] is a plain data object: an ordered list of named field
//! specs, each required or optional and optionally co-indexed against the
//! record's governing dimension (e.g. "per-vertex"). One generic assembler
//! serves every archetype; there is no per-archetype generated code.

use std::sync::Arc;

use itertools::Itertools;
use tessera_common::{Result, error::Error};

use crate::batch::Batch;
use crate::loggable::Loggable;
use crate::record::Record;
use crate::registry::{self, ArrayCodec, LoggableCodec};

/// Whether a field must be present in every assembled record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Required,
    Optional,
}

/// Declaration of one named field of a record schema.
#[derive(Clone)]
pub struct FieldSpec {
    name: &'static str,
    codec: Arc<dyn ArrayCodec>,
    kind: FieldKind,
    co_indexed: bool,
}

impl FieldSpec {
    /// Declares a required field holding batches of `T`.
    pub fn required<T: Loggable>(name: &'static str) -> FieldSpec {
        FieldSpec {
            name,
            codec: Arc::new(LoggableCodec::<T>::default()),
            kind: FieldKind::Required,
            co_indexed: false,
        }
    }

    /// Declares an optional field holding batches of `T`.
    pub fn optional<T: Loggable>(name: &'static str) -> FieldSpec {
        FieldSpec {
            name,
            codec: Arc::new(LoggableCodec::<T>::default()),
            kind: FieldKind::Optional,
            co_indexed: false,
        }
    }

    /// Marks this field as indexing the record's governing dimension:
    /// when present, its length must equal the governing required field's
    /// length.
    pub fn co_indexed(mut self) -> FieldSpec {
        self.co_indexed = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_name(&self) -> &'static str {
        self.codec.type_name()
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.kind == FieldKind::Required
    }

    pub fn is_co_indexed(&self) -> bool {
        self.co_indexed
    }

    pub(crate) fn codec(&self) -> &Arc<dyn ArrayCodec> {
        &self.codec
    }
}

impl std::fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("type_name", &self.type_name())
            .field("kind", &self.kind)
            .field("co_indexed", &self.co_indexed)
            .finish()
    }
}

/// An ordered, named set of field specs describing one record (archetype)
/// shape. Declaration order is part of the wire contract: assembled records
/// expose their fields in exactly this order.
#[derive(Clone, Debug)]
pub struct RecordSchema {
    name: &'static str,
    fields: Vec<FieldSpec>,
}

impl RecordSchema {
    pub fn new(name: &'static str, fields: Vec<FieldSpec>) -> Result<RecordSchema> {
        if let Some(dup) = fields.iter().map(|f| f.name()).duplicates().next() {
            return Err(Error::invalid_arg(
                name,
                format!("duplicate field name '{dup}'"),
            ));
        }
        Ok(RecordSchema { name, fields })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name() == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    /// The field whose length governs every co-indexed field of this schema:
    /// the first required co-indexed field in declaration order.
    pub fn governing_field(&self) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|f| f.is_required() && f.is_co_indexed())
    }

    /// Composes named batches into an immutable [`Record`].
    ///
    /// Input order is irrelevant; the record's field order is the schema
    /// declaration order. Validation:
    ///
    /// - every supplied name must belong to this schema, at most once;
    /// - every supplied batch's tag must match the declared field type;
    /// - every required field must map to a present batch;
    /// - every present co-indexed field must match the governing required
    ///   field's length. Fields without a co-indexing relationship are
    ///   exempt.
    pub fn assemble(&self, fields: Vec<(&str, Option<Batch>)>) -> Result<Record> {
        let mut slots: Vec<Option<Batch>> = vec![None; self.fields.len()];
        let mut seen = vec![false; self.fields.len()];
        for (name, batch) in fields {
            let pos = self
                .position(name)
                .ok_or_else(|| Error::invalid_arg(name, "not a field of this record schema"))?;
            if seen[pos] {
                return Err(Error::invalid_arg(name, "field supplied more than once"));
            }
            seen[pos] = true;
            if let Some(batch) = &batch {
                let spec = &self.fields[pos];
                if batch.name() != spec.type_name() {
                    return Err(Error::type_mismatch(spec.type_name(), batch.name()));
                }
            }
            slots[pos] = batch;
        }

        for (spec, slot) in self.fields.iter().zip(&slots) {
            if spec.is_required() && slot.is_none() {
                return Err(Error::missing_required_field(spec.name()));
            }
        }

        let governing_len = self
            .fields
            .iter()
            .zip(&slots)
            .find(|(spec, _)| spec.is_required() && spec.is_co_indexed())
            .and_then(|(_, slot)| slot.as_ref())
            .map(|batch| batch.len());
        if let Some(expected) = governing_len {
            for (spec, slot) in self.fields.iter().zip(&slots) {
                if !spec.is_co_indexed() {
                    continue;
                }
                if let Some(batch) = slot {
                    if batch.len() != expected {
                        return Err(Error::length_mismatch(spec.name(), expected, batch.len()));
                    }
                }
            }
        }

        log::trace!(
            "assembled record '{}' with {} present fields",
            self.name,
            slots.iter().filter(|s| s.is_some()).count()
        );
        Ok(Record::from_parts(self.clone(), slots))
    }

    /// Produces a record representing "no data logged this step": every
    /// optional field absent, every required field its canonical zero-length
    /// array.
    pub fn clear(&self) -> Result<Record> {
        let mut slots = Vec::with_capacity(self.fields.len());
        for spec in &self.fields {
            match spec.kind() {
                FieldKind::Required => {
                    let binding = registry::register(spec.codec().clone())?;
                    slots.push(Some(Batch::from_parts(binding.name(), binding.empty_array())));
                }
                FieldKind::Optional => slots.push(None),
            }
        }
        Ok(Record::from_parts(self.clone(), slots))
    }
}
