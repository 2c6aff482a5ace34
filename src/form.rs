//! Create/edit forms.
//!
//! A [`Draft`] is a field map detached from the store. It starts from the
//! entity's create-mode defaults, is overlaid with the record being edited,
//! and only becomes a typed record again on submit.

use serde_json::{Map, Value};
use std::marker::PhantomData;

use crate::entity::Entity;
use crate::{StoreError, StoreResult};

const ID_FIELD: &str = "id";

fn to_fields<E: Entity>(entity: &E) -> StoreResult<Map<String, Value>> {
    match serde_json::to_value(entity)? {
        Value::Object(mut fields) => {
            fields.remove(ID_FIELD);
            Ok(fields)
        }
        other => Err(StoreError::Config(format!(
            "{} does not serialize to an object: {other}",
            E::KIND
        ))),
    }
}

/// Uncommitted field values of one record.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft<E: Entity> {
    fields: Map<String, Value>,
    _entity: PhantomData<E>,
}

impl<E: Entity> Draft<E> {
    /// The create-mode defaults.
    pub fn blank() -> StoreResult<Self> {
        Ok(Self {
            fields: to_fields(&E::default())?,
            _entity: PhantomData,
        })
    }

    /// A field-by-field copy of `entity`.
    pub fn from_entity(entity: &E) -> StoreResult<Self> {
        Ok(Self {
            fields: to_fields(entity)?,
            _entity: PhantomData,
        })
    }

    /// Overlays a raw record on the defaults. Absent or null fields keep
    /// their default; fields the entity does not have are dropped.
    pub fn from_record(record: &Value) -> StoreResult<Self> {
        let mut draft = Self::blank()?;
        let Value::Object(record) = record else {
            return Err(StoreError::validation(
                "record",
                format!("expected an object for {}", E::KIND),
            ));
        };
        for (name, value) in record {
            if value.is_null() || name == ID_FIELD {
                continue;
            }
            match draft.fields.get_mut(name) {
                Some(slot) => *slot = value.clone(),
                None => log::debug!("dropping unknown {} field `{name}`", E::KIND),
            }
        }
        Ok(draft)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Replaces one field. Null resets the field to its create-mode
    /// default; other values are not checked until submit.
    pub fn set_field(&mut self, name: &str, value: impl Into<Value>) -> StoreResult<()> {
        let Some(slot) = self.fields.get_mut(name) else {
            return Err(StoreError::UnknownField {
                kind: E::KIND,
                field: name.to_string(),
            });
        };
        let value = value.into();
        *slot = if value.is_null() {
            to_fields(&E::default())?
                .remove(name)
                .unwrap_or(Value::Null)
        } else {
            value
        };
        Ok(())
    }

    /// Decodes the draft into a typed record with an unassigned id.
    pub fn to_entity(&self) -> StoreResult<E> {
        let entity: E = serde_json::from_value(Value::Object(self.fields.clone()))?;
        Ok(entity)
    }
}

/// Whether a form creates a record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(u64),
}

impl FormMode {
    pub fn target(&self) -> Option<u64> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }
}

/// The record a submit hands to the save path.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<E> {
    pub mode: FormMode,
    pub record: E,
}

/// An open form: its mode plus the draft.
#[derive(Debug, Clone, PartialEq)]
pub struct FormController<E: Entity> {
    mode: FormMode,
    draft: Draft<E>,
}

impl<E: Entity> FormController<E> {
    pub fn open_create() -> StoreResult<Self> {
        Ok(Self {
            mode: FormMode::Create,
            draft: Draft::blank()?,
        })
    }

    pub fn open_edit(entity: &E) -> StoreResult<Self> {
        Ok(Self {
            mode: FormMode::Edit(entity.id()),
            draft: Draft::from_entity(entity)?,
        })
    }

    /// Opens an edit form from a raw record, e.g. one returned by a remote
    /// store with fields missing.
    pub fn open_edit_record(id: u64, record: &Value) -> StoreResult<Self> {
        Ok(Self {
            mode: FormMode::Edit(id),
            draft: Draft::from_record(record)?,
        })
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &Draft<E> {
        &self.draft
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<Value>) -> StoreResult<()> {
        self.draft.set_field(name, value)
    }

    /// Builds the record to save. The record carries the edit target's id,
    /// or 0 for a create.
    pub fn submit(&self) -> StoreResult<Submission<E>> {
        let mut record = self.draft.to_entity()?;
        record.set_id(self.mode.target().unwrap_or(0));
        Ok(Submission {
            mode: self.mode,
            record,
        })
    }
}
