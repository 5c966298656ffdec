//! Editable forms and their repeatable key/value rows.
//!
//! A [`RowGroup`] backs one repeatable field group (collection variables,
//! request headers). It keeps a hidden prototype row that new rows are
//! materialized from, the committed rows in display order, and the transient
//! "new row" inputs the user types into before committing them.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// One committed key/value row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRow {
    /// Row name (variable or header name).
    pub name: String,
    /// Row value.
    pub value: String,
    /// Whether the row takes part in request resolution.
    pub enabled: bool,
}

impl FormRow {
    /// Creates a row.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            enabled,
        }
    }
}

/// The uncommitted "new row" inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRowInput {
    /// State of the enabled checkbox.
    pub enabled: bool,
    /// Typed name.
    pub name: String,
    /// Typed value.
    pub value: String,
}

impl Default for NewRowInput {
    fn default() -> Self {
        Self {
            enabled: true,
            name: String::new(),
            value: String::new(),
        }
    }
}

/// Stable handle of a committed row inside its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowRef(u64);

/// An edit applied to a [`RowGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEdit {
    /// Replace the "new row" inputs.
    SetNewRow {
        /// Enabled checkbox.
        enabled: bool,
        /// Name input.
        name: String,
        /// Value input.
        value: String,
    },
    /// Commit the "new row" inputs.
    AddRow,
    /// Delete a committed row.
    RemoveRow(RowRef),
    /// Overwrite a committed row.
    EditRow(RowRef, FormRow),
}

/// Repeatable row group with a hidden prototype.
#[derive(Debug, Clone, Default)]
pub struct RowGroup {
    rows: Vec<(RowRef, FormRow)>,
    prototype: FormRow,
    new_row: NewRowInput,
    next_ref: u64,
}

impl RowGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a group seeded with already saved rows.
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = FormRow>) -> Self {
        let mut group = Self::new();
        for row in rows {
            group.push(row);
        }
        group
    }

    fn push(&mut self, row: FormRow) -> RowRef {
        let row_ref = RowRef(self.next_ref);
        self.next_ref += 1;
        self.rows.push((row_ref, row));
        row_ref
    }

    /// Current "new row" inputs.
    #[must_use]
    pub const fn new_row(&self) -> &NewRowInput {
        &self.new_row
    }

    /// Replaces the "new row" inputs.
    pub fn set_new_row(&mut self, enabled: bool, name: impl Into<String>, value: impl Into<String>) {
        self.new_row = NewRowInput {
            enabled,
            name: name.into(),
            value: value.into(),
        };
    }

    /// Commits the "new row" inputs as a row placed just before the
    /// prototype, then resets the inputs to enabled with empty text.
    pub fn add_row(&mut self) -> RowRef {
        let input = std::mem::take(&mut self.new_row);
        let mut row = self.prototype.clone();
        row.enabled = input.enabled;
        row.name = input.name;
        row.value = input.value;
        self.push(row)
    }

    /// Deletes one committed row. Returns `false` if the row is unknown.
    pub fn remove_row(&mut self, row_ref: RowRef) -> bool {
        let before = self.rows.len();
        self.rows.retain(|(r, _)| *r != row_ref);
        self.rows.len() != before
    }

    /// Overwrites a committed row. Returns `false` if the row is unknown.
    pub fn edit_row(&mut self, row_ref: RowRef, row: FormRow) -> bool {
        match self.rows.iter_mut().find(|(r, _)| *r == row_ref) {
            Some((_, slot)) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    /// Applies an edit. Returns `false` if it referenced an unknown row.
    pub fn apply(&mut self, edit: RowEdit) -> bool {
        match edit {
            RowEdit::SetNewRow {
                enabled,
                name,
                value,
            } => {
                self.set_new_row(enabled, name, value);
                true
            }
            RowEdit::AddRow => {
                self.add_row();
                true
            }
            RowEdit::RemoveRow(row_ref) => self.remove_row(row_ref),
            RowEdit::EditRow(row_ref, row) => self.edit_row(row_ref, row),
        }
    }

    /// Committed rows with their handles, in display order.
    pub fn rows(&self) -> impl Iterator<Item = (RowRef, &FormRow)> {
        self.rows.iter().map(|(r, row)| (*r, row))
    }

    /// Number of committed rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no row has been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reads the committed rows for saving.
    ///
    /// Neither the prototype nor the uncommitted "new row" inputs are part of
    /// the result.
    #[must_use]
    pub fn collect(&self) -> Vec<FormRow> {
        self.rows.iter().map(|(_, row)| row.clone()).collect()
    }
}

/// Body of a collection save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveCollectionBody {
    /// Collection path.
    pub collection: String,
    /// Collection variables.
    pub variables: Vec<FormRow>,
}

/// Body of a request save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRequestBody {
    /// Owning collection path.
    pub collection: String,
    /// Request name.
    pub request: String,
    /// HTTP method.
    pub method: String,
    /// Target URL, may contain `{{variable}}` references.
    pub url: String,
    /// Request headers.
    pub headers: Vec<FormRow>,
    /// Raw request payload.
    pub payload: String,
}

/// Edit applied to a [`CollectionForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionFormEdit {
    /// Change the collection path.
    SetCollection(String),
    /// Edit the variables group.
    Variables(RowEdit),
}

/// Collection settings form.
#[derive(Debug, Clone, Default)]
pub struct CollectionForm {
    /// Collection path.
    pub collection: String,
    /// Variables group.
    pub variables: RowGroup,
}

impl CollectionForm {
    /// Empty form for a new collection.
    #[must_use]
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            variables: RowGroup::new(),
        }
    }

    /// Form reflecting a saved collection.
    #[must_use]
    pub fn from_saved(body: &SaveCollectionBody) -> Self {
        Self {
            collection: body.collection.clone(),
            variables: RowGroup::from_rows(body.variables.iter().cloned()),
        }
    }

    /// Applies an edit. Returns `false` if it referenced an unknown row.
    pub fn apply(&mut self, edit: CollectionFormEdit) -> bool {
        match edit {
            CollectionFormEdit::SetCollection(collection) => {
                self.collection = collection;
                true
            }
            CollectionFormEdit::Variables(edit) => self.variables.apply(edit),
        }
    }

    /// Validates the form and builds the save body.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailure` when the collection path is blank.
    pub fn save_body(&self) -> DomainResult<SaveCollectionBody> {
        require("collection form", "collection", &self.collection)?;
        Ok(SaveCollectionBody {
            collection: self.collection.clone(),
            variables: self.variables.collect(),
        })
    }
}

/// Edit applied to a [`RequestForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFormEdit {
    /// Change the owning collection.
    SetCollection(String),
    /// Change the request name.
    SetRequest(String),
    /// Change the HTTP method.
    SetMethod(String),
    /// Change the URL.
    SetUrl(String),
    /// Change the payload.
    SetPayload(String),
    /// Edit the headers group.
    Headers(RowEdit),
}

/// Request editor form.
#[derive(Debug, Clone)]
pub struct RequestForm {
    /// Owning collection path.
    pub collection: String,
    /// Request name.
    pub request: String,
    /// HTTP method.
    pub method: String,
    /// Target URL.
    pub url: String,
    /// Headers group.
    pub headers: RowGroup,
    /// Raw payload.
    pub payload: String,
}

impl RequestForm {
    /// Form for `request` in `collection`; an empty request name means a new
    /// request.
    #[must_use]
    pub fn new(collection: impl Into<String>, request: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            request: request.into(),
            method: "GET".to_owned(),
            url: String::new(),
            headers: RowGroup::new(),
            payload: String::new(),
        }
    }

    /// Form reflecting a saved request.
    #[must_use]
    pub fn from_saved(body: &SaveRequestBody) -> Self {
        Self {
            collection: body.collection.clone(),
            request: body.request.clone(),
            method: body.method.clone(),
            url: body.url.clone(),
            headers: RowGroup::from_rows(body.headers.iter().cloned()),
            payload: body.payload.clone(),
        }
    }

    /// Applies an edit. Returns `false` if it referenced an unknown row.
    pub fn apply(&mut self, edit: RequestFormEdit) -> bool {
        match edit {
            RequestFormEdit::SetCollection(v) => self.collection = v,
            RequestFormEdit::SetRequest(v) => self.request = v,
            RequestFormEdit::SetMethod(v) => self.method = v,
            RequestFormEdit::SetUrl(v) => self.url = v,
            RequestFormEdit::SetPayload(v) => self.payload = v,
            RequestFormEdit::Headers(edit) => return self.headers.apply(edit),
        }
        true
    }

    /// Validates the form and builds the save body.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailure` when the collection, name, method or URL
    /// is blank.
    pub fn save_body(&self) -> DomainResult<SaveRequestBody> {
        const FORM: &str = "request form";
        require(FORM, "collection", &self.collection)?;
        require(FORM, "request name", &self.request)?;
        require(FORM, "method", &self.method)?;
        require(FORM, "url", &self.url)?;
        Ok(SaveRequestBody {
            collection: self.collection.clone(),
            request: self.request.clone(),
            method: self.method.clone(),
            url: self.url.clone(),
            headers: self.headers.collect(),
            payload: self.payload.clone(),
        })
    }
}

fn require(form: &'static str, field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::ValidationFailure { form, field });
    }
    Ok(())
}
