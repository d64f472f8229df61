//! Bulk Editor
//!
//! An ordered list of drafts that is validated entry by entry and submitted
//! as a single batch.

use std::fmt;

use uuid::Uuid;
use validator::ValidationErrors;

use super::drafts::Draft;
use crate::error::Result;

/// Stable identity of a draft row while it is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DraftKey(Uuid);

impl DraftKey {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for DraftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One failing field of one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Field errors of the entry at `index`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryErrors {
    pub index: usize,
    pub key: DraftKey,
    pub fields: Vec<FieldError>,
}

/// Every validation failure of a batch, by entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub entries: Vec<EntryErrors>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of failing fields across all entries
    pub fn field_count(&self) -> usize {
        self.entries.iter().map(|e| e.fields.len()).sum()
    }

    /// Errors for one draft, if any
    pub fn for_key(&self, key: DraftKey) -> Option<&EntryErrors> {
        self.entries.iter().find(|e| e.key == key)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for entry in &self.entries {
            for field in &entry.fields {
                if !first {
                    write!(f, "; ")?;
                }
                first = false;
                write!(f, "entry {}: {}", entry.index + 1, field.message)?;
            }
        }
        Ok(())
    }
}

fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| FieldError {
                field: field.to_string(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid")),
            })
        })
        .collect();
    // field_errors() iterates a HashMap
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

#[derive(Debug, Clone)]
struct Entry<D> {
    key: DraftKey,
    draft: D,
}

/// Ordered, editable collection of drafts
#[derive(Debug, Clone)]
pub struct BulkEditor<D: Draft> {
    entries: Vec<Entry<D>>,
    submitting: bool,
}

impl<D: Draft> Default for BulkEditor<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Draft> BulkEditor<D> {
    /// Editor holding a single empty draft
    pub fn new() -> Self {
        Self {
            entries: vec![Entry {
                key: DraftKey::new(),
                draft: D::default(),
            }],
            submitting: false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Drafts with their keys, in order
    pub fn entries(&self) -> impl Iterator<Item = (DraftKey, &D)> {
        self.entries.iter().map(|e| (e.key, &e.draft))
    }

    pub fn keys(&self) -> Vec<DraftKey> {
        self.entries.iter().map(|e| e.key).collect()
    }

    pub fn get(&self, key: DraftKey) -> Option<&D> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.draft)
    }

    /// Append an empty draft and return its key
    pub fn add(&mut self) -> DraftKey {
        let key = DraftKey::new();
        self.entries.push(Entry {
            key,
            draft: D::default(),
        });
        key
    }

    /// Remove a draft; the last remaining draft is kept
    pub fn remove(&mut self, key: DraftKey) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        let before = self.entries.len();
        self.entries.retain(|e| e.key != key);
        self.entries.len() != before
    }

    /// Edit one draft in place
    pub fn update(&mut self, key: DraftKey, edit: impl FnOnce(&mut D)) -> bool {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => {
                edit(&mut entry.draft);
                true
            }
            None => false,
        }
    }

    /// Validate every draft independently.
    ///
    /// Returns the drafts in order when all pass.
    pub fn validate(&self) -> Result<Vec<D>, ValidationReport> {
        let mut report = ValidationReport::default();
        for (index, entry) in self.entries.iter().enumerate() {
            if let Err(errors) = entry.draft.validate() {
                report.entries.push(EntryErrors {
                    index,
                    key: entry.key,
                    fields: field_errors(&errors),
                });
            }
        }
        if report.is_empty() {
            Ok(self.entries.iter().map(|e| e.draft.clone()).collect())
        } else {
            Err(report)
        }
    }

    /// Reset to a single empty draft
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Validate every draft and mark the batch as in flight.
    ///
    /// Nothing is handed out when any draft is invalid; the caller sends
    /// the returned drafts as one request.
    pub fn begin_submit(&mut self) -> Result<Vec<D>> {
        let drafts = self.validate()?;
        self.submitting = true;
        Ok(drafts)
    }

    /// Finish a batch started with [`Self::begin_submit`].
    ///
    /// An accepted batch resets the editor; a rejected one keeps the drafts
    /// for another attempt.
    pub fn finish_submit(&mut self, accepted: bool) {
        self.submitting = false;
        if accepted {
            tracing::info!(count = self.entries.len(), "Bulk batch accepted");
            self.reset();
        } else {
            tracing::warn!(count = self.entries.len(), "Bulk batch rejected");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{CategoryDraft, SubCategoryDraft};
    use crate::error::Error;

    #[test]
    fn test_starts_with_one_empty_draft() {
        let editor: BulkEditor<CategoryDraft> = BulkEditor::new();
        assert_eq!(editor.len(), 1);
        assert_eq!(editor.entries().next().map(|(_, d)| d.clone()), Some(CategoryDraft::default()));
    }

    #[test]
    fn test_last_draft_cannot_be_removed() {
        let mut editor: BulkEditor<CategoryDraft> = BulkEditor::new();
        let only = editor.keys()[0];
        assert!(!editor.remove(only));
        let second = editor.add();
        assert!(editor.remove(only));
        assert_eq!(editor.keys(), vec![second]);
    }

    #[test]
    fn test_missing_slug_blocks_submission() {
        let mut editor: BulkEditor<CategoryDraft> = BulkEditor::new();
        let key = editor.keys()[0];
        editor.update(key, |d| d.name = "Posters".into());

        let Err(Error::Validation { report }) = editor.begin_submit() else {
            panic!("expected validation error");
        };
        assert_eq!(report.field_count(), 1);
        assert_eq!(report.entries[0].fields[0].field, "slug");
        assert_eq!(report.entries[0].fields[0].message, "Slug is required");
        assert!(!editor.is_submitting());
        assert_eq!(editor.get(key).map(|d| d.name.as_str()), Some("Posters"));
    }

    #[test]
    fn test_report_points_at_failing_entry_only() {
        let mut editor: BulkEditor<SubCategoryDraft> = BulkEditor::new();
        let first = editor.keys()[0];
        editor.update(first, |d| {
            d.set_name("Mugs");
            d.category_id = Some(1);
        });
        let second = editor.add();
        editor.update(second, |d| d.set_name("Cups"));

        let report = editor.validate().unwrap_err();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].index, 1);
        assert!(report.for_key(second).is_some());
        assert!(report.for_key(first).is_none());
    }

    #[test]
    fn test_accepted_batch_hands_out_all_in_order_and_resets() {
        let mut editor: BulkEditor<CategoryDraft> = BulkEditor::new();
        let first = editor.keys()[0];
        editor.update(first, |d| d.set_name("Posters"));
        let second = editor.add();
        editor.update(second, |d| d.set_name("Canvas"));

        let drafts = editor.begin_submit().unwrap();
        let slugs: Vec<_> = drafts.into_iter().map(|d| d.slug).collect();
        assert_eq!(slugs, vec!["posters", "canvas"]);
        assert!(editor.is_submitting());

        editor.finish_submit(true);
        assert!(!editor.is_submitting());
        assert_eq!(editor.len(), 1);
        assert_eq!(editor.entries().next().map(|(_, d)| d.clone()), Some(CategoryDraft::default()));
        assert!(editor.get(first).is_none());
    }

    #[test]
    fn test_rejected_batch_keeps_drafts() {
        let mut editor: BulkEditor<CategoryDraft> = BulkEditor::new();
        let key = editor.keys()[0];
        editor.update(key, |d| d.set_name("Posters"));

        assert!(editor.begin_submit().is_ok());
        editor.finish_submit(false);

        assert!(!editor.is_submitting());
        assert_eq!(editor.len(), 1);
        assert_eq!(editor.get(key).map(|d| d.name.as_str()), Some("Posters"));
        assert_eq!(editor.get(key).map(|d| d.slug.as_str()), Some("posters"));
    }

    #[test]
    fn test_report_display_lists_entries() {
        let mut editor: BulkEditor<CategoryDraft> = BulkEditor::new();
        editor.add();
        let report = editor.validate().unwrap_err();
        let text = report.to_string();
        assert!(text.contains("entry 1: Name is required"));
        assert!(text.contains("entry 2: Slug is required"));
    }
}
