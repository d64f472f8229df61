//! Bulk Editor State
//!
//! Entity around a [`BulkEditor`]: keeps the last validation report for the
//! form and sends accepted batches through the API client.

use crate::editor::{BulkEditor, Draft, DraftKey, ValidationReport};
use crate::error::Error;
use crate::services::run_in_tokio;
use crate::states::{AdminGlobalStore, NotificationLevel, i18n_editor, notify};
use gpui::{Context, EventEmitter};

/// Emitted after the API accepted a batch
#[derive(Debug, Clone, Copy)]
pub struct BatchCreated {
    pub count: usize,
}

pub struct BulkEditorState<D: Draft> {
    editor: BulkEditor<D>,
    report: Option<ValidationReport>,
}

impl<D: Draft> EventEmitter<BatchCreated> for BulkEditorState<D> {}

impl<D: Draft> BulkEditorState<D> {
    pub fn new() -> Self {
        Self {
            editor: BulkEditor::new(),
            report: None,
        }
    }

    pub fn editor(&self) -> &BulkEditor<D> {
        &self.editor
    }

    pub fn report(&self) -> Option<&ValidationReport> {
        self.report.as_ref()
    }

    /// Field error message for one draft, if the last validation flagged it
    pub fn field_error(&self, key: DraftKey, field: &str) -> Option<&str> {
        self.report
            .as_ref()?
            .for_key(key)?
            .fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.message.as_str())
    }

    pub fn add(&mut self, cx: &mut Context<Self>) -> DraftKey {
        let key = self.editor.add();
        cx.notify();
        key
    }

    pub fn remove(&mut self, key: DraftKey, cx: &mut Context<Self>) {
        if self.editor.remove(key) {
            cx.notify();
        }
    }

    pub fn edit(&mut self, key: DraftKey, edit: impl FnOnce(&mut D), cx: &mut Context<Self>) {
        if self.editor.update(key, edit) {
            cx.notify();
        }
    }

    /// Validate locally, then send the batch in one request
    pub fn submit(&mut self, cx: &mut Context<Self>) {
        if self.editor.is_submitting() {
            return;
        }
        let drafts = match self.editor.begin_submit() {
            Ok(drafts) => drafts,
            Err(Error::Validation { report }) => {
                tracing::debug!(failures = report.field_count(), "Batch rejected locally");
                self.report = Some(report);
                cx.notify();
                return;
            }
            Err(e) => {
                tracing::error!(error = %e, "Unexpected batch error");
                return;
            }
        };
        self.report = None;
        cx.notify();

        let api = cx.global::<AdminGlobalStore>().services().api();
        let count = drafts.len();

        cx.spawn(async move |this, cx| {
            let result = run_in_tokio(async move { api.create_batch(D::COLLECTION, &drafts).await }).await;
            let accepted = result.is_ok();

            let _ = cx.update(|cx| {
                let (level, message) = match &result {
                    Ok(()) => (NotificationLevel::Success, i18n_editor(cx, "created").to_string()),
                    Err(e) => (
                        NotificationLevel::Error,
                        format!("{}: {e}", i18n_editor(cx, "create_failed")),
                    ),
                };
                notify(cx, level, message);
            });

            let _ = this.update(cx, |state, cx| {
                state.editor.finish_submit(accepted);
                if accepted {
                    cx.emit(BatchCreated { count });
                }
                cx.notify();
            });
        })
        .detach();
    }
}

impl<D: Draft> Default for BulkEditorState<D> {
    fn default() -> Self {
        Self::new()
    }
}
