//! Resource List State
//!
//! Entity behind one admin list page. Owns the paged list, runs fetches and
//! mutations on the tokio bridge, and applies results back on the UI thread.
//!
//! ```text
//! TableAction → PagedList::dispatch → ListEffect
//!     Fetch       → GET  /{path}?page=&limit=
//!     Delete      → DELETE /{path}/{id}         → refetch
//!     DeleteMany  → POST /{path}/bulk-delete    → refetch
//!     Update      → PATCH /{path}/{id}          → refetch
//! ```

use crate::domain::Resource;
use crate::services::run_in_tokio;
use crate::states::{AdminGlobalStore, NotificationLevel, i18n_common, notify};
use crate::table::{FetchOutcome, Identifiable, ListEffect, PagedList, TableAction};
use gpui::{AsyncApp, Context};

/// State of one resource list page
pub struct ListState<R: Resource> {
    list: PagedList<R>,
    /// Mutations in flight; buttons are disabled while non-zero
    pending: usize,
}

impl<R: Resource> ListState<R> {
    pub fn new(items_per_page: u32) -> Self {
        Self {
            list: PagedList::new(items_per_page, R::MULTI_SELECT),
            pending: 0,
        }
    }

    pub fn list(&self) -> &PagedList<R> {
        &self.list
    }

    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }

    /// Fetch the current page; responses to earlier fetches are dropped
    pub fn refresh(&mut self, cx: &mut Context<Self>) {
        let request = self.list.begin_fetch();
        let api = cx.global::<AdminGlobalStore>().services().api();
        tracing::debug!(path = R::PATH, page = request.page, "Fetching page");
        cx.notify();

        cx.spawn(async move |this, cx| {
            let response = run_in_tokio(async move {
                api.fetch_page::<R>(R::PATH, request.page, request.limit).await
            })
            .await;

            let _ = this.update(cx, |state, cx| {
                if state.list.apply_response(request.ticket, response) == FetchOutcome::Clamped {
                    state.refresh(cx);
                }
                cx.notify();
            });
        })
        .detach();
    }

    /// Handle a user interaction on the table
    pub fn dispatch(&mut self, action: TableAction, cx: &mut Context<Self>) {
        match self.list.dispatch(action) {
            ListEffect::None => {}
            ListEffect::Fetch => self.refresh(cx),
            ListEffect::Delete(record) => self.delete(vec![record.row_id()], false, cx),
            ListEffect::DeleteMany(records) => {
                let ids = records.iter().map(Identifiable::row_id).collect();
                self.delete(ids, true, cx);
            }
            ListEffect::Update(record) => self.quick_update(record, cx),
        }
        cx.notify();
    }

    fn delete(&mut self, ids: Vec<u64>, bulk: bool, cx: &mut Context<Self>) {
        let api = cx.global::<AdminGlobalStore>().services().api();
        self.pending += 1;
        let request_ids = ids.clone();

        cx.spawn(async move |this, cx| {
            let result = run_in_tokio(async move {
                match (bulk, request_ids.as_slice()) {
                    (false, [id]) => api.delete(R::PATH, *id).await,
                    _ => api.delete_many(R::PATH, &request_ids).await,
                }
            })
            .await;

            let ok = result.is_ok();
            match result {
                Ok(()) => {
                    tracing::info!(path = R::PATH, count = ids.len(), "Records deleted");
                    toast(cx, NotificationLevel::Success, "deleted", None);
                }
                Err(e) => toast(cx, NotificationLevel::Error, "delete_failed", Some(e.to_string())),
            }

            let _ = this.update(cx, |state, cx| {
                state.pending = state.pending.saturating_sub(1);
                if ok {
                    state.list.deletion_succeeded(&ids);
                    state.refresh(cx);
                }
                cx.notify();
            });
        })
        .detach();
    }

    fn quick_update(&mut self, record: R, cx: &mut Context<Self>) {
        let Some(patch) = record.quick_update() else {
            return;
        };
        let api = cx.global::<AdminGlobalStore>().services().api();
        let id = record.row_id();
        self.pending += 1;

        cx.spawn(async move |this, cx| {
            let result = run_in_tokio(async move { api.update(R::PATH, id, &patch).await }).await;

            let ok = result.is_ok();
            match result {
                Ok(()) => toast(cx, NotificationLevel::Success, "updated", None),
                Err(e) => toast(cx, NotificationLevel::Error, "update_failed", Some(e.to_string())),
            }

            let _ = this.update(cx, |state, cx| {
                state.pending = state.pending.saturating_sub(1);
                if ok {
                    state.refresh(cx);
                }
                cx.notify();
            });
        })
        .detach();
    }
}

fn toast(cx: &mut AsyncApp, level: NotificationLevel, key: &'static str, detail: Option<String>) {
    let _ = cx.update(|cx| {
        let label = i18n_common(cx, key);
        let message = match detail {
            Some(detail) => format!("{label}: {detail}"),
            None => label.to_string(),
        };
        notify(cx, level, message);
    });
}
