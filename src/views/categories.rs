//! Category Editor Page
//!
//! Bulk editor on top, the existing records below. Serves categories and
//! sub-categories; drafts that need a parent get a category picker fed
//! from `GET /categories`.

use ahash::AHashMap;

use crate::constants::MAX_ITEMS_PER_PAGE;
use crate::components::primitives::field::FormField;
use crate::domain::{Category, Resource};
use crate::editor::{Draft, DraftKey};
use crate::services::run_in_tokio;
use crate::states::{AdminGlobalStore, BatchCreated, BulkEditorState, i18n_editor};
use crate::views::ResourceListView;
use gpui::{App, Context, Entity, SharedString, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Disableable, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    v_flex,
};

/// Inputs of one draft row; dropping them ends their subscriptions
struct DraftInputs {
    name: Entity<InputState>,
    slug: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

pub struct CategoriesPage<D: Draft, R: Resource> {
    editor: Entity<BulkEditorState<D>>,
    list: Entity<ResourceListView<R>>,
    inputs: AHashMap<DraftKey, DraftInputs>,
    /// Parent choices for drafts that need one
    parents: Vec<Category>,
    _subscriptions: Vec<Subscription>,
}

impl<D: Draft, R: Resource> CategoriesPage<D, R> {
    pub fn new(items_per_page: u32, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let editor = cx.new(|_| BulkEditorState::<D>::new());
        let list = cx.new(|cx| ResourceListView::<R>::new(items_per_page, window, cx));

        let mut subscriptions = vec![cx.observe(&editor, |_this, _editor, cx| cx.notify())];
        subscriptions.push(cx.subscribe(&editor, |this, _editor, event: &BatchCreated, cx| {
            tracing::info!(collection = D::COLLECTION, count = event.count, "Batch created");
            let state = this.list.read(cx).state();
            state.update(cx, |state, cx| state.refresh(cx));
            if D::NEEDS_PARENT {
                this.load_parents(cx);
            }
        }));

        let mut page = Self {
            editor,
            list,
            inputs: AHashMap::new(),
            parents: Vec::new(),
            _subscriptions: subscriptions,
        };
        if D::NEEDS_PARENT {
            page.load_parents(cx);
        }
        page
    }

    fn load_parents(&mut self, cx: &mut Context<Self>) {
        let api = cx.global::<AdminGlobalStore>().services().api();

        cx.spawn(async move |this, cx| {
            let result = run_in_tokio(async move {
                api.fetch_page::<Category>(Category::PATH, 1, MAX_ITEMS_PER_PAGE).await
            })
            .await;

            match result {
                Ok(page) => {
                    let _ = this.update(cx, |this, cx| {
                        this.parents = page.data;
                        cx.notify();
                    });
                }
                Err(e) => tracing::warn!(error = %e, "Failed to load parent categories"),
            }
        })
        .detach();
    }

    /// Create inputs for new drafts and drop those of removed drafts
    fn sync_inputs(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let keys = self.editor.read(cx).editor().keys();
        self.inputs.retain(|key, _| keys.contains(key));

        for key in keys {
            if self.inputs.contains_key(&key) {
                continue;
            }
            let (name_value, slug_value) = self
                .editor
                .read(cx)
                .editor()
                .get(key)
                .map(|d| (d.name().to_string(), d.slug().to_string()))
                .unwrap_or_default();

            let name_placeholder = i18n_editor(cx, "name_placeholder");
            let slug_placeholder = i18n_editor(cx, "slug_placeholder");
            let name = cx.new(|cx| {
                InputState::new(window, cx)
                    .placeholder(name_placeholder)
                    .default_value(name_value)
            });
            let slug = cx.new(|cx| {
                InputState::new(window, cx)
                    .placeholder(slug_placeholder)
                    .default_value(slug_value)
            });

            let subscriptions = vec![
                cx.subscribe_in(&name, window, move |this, input, event: &InputEvent, window, cx| {
                    if !matches!(event, InputEvent::Change) {
                        return;
                    }
                    let value = input.read(cx).value().to_string();
                    this.editor.update(cx, |state, cx| {
                        state.edit(key, |draft| draft.set_name(value), cx);
                    });
                    this.follow_slug(key, window, cx);
                }),
                cx.subscribe_in(&slug, window, move |this, input, event: &InputEvent, _window, cx| {
                    if !matches!(event, InputEvent::Change) {
                        return;
                    }
                    let value = input.read(cx).value().to_string();
                    this.editor.update(cx, |state, cx| {
                        state.edit(key, |draft| draft.set_slug(value), cx);
                    });
                }),
            ];

            self.inputs.insert(
                key,
                DraftInputs {
                    name,
                    slug,
                    _subscriptions: subscriptions,
                },
            );
        }
    }

    /// Mirror an auto-filled slug into its input
    fn follow_slug(&mut self, key: DraftKey, window: &mut Window, cx: &mut Context<Self>) {
        let Some(slug) = self.editor.read(cx).editor().get(key).map(|d| d.slug().to_string()) else {
            return;
        };
        let Some(inputs) = self.inputs.get(&key) else {
            return;
        };
        if inputs.slug.read(cx).value().to_string() != slug {
            inputs.slug.update(cx, |input, cx| input.set_value(slug, window, cx));
        }
    }

    fn render_parent_picker(&self, index: usize, key: DraftKey, selected: Option<u64>, cx: &App) -> impl IntoElement {
        let buttons = self.parents.iter().map(|category| {
            let id = category.id;
            let editor = self.editor.clone();
            let button = Button::new(SharedString::from(format!("parent-{index}-{id}")))
                .small()
                .label(category.name.clone())
                .on_click(move |_, _, cx| {
                    editor.update(cx, |state, cx| {
                        state.edit(key, |draft| draft.set_parent_id(Some(id)), cx);
                    });
                });
            if selected == Some(id) {
                button.primary()
            } else {
                button.ghost()
            }
        });

        h_flex()
            .flex_wrap()
            .gap_1()
            .children(buttons)
            .when(self.parents.is_empty(), |this| {
                this.child(
                    Label::new(i18n_editor(cx, "no_parents"))
                        .text_xs()
                        .text_color(cx.theme().muted_foreground),
                )
            })
    }

    fn render_draft_row(&self, index: usize, key: DraftKey, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.editor.read(cx);
        let name_error = state.field_error(key, "name").map(|e| e.to_string());
        let slug_error = state.field_error(key, "slug").map(|e| e.to_string());
        let parent_error = state.field_error(key, "category_id").map(|e| e.to_string());
        let parent = state.editor().get(key).and_then(|d| d.parent_id());
        let removable = state.editor().len() > 1;
        let submitting = state.editor().is_submitting();

        let (Some(name), Some(slug)) = (
            self.inputs.get(&key).map(|i| i.name.clone()),
            self.inputs.get(&key).map(|i| i.slug.clone()),
        ) else {
            return div().into_any_element();
        };

        let editor = self.editor.clone();
        let remove = Button::new(("remove-draft", index))
            .ghost()
            .small()
            .icon(IconName::Delete)
            .tooltip(i18n_editor(cx, "remove"))
            .disabled(!removable || submitting)
            .on_click(move |_, _, cx| {
                editor.update(cx, |state, cx| state.remove(key, cx));
            });

        v_flex()
            .w_full()
            .p_3()
            .gap_2()
            .rounded_md()
            .border_1()
            .border_color(cx.theme().border)
            .child(
                h_flex()
                    .w_full()
                    .gap_3()
                    .items_start()
                    .child(Label::new(format!("#{}", index + 1)).text_sm().w(px(32.0)).pt_6())
                    .child(FormField::new(i18n_editor(cx, "name"), Input::new(&name)).error(name_error))
                    .child(FormField::new(i18n_editor(cx, "slug"), Input::new(&slug)).error(slug_error))
                    .child(div().pt_5().child(remove)),
            )
            .when(D::NEEDS_PARENT, |this| {
                this.child(FormField::new(
                    i18n_editor(cx, "parent"),
                    self.render_parent_picker(index, key, parent, cx),
                )
                .error(parent_error))
            })
            .into_any_element()
    }
}

impl<D: Draft, R: Resource> Render for CategoriesPage<D, R> {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.sync_inputs(window, cx);

        let state = self.editor.read(cx);
        let keys = state.editor().keys();
        let submitting = state.editor().is_submitting();
        let failures = state.report().map(|r| r.field_count()).unwrap_or(0);

        let rows: Vec<_> = keys
            .into_iter()
            .enumerate()
            .map(|(index, key)| self.render_draft_row(index, key, cx).into_any_element())
            .collect();

        let add_editor = self.editor.clone();
        let submit_editor = self.editor.clone();

        v_flex()
            .size_full()
            .child(
                v_flex()
                    .id("bulk-editor")
                    .max_h(px(360.0))
                    .overflow_y_scroll()
                    .p_4()
                    .gap_2()
                    .border_b_1()
                    .border_color(cx.theme().border)
                    .child(Label::new(i18n_editor(cx, "title")).text_lg())
                    .children(rows)
                    .when(failures > 0, |this| {
                        this.child(
                            Label::new(i18n_editor(cx, "fix_errors"))
                                .text_sm()
                                .text_color(cx.theme().danger),
                        )
                    })
                    .child(
                        h_flex()
                            .gap_2()
                            .child(
                                Button::new("add-draft")
                                    .ghost()
                                    .icon(IconName::Plus)
                                    .label(i18n_editor(cx, "add"))
                                    .disabled(submitting)
                                    .on_click(move |_, _, cx| {
                                        add_editor.update(cx, |state, cx| {
                                            state.add(cx);
                                        });
                                    }),
                            )
                            .child(
                                Button::new("submit-drafts")
                                    .primary()
                                    .label(i18n_editor(cx, "submit"))
                                    .loading(submitting)
                                    .on_click(move |_, _, cx| {
                                        submit_editor.update(cx, |state, cx| state.submit(cx));
                                    }),
                            ),
                    ),
            )
            .child(div().flex_1().min_h_0().child(self.list.clone()))
    }
}
