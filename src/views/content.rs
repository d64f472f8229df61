//! Main Content Area
//!
//! Routes to different views based on the current application route.
//! Pages are created on first visit and kept until the connection or
//! paging preferences change.

use ahash::AHashMap;

use crate::domain::{Advertisement, Category, CustomRequest, GalleryItem, Order, Product, SubCategory, TeamMember};
use crate::editor::{CategoryDraft, SubCategoryDraft};
use crate::states::{AdminAppState, AdminGlobalStore, Route};
use crate::views::{CategoriesPage, RequestFormView, ResourceListView, SettingsView};
use gpui::{AnyView, Context, Subscription, Window, div, prelude::*};
use gpui_component::ActiveTheme;

/// Preferences whose change invalidates every cached page
#[derive(Debug, Clone, PartialEq)]
struct PageInputs {
    items_per_page: u32,
    api_base_url: String,
    has_api_key: bool,
}

impl PageInputs {
    fn of(state: &AdminAppState) -> Self {
        Self {
            items_per_page: state.items_per_page(),
            api_base_url: state.api_base_url().to_string(),
            has_api_key: state.has_api_key(),
        }
    }
}

/// Main content container component
pub struct AdminContent {
    current_route: Route,
    page_inputs: PageInputs,
    pages: AHashMap<Route, AnyView>,
    _subscriptions: Vec<Subscription>,
}

impl AdminContent {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<AdminGlobalStore>();
        let state = store.read(cx);
        let current_route = state.route();
        let page_inputs = PageInputs::of(state);
        let app_state = store.app_state();

        // Subscribe to route and preference changes
        let subscriptions = vec![cx.observe(&app_state, |this, model, cx| {
            let state = model.read(cx);
            this.current_route = state.route();
            let inputs = PageInputs::of(state);
            if inputs != this.page_inputs {
                tracing::info!(items_per_page = inputs.items_per_page, "Preferences changed, rebuilding pages");
                this.page_inputs = inputs;
                this.pages.clear();
            }
            cx.notify();
        })];

        Self {
            current_route,
            page_inputs,
            pages: AHashMap::new(),
            _subscriptions: subscriptions,
        }
    }

    fn create_page(&self, route: Route, window: &mut Window, cx: &mut Context<Self>) -> AnyView {
        let per_page = self.page_inputs.items_per_page;
        match route {
            Route::Products => cx.new(|cx| ResourceListView::<Product>::new(per_page, window, cx)).into(),
            Route::Gallery => cx.new(|cx| ResourceListView::<GalleryItem>::new(per_page, window, cx)).into(),
            Route::Requests => cx.new(|cx| ResourceListView::<CustomRequest>::new(per_page, window, cx)).into(),
            Route::Orders => cx.new(|cx| ResourceListView::<Order>::new(per_page, window, cx)).into(),
            Route::Categories => cx
                .new(|cx| CategoriesPage::<CategoryDraft, Category>::new(per_page, window, cx))
                .into(),
            Route::SubCategories => cx
                .new(|cx| CategoriesPage::<SubCategoryDraft, SubCategory>::new(per_page, window, cx))
                .into(),
            Route::Team => cx.new(|cx| ResourceListView::<TeamMember>::new(per_page, window, cx)).into(),
            Route::Ads => cx.new(|cx| ResourceListView::<Advertisement>::new(per_page, window, cx)).into(),
            Route::NewRequest => cx.new(|cx| RequestFormView::new(window, cx)).into(),
            Route::Settings => cx.new(|cx| SettingsView::new(window, cx)).into(),
        }
    }

    /// Get or create the view for the given route
    fn page(&mut self, route: Route, window: &mut Window, cx: &mut Context<Self>) -> AnyView {
        if let Some(view) = self.pages.get(&route) {
            return view.clone();
        }
        tracing::debug!(route = ?route, "Creating page");
        let view = self.create_page(route, window, cx);
        self.pages.insert(route, view.clone());
        view
    }
}

impl Render for AdminContent {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let content = self.page(self.current_route, window, cx);

        div()
            .id("content")
            .flex_1()
            .h_full()
            .overflow_hidden()
            .bg(cx.theme().background)
            .child(content)
    }
}
