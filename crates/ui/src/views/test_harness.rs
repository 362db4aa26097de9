use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{Clock, StudySession};
use study_core::Catalog;
use study_core::time::fixed_clock;

use crate::context::{UiApp, build_app_context};
use crate::views::{
    CelebrationBanner, FlashcardsView, MemoryView, QuizView, SidebarSummary, StatsView,
    StudyHandles,
};

struct TestApp;

impl UiApp for TestApp {
    fn catalog(&self) -> Catalog {
        Catalog::builtin()
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(10)
    }

    fn shuffle_seed(&self) -> Option<u64> {
        Some(42)
    }

    fn export_dir(&self) -> PathBuf {
        std::env::temp_dir()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Flashcards,
    Quiz,
    Memory,
    Stats,
    Sidebar,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    view: ViewKind,
    session: StudySession,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = Arc::new(TestApp);
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| StudyHandles::new(props.session.clone()));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Flashcards => rsx! { FlashcardsView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Memory => rsx! { MemoryView {} },
        ViewKind::Stats => rsx! { StatsView {} },
        ViewKind::Sidebar => rsx! {
            CelebrationBanner {}
            SidebarSummary {}
        },
    }
}

/// A session with the same catalog and seed the harness app reports.
pub fn test_session() -> StudySession {
    StudySession::builtin(fixed_clock()).with_seed(42)
}

/// Renders `view` once over `session` and returns the HTML.
pub fn render_view(view: ViewKind, session: StudySession) -> String {
    let mut dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { view, session });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
