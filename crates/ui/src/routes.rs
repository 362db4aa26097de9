use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{
    CelebrationBanner, ErrorNotice, FlashcardsView, MemoryView, QuizView, SidebarSummary,
    StatsView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", FlashcardsView)] Flashcards {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/memory", MemoryView)] Memory {},
        #[route("/stats", StatsView)] Stats {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                CelebrationBanner {}
                ErrorNotice {}
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Somatoform Disorders" }
            p { class: "sidebar-subtitle", "Interactive study aid" }
            ul {
                li { Link { to: Route::Flashcards {}, "Flashcards" } }
                li { Link { to: Route::Quiz {}, "Quiz" } }
                li { Link { to: Route::Memory {}, "Memory" } }
                li { Link { to: Route::Stats {}, "Statistics" } }
            }
            SidebarSummary {}
        }
    }
}
