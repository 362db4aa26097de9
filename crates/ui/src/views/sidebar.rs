use dioxus::prelude::*;

use crate::views::StudyHandles;
use crate::vm::map_sidebar;

/// Progress bar, study time and the latest achievements.
#[component]
pub fn SidebarSummary() -> Element {
    let handles = use_context::<StudyHandles>();
    let vm = map_sidebar(&handles.session.read());

    rsx! {
        section { class: "sidebar-progress",
            h3 { "Your progress" }
            progress { class: "progress-bar", max: "100", value: "{vm.progress}" }
            p { class: "progress-label", "{vm.progress_label}" }
            p { class: "study-time", "{vm.study_time_label}" }
        }
        section { class: "sidebar-achievements",
            h3 { "Achievements" }
            if vm.recent.is_empty() {
                p { class: "muted", "No achievements yet. Start studying!" }
            } else {
                ul {
                    for achievement in vm.recent {
                        li { key: "{achievement.title}", class: "achievement",
                            strong { "{achievement.title}" }
                            span { class: "achievement-description", "{achievement.description}" }
                        }
                    }
                }
            }
        }
    }
}

/// One-shot banner for achievements unlocked by the last action.
#[component]
pub fn CelebrationBanner() -> Element {
    let handles = use_context::<StudyHandles>();
    let celebrations = handles.celebrations.read().clone();

    if celebrations.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "celebration", role: "status",
            for achievement in celebrations {
                p { key: "{achievement.title}",
                    strong { "Achievement unlocked: {achievement.title}" }
                    " {achievement.description}"
                }
            }
            button {
                class: "btn btn-small",
                r#type: "button",
                onclick: move |_| handles.dismiss_celebrations(),
                "Dismiss"
            }
        }
    }
}

#[component]
pub fn ErrorNotice() -> Element {
    let handles = use_context::<StudyHandles>();
    let last_error = *handles.last_error.read();

    match last_error {
        Some(err) => rsx! {
            p { class: "error-notice", role: "alert", "{err.message()}" }
        },
        None => rsx! {},
    }
}
