use std::path::{Path, PathBuf};

use dioxus::prelude::*;
use tracing::{info, warn};

use services::export_file_name;

use crate::context::AppContext;
use crate::views::StudyHandles;
use crate::vm::map_stats;

#[derive(Clone, Debug, PartialEq, Eq)]
enum ExportState {
    Idle,
    Saved(String),
    Failed(String),
}

#[component]
pub fn StatsView() -> Element {
    let handles = use_context::<StudyHandles>();
    let ctx = use_context::<AppContext>();
    let mut export_state = use_signal(|| ExportState::Idle);
    let vm = map_stats(&handles.session.read());

    let on_export = move |_: MouseEvent| {
        let (text, now) = {
            let session = handles.session.read();
            (session.export(), session.now())
        };
        let result = save_export(ctx.export_dir(), &export_file_name(now), &text);
        match result {
            Ok(path) => {
                info!(path = %path.display(), "study progress exported");
                export_state.set(ExportState::Saved(path.display().to_string()));
            }
            Err(err) => {
                warn!(error = %err, "export failed");
                export_state.set(ExportState::Failed(err.to_string()));
            }
        }
    };

    rsx! {
        div { class: "page stats",
            header { class: "view-header",
                h2 { class: "view-title", "Statistics" }
                p { class: "view-subtitle", "Overall progress: {vm.overall_label} | Study time: {vm.study_time_label}" }
            }
            div { class: "stat-tiles",
                for tile in vm.tiles {
                    div { key: "{tile.label}", class: "stat-tile",
                        span { class: "stat-value", "{tile.value}" }
                        span { class: "stat-label", "{tile.label}" }
                    }
                }
            }
            section { class: "activity-bars",
                h3 { "Progress by activity" }
                for bar in vm.bars {
                    div { key: "{bar.label}", class: "activity-bar",
                        span { class: "activity-label", "{bar.label}" }
                        div { class: "activity-track",
                            div { class: "activity-fill", style: "width: {bar.percent}%" }
                        }
                        span { class: "activity-percent", "{bar.percent_label}" }
                    }
                }
            }
            section { class: "tips",
                h3 { "Study tips" }
                if vm.tips.is_empty() {
                    p { "Everything done. Great work!" }
                } else {
                    ul {
                        for tip in vm.tips {
                            li { key: "{tip}", "{tip}" }
                        }
                    }
                }
            }
            section { class: "all-achievements",
                h3 { "All achievements" }
                if vm.achievements.is_empty() {
                    p { class: "muted", "No achievements unlocked yet." }
                } else {
                    ul {
                        for achievement in vm.achievements {
                            li { key: "{achievement.title}", class: "achievement",
                                strong { "{achievement.title}" }
                                span { class: "achievement-description", "{achievement.description}" }
                                span { class: "achievement-time", "{achievement.unlocked_at}" }
                            }
                        }
                    }
                }
            }
            section { class: "export",
                button { class: "btn btn-primary", r#type: "button", onclick: on_export,
                    "Export progress"
                }
                match export_state() {
                    ExportState::Idle => rsx! {},
                    ExportState::Saved(path) => rsx! {
                        p { class: "export-saved", "Saved to {path}" }
                    },
                    ExportState::Failed(message) => rsx! {
                        p { class: "error-notice", "Export failed: {message}" }
                    },
                }
            }
        }
    }
}

fn save_export(dir: &Path, file_name: &str, text: &str) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, text)?;
    Ok(path)
}
