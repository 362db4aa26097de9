use std::time::Duration;

use dioxus::prelude::*;
use tracing::debug;

use services::{Feedback, RevealOutcome, StudyAction};

use crate::context::AppContext;
use crate::views::StudyHandles;
use crate::vm::{CellFace, MemoryCellVm, map_memory_board};

#[component]
pub fn MemoryView() -> Element {
    let handles = use_context::<StudyHandles>();

    // The board is dealt on first visit and kept across route changes.
    use_effect(move || {
        if !handles.session.peek().state().memory.is_initialized() {
            handles.dispatch(StudyAction::InitializeBoard);
        }
    });

    let vm = map_memory_board(&handles.session.read());

    rsx! {
        div { class: "page memory",
            header { class: "view-header",
                h2 { class: "view-title", "Memory" }
                p { class: "view-subtitle", "Match every term with its definition." }
            }
            div { class: "memory-status",
                span { "{vm.moves_label}" }
                span { "{vm.pairs_label}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        handles.dispatch(StudyAction::RestartMemory);
                        handles.dispatch(StudyAction::InitializeBoard);
                    },
                    "New game"
                }
            }
            match vm.completion {
                Some(message) => rsx! {
                    p { class: "memory-complete", "{message}" }
                },
                None => rsx! {},
            }
            if vm.cells.is_empty() {
                p { class: "muted", "Dealing cards..." }
            } else {
                div { class: "memory-grid",
                    for cell in vm.cells {
                        MemoryCell { key: "{cell.position}", cell }
                    }
                }
            }
        }
    }
}

#[component]
fn MemoryCell(cell: MemoryCellVm) -> Element {
    let handles = use_context::<StudyHandles>();
    let ctx = use_context::<AppContext>();
    let delay = ctx.mismatch_delay();

    let content = match cell.face {
        CellFace::Hidden => "?",
        CellFace::Open(content) | CellFace::Matched(content) => content,
    };

    rsx! {
        button {
            class: cell.class(),
            r#type: "button",
            disabled: !cell.can_reveal,
            onclick: move |_| reveal(handles, cell.position, delay),
            "{content}"
        }
    }
}

fn reveal(handles: StudyHandles, position: usize, delay: Duration) {
    let Some(outcome) = handles.dispatch(StudyAction::Reveal { position }) else {
        return;
    };
    if let Feedback::Reveal(RevealOutcome::Mismatch { first, second }) = outcome.feedback {
        spawn(async move {
            tokio::time::sleep(delay).await;
            // A restart in the meantime leaves nothing to resolve.
            let pending = handles.session.peek().state().memory.open_positions();
            if pending == [first, second] {
                handles.dispatch(StudyAction::ResolveMismatch { first, second });
            } else {
                debug!(first, second, "mismatch already cleared");
            }
        });
    }
}
