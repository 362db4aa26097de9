use dioxus::prelude::*;

use services::StudyAction;

use crate::views::StudyHandles;
use crate::vm::{FlashcardVm, map_flashcard};

#[component]
pub fn FlashcardsView() -> Element {
    let handles = use_context::<StudyHandles>();
    let vm = map_flashcard(&handles.session.read());

    rsx! {
        div { class: "page flashcards",
            header { class: "view-header",
                h2 { class: "view-title", "Flashcards" }
                p { class: "view-subtitle", "Turn a card to check your answer." }
            }
            match vm {
                Some(vm) => rsx! { FlashcardPanel { vm } },
                None => rsx! {
                    p { class: "muted", "There are no flashcards in this catalog." }
                },
            }
        }
    }
}

#[component]
fn FlashcardPanel(vm: FlashcardVm) -> Element {
    let handles = use_context::<StudyHandles>();

    rsx! {
        div { class: "flashcard-row",
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| {
                    handles.dispatch(StudyAction::PreviousCard);
                },
                "Previous"
            }
            div {
                class: vm.card_class(),
                onclick: move |_| {
                    handles.dispatch(StudyAction::FlipCard);
                },
                match vm.answer {
                    Some(answer) => rsx! {
                        p { class: "flashcard-question small", "{vm.question}" }
                        p { class: "flashcard-answer", "{answer}" }
                    },
                    None => rsx! {
                        p { class: "flashcard-question", "{vm.question}" }
                    },
                }
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| {
                    handles.dispatch(StudyAction::NextCard);
                },
                "Next"
            }
        }
        div { class: "flashcard-meta",
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| {
                    handles.dispatch(StudyAction::FlipCard);
                },
                "{vm.flip_label}"
            }
            span { class: "flashcard-position", "{vm.position_label}" }
            span { class: "flashcard-studied", "{vm.studied_label}" }
        }
        section { class: "quick-nav",
            h3 { "Quick access" }
            div { class: "quick-nav-buttons",
                for jump in vm.quick_jumps.clone() {
                    button {
                        key: "{jump.index}",
                        class: jump.class(),
                        r#type: "button",
                        onclick: move |_| {
                            handles.dispatch(StudyAction::JumpToCard { index: jump.index });
                        },
                        "{jump.label}"
                    }
                }
            }
        }
    }
}
