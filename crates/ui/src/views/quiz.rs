use dioxus::prelude::*;

use services::{AnswerFeedback, Feedback, StudyAction};

use crate::views::StudyHandles;
use crate::vm::{QuizQuestionVm, QuizResultVm, QuizVm, map_quiz};

#[component]
pub fn QuizView() -> Element {
    let handles = use_context::<StudyHandles>();
    let feedback = use_signal(|| None::<AnswerFeedback>);
    let vm = map_quiz(&handles.session.read(), feedback.read().as_ref());

    rsx! {
        div { class: "page quiz",
            header { class: "view-header",
                h2 { class: "view-title", "Quiz" }
                p { class: "view-subtitle", "Pick one answer per question." }
            }
            match vm {
                QuizVm::InProgress(question) => rsx! { QuizQuestion { question, feedback } },
                QuizVm::Completed(result) => rsx! { QuizResult { result, feedback } },
                QuizVm::Empty => rsx! {
                    p { class: "muted", "There are no quiz questions in this catalog." }
                },
            }
        }
    }
}

#[component]
fn QuizQuestion(question: QuizQuestionVm, feedback: Signal<Option<AnswerFeedback>>) -> Element {
    let handles = use_context::<StudyHandles>();
    let mut feedback = feedback;

    rsx! {
        div { class: "quiz-card",
            div { class: "quiz-header",
                span { class: "quiz-heading", "{question.heading}" }
                span { class: "quiz-score", "{question.score_label}" }
            }
            h3 { class: "quiz-question", "{question.question}" }
            div { class: "quiz-options",
                for option in question.options {
                    button {
                        key: "{option.index}",
                        class: option.mark.class(),
                        r#type: "button",
                        disabled: question.answered,
                        onclick: move |_| {
                            let Some(outcome) = handles.dispatch(StudyAction::Answer { option: option.index }) else {
                                return;
                            };
                            if let Feedback::Answer(answer) = outcome.feedback {
                                feedback.set(Some(answer));
                            }
                        },
                        span { class: "quiz-option-label", "{option.label}" }
                        span { class: "quiz-option-text", "{option.text}" }
                    }
                }
            }
            match question.verdict {
                Some(verdict) => rsx! {
                    div { class: verdict.class(),
                        strong { "{verdict.headline}" }
                        p { "{verdict.explanation}" }
                    }
                },
                None => rsx! {},
            }
            if question.answered {
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        if handles.dispatch(StudyAction::AdvanceQuiz).is_some() {
                            feedback.set(None);
                        }
                    },
                    "{question.advance_label}"
                }
            }
        }
    }
}

#[component]
fn QuizResult(result: QuizResultVm, feedback: Signal<Option<AnswerFeedback>>) -> Element {
    let handles = use_context::<StudyHandles>();
    let mut feedback = feedback;

    rsx! {
        div { class: "quiz-card quiz-result",
            h3 { "Quiz completed!" }
            p { class: "quiz-result-score", "{result.score_label}" }
            p { class: "quiz-result-percent", "{result.percent_label}" }
            p { "{result.message}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| {
                    if handles.dispatch(StudyAction::RestartQuiz).is_some() {
                        feedback.set(None);
                    }
                },
                "Restart quiz"
            }
        }
    }
}
