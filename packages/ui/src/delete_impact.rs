use api::DeleteImpact;
use dioxus::prelude::*;

use crate::ErrorMessage;

/// Confirmation step before a cascading delete: counts, backend warnings and the
/// users who lose ratings.
///
/// The confirm button stays disabled while `deleting` is set and whenever the
/// backend reports the record cannot be deleted.
#[component]
pub fn DeleteImpactPanel(
    /// Shown in the heading, e.g. "Cheese: Oka".
    subject: String,
    /// Lowercase noun for the record, e.g. "cheese" or "user".
    noun: String,
    impact: DeleteImpact,
    deleting: bool,
    #[props(default)] error: Option<String>,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let counts = &impact.impact;
    let blocked = !impact.can_delete;

    rsx! {
        div {
            class: "delete-impact",
            div {
                class: "page-header",
                button { onclick: move |_| on_cancel.call(()), "Back to Details" }
                h1 { "Delete {subject}" }
            }
            div {
                class: "alert alert-error",
                p { class: "alert-title", "Warning: This action is permanent" }
                p {
                    class: "alert-description",
                    "Deleting this {noun} will cascade and remove all associated data. This cannot be undone."
                }
            }
            section {
                class: "card",
                h2 { "Impact Assessment" }
                div {
                    class: "stat-grid",
                    div { class: "stat", span { "Ratings to Delete" } strong { "{counts.ratings_count}" } }
                    div { class: "stat", span { "Users Affected" } strong { "{counts.users_affected}" } }
                    div { class: "stat", span { "Sharings Removed" } strong { "{counts.sharings_count}" } }
                }
                if !impact.warnings.is_empty() {
                    h3 { "Important Warnings:" }
                    ul {
                        for warning in impact.warnings.iter() {
                            li { "{warning}" }
                        }
                    }
                }
                if !counts.affected_users.is_empty() {
                    h3 { "Affected Users:" }
                    ul {
                        class: "affected-users",
                        for user in counts.affected_users.iter() {
                            li {
                                key: "{user.id}",
                                span { class: "name", "{user.display_name}" }
                                span { class: "muted", "{user.ratings_label()}" }
                            }
                        }
                    }
                }
            }
            if blocked {
                ErrorMessage { title: "Cannot delete", message: "The backend does not allow deleting this {noun}." }
            }
            if let Some(message) = error {
                ErrorMessage { message }
            }
            div {
                class: "form-actions",
                button { onclick: move |_| on_cancel.call(()), "Cancel" }
                button {
                    class: "danger",
                    disabled: deleting || blocked,
                    onclick: move |_| on_confirm.call(()),
                    if deleting { "Deleting..." } else { "Confirm Delete" }
                }
            }
        }
    }
}
