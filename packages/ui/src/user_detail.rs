use api::{display_timestamp, QueryKey, RoleChange, User};
use dioxus::prelude::*;

use crate::{use_query_cache, ErrorMessage};

#[derive(Debug, Clone, Copy, PartialEq)]
enum RoleAction {
    Promote,
    Demote,
}

impl RoleAction {
    fn for_user(is_admin: bool) -> Self {
        if is_admin {
            RoleAction::Demote
        } else {
            RoleAction::Promote
        }
    }

    fn button_label(self) -> &'static str {
        match self {
            RoleAction::Promote => "Grant Admin Privileges",
            RoleAction::Demote => "Revoke Admin Privileges",
        }
    }

    fn failure_title(self) -> &'static str {
        match self {
            RoleAction::Promote => "Promotion Failed",
            RoleAction::Demote => "Demotion Failed",
        }
    }

    fn confirm_label(self, working: bool) -> &'static str {
        match (self, working) {
            (RoleAction::Promote, true) => "Promoting...",
            (RoleAction::Demote, true) => "Revoking...",
            (RoleAction::Promote, false) => "Confirm Promotion",
            (RoleAction::Demote, false) => "Confirm Demotion",
        }
    }

    async fn run(self, id: u64) -> Result<RoleChange, ServerFnError> {
        match self {
            RoleAction::Promote => api::promote_user(id).await,
            RoleAction::Demote => api::demote_user(id).await,
        }
    }
}

/// Account details plus the admin actions: promote, demote and delete.
///
/// Role changes go through an inline confirmation step, then invalidate every
/// cached `users` query.
#[component]
pub fn UserDetail(user: User, on_back: EventHandler<()>, on_delete: EventHandler<u64>) -> Element {
    let mut cache = use_query_cache();
    let mut is_admin = use_signal(|| user.is_admin);
    let mut confirming = use_signal(|| Option::<RoleAction>::None);
    let mut working = use_signal(|| false);
    let mut outcome = use_signal(|| Option::<Result<String, (&'static str, String)>>::None);

    let id = user.id;
    let name = user.label().to_string();
    let action = RoleAction::for_user(is_admin());

    let confirm = move |_| async move {
        let Some(action) = confirming() else {
            return;
        };
        working.set(true);
        match action.run(id).await {
            Ok(change) => {
                is_admin.set(change.user.is_admin);
                cache.write().invalidate(&QueryKey::users());
                outcome.set(Some(Ok(change.message)));
                confirming.set(None);
            }
            Err(e) => outcome.set(Some(Err((action.failure_title(), e.to_string())))),
        }
        working.set(false);
    };

    rsx! {
        div {
            class: "user-detail",
            div {
                class: "page-header",
                button { onclick: move |_| on_back.call(()), "Back to Users" }
            }
            div {
                class: "detail-grid",
                section {
                    class: "card",
                    div {
                        class: "card-header",
                        h2 { "User Information" }
                        if is_admin() {
                            span { class: "badge", "Admin" }
                        }
                    }
                    div {
                        class: "identity",
                        if !user.avatar.is_empty() {
                            img {
                                class: "avatar large",
                                src: "{user.avatar}",
                                alt: "{name}",
                                referrerpolicy: "no-referrer",
                            }
                        }
                        div {
                            h2 { "{name}" }
                            if !user.full_name.is_empty() && user.full_name != name {
                                p { class: "muted", "{user.full_name}" }
                            }
                        }
                    }
                    dl {
                        dt { "Email" }
                        dd { "{user.email}" }
                        dt { "Google ID" }
                        dd { class: "mono", "{user.google_id}" }
                        dt { "Discoverable" }
                        dd { if user.discoverable { "Yes" } else { "No" } }
                        dt { "Joined" }
                        dd { "{display_timestamp(user.created_at)}" }
                        dt { "Last Login" }
                        dd { "{display_timestamp(user.last_login_at)}" }
                    }
                }
                section {
                    class: "card",
                    h2 { "Admin Actions" }
                    h3 { "Admin Privileges" }
                    if let Some(pending) = confirming() {
                        div {
                            class: "alert",
                            if pending == RoleAction::Promote {
                                p { class: "alert-title", "Important: Admin Access" }
                                p { "Admins can view all users, manage and delete items and users, bulk import data and change other users' roles. Only grant admin access to trusted individuals." }
                            } else {
                                p { class: "alert-title", "Admin Access Will Be Revoked" }
                                p { "The user will lose access to the admin panel. They remain a regular user with their own ratings." }
                            }
                            p { strong { "User: " } "{name} ({user.email})" }
                            div {
                                class: "form-actions",
                                button {
                                    disabled: working(),
                                    onclick: move |_| confirming.set(None),
                                    "Cancel"
                                }
                                button {
                                    class: if pending == RoleAction::Demote { "danger" },
                                    disabled: working(),
                                    onclick: confirm,
                                    "{pending.confirm_label(working())}"
                                }
                            }
                        }
                    } else {
                        button {
                            onclick: move |_| {
                                outcome.set(None);
                                confirming.set(Some(action));
                            },
                            "{action.button_label()}"
                        }
                    }
                    {match outcome() {
                        Some(Ok(message)) => rsx! {
                            div {
                                class: "alert alert-success",
                                p { "{message}" }
                            }
                        },
                        Some(Err((title, message))) => rsx! {
                            ErrorMessage { title: title.to_string(), message }
                        },
                        None => rsx! {},
                    }}
                    h3 { "Danger Zone" }
                    button {
                        class: "danger",
                        onclick: move |_| on_delete.call(id),
                        "Delete User Account"
                    }
                }
            }
        }
    }
}
