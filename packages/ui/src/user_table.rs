use api::{display_timestamp, User};
use dioxus::prelude::*;

/// Case-insensitive match on name or email. A blank term keeps every user.
fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    let term = term.trim().to_lowercase();
    users
        .iter()
        .filter(|user| {
            term.is_empty()
                || [&user.display_name, &user.full_name, &user.email]
                    .iter()
                    .any(|value| value.to_lowercase().contains(&term))
        })
        .collect()
}

struct UserRow {
    id: u64,
    name: String,
    email: String,
    avatar: String,
    is_admin: bool,
    last_login: String,
    joined: String,
}

#[component]
pub fn UserTable(users: Vec<User>, on_view: EventHandler<u64>) -> Element {
    let mut search = use_signal(String::new);

    let admins = users.iter().filter(|user| user.is_admin).count();
    let regular = users.len() - admins;
    let rows: Vec<UserRow> = filter_users(&users, &search())
        .into_iter()
        .map(|user| UserRow {
            id: user.id,
            name: user.label().to_string(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
            is_admin: user.is_admin,
            last_login: display_timestamp(user.last_login_at),
            joined: display_timestamp(user.created_at),
        })
        .collect();
    let shown = rows.len();
    let total = users.len();

    rsx! {
        div {
            class: "user-table",
            p { class: "muted", "{total} total users ({admins} admins, {regular} regular users)" }
            input {
                class: "search",
                r#type: "search",
                placeholder: "Search users...",
                value: "{search}",
                oninput: move |e| search.set(e.value()),
            }
            table {
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Last login" }
                        th { "Joined" }
                        th { class: "actions", "Actions" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { class: "empty", colspan: "5", "No users found" }
                        }
                    }
                    for row in rows {
                        tr {
                            key: "{row.id}",
                            td {
                                class: "name",
                                if !row.avatar.is_empty() {
                                    img {
                                        class: "avatar",
                                        src: "{row.avatar}",
                                        alt: "{row.name}",
                                        referrerpolicy: "no-referrer",
                                    }
                                }
                                "{row.name}"
                                if row.is_admin {
                                    span { class: "badge", "Admin" }
                                }
                            }
                            td { "{row.email}" }
                            td { "{row.last_login}" }
                            td { "{row.joined}" }
                            td {
                                class: "actions",
                                button {
                                    onclick: {
                                        let id = row.id;
                                        move |_| on_view.call(id)
                                    },
                                    "View Details"
                                }
                            }
                        }
                    }
                }
            }
            p { class: "table-footer", "Showing {shown} of {total} users" }
        }
    }
}
