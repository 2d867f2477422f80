use dioxus::prelude::*;
use ui::QueryState;

mod layout;
pub use layout::{AdminLayout, NotFound};

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod items;
pub use items::{ItemDelete, ItemList, ItemSeed, ItemView};

mod users;
pub use users::{UserDelete, UserList, UserView};

/// Ready once both queries are, failed as soon as either fails.
pub(crate) fn both<A: Clone, B: Clone>(a: &QueryState<A>, b: &QueryState<B>) -> QueryState<(A, B)> {
    match (a, b) {
        (QueryState::Failed(e), _) | (_, QueryState::Failed(e)) => QueryState::Failed(e.clone()),
        (QueryState::Ready(a), QueryState::Ready(b)) => QueryState::Ready((a.clone(), b.clone())),
        _ => QueryState::Loading,
    }
}

#[component]
pub(crate) fn Loading(#[props(default = "Loading...".to_string())] text: String) -> Element {
    rsx! {
        div { class: "loading", "{text}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both() {
        let ready = QueryState::Ready(1);
        let loading = QueryState::<u8>::Loading;
        let failed = QueryState::<u8>::Failed("down".into());

        assert_eq!(both(&ready, &QueryState::Ready(2)), QueryState::Ready((1, 2)));
        assert_eq!(both(&ready, &loading), QueryState::Loading);
        assert_eq!(both(&loading, &failed), QueryState::Failed("down".into()));
    }
}
