//! Request-result cache shared by every page.
//!
//! [`QueryCacheProvider`] puts one [`QueryCache`] in context. Pages load data with
//! [`use_cached_query`]: a cached result is shown at once while the server function
//! runs again, and the fresh result replaces it. Mutations invalidate by key prefix
//! through [`use_query_cache`].

use std::future::Future;

use api::{QueryCache, QueryKey};
use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

#[component]
pub fn QueryCacheProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(QueryCache::new()));

    rsx! {
        {children}
    }
}

pub fn use_query_cache() -> Signal<QueryCache> {
    use_context::<Signal<QueryCache>>()
}

/// Load `key` on every mount, showing the cached result until the server answers.
///
/// The key and fetcher are captured on first render. Components whose data
/// depends on route parameters are keyed on those parameters so a new value
/// mounts a fresh query. A failed refetch keeps the cached result on screen.
pub fn use_cached_query<T, F, Fut>(key: QueryKey, fetch: F) -> Signal<QueryState<T>>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ServerFnError>> + 'static,
{
    let mut cache = use_query_cache();
    let mut state = use_signal(|| QueryState::Loading);

    let _loader = use_resource(move || {
        let key = key.clone();
        let request = fetch();
        async move {
            let placeholder = cache.peek().placeholder::<T>(&key);
            let stale = placeholder.is_some();
            if let Some(value) = placeholder {
                state.set(QueryState::Ready(value));
            }
            match request.await {
                Ok(value) => {
                    cache.write().insert(key, &value);
                    state.set(QueryState::Ready(value));
                }
                Err(e) if stale => {
                    tracing::warn!("Refreshing {} failed, keeping cached result: {}", key, e);
                }
                Err(e) => {
                    tracing::error!("Request {} failed: {}", key, e);
                    state.set(QueryState::Failed(e.to_string()));
                }
            }
        }
    });

    state
}
