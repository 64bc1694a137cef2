//! City/state lookup client.

use super::response::parse_city_state;
use super::transport::{HttpTransport, ZipCodeTransport};
use super::{LookupConfig, LookupResult};
use crate::error::TransportError;
use crate::validation::normalize_zip_code;
use crate::value_objects::CityState;
use log::{debug, trace, warn};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};
use tokio::runtime::{Handle, RuntimeFlavor};

/// Resolves ZIP codes to [`CityState`] values through a [`ZipCodeTransport`].
///
/// Cloning is cheap: clones share the transport and, when enabled, the
/// cache. The cache has no eviction and no expiry; it lives as long as the
/// last clone of the client.
///
/// Concurrent misses on the same ZIP code may each reach the transport.
/// Both store the same value, so the race is harmless.
pub struct LookupClient<T: ZipCodeTransport = HttpTransport> {
    inner: Arc<ClientInner<T>>,
}

struct ClientInner<T> {
    transport: T,
    // normalized 5-digit ZIP -> resolved value
    cache: Option<RwLock<HashMap<String, CityState>>>,
}

impl<T: ZipCodeTransport> Clone for LookupClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl LookupClient<HttpTransport> {
    /// Create a client for the HTTP service described by `config`.
    pub fn new(config: LookupConfig) -> Result<Self, TransportError> {
        let cache_enabled = config.cache_enabled;
        let transport = HttpTransport::new(config)?;
        Ok(Self::build(transport, cache_enabled))
    }
}

impl<T: ZipCodeTransport> LookupClient<T> {
    /// Create an uncached client over any transport.
    pub fn with_transport(transport: T) -> Self {
        Self::build(transport, false)
    }

    /// Create a client that remembers every resolved ZIP code.
    pub fn cached(transport: T) -> Self {
        Self::build(transport, true)
    }

    fn build(transport: T, cache_enabled: bool) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport,
                cache: cache_enabled.then(|| RwLock::new(HashMap::new())),
            }),
        }
    }

    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    pub fn is_caching(&self) -> bool {
        self.inner.cache.is_some()
    }

    /// Resolve a ZIP code, blocking the calling thread.
    ///
    /// Input is trimmed and must be a 5-digit or ZIP+4 code; anything else
    /// fails without reaching the transport. Only the first 5 digits are sent.
    /// Transport errors and unusable bodies are reported as failures.
    ///
    /// Safe to call from inside a tokio runtime, including through
    /// [`resolver`](Self::resolver) while composing an address in async code.
    /// The request then leaves the runtime's context before blocking, which
    /// stalls the calling worker for its duration; prefer
    /// [`lookup_async`](Self::lookup_async) in async code.
    pub fn lookup(&self, zip_code: &str) -> LookupResult<CityState> {
        self.lookup_via(zip_code, |zip5| self.fetch_from_any_context(zip5))
    }

    /// [`lookup`](Self::lookup) for a thread of tokio's blocking pool, where
    /// the transport may block without leaving the runtime first.
    fn lookup_on_blocking_pool(&self, zip_code: &str) -> LookupResult<CityState> {
        self.lookup_via(zip_code, |zip5| self.inner.transport.fetch(zip5))
    }

    fn lookup_via(
        &self,
        zip_code: &str,
        fetch: impl FnOnce(&str) -> Result<String, TransportError>,
    ) -> LookupResult<CityState> {
        let Some(zip5) = normalize_zip_code(zip_code) else {
            warn!("Rejected zip code with invalid format: {:?}", zip_code);
            return LookupResult::failure(format!("invalid zip code format: {}", zip_code));
        };

        if let Some(hit) = self.cache_get(zip5) {
            debug!("Cache hit for zip code {}", zip5);
            return LookupResult::success(hit);
        }

        debug!("Looking up city and state for zip code {}", zip5);
        let result = match fetch(zip5) {
            Ok(body) => {
                trace!("Response body for {}: {}", zip5, body);
                parse_city_state(&body)
                    .if_failure(|reason| warn!("Unusable response for {}: {}", zip5, reason))
            }
            Err(error) => {
                warn!("Lookup of zip code {} failed: {}", zip5, error);
                LookupResult::from_error(error)
            }
        };

        if let LookupResult::Success(city_state) = &result {
            self.cache_put(zip5, city_state);
        }
        result
    }

    /// Run the transport so that a blocking implementation never blocks
    /// inside a runtime context.
    ///
    /// A multi-thread worker hands its other tasks off with `block_in_place`.
    /// A current-thread runtime cannot do that, so the request runs on a
    /// scoped thread outside the runtime while the caller waits for it.
    fn fetch_from_any_context(&self, zip5: &str) -> Result<String, TransportError> {
        let transport = &self.inner.transport;
        match Handle::try_current().map(|handle| handle.runtime_flavor()) {
            Err(_) => transport.fetch(zip5),
            Ok(RuntimeFlavor::CurrentThread) => {
                trace!("Fetching {} off the current-thread runtime", zip5);
                std::thread::scope(|scope| {
                    scope
                        .spawn(|| transport.fetch(zip5))
                        .join()
                        .unwrap_or_else(|_| Err(TransportError::network("lookup thread panicked")))
                })
            }
            Ok(_) => tokio::task::block_in_place(|| transport.fetch(zip5)),
        }
    }

    /// Resolve a ZIP code on tokio's blocking pool.
    ///
    /// The work is dispatched immediately; the returned future only waits for
    /// it. Dropping the future does not cancel the request.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn lookup_async(
        &self,
        zip_code: &str,
    ) -> impl Future<Output = LookupResult<CityState>> + Send + 'static + use<T> {
        let client = self.clone();
        let zip_code = zip_code.to_string();
        let handle = tokio::task::spawn_blocking(move || client.lookup_on_blocking_pool(&zip_code));

        async move {
            handle.await.unwrap_or_else(|join_error| {
                LookupResult::failure(format!("lookup task failed: {}", join_error))
            })
        }
    }

    /// Resolve many ZIP codes concurrently.
    ///
    /// Results come back in input order. Each lookup succeeds or fails on its
    /// own; one failure never affects the others.
    pub async fn lookup_many<I, S>(&self, zip_codes: I) -> Vec<LookupResult<CityState>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pending: Vec<_> = zip_codes
            .into_iter()
            .map(|zip_code| self.lookup_async(zip_code.as_ref()))
            .collect();

        debug!("Dispatched batch of {} zip code lookups", pending.len());
        futures::future::join_all(pending).await
    }

    /// Resolve a ZIP code, substituting [`CityState::unknown`] on failure.
    ///
    /// On a caching client the fallback is remembered too, so a ZIP code that
    /// failed once is not retried.
    pub fn resolve_or_unknown(&self, zip_code: &str) -> CityState {
        let key = normalize_zip_code(zip_code).unwrap_or(zip_code.trim());
        if key.is_empty() {
            return CityState::unknown();
        }
        if let Some(hit) = self.cache_get(key) {
            return hit;
        }

        let city_state = self.lookup(zip_code).value_or_else(|reason| {
            debug!("Falling back to unknown city/state for {}: {}", key, reason);
            CityState::unknown()
        });
        self.cache_put(key, &city_state);
        city_state
    }

    /// A lookup function suitable for
    /// [`AddressBuilder::lookup_with`](crate::value_objects::AddressBuilder::lookup_with).
    pub fn resolver(
        &self,
    ) -> impl Fn(&str) -> LookupResult<CityState> + Send + Sync + 'static + use<T> {
        let client = self.clone();
        move |zip_code| client.lookup(zip_code)
    }

    /// A resolution function suitable for
    /// [`AddressBuilder::resolve_with`](crate::value_objects::AddressBuilder::resolve_with)
    /// that never fails.
    pub fn fallback_resolver(&self) -> impl Fn(&str) -> CityState + Send + Sync + 'static + use<T> {
        let client = self.clone();
        move |zip_code| client.resolve_or_unknown(zip_code)
    }

    /// Number of cached ZIP codes; always 0 without a cache.
    pub fn cache_len(&self) -> usize {
        self.inner
            .cache
            .as_ref()
            .and_then(|cache| cache.read().ok().map(|entries| entries.len()))
            .unwrap_or(0)
    }

    pub fn clear_cache(&self) {
        if let Some(Ok(mut entries)) = self.inner.cache.as_ref().map(|cache| cache.write()) {
            entries.clear();
        }
    }

    fn cache_get(&self, key: &str) -> Option<CityState> {
        let cache = self.inner.cache.as_ref()?;
        let entries = cache.read().ok()?;
        entries.get(key).cloned()
    }

    fn cache_put(&self, key: &str, city_state: &CityState) {
        if let Some(Ok(mut entries)) = self.inner.cache.as_ref().map(|cache| cache.write()) {
            entries
                .entry(key.to_string())
                .or_insert_with(|| city_state.clone());
        }
    }
}
