//! LRU price cache with TTL
//!
//! Wraps any [`PriceSource`] so repeated scans of the same mint do not hit
//! the price API every time. Only successful lookups are cached.

use super::PriceSource;
use crate::error::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};
use config::ConfigError;
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;

#[derive(Clone, Copy)]
struct CacheEntry {
    price_usd: f64,
    cached_at: DateTime<Utc>,
}

/// Caching decorator around a [`PriceSource`]
pub struct CachedPriceSource<P> {
    inner: P,
    cache: Mutex<LruCache<String, CacheEntry>>,
    ttl: Duration,
}

impl<P: PriceSource> CachedPriceSource<P> {
    /// Wrap `inner` with a cache of `capacity` mints, each kept for `ttl_seconds`
    ///
    /// Zero capacity and negative or out-of-range TTLs are configuration errors.
    pub fn new(inner: P, capacity: usize, ttl_seconds: i64) -> AppResult<Self> {
        let cap = NonZeroUsize::new(capacity).ok_or_else(|| {
            AppError::Config(ConfigError::Message(
                "Price cache capacity must be greater than zero".to_string(),
            ))
        })?;

        let ttl = Duration::try_seconds(ttl_seconds)
            .filter(|ttl| *ttl >= Duration::zero())
            .ok_or_else(|| {
                AppError::Config(ConfigError::Message(format!(
                    "Invalid price cache TTL: {} seconds",
                    ttl_seconds
                )))
            })?;

        Ok(Self {
            inner,
            cache: Mutex::new(LruCache::new(cap)),
            ttl,
        })
    }

    fn get(&self, mint_address: &str) -> Option<f64> {
        let mut cache = self.cache.lock();

        if let Some(entry) = cache.get(mint_address) {
            let age = Utc::now() - entry.cached_at;
            if age < self.ttl {
                tracing::trace!(mint = mint_address, age_secs = age.num_seconds(), "Price cache hit");
                return Some(entry.price_usd);
            }
            cache.pop(mint_address);
        }

        None
    }

    fn insert(&self, mint_address: &str, price_usd: f64) {
        self.cache.lock().put(
            mint_address.to_string(),
            CacheEntry {
                price_usd,
                cached_at: Utc::now(),
            },
        );
    }

    /// Number of cached prices (expired entries included until touched)
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }
}

#[async_trait::async_trait]
impl<P: PriceSource> PriceSource for CachedPriceSource<P> {
    async fn price_usd(&self, mint_address: &str) -> Option<f64> {
        if let Some(price) = self.get(mint_address) {
            return Some(price);
        }

        let price = self.inner.price_usd(mint_address).await?;
        self.insert(mint_address, price);
        Some(price)
    }
}
