use crate::clock::{Clock, SystemClock};
use async_trait::async_trait;
use hashlink_core::{Repository, ShortCode, ShortLink, Shortener, ShortenerError};
use hashlink_generator::Generator;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator`:
/// - the code is always derived from the URL, so shortening the same URL
///   twice overwrites the record with a fresh creation time
/// - a code already holding a different URL is overwritten as well; the
///   collision is logged but not prevented
#[derive(Debug)]
pub struct ShortenerService<R, G, C = SystemClock> {
    repository: Arc<R>,
    generator: Arc<G>,
    clock: C,
}

impl<R: Repository, G: Generator> ShortenerService<R, G, SystemClock> {
    /// Creates a new `ShortenerService` stamping records with the system time.
    pub fn new(repository: R, generator: G) -> Self {
        Self::with_clock(repository, generator, SystemClock)
    }
}

impl<R: Repository, G: Generator, C: Clock> ShortenerService<R, G, C> {
    pub fn with_clock(repository: R, generator: G, clock: C) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            clock,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[async_trait]
impl<R: Repository, G: Generator, C: Clock> Shortener for ShortenerService<R, G, C> {
    async fn shorten(&self, original_url: String) -> Result<ShortCode, ShortenerError> {
        let code = self.generator.generate(&original_url);
        let link = ShortLink::new(code.clone(), original_url.as_str(), self.clock.now());

        match self.repository.upsert(link).await? {
            Some(previous) if previous.original_url != original_url => {
                warn!(
                    code = %code,
                    previous_url = %previous.original_url,
                    url = %original_url,
                    "short code collision, overwriting existing link"
                );
            }
            Some(_) => debug!(code = %code, url = %original_url, "refreshed existing link"),
            None => debug!(code = %code, url = %original_url, "created link"),
        }

        Ok(code)
    }

    async fn resolve(&self, code: &ShortCode) -> Result<ShortLink, ShortenerError> {
        trace!(code = %code, "resolving short code");

        match self.repository.get(code).await? {
            Some(link) => {
                debug!(code = %code, url = %link.original_url, "resolved short code");
                Ok(link)
            }
            None => {
                trace!(code = %code, "short code not found");
                Err(ShortenerError::NotFound(code.to_string()))
            }
        }
    }
}
