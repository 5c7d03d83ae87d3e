use crate::link::ShortLink;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Shortens the given URL and returns its short code.
    ///
    /// Shortening the same URL twice yields the same code; the second call
    /// refreshes the stored creation time.
    async fn shorten(&self, original_url: String) -> Result<ShortCode>;

    /// Resolves a short code to its stored link.
    /// Returns `Err(NotFound)` if nothing was ever stored under the code.
    async fn resolve(&self, code: &ShortCode) -> Result<ShortLink>;
}
