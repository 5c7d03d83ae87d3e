use crate::error::StorageError;
use crate::link::ShortLink;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of a repository.
///
/// This trait provides only the read operations from [`Repository`],
/// allowing resolvers to hold read-only access.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the link stored under a given short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<ShortLink>>;

    /// Checks whether a short code exists in the repository.
    async fn exists(&self, code: &ShortCode) -> Result<bool>;
}

/// The mapping store. It owns every [`ShortLink`] it holds.
///
/// Implementations must be safe to call from concurrent tasks: two writes
/// to different codes must both be visible afterwards.
#[async_trait]
pub trait Repository: ReadRepository {
    /// Writes the link under `link.id`, replacing any existing entry.
    ///
    /// Returns the entry that was replaced, if there was one.
    async fn upsert(&self, link: ShortLink) -> Result<Option<ShortLink>>;
}
