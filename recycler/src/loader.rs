use core::future::Future;

use crate::Page;

/// The paged data source behind a list.
///
/// `load` must be idempotent for identical `(start, limit)` and may return fewer than `limit`
/// items only at a true end of the sequence. Retries and backoff are the loader's business.
pub trait Loader<T> {
    type Error;

    fn load(&self, start: usize, limit: usize)
    -> impl Future<Output = Result<Page<T>, Self::Error>>;
}

impl<T, E, F, Fut> Loader<T> for F
where
    F: Fn(usize, usize) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    type Error = E;

    fn load(
        &self,
        start: usize,
        limit: usize,
    ) -> impl Future<Output = Result<Page<T>, Self::Error>> {
        self(start, limit)
    }
}
