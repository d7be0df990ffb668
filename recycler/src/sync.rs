use crate::pool::Pool;
use crate::{Error, Padding, Sentinels};

/// Re-derives container padding and sentinel offsets from the pool after the window moved.
///
/// Whatever the first slot moved by is taken out of (or given back to) the bottom padding, so the
/// total virtual height only changes when content was appended past the old bottom.
pub(crate) fn synchronize<E>(
    pool: &Pool<E>,
    padding: &mut Padding,
    sentinels: &mut Sentinels,
) -> Result<(), Error> {
    let (Some(first), Some(last)) = (pool.first(), pool.last()) else {
        return Err(Error::EmptyPool);
    };

    let diff = first.translate_y - padding.top;
    padding.bottom = (padding.bottom - diff).max(0.0);
    padding.top = first.translate_y;

    sentinels.top = first.translate_y;
    sentinels.bottom = last.translate_y;
    Ok(())
}

/// Pushes the pool back below the container top if backward recycling placed slots above it.
///
/// Returns the overflow the host has to scroll by to keep the viewport on the same rows.
pub(crate) fn rebase<E>(pool: &mut Pool<E>, padding: &mut Padding) -> Option<f64> {
    let first_y = pool.first()?.translate_y;
    if first_y >= 0.0 {
        return None;
    }
    let overflow = -first_y;
    pool.shift_all(overflow);
    padding.top += overflow;
    Some(overflow)
}
