//! Modification-time based staleness checks

use filetime::FileTime;
use pct_fs::{NormalizedPath, io};

use crate::{Error, Result};

/// Check whether `target` is at least as recent as every existing source.
///
/// A missing target is never up to date. Sources that do not exist are
/// left out of the comparison, but at least one must exist: with nothing
/// to compare against the answer is undefined and
/// [`Error::EmptySourceSet`] is returned. Equal timestamps count as up to
/// date.
pub fn is_up_to_date<'a, I>(target: &NormalizedPath, sources: I) -> Result<bool>
where
    I: IntoIterator<Item = &'a NormalizedPath>,
{
    let Some(target_time) = io::modified(target)? else {
        return Ok(false);
    };

    let mut newest: Option<FileTime> = None;
    for source in sources {
        if let Some(source_time) = io::modified(source)? {
            newest = Some(newest.map_or(source_time, |n| n.max(source_time)));
        }
    }

    let newest = newest.ok_or_else(|| Error::EmptySourceSet {
        target: target.to_native(),
    })?;

    Ok(target_time >= newest)
}
