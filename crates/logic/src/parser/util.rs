//! Helpers shared by the per-kind parsers.

use std::collections::BTreeSet;
use std::str::FromStr;

use medbook_core::DomainError;

use super::syntax::Prefix;
use super::tokenizer::ArgumentMultimap;
use crate::error::ParseError;
use crate::index::Index;

/// Parses the value of a prefix known to be present.
pub(crate) fn required<T>(map: &ArgumentMultimap, prefix: Prefix) -> Result<T, ParseError>
where
    T: FromStr<Err = DomainError>,
{
    Ok(map.value(prefix).unwrap_or_default().parse::<T>()?)
}

/// Parses the value of a prefix if it was given.
pub(crate) fn optional<T>(map: &ArgumentMultimap, prefix: Prefix) -> Result<Option<T>, ParseError>
where
    T: FromStr<Err = DomainError>,
{
    map.value(prefix)
        .map(|raw| raw.parse::<T>().map_err(ParseError::from))
        .transpose()
}

/// Parses every value of a repeatable prefix into a set.
pub(crate) fn set_of<T>(map: &ArgumentMultimap, prefix: Prefix) -> Result<BTreeSet<T>, ParseError>
where
    T: FromStr<Err = DomainError> + Ord,
{
    map.all_values(prefix)
        .iter()
        .map(|raw| raw.parse::<T>().map_err(ParseError::from))
        .collect()
}

/// Like [`set_of`] for edits: absent means "keep", a single empty value means "clear".
pub(crate) fn set_for_edit<T>(
    map: &ArgumentMultimap,
    prefix: Prefix,
) -> Result<Option<BTreeSet<T>>, ParseError>
where
    T: FromStr<Err = DomainError> + Ord,
{
    match map.all_values(prefix) {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => set_of(map, prefix).map(Some),
    }
}

/// Requires every prefix in `prefixes` and no preamble.
pub(crate) fn expect_fields(
    map: &ArgumentMultimap,
    prefixes: &[Prefix],
    usage: &'static str,
) -> Result<(), ParseError> {
    if !map.are_all_present(prefixes) || !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(usage));
    }
    Ok(())
}

/// The preamble as an index; any problem is reported as a format error.
pub(crate) fn preamble_index(map: &ArgumentMultimap, usage: &'static str) -> Result<Index, ParseError> {
    map.preamble()
        .parse::<Index>()
        .map_err(|_| ParseError::InvalidFormat(usage))
}

/// The whole argument string as an index.
pub(crate) fn sole_index(args: &str, usage: &'static str) -> Result<Index, ParseError> {
    args.parse::<Index>().map_err(|_| ParseError::InvalidFormat(usage))
}
