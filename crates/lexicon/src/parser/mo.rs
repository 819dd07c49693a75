//! GNU MO (machine object) binary catalog codec.
//!
//! Layout, all words 32-bit in the file's byte order:
//!
//! | offset | field                                 |
//! |--------|---------------------------------------|
//! | 0      | magic `0x950412de`                    |
//! | 4      | revision (major in the high 16 bits)  |
//! | 8      | number of strings `N`                 |
//! | 12     | offset of original string table       |
//! | 16     | offset of translation string table    |
//! | 20     | hash table size (unused here)         |
//! | 24     | hash table offset (unused here)       |
//!
//! Each string table holds `N` `(length, offset)` pairs. Strings are stored
//! NUL-terminated but the length excludes the terminator.

use std::str::from_utf8;

use winnow::binary::{Endianness, u32 as word};
use winnow::combinator::repeat;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;

use super::ast::MoEntry;
use super::error::ParseError;

const MAGIC: u32 = 0x9504_12de;
const HEADER_LEN: usize = 28;
const TABLE_ENTRY_LEN: usize = 8;

struct MoHeader {
    revision: u32,
    count: u32,
    originals: u32,
    translations: u32,
}

/// Decode a `.mo` file into its raw entries, in table order.
pub fn parse_mo(bytes: &[u8]) -> Result<Vec<MoEntry>, ParseError> {
    let endian = endianness(bytes)?;

    let mut input = &bytes[4..];
    let header = header(&mut input, endian).map_err(|_| ParseError::Truncated {
        what: "header",
        offset: 0,
        len: bytes.len(),
    })?;

    let major = header.revision >> 16;
    if major > 1 {
        return Err(ParseError::UnsupportedRevision { major });
    }

    let count = header.count as usize;
    let originals = string_table(bytes, header.originals as usize, count, endian)?;
    let translations = string_table(bytes, header.translations as usize, count, endian)?;

    originals
        .into_iter()
        .zip(translations)
        .map(|((original_len, original_at), (translation_len, translation_at))| {
            Ok(MoEntry {
                original: string_at(bytes, original_len, original_at)?.to_string(),
                translation: string_at(bytes, translation_len, translation_at)?.to_string(),
            })
        })
        .collect()
}

/// Encode entries as a little-endian `.mo` file without a hash table.
///
/// Entries are written sorted by original string, which is the order GNU
/// tools expect for binary search.
pub fn write_mo(entries: &[MoEntry]) -> Vec<u8> {
    let mut sorted: Vec<&MoEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.original.as_bytes().cmp(b.original.as_bytes()));

    let count = sorted.len();
    let originals_at = HEADER_LEN;
    let translations_at = originals_at + count * TABLE_ENTRY_LEN;
    let strings_at = translations_at + count * TABLE_ENTRY_LEN;

    let mut tables = Vec::with_capacity(count * TABLE_ENTRY_LEN * 2);
    let mut strings = Vec::new();
    let originals = sorted.iter().map(|entry| entry.original.as_str());
    let translations = sorted.iter().map(|entry| entry.translation.as_str());
    for text in originals.chain(translations) {
        tables.extend_from_slice(&le_word(text.len()));
        tables.extend_from_slice(&le_word(strings_at + strings.len()));
        strings.extend_from_slice(text.as_bytes());
        strings.push(0);
    }

    let mut out = Vec::with_capacity(strings_at + strings.len());
    out.extend_from_slice(&MAGIC.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&le_word(count));
    out.extend_from_slice(&le_word(originals_at));
    out.extend_from_slice(&le_word(translations_at));
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&le_word(strings_at));
    out.extend_from_slice(&tables);
    out.extend_from_slice(&strings);
    out
}

// MO offsets are 32-bit; catalogs never approach 4 GiB.
fn le_word(value: usize) -> [u8; 4] {
    (value as u32).to_le_bytes()
}

fn endianness(bytes: &[u8]) -> Result<Endianness, ParseError> {
    let Some(magic) = bytes.first_chunk::<4>() else {
        return Err(ParseError::Truncated {
            what: "magic number",
            offset: 0,
            len: bytes.len(),
        });
    };
    if u32::from_le_bytes(*magic) == MAGIC {
        Ok(Endianness::Little)
    } else if u32::from_be_bytes(*magic) == MAGIC {
        Ok(Endianness::Big)
    } else {
        Err(ParseError::BadMagic {
            found: u32::from_le_bytes(*magic),
        })
    }
}

fn header(input: &mut &[u8], endian: Endianness) -> ModalResult<MoHeader> {
    let revision = read_word(input, endian)?;
    let count = read_word(input, endian)?;
    let originals = read_word(input, endian)?;
    let translations = read_word(input, endian)?;
    Ok(MoHeader {
        revision,
        count,
        originals,
        translations,
    })
}

fn read_word(input: &mut &[u8], endian: Endianness) -> ModalResult<u32> {
    word(endian).parse_next(input)
}

fn table_entry(input: &mut &[u8], endian: Endianness) -> ModalResult<(usize, usize)> {
    let len = read_word(input, endian)?;
    let offset = read_word(input, endian)?;
    Ok((len as usize, offset as usize))
}

/// Read `count` `(length, offset)` pairs starting at `at`.
fn string_table(
    bytes: &[u8],
    at: usize,
    count: usize,
    endian: Endianness,
) -> Result<Vec<(usize, usize)>, ParseError> {
    let truncated = ParseError::Truncated {
        what: "string table",
        offset: at,
        len: bytes.len(),
    };
    let end = count
        .checked_mul(TABLE_ENTRY_LEN)
        .and_then(|size| size.checked_add(at))
        .ok_or_else(|| truncated.clone())?;
    let Some(mut table) = bytes.get(at..end) else {
        return Err(truncated);
    };
    repeat(count, |input: &mut &[u8]| table_entry(input, endian))
        .parse_next(&mut table)
        .map_err(|_: ErrMode<ContextError>| truncated)
}

fn string_at(bytes: &[u8], len: usize, offset: usize) -> Result<&str, ParseError> {
    let slice = offset
        .checked_add(len)
        .and_then(|end| bytes.get(offset..end))
        .ok_or(ParseError::Truncated {
            what: "string",
            offset,
            len: bytes.len(),
        })?;
    from_utf8(slice).map_err(|_| ParseError::InvalidUtf8)
}
