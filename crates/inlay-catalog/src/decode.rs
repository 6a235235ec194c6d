//! Per-record volume decoding with partial-failure collection

use inlay_core::Book;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

/// Why one raw record failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` has the wrong type")]
    WrongType(&'static str),

    #[error("authors array is empty")]
    EmptyAuthors,
}

/// A raw record that could not become a [`Book`].
///
/// The record is kept exactly as fetched so a developer can inspect
/// the bad input; it never aborts the batch it arrived in.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeFailure {
    pub record: Value,
    pub cause: DecodeError,
}

/// Decode fetched volume records into books.
///
/// Each malformed record is logged with its cause and collected while
/// well-formed siblings decode normally. Multi-author volumes keep the
/// first author only.
pub fn decode_volumes(records: Vec<Value>) -> (Vec<Book>, Vec<DecodeFailure>) {
    let mut books = Vec::with_capacity(records.len());
    let mut failures = Vec::new();

    for record in records {
        match decode_volume(&record) {
            Ok(book) => books.push(book),
            Err(cause) => {
                let pretty = serde_json::to_string_pretty(&record)
                    .unwrap_or_else(|_| record.to_string());
                warn!(%cause, record = %pretty, "failed to decode volume");
                failures.push(DecodeFailure { record, cause });
            }
        }
    }

    (books, failures)
}

/// Decode a single volume record.
///
/// Required fields live in the record's `volumeInfo` sub-object:
/// `title`, `authors` (first entry taken), `description`,
/// `publishedDate`, and an integer `pageCount`. `subtitle` is optional
/// and ignored when it is not a string.
pub fn decode_volume(record: &Value) -> Result<Book, DecodeError> {
    let volume = record.as_object().ok_or(DecodeError::NotAnObject)?;
    let info = volume
        .get("volumeInfo")
        .ok_or(DecodeError::MissingField("volumeInfo"))?
        .as_object()
        .ok_or(DecodeError::WrongType("volumeInfo"))?;

    let authors = info
        .get("authors")
        .ok_or(DecodeError::MissingField("authors"))?
        .as_array()
        .ok_or(DecodeError::WrongType("authors"))?;
    let author = authors
        .first()
        .ok_or(DecodeError::EmptyAuthors)?
        .as_str()
        .ok_or(DecodeError::WrongType("authors"))?;

    Ok(Book {
        title: required_str(info, "title")?.to_string(),
        subtitle: info
            .get("subtitle")
            .and_then(Value::as_str)
            .map(str::to_string),
        author: author.to_string(),
        description: required_str(info, "description")?.to_string(),
        publish_date: required_str(info, "publishedDate")?.to_string(),
        page_count: info
            .get("pageCount")
            .ok_or(DecodeError::MissingField("pageCount"))?
            .as_i64()
            .ok_or(DecodeError::WrongType("pageCount"))?,
    })
}

fn required_str<'a>(
    info: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, DecodeError> {
    info.get(field)
        .ok_or(DecodeError::MissingField(field))?
        .as_str()
        .ok_or(DecodeError::WrongType(field))
}
