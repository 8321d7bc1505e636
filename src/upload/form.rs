//! Multipart form for the upload endpoint.

use crate::{Error, Result};
use reqwest::multipart::{Form, Part};

/// Form field the upload endpoint reads the audio from.
pub(crate) const AUDIO_FIELD: &str = "audio";

const PART_CONTENT_TYPE: &str = "application/octet-stream";

/// Build a form holding `content` as a single file part under [`AUDIO_FIELD`].
pub(crate) fn audio_form(filename: &str, content: &[u8]) -> Result<Form> {
    let part = Part::bytes(content.to_vec())
        .file_name(part_file_name(filename))
        .mime_str(PART_CONTENT_TYPE)
        .map_err(|e| Error::configuration(format!("Invalid mime: {}", e)))?;
    Ok(Form::new().part(AUDIO_FIELD, part))
}

/// File name as it may appear inside a part header: control characters
/// (CR and LF in particular) would end the header line, so they become `_`.
pub(crate) fn part_file_name(filename: &str) -> String {
    filename
        .chars()
        .map(|c| if c.is_control() { '_' } else { c })
        .collect()
}
