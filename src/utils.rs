use crate::error::ConvertError;

/// Left-justifies `value` in a fixed-width, space-padded ASCII field, the way
/// every EDF header field is encoded (`spec.md` §4.J).
pub(crate) fn pad_string(value: &str, size: usize) -> Result<String, ConvertError> {
    if value.len() > size {
        return Err(ConvertError::FieldTooLong);
    }
    if !is_printable_ascii(value) {
        return Err(ConvertError::NonAsciiField);
    }
    let padding = " ".repeat(size - value.len());
    Ok(format!("{value}{padding}"))
}

pub(crate) fn is_printable_ascii(s: &str) -> bool {
    s.bytes().all(|b| matches!(b, 0x20..=0x7E))
}
