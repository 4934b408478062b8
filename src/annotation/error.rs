/// Errors raised while decoding an annotation fragment back into a record.
///
/// Unknown tags and attributes are not errors; they are skipped for forward
/// compatibility. Nothing here is ever coerced to a default value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A value is present but cannot be parsed (e.g. non-numeric text in a
    /// numeric field)
    #[error("malformed value in `{0}`")]
    MalformedField(String),

    /// An enum field carries a token outside its static match table
    #[error("unrecognized enum token `{0}`")]
    UnknownEnumToken(String),

    /// A mandatory anchor tag is absent (e.g. a model annotation without its
    /// id tag)
    #[error("missing required child `{0}`")]
    MissingRequiredChild(String),
}
