//! The emitted page unit.

/// Content type attached to every emitted page.
pub const PAGE_CONTENT_TYPE: &str = "application/json";

/// One non-empty page of user records, as fetched from the listing
/// endpoint.
///
/// The body is the raw response — a JSON array of user objects — passed
/// through unmodified. The exporter parses it only to count elements;
/// downstream consumers own the interpretation of the records (see
/// [`UserRepresentation`](crate::UserRepresentation) for the field
/// contract).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPage {
    /// Offset (`first` query parameter) this page was fetched at.
    pub offset: u32,
    /// Number of user records in the body.
    pub count: usize,
    /// Raw response bytes, a JSON array.
    pub body: Vec<u8>,
}

impl UserPage {
    /// Returns the content type of the page body.
    pub fn content_type(&self) -> &'static str {
        PAGE_CONTENT_TYPE
    }
}
