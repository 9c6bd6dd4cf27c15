/// Document ids are assigned by the content store at creation and stay
/// stable for the document's lifetime.
pub type DocId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
