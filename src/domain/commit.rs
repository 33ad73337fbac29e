use chrono::NaiveDate;

/// A commit as reported by version control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Subject line of the commit message
    pub message: String,
    /// Abbreviated commit hash
    pub short_hash: String,
    /// Author name
    pub author: String,
    /// Author date
    pub date: NaiveDate,
}

impl CommitRecord {
    pub fn new(
        message: impl Into<String>,
        short_hash: impl Into<String>,
        author: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        CommitRecord {
            message: message.into(),
            short_hash: short_hash.into(),
            author: author.into(),
            date,
        }
    }
}
