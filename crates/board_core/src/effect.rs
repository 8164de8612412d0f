#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run `query` against the data source and report back tagged with `fingerprint`.
    Fetch {
        fingerprint: crate::QueryFingerprint,
        query: crate::Query,
    },
    /// Hand navigation to the router: `/{kind}/{id}`.
    NavigateToDetail { kind: String, id: String },
}

impl Effect {
    pub fn detail_path(kind: &str, id: &str) -> String {
        format!("/{kind}/{id}")
    }
}
