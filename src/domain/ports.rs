/// Supplies the roster for a draw.
pub trait RosterProvider {
    fn group_name(&self) -> &str;
    fn participants(&self) -> &[String];
}

/// An in-memory roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRoster {
    group: String,
    participants: Vec<String>,
}

impl StaticRoster {
    pub fn new<I, S>(group: impl Into<String>, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            group: group.into(),
            participants: participants.into_iter().map(Into::into).collect(),
        }
    }
}

impl RosterProvider for StaticRoster {
    fn group_name(&self) -> &str {
        &self.group
    }

    fn participants(&self) -> &[String] {
        &self.participants
    }
}
