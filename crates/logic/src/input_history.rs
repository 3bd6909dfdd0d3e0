/// Raw command lines entered during the session, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputHistory {
    entries: Vec<String>,
}

impl InputHistory {
    pub fn record(&mut self, input: impl Into<String>) {
        self.entries.push(input.into());
    }

    pub fn most_recent_first(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
