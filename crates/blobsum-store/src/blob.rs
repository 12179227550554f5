use std::fmt;

/// Names one blob inside one container.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlobRef {
    container: String,
    name:      String,
}

impl BlobRef {
    pub fn new(container: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            name:      name.into(),
        }
    }

    pub fn container(&self) -> &str { &self.container }

    pub fn name(&self) -> &str { &self.name }

    /// Blob in the same container whose name is this one plus `suffix`.
    pub fn sibling(&self, suffix: &str) -> Self {
        Self::new(self.container.clone(), format!("{}{suffix}", self.name))
    }

    /// Blob named `name` in the same container.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self::new(self.container.clone(), name)
    }
}

impl fmt::Display for BlobRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.container, self.name)
    }
}
