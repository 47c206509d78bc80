/// Environment-like values the host tool knows before evaluation starts.
///
/// Unset slots are the empty string, never absent.
///
/// # Example
///
/// ```
/// use tfeval_core::Metadata;
///
/// let metadata = Metadata::default().with_environment("dev").with_workspace("dev");
/// assert_eq!(metadata.environment, "dev");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Metadata {
    /// Served as `terraform.env`.
    pub environment: String,
    /// Served as `terraform.workspace`.
    pub workspace: String,
}

impl Metadata {
    pub fn new(environment: impl Into<String>, workspace: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            workspace: workspace.into(),
        }
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    pub fn with_workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace = workspace.into();
        self
    }

    pub fn get(&self, slot: MetaSlot) -> &str {
        match slot {
            MetaSlot::Environment => &self.environment,
            MetaSlot::Workspace => &self.workspace,
        }
    }
}

/// A fixed metadata slot, addressed as `terraform.<name>`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MetaSlot {
    Environment,
    Workspace,
}

impl MetaSlot {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "env" => Some(MetaSlot::Environment),
            "workspace" => Some(MetaSlot::Workspace),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MetaSlot::Environment => "env",
            MetaSlot::Workspace => "workspace",
        }
    }
}
