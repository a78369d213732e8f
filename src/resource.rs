//! Resource kinds served by the API and their path segments.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Package,
    Customer,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Package, ResourceKind::Customer];

    /// First path segment, e.g. `packages` in `/packages/3`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            ResourceKind::Package => "packages",
            ResourceKind::Customer => "customers",
        }
    }

    /// Capitalised singular used in error and delete messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::Package => "Package",
            ResourceKind::Customer => "Customer",
        }
    }

    pub fn from_path_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.path_segment() == segment)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path_segment())
    }
}
