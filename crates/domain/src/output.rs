use crate::reverse_name::trim_root_label;

/// How a resolved name is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `<address>\t<name>`
    #[default]
    Paired,
    /// `<name>` only.
    DomainOnly,
}

impl OutputMode {
    pub fn from_domain_only(domain_only: bool) -> Self {
        if domain_only {
            Self::DomainOnly
        } else {
            Self::Paired
        }
    }

    pub fn format_line(&self, address: &str, name: &str) -> String {
        let name = trim_root_label(name);
        match self {
            Self::Paired => format!("{}\t{}", address, name),
            Self::DomainOnly => name.to_string(),
        }
    }
}
