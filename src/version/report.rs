use std::fmt;

/// Local and remote versions of one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionReport {
    pub name: String,
    pub local_version: String,
    pub remote_version: String,
}

impl fmt::Display for VersionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  Local:  {}", self.local_version)?;
        writeln!(f, "  GitHub: {}", self.remote_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_three_line_block() {
        let report = VersionReport {
            name: "sendgrid-go".to_string(),
            local_version: "3.5.0".to_string(),
            remote_version: "3.6.1".to_string(),
        };

        assert_eq!(
            report.to_string(),
            "sendgrid-go\n  Local:  3.5.0\n  GitHub: 3.6.1\n"
        );
    }
}
