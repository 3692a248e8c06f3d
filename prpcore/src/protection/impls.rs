use std::str::FromStr;
use crate::error::SourceError;
use super::*;

impl Section {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            .. Default::default()
        }
    }
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl FromIterator<Section> for ProtectionSource {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        Self {
            sections: iter.into_iter().collect(),
        }
    }
}

impl FromStr for ProtectionSource {
    type Err = SourceError;

    /// Parses the INI-style rule format: `[header]` lines open a new
    /// section, `key = value` lines attach entries to the section that
    /// opened most recently.  Blank lines and lines starting with `#`
    /// or `;` are skipped.  Keys are lowercased; header text and values
    /// are kept verbatim apart from whitespace trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut sections: Vec<Section> = Vec::new();
        for (idx, line) in s.lines().enumerate() {
            let lineno = idx + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(header) = line
                .strip_prefix('[')
                .and_then(|line| line.strip_suffix(']'))
            {
                sections.push(Section::new(header.trim()));
            } else if line.starts_with('[') {
                return Err(SourceError::MalformedEntry(lineno));
            } else if let Some((key, value)) = line.split_once('=') {
                sections.last_mut()
                    .ok_or(SourceError::MissingSectionHeader(lineno))?
                    .entries
                    .push(Entry::new(key.trim().to_lowercase(), value.trim()));
            } else {
                return Err(SourceError::MalformedEntry(lineno));
            }
        }
        Ok(sections.into_iter().collect())
    }
}
