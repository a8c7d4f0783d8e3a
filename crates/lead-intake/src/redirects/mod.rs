//! Permanent redirects from the legacy site's URLs.

mod layer;
mod legacy;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub use layer::{not_found, redirect_legacy_paths, with_legacy_redirects};

#[derive(Debug, Error)]
pub enum RedirectError {
    #[error("redirect source '{0}' must be an absolute path")]
    InvalidSource(String),
    #[error("redirect destination '{0}' must be an absolute path or http(s) URL")]
    InvalidDestination(String),
    #[error("'{0}' redirects to itself")]
    SelfRedirect(String),
    #[error("'{from}' is listed twice ('{first}' and '{second}')")]
    Duplicate {
        from: String,
        first: String,
        second: String,
    },
    #[error("'{from}' redirects to '{to}', which is itself redirected")]
    Chain { from: String, to: String },
    #[error("unable to read redirect csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("unable to open redirect csv: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Deserialize)]
struct RedirectRow {
    from: String,
    to: String,
}

/// Static `old path -> new path` lookup; every entry is a 301.
#[derive(Debug, Clone, Default)]
pub struct RedirectTable {
    entries: BTreeMap<String, String>,
}

impl RedirectTable {
    /// The built-in legacy table.
    pub fn standard() -> Self {
        let mut table = Self::default();
        for (from, to) in legacy::LEGACY_REDIRECTS {
            table.entries.insert((*from).to_string(), (*to).to_string());
        }
        table
    }

    pub fn from_entries<I, S>(entries: I) -> Result<Self, RedirectError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut table = Self::default();
        table.extend(entries)?;
        table.validate()?;
        Ok(table)
    }

    /// Add `from,to` rows (with header) on top of the current entries.
    pub fn with_csv<R: Read>(mut self, reader: R) -> Result<Self, RedirectError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.deserialize::<RedirectRow>() {
            let row = record?;
            rows.push((row.from, row.to));
        }

        self.extend(rows)?;
        self.validate()?;
        Ok(self)
    }

    pub fn with_csv_path(self, path: impl AsRef<Path>) -> Result<Self, RedirectError> {
        let file = File::open(path)?;
        self.with_csv(file)
    }

    fn extend<I, S>(&mut self, entries: I) -> Result<(), RedirectError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        for (from, to) in entries {
            let from = from.into();
            let to = to.into();
            if let Some(first) = self.entries.get(&from) {
                return Err(RedirectError::Duplicate {
                    first: first.clone(),
                    from,
                    second: to,
                });
            }
            self.entries.insert(from, to);
        }
        Ok(())
    }

    /// Reject entries a router could not serve as a single hop.
    pub fn validate(&self) -> Result<(), RedirectError> {
        for (from, to) in &self.entries {
            if !from.starts_with('/') {
                return Err(RedirectError::InvalidSource(from.clone()));
            }
            let external = to.starts_with("http://") || to.starts_with("https://");
            if !external && !to.starts_with('/') {
                return Err(RedirectError::InvalidDestination(to.clone()));
            }
            if normalize_path(from) == normalize_path(to) {
                return Err(RedirectError::SelfRedirect(from.clone()));
            }
            if !external && self.resolve(to).is_some() {
                return Err(RedirectError::Chain {
                    from: from.clone(),
                    to: to.clone(),
                });
            }
        }
        Ok(())
    }

    /// Exact match first, then the trailing-slash-insensitive form.
    pub fn resolve(&self, path: &str) -> Option<&str> {
        if let Some(to) = self.entries.get(path) {
            return Some(to.as_str());
        }

        let normalized = normalize_path(path);
        if normalized != path {
            return self.entries.get(normalized).map(String::as_str);
        }
        None
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
    }
}

pub fn normalize_path(path: &str) -> &str {
    if path.len() > 1 {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            "/"
        } else {
            trimmed
        }
    } else {
        path
    }
}
