// src/domain/record/options.rs
use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_SEPARATOR: &str = "-";
pub const DEFAULT_MAX_LENGTH: usize = 50;
pub const DEFAULT_POPULATE_FROM: &str = "title";

/// Definition of an auto-populated slug field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugFieldOptions {
    populate_from: Vec<String>,
    separator: String,
    overwrite: bool,
    max_length: Option<usize>,
}

impl Default for SlugFieldOptions {
    fn default() -> Self {
        Self {
            populate_from: vec![DEFAULT_POPULATE_FROM.to_string()],
            separator: DEFAULT_SEPARATOR.to_string(),
            overwrite: false,
            max_length: Some(DEFAULT_MAX_LENGTH),
        }
    }
}

impl SlugFieldOptions {
    pub fn new<I, S>(populate_from: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let populate_from: Vec<String> = populate_from
            .into_iter()
            .map(|field| field.into().trim().to_string())
            .collect();

        if populate_from.is_empty() {
            return Err(DomainError::Validation(
                "populate_from requires at least one field".into(),
            ));
        }
        if populate_from.iter().any(String::is_empty) {
            return Err(DomainError::Validation(
                "populate_from field names cannot be empty".into(),
            ));
        }

        Ok(Self {
            populate_from,
            ..Self::default()
        })
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> DomainResult<Self> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(DomainError::Validation("separator cannot be empty".into()));
        }
        if separator.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::Validation(format!(
                "separator `{separator}` cannot contain letters or digits"
            )));
        }
        self.separator = separator;
        self.check_max_length(self.max_length)?;
        Ok(self)
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// `None` disables truncation. A bound must leave room for one
    /// character, the separator and a single-digit suffix.
    pub fn with_max_length(mut self, max_length: Option<usize>) -> DomainResult<Self> {
        self.check_max_length(max_length)?;
        self.max_length = max_length;
        Ok(self)
    }

    fn check_max_length(&self, max_length: Option<usize>) -> DomainResult<()> {
        let minimum = self.separator.chars().count() + 2;
        match max_length {
            Some(max) if max < minimum => Err(DomainError::Validation(format!(
                "max_length {max} leaves no room for `{}` and a suffix (minimum {minimum})",
                self.separator
            ))),
            _ => Ok(()),
        }
    }

    pub fn populate_from(&self) -> &[String] {
        &self.populate_from
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_a_title_field() {
        let options = SlugFieldOptions::default();
        assert_eq!(options.populate_from(), ["title".to_string()]);
        assert_eq!(options.separator(), "-");
        assert!(!options.overwrite());
        assert_eq!(options.max_length(), Some(50));
    }

    #[test]
    fn populate_from_is_required() {
        assert!(SlugFieldOptions::new(Vec::<String>::new()).is_err());
        assert!(SlugFieldOptions::new(["title", " "]).is_err());
        let options = SlugFieldOptions::new(["title", "subtitle"]).unwrap();
        assert_eq!(options.populate_from().len(), 2);
    }

    #[test]
    fn separator_rejects_alphanumerics() {
        let options = SlugFieldOptions::default();
        assert!(options.clone().with_separator("").is_err());
        assert!(options.clone().with_separator("x").is_err());
        assert_eq!(options.with_separator("_").unwrap().separator(), "_");
    }

    #[test]
    fn max_length_leaves_room_for_a_suffix() {
        let options = SlugFieldOptions::default();
        assert!(options.clone().with_max_length(Some(2)).is_err());
        assert_eq!(
            options.clone().with_max_length(Some(3)).unwrap().max_length(),
            Some(3)
        );
        assert_eq!(options.with_max_length(None).unwrap().max_length(), None);
    }

    #[test]
    fn longer_separator_is_checked_against_existing_max_length() {
        let tight = SlugFieldOptions::default()
            .with_max_length(Some(3))
            .unwrap();
        assert!(tight.clone().with_separator("__").is_err());
        assert_eq!(tight.with_separator("_").unwrap().max_length(), Some(3));

        let roomy = SlugFieldOptions::default()
            .with_max_length(Some(4))
            .unwrap()
            .with_separator("__")
            .unwrap();
        assert_eq!(roomy.separator(), "__");
        assert!(roomy.with_max_length(Some(3)).is_err());
    }
}
