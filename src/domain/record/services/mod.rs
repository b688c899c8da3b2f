// src/domain/record/services/mod.rs
use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::record::options::SlugFieldOptions;
use crate::domain::record::repository::RecordReadRepository;
use crate::domain::record::value_objects::{RecordFields, RecordId, Slug, SlugScope};

/// What the uniqueness probe starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugBasis {
    /// Normalize the `populate_from` fields.
    Source,
    /// Keep the slug the record already owns, unless it now collides.
    Existing(Slug),
}

/// Decides whether a save regenerates the slug or re-validates the one the
/// record already has.
pub fn choose_basis(
    current: Option<&Slug>,
    source_changed: bool,
    slug_overridden: bool,
    options: &SlugFieldOptions,
) -> SlugBasis {
    match current {
        None => SlugBasis::Source,
        Some(slug) if slug_overridden => SlugBasis::Existing(slug.clone()),
        Some(_) if options.overwrite() || source_changed => SlugBasis::Source,
        Some(slug) => SlugBasis::Existing(slug.clone()),
    }
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// Cuts `base` to `room` characters. A non-empty base never shrinks to
/// nothing: at least its first character survives, even if the suffix then
/// overruns `max_length`.
fn fit_stem(base: &str, room: usize, separator: &str) -> String {
    let stem = strip_separators(&truncate_chars(base, room), separator);
    if stem.is_empty() {
        return strip_separators(base, separator).chars().take(1).collect();
    }
    stem
}

/// Rewrites the default `-` to `separator`, collapses repeated separators
/// and trims them from both ends.
pub fn strip_separators(value: &str, separator: &str) -> String {
    let mut out = if separator == "-" {
        value.to_string()
    } else {
        value.replace('-', separator)
    };

    let doubled = format!("{separator}{separator}");
    while out.contains(&doubled) {
        out = out.replace(&doubled, separator);
    }

    out.trim_start_matches(separator)
        .trim_end_matches(separator)
        .to_string()
}

/// Normalized slug of the source fields, before any uniqueness suffix.
/// Missing fields count as empty text.
pub fn base_slug(
    generator: &dyn SlugGenerator,
    fields: &RecordFields,
    options: &SlugFieldOptions,
) -> String {
    let joined = options
        .populate_from()
        .iter()
        .map(|name| generator.slugify(fields.get(name).map(String::as_str).unwrap_or("")))
        .collect::<Vec<_>>()
        .join(options.separator());

    let bounded = match options.max_length() {
        Some(max) => truncate_chars(&joined, max),
        None => joined,
    };
    strip_separators(&bounded, options.separator())
}

/// Returns `base` when it is non-empty and free, otherwise the first of
/// `base-2`, `base-3`, ... that is not in `existing`. The stem is cut so
/// stem plus suffix fits `max_length`, down to a single character; past
/// that point the suffix makes the slug longer than `max_length`.
pub fn resolve_unique_slug(
    base: &str,
    existing: &HashSet<String>,
    options: &SlugFieldOptions,
) -> String {
    if !base.is_empty() && !existing.contains(base) {
        return base.to_string();
    }

    let separator = options.separator();
    let mut next: u64 = 2;
    loop {
        let end = format!("{separator}{next}");
        let mut stem = base.to_string();
        if let Some(max) = options.max_length() {
            let end_len = end.chars().count();
            if stem.chars().count() + end_len > max {
                stem = fit_stem(&stem, max.saturating_sub(end_len), separator);
            }
        }

        let candidate = format!("{stem}{end}");
        if !existing.contains(&candidate) {
            return candidate;
        }
        next += 1;
    }
}

/// `generate(source, existing, base_attempt)`: a slug derived from the
/// source fields (or from `base_attempt` when given) that is absent from
/// `existing`.
pub fn generate_slug(
    generator: &dyn SlugGenerator,
    fields: &RecordFields,
    existing: &HashSet<String>,
    base_attempt: Option<&str>,
    options: &SlugFieldOptions,
) -> String {
    let base = match base_attempt {
        Some(attempt) => attempt.to_string(),
        None => base_slug(generator, fields, options),
    };
    resolve_unique_slug(&base, existing, options)
}

/// Domain service responsible for producing unique slugs for records.
pub struct SlugService {
    read_repo: Arc<dyn RecordReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl SlugService {
    pub fn new(read_repo: Arc<dyn RecordReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn generate_unique_slug(
        &self,
        scope: &SlugScope,
        fields: &RecordFields,
        basis: &SlugBasis,
        ignore_id: Option<RecordId>,
        options: &SlugFieldOptions,
    ) -> DomainResult<Slug> {
        let base = match basis {
            SlugBasis::Source => base_slug(self.generator.as_ref(), fields, options),
            SlugBasis::Existing(slug) => slug.as_str().to_string(),
        };
        let existing = self.read_repo.existing_slugs(scope, ignore_id).await?;

        let slug = generate_slug(
            self.generator.as_ref(),
            fields,
            &existing,
            Some(&base),
            options,
        );
        if slug != base {
            debug!(scope = %scope, base = %base, slug = %slug, "slug taken, suffix appended");
        }

        Slug::new(slug)
    }
}
