//! Catalog content checks.
//!
//! The generator treats bodies as opaque text and rewrites every `location`
//! substring in location-aware bodies. These checks point at catalog content
//! that would survive generation but most likely miscompile downstream.

use std::fmt;
use uniform_types::{
    keyed_entries, CatalogEntry, EntryKey, FunctionFamily, KeyedCatalog, ParserDescriptor, TemplateBody,
    UboCatalogs, UniformCatalogs, LOCATION_TOKEN,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintKind {
    /* `location` embedded in a longer identifier or a member access */
    IncidentalLocation { offset: usize },
    /* Location-aware body that never mentions `location` */
    MissingLocation,
    /* Body is empty or whitespace only */
    EmptyBody,
    /* Parser descriptor has no `uniform` body */
    MissingUniformBody,
    /* Parser descriptor has neither `uboWgsl` nor `ubo` */
    MissingUboBody,
    /* Key that cannot sit inside a single-quoted table key as is */
    UnquotableKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintFinding {
    pub family: FunctionFamily,
    /* Type key, or `#<index>` for ordered catalogs */
    pub entry: String,
    pub kind: LintKind,
}

impl fmt::Display for LintFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let catalog = self.family.catalog_name();
        match &self.kind {
            LintKind::IncidentalLocation { offset } => write!(
                f,
                "{} [{}]: '{}' at byte {} is part of a longer token and will be rewritten too",
                catalog, self.entry, LOCATION_TOKEN, offset
            ),
            LintKind::MissingLocation => write!(
                f,
                "{} [{}]: body never references '{}'",
                catalog, self.entry, LOCATION_TOKEN
            ),
            LintKind::EmptyBody => write!(f, "{} [{}]: body is empty", catalog, self.entry),
            LintKind::MissingUniformBody => write!(
                f,
                "{} [{}]: descriptor has no 'uniform' body",
                catalog, self.entry
            ),
            LintKind::MissingUboBody => write!(
                f,
                "{} [{}]: descriptor has neither 'uboWgsl' nor 'ubo' body",
                catalog, self.entry
            ),
            LintKind::UnquotableKey => write!(
                f,
                "{} [{:?}]: key contains a quote, backslash or line break and will not be a valid table key",
                catalog, self.entry
            ),
        }
    }
}

/* Lint the catalogs of the uniform function pass */
pub fn lint_uniform_catalogs(catalogs: &UniformCatalogs) -> Vec<LintFinding> {
    let mut findings = Vec::new();

    lint_keyed(FunctionFamily::SingleSetter, &catalogs.single_setters, &mut findings);
    lint_keyed(FunctionFamily::ArraySetter, &catalogs.array_setters, &mut findings);
    lint_parsers(
        FunctionFamily::UniformParser,
        &catalogs.parsers,
        |parser| parser.uniform.as_ref(),
        LintKind::MissingUniformBody,
        &mut findings,
    );

    findings
}

/* Lint the catalogs of the uniform buffer function pass */
pub fn lint_ubo_catalogs(catalogs: &UboCatalogs) -> Vec<LintFinding> {
    let mut findings = Vec::new();

    lint_parsers(
        FunctionFamily::UboParser,
        &catalogs.parsers,
        ParserDescriptor::buffer_body,
        LintKind::MissingUboBody,
        &mut findings,
    );
    lint_keyed(FunctionFamily::UboSingleWgsl, &catalogs.wgsl_setters, &mut findings);
    lint_keyed(FunctionFamily::UboSingleStd40, &catalogs.std40_setters, &mut findings);

    findings
}

fn lint_keyed(family: FunctionFamily, catalog: &KeyedCatalog, findings: &mut Vec<LintFinding>) {
    for entry in keyed_entries(catalog) {
        if let EntryKey::Named(key) = entry.key {
            if !is_quotable_key(key) {
                findings.push(LintFinding {
                    family,
                    entry: key.to_string(),
                    kind: LintKind::UnquotableKey,
                });
            }
        }
        lint_entry(family, entry, findings);
    }
}

/* Keys are emitted between single quotes without escaping */
fn is_quotable_key(key: &str) -> bool {
    !key.contains(['\'', '\\', '\n', '\r'])
}

fn lint_parsers<'a>(
    family: FunctionFamily,
    parsers: &'a [ParserDescriptor],
    select: impl Fn(&'a ParserDescriptor) -> Option<&'a TemplateBody>,
    missing: LintKind,
    findings: &mut Vec<LintFinding>,
) {
    for (index, parser) in parsers.iter().enumerate() {
        match select(parser) {
            Some(body) => lint_entry(family, CatalogEntry::indexed(index, body), findings),
            None => findings.push(LintFinding {
                family,
                entry: format!("#{}", index),
                kind: missing.clone(),
            }),
        }
    }
}

fn lint_entry(family: FunctionFamily, entry: CatalogEntry<'_>, findings: &mut Vec<LintFinding>) {
    let push = |findings: &mut Vec<LintFinding>, kind| {
        findings.push(LintFinding {
            family,
            entry: entry.key.to_string(),
            kind,
        })
    };

    if entry.body.is_blank() {
        push(findings, LintKind::EmptyBody);
        return;
    }

    if !family.is_location_aware() {
        return;
    }

    let body = entry.body.as_str();
    for offset in incidental_offsets(body) {
        push(findings, LintKind::IncidentalLocation { offset });
    }

    if !body.contains(LOCATION_TOKEN) {
        push(findings, LintKind::MissingLocation);
    }
}

/* Byte offsets of `location` occurrences that are not standalone identifiers */
fn incidental_offsets(body: &str) -> Vec<usize> {
    let mut offsets = Vec::new();

    for (offset, token) in body.match_indices(LOCATION_TOKEN) {
        let before = body[..offset].chars().next_back();
        let after = body[offset + token.len()..].chars().next();

        let glued_before = before.is_some_and(|c| is_ident_char(c) || c == '.');
        let glued_after = after.is_some_and(is_ident_char);

        if glued_before || glued_after {
            offsets.push(offset);
        }
    }

    offsets
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
