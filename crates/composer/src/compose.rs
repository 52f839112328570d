//! Deterministic prompt composition.
//!
//! # Algorithm
//!
//! 1. Filter the bucket to enabled entries
//! 2. Sort ascending by `added_at` (stable — ties keep input order)
//! 3. Resolve each entry's catalog item, failing fast on a dangling id
//! 4. Expand each item's template placeholders
//! 5. Assemble the fixed section blocks around the numbered instructions
//!
//! Composition order is governed by `added_at` alone: an entry's position in
//! the bucket sequence never affects the numbered list.

use crate::{sections, token};
use promptloom_core::bucket::BucketEntry;
use promptloom_core::catalog::{CatalogItem, find_item};
use promptloom_core::error::ComposeError;
use promptloom_core::vars::BucketVars;
use serde::{Deserialize, Serialize};

/// The composed document plus its size metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeResult {
    /// The full document text.
    pub prompt: String,

    /// Character count of `prompt` (Unicode scalar values).
    pub char_count: usize,

    /// `ceil(char_count / 4)` — a heuristic, not a real tokenizer.
    pub estimated_tokens: usize,

    /// True when the concise fallback replaced the full boilerplate.
    #[serde(default)]
    pub condensed: bool,
}

/// An enabled bucket entry paired with its resolved catalog item.
struct ResolvedEntry<'a> {
    entry: &'a BucketEntry,
    item: &'a CatalogItem,
}

/// Compose the full document from the enabled bucket entries.
///
/// An empty enabled bucket still yields a well-formed document with zero
/// instruction lines. A bucket entry whose id has no catalog item fails the
/// whole call with [`ComposeError::ItemNotFound`].
pub fn compose_prompt(
    bucket: &[BucketEntry],
    catalog: &[CatalogItem],
    vars: &BucketVars,
) -> Result<ComposeResult, ComposeError> {
    let resolved = resolve_entries(bucket, catalog)?;
    let backend = has_backend_components(&resolved);

    let system_block = format!("{}\n\n{}", sections::SYSTEM_PREAMBLE, context_line(vars));

    let mut lines: Vec<String> = vec![system_block, String::new(), "Instructions:".into()];
    lines.extend(numbered_instructions(&resolved, vars));
    lines.push(String::new());
    lines.push(
        if backend {
            sections::CONSTRAINTS_BACKEND
        } else {
            sections::CONSTRAINTS_FRONTEND
        }
        .into(),
    );
    lines.push(
        if backend {
            sections::OUTPUT_FORMAT_BACKEND
        } else {
            sections::OUTPUT_FORMAT_FRONTEND
        }
        .into(),
    );
    lines.push(String::new());
    lines.push(sections::FINISH.into());

    Ok(into_result(lines.join("\n"), false))
}

/// Compose the document, degrading to terse boilerplate past the size
/// threshold.
///
/// Under the threshold this is exactly [`compose_prompt`]. Over it, the
/// instruction lines are kept verbatim — only the surrounding fixed sections
/// shrink — so the result may still exceed the threshold when the
/// instructions alone do.
pub fn create_concise_prompt(
    bucket: &[BucketEntry],
    catalog: &[CatalogItem],
    vars: &BucketVars,
) -> Result<ComposeResult, ComposeError> {
    let full = compose_prompt(bucket, catalog, vars)?;
    if full.char_count <= sections::CONCISE_THRESHOLD {
        return Ok(full);
    }

    let resolved = resolve_entries(bucket, catalog)?;
    let backend = has_backend_components(&resolved);

    let system_block = format!(
        "{}\n\n{}",
        sections::CONCISE_SYSTEM_PREAMBLE,
        concise_context_line(vars)
    );

    let mut lines: Vec<String> = vec![system_block, String::new(), "Instructions:".into()];
    lines.extend(numbered_instructions(&resolved, vars));
    lines.push(String::new());
    lines.push(
        if backend {
            sections::CONCISE_CONSTRAINTS_BACKEND
        } else {
            sections::CONCISE_CONSTRAINTS_FRONTEND
        }
        .into(),
    );
    lines.push(
        if backend {
            sections::CONCISE_OUTPUT_BACKEND
        } else {
            sections::CONCISE_OUTPUT_FRONTEND
        }
        .into(),
    );
    lines.push(sections::CONCISE_FINISH.into());

    Ok(into_result(lines.join("\n"), true))
}

// ── Pipeline stages ───────────────────────────────────────────────────────

/// Filter to enabled entries, sort by insertion time, resolve catalog items.
fn resolve_entries<'a>(
    bucket: &'a [BucketEntry],
    catalog: &'a [CatalogItem],
) -> Result<Vec<ResolvedEntry<'a>>, ComposeError> {
    let mut enabled: Vec<&BucketEntry> = bucket.iter().filter(|e| e.enabled).collect();
    enabled.sort_by_key(|e| e.added_at);

    enabled
        .into_iter()
        .map(|entry| {
            find_item(catalog, &entry.id)
                .map(|item| ResolvedEntry { entry, item })
                .ok_or_else(|| ComposeError::ItemNotFound(entry.id.clone()))
        })
        .collect()
}

/// Expand `[name]` placeholders in an item's template.
///
/// Variables are substituted in their declared order, each replacing only
/// the first occurrence of its token in the evolving text. A repeated
/// placeholder keeps its later occurrences unexpanded.
fn expand_template(item: &CatalogItem, vars: &BucketVars) -> String {
    let mut expanded = item.template.clone();
    for name in &item.variables {
        let placeholder = format!("[{name}]");
        expanded = expanded.replacen(&placeholder, vars.resolve(name), 1);
    }
    expanded
}

fn numbered_instructions(resolved: &[ResolvedEntry<'_>], vars: &BucketVars) -> Vec<String> {
    resolved
        .iter()
        .enumerate()
        .map(|(index, r)| {
            format!(
                "{}. {}: {} - {}",
                index + 1,
                r.item.title,
                expand_template(r.item, vars),
                r.entry.intent
            )
        })
        .collect()
}

fn has_backend_components(resolved: &[ResolvedEntry<'_>]) -> bool {
    resolved.iter().any(|r| r.item.is_backend())
}

fn context_line(vars: &BucketVars) -> String {
    format!(
        "Context: Project uses {} + {} + {}. Deploy to {}.",
        vars.resolve("framework"),
        vars.resolve("language"),
        vars.resolve("database"),
        vars.resolve("platform")
    )
}

fn concise_context_line(vars: &BucketVars) -> String {
    format!(
        "Context: {} + {} + {}. Deploy: {}.",
        vars.resolve("framework"),
        vars.resolve("language"),
        vars.resolve("database"),
        vars.resolve("platform")
    )
}

fn into_result(prompt: String, condensed: bool) -> ComposeResult {
    let char_count = token::char_count(&prompt);
    let estimated_tokens = token::estimate_tokens(&prompt);
    ComposeResult {
        prompt,
        char_count,
        estimated_tokens,
        condensed,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Helpers ────────────────────────────────────────────────────────

    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem {
                id: "product-card".into(),
                title: "Product Card".into(),
                category: "UI / Frontend".into(),
                subcategory: Some("Components".into()),
                description: "Responsive product card".into(),
                template: "Create a responsive [framework] product card with image, title, price, and an 'Add to cart' button. Use [style]. Props: { id, imageUrl, title, price, onAdd }. Make accessible with aria labels.".into(),
                variables: vec!["framework".into(), "style".into()],
                business_intents: vec![],
            },
            CatalogItem {
                id: "testimonial-carousel".into(),
                title: "Testimonial Carousel".into(),
                category: "UI / Frontend".into(),
                subcategory: Some("Components".into()),
                description: "Accessible testimonial carousel".into(),
                template: "A testimonial carousel component that accepts an array of { name, photo, quote }. Autoplay optional, accessible controls. No external carousel libraries.".into(),
                variables: vec![],
                business_intents: vec![],
            },
            CatalogItem {
                id: "rest-api-endpoint".into(),
                title: "REST API Endpoint".into(),
                category: "Backend / Database".into(),
                subcategory: Some("API".into()),
                description: "Validated JSON endpoint".into(),
                template: "A REST API endpoint in [language] that validates input and returns JSON with proper status codes.".into(),
                variables: vec!["language".into()],
                business_intents: vec![],
            },
        ]
    }

    fn entry(id: &str, intent: &str, added_at: i64) -> BucketEntry {
        BucketEntry {
            id: id.into(),
            intent: intent.into(),
            primary: false,
            enabled: true,
            added_at,
        }
    }

    fn bucket() -> Vec<BucketEntry> {
        vec![
            entry("product-card", "showing testimonials on product page", 1000),
            entry("testimonial-carousel", "notify on add", 2000),
        ]
    }

    fn vars() -> BucketVars {
        BucketVars::default()
    }

    // ── Full composition ───────────────────────────────────────────────

    #[test]
    fn composes_the_expected_document_structure() {
        let result = compose_prompt(&bucket(), &catalog(), &vars()).unwrap();

        assert!(result.prompt.starts_with(
            "System: You are an AI assistant that writes production-ready code."
        ));
        assert!(result
            .prompt
            .contains("Context: Project uses React + TypeScript + database. Deploy to platform."));
        assert!(result.prompt.contains("Instructions:"));
        assert!(result.prompt.contains("1. Product Card: Create a responsive React product card"));
        assert!(result
            .prompt
            .contains("2. Testimonial Carousel: A testimonial carousel component"));
        assert!(result.prompt.contains("Constraints: No external animation libraries"));
        assert!(result.prompt.contains("Output format: \"Return files and code in code blocks"));
        assert!(result.prompt.contains("Finish: \"If you cannot implement an item as specified"));
    }

    #[test]
    fn context_line_interpolates_set_variables() {
        let vars = BucketVars {
            database: Some("Postgres".into()),
            platform: Some("Vercel".into()),
            ..BucketVars::default()
        };
        let result = compose_prompt(&bucket(), &catalog(), &vars).unwrap();
        assert!(result
            .prompt
            .contains("Context: Project uses React + TypeScript + Postgres. Deploy to Vercel."));
    }

    #[test]
    fn expands_variables_in_templates() {
        let result = compose_prompt(&bucket(), &catalog(), &vars()).unwrap();

        assert!(result.prompt.contains("Create a responsive React product card"));
        assert!(result.prompt.contains("Use Tailwind."));
        assert!(!result.prompt.contains("[framework]"));
        assert!(!result.prompt.contains("[style]"));
    }

    #[test]
    fn includes_user_intent_in_instructions() {
        let result = compose_prompt(&bucket(), &catalog(), &vars()).unwrap();

        assert!(result.prompt.contains("showing testimonials on product page"));
        assert!(result.prompt.contains("notify on add"));
    }

    #[test]
    fn numbering_follows_added_at_not_input_order() {
        let mut reversed = bucket();
        reversed.reverse();
        let result = compose_prompt(&reversed, &catalog(), &vars()).unwrap();

        let card = result.prompt.find("1. Product Card:").unwrap();
        let carousel = result.prompt.find("2. Testimonial Carousel:").unwrap();
        assert!(card < carousel);
    }

    #[test]
    fn input_order_breaks_added_at_ties() {
        let bucket = vec![
            entry("testimonial-carousel", "tie first", 1000),
            entry("product-card", "tie second", 1000),
        ];
        let result = compose_prompt(&bucket, &catalog(), &vars()).unwrap();

        assert!(result.prompt.contains("1. Testimonial Carousel:"));
        assert!(result.prompt.contains("2. Product Card:"));
    }

    #[test]
    fn disabled_entries_are_filtered_out() {
        let mut bucket = bucket();
        bucket.push(BucketEntry {
            id: "product-card".into(),
            intent: "disabled item".into(),
            primary: false,
            enabled: false,
            added_at: 3000,
        });

        let result = compose_prompt(&bucket, &catalog(), &vars()).unwrap();
        assert!(!result.prompt.contains("disabled item"));
        assert!(result.prompt.contains("1. Product Card:"));
        assert!(result.prompt.contains("2. Testimonial Carousel:"));
        assert!(!result.prompt.contains("3."));
    }

    #[test]
    fn disabled_entry_leaves_no_trace_of_its_item() {
        let catalog = vec![
            catalog().remove(0),
            CatalogItem {
                id: "hidden-widget".into(),
                title: "Hidden Widget".into(),
                category: "UI / Frontend".into(),
                subcategory: None,
                description: String::new(),
                template: "An entirely unmistakable widget template.".into(),
                variables: vec![],
                business_intents: vec![],
            },
        ];
        let bucket = vec![
            entry("product-card", "hero", 1000),
            BucketEntry {
                id: "hidden-widget".into(),
                intent: "secret usage".into(),
                primary: false,
                enabled: false,
                added_at: 2000,
            },
        ];

        let result = compose_prompt(&bucket, &catalog, &vars()).unwrap();
        assert!(!result.prompt.contains("secret usage"));
        assert!(!result.prompt.contains("Hidden Widget"));
        assert!(!result.prompt.contains("unmistakable widget"));
    }

    #[test]
    fn duplicate_entries_compose_independently() {
        let bucket = vec![
            entry("product-card", "for the landing page", 1000),
            entry("product-card", "for the checkout page", 2000),
        ];
        let result = compose_prompt(&bucket, &catalog(), &vars()).unwrap();

        assert!(result.prompt.contains("1. Product Card:"));
        assert!(result.prompt.contains("2. Product Card:"));
        assert!(result.prompt.contains("for the landing page"));
        assert!(result.prompt.contains("for the checkout page"));
    }

    #[test]
    fn backend_component_switches_boilerplate() {
        let bucket = vec![entry("rest-api-endpoint", "order submission", 1000)];
        let result = compose_prompt(&bucket, &catalog(), &vars()).unwrap();

        assert!(result.prompt.contains(sections::CONSTRAINTS_BACKEND));
        assert!(result.prompt.contains(sections::OUTPUT_FORMAT_BACKEND));
        assert!(!result.prompt.contains(sections::CONSTRAINTS_FRONTEND));
    }

    #[test]
    fn frontend_only_bucket_uses_frontend_boilerplate() {
        let result = compose_prompt(&bucket(), &catalog(), &vars()).unwrap();

        assert!(result.prompt.contains(sections::CONSTRAINTS_FRONTEND));
        assert!(result.prompt.contains(sections::OUTPUT_FORMAT_FRONTEND));
        assert!(!result.prompt.contains(sections::CONSTRAINTS_BACKEND));
        assert!(!result.prompt.contains(sections::OUTPUT_FORMAT_BACKEND));
    }

    #[test]
    fn size_metrics_match_the_document() {
        let result = compose_prompt(&bucket(), &catalog(), &vars()).unwrap();

        assert_eq!(result.char_count, result.prompt.chars().count());
        assert_eq!(result.estimated_tokens, result.char_count.div_ceil(4));
        assert!(!result.condensed);
    }

    #[test]
    fn missing_catalog_item_fails_with_the_offending_id() {
        let bucket = vec![entry("ghost", "test", 1000)];
        let err = compose_prompt(&bucket, &catalog(), &vars()).unwrap_err();

        assert_eq!(err, ComposeError::ItemNotFound("ghost".into()));
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn dangling_reference_fails_even_with_valid_neighbours() {
        let mut bucket = bucket();
        bucket.push(entry("ghost", "test", 500));

        assert!(compose_prompt(&bucket, &catalog(), &vars()).is_err());
    }

    #[test]
    fn empty_bucket_still_produces_a_well_formed_document() {
        let result = compose_prompt(&[], &catalog(), &vars()).unwrap();

        assert!(result.prompt.contains("Instructions:"));
        assert!(!result.prompt.contains("1."));
        assert!(result.prompt.contains(sections::CONSTRAINTS_FRONTEND));
        assert!(result.prompt.contains(sections::FINISH));
        assert!(result.char_count > 0);
    }

    #[test]
    fn composition_is_deterministic() {
        let first = compose_prompt(&bucket(), &catalog(), &vars()).unwrap();
        let second = compose_prompt(&bucket(), &catalog(), &vars()).unwrap();
        assert_eq!(first, second);
    }

    // ── Placeholder expansion edge cases ───────────────────────────────

    fn single_item_catalog(template: &str, variables: Vec<String>) -> Vec<CatalogItem> {
        vec![CatalogItem {
            id: "widget".into(),
            title: "Widget".into(),
            category: "UI / Frontend".into(),
            subcategory: None,
            description: String::new(),
            template: template.into(),
            variables,
            business_intents: vec![],
        }]
    }

    #[test]
    fn substitutes_declared_placeholders_exactly() {
        let catalog = single_item_catalog(
            "Use [framework] and [style].",
            vec!["framework".into(), "style".into()],
        );
        let bucket = vec![entry("widget", "x", 1000)];
        let result = compose_prompt(&bucket, &catalog, &vars()).unwrap();

        assert!(result.prompt.contains("Use React and Tailwind."));
        assert!(!result.prompt.contains("[framework]"));
        assert!(!result.prompt.contains("[style]"));
    }

    #[test]
    fn unknown_variable_falls_back_to_its_name() {
        let catalog = single_item_catalog("Deploy with [missing].", vec!["missing".into()]);
        let bucket = vec![entry("widget", "x", 1000)];
        let result = compose_prompt(&bucket, &catalog, &vars()).unwrap();

        assert!(result.prompt.contains("Deploy with missing."));
        assert!(!result.prompt.contains("[missing]"));
    }

    #[test]
    fn only_the_first_occurrence_of_a_placeholder_is_replaced() {
        let catalog = single_item_catalog(
            "Use [framework] now and [framework] again.",
            vec!["framework".into()],
        );
        let bucket = vec![entry("widget", "x", 1000)];
        let result = compose_prompt(&bucket, &catalog, &vars()).unwrap();

        assert!(result.prompt.contains("Use React now and [framework] again."));
    }

    #[test]
    fn undeclared_placeholders_stay_verbatim() {
        let catalog = single_item_catalog("Keep [framework] as-is.", vec![]);
        let bucket = vec![entry("widget", "x", 1000)];
        let result = compose_prompt(&bucket, &catalog, &vars()).unwrap();

        assert!(result.prompt.contains("Keep [framework] as-is."));
    }

    #[test]
    fn declared_variable_without_a_token_is_ignored() {
        let catalog = single_item_catalog("No placeholders here.", vec!["framework".into()]);
        let bucket = vec![entry("widget", "x", 1000)];
        let result = compose_prompt(&bucket, &catalog, &vars()).unwrap();

        assert!(result.prompt.contains("No placeholders here."));
    }

    // ── Concise fallback ───────────────────────────────────────────────

    fn oversize_catalog() -> Vec<CatalogItem> {
        single_item_catalog(
            &"Create a very long template ".repeat(250),
            vec![],
        )
    }

    #[test]
    fn under_threshold_returns_the_full_result_unchanged() {
        let full = compose_prompt(&bucket(), &catalog(), &vars()).unwrap();
        let concise = create_concise_prompt(&bucket(), &catalog(), &vars()).unwrap();

        assert!(full.char_count <= sections::CONCISE_THRESHOLD);
        assert_eq!(concise, full);
        assert!(!concise.condensed);
    }

    #[test]
    fn over_threshold_swaps_in_terse_boilerplate() {
        let bucket = vec![entry("widget", "x", 1000)];
        let concise = create_concise_prompt(&bucket, &oversize_catalog(), &vars()).unwrap();

        assert!(concise.condensed);
        assert!(concise.prompt.starts_with(sections::CONCISE_SYSTEM_PREAMBLE));
        assert!(concise.prompt.contains(sections::CONCISE_CONSTRAINTS_FRONTEND));
        assert!(concise.prompt.contains(sections::CONCISE_OUTPUT_FRONTEND));
        assert!(concise.prompt.contains(sections::CONCISE_FINISH));
        assert!(!concise.prompt.contains(sections::FINISH));
    }

    #[test]
    fn concise_fallback_never_abbreviates_instruction_lines() {
        let bucket = vec![entry("widget", "x", 1000)];
        let catalog = oversize_catalog();
        let full = compose_prompt(&bucket, &catalog, &vars()).unwrap();
        let concise = create_concise_prompt(&bucket, &catalog, &vars()).unwrap();

        assert!(full.char_count > sections::CONCISE_THRESHOLD);
        // The whole instruction body survives verbatim.
        assert!(concise.prompt.contains(&catalog[0].template));
        assert!(concise.char_count < full.char_count);
    }

    #[test]
    fn concise_backend_bucket_uses_terse_backend_wording() {
        let mut catalog = oversize_catalog();
        catalog[0].category = "Backend / Database".into();
        let bucket = vec![entry("widget", "x", 1000)];
        let concise = create_concise_prompt(&bucket, &catalog, &vars()).unwrap();

        assert!(concise.prompt.contains(sections::CONCISE_CONSTRAINTS_BACKEND));
        assert!(concise.prompt.contains(sections::CONCISE_OUTPUT_BACKEND));
        assert!(!concise.prompt.contains(sections::CONCISE_CONSTRAINTS_FRONTEND));
    }

    #[test]
    fn concise_metrics_are_recomputed_from_the_short_document() {
        let bucket = vec![entry("widget", "x", 1000)];
        let concise = create_concise_prompt(&bucket, &oversize_catalog(), &vars()).unwrap();

        assert_eq!(concise.char_count, concise.prompt.chars().count());
        assert_eq!(concise.estimated_tokens, concise.char_count.div_ceil(4));
    }

    #[test]
    fn result_serializes_with_camel_case_metrics() {
        let result = compose_prompt(&bucket(), &catalog(), &vars()).unwrap();
        let json = serde_json::to_string(&result).unwrap();

        assert!(json.contains("\"charCount\""));
        assert!(json.contains("\"estimatedTokens\""));
        assert!(json.contains("\"condensed\""));
    }
}
