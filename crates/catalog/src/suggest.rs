//! Backend component suggestions — keyword scoring over a free-text intent.
//!
//! Given the user's description of what they are building, rank the
//! `"Backend / Database"` catalog items most likely to be needed. Scoring is
//! deliberately dumb string matching: +2 per component keyword found in the
//! intent, +3 per business-pattern hit, +1 per overlapping word with an
//! item's declared business intents. Items scoring zero are never suggested.

use promptloom_core::catalog::CatalogItem;

/// Maximum number of suggestions returned.
const MAX_SUGGESTIONS: usize = 5;

/// Keywords that map to specific backend components.
const COMPONENT_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "rest-api-endpoint",
        &[
            "handle", "process", "manage", "send", "create", "update", "delete", "get",
            "registration", "orders", "inventory", "profiles", "contact", "form", "submission",
            "api",
        ],
    ),
    (
        "jwt-authentication",
        &[
            "login", "register", "authentication", "auth", "secure", "protect", "session",
            "token", "access", "permission", "logout", "account", "password",
        ],
    ),
    (
        "database-schema",
        &[
            "store", "save", "database", "data", "table", "product", "order", "transaction",
            "blog", "post", "content", "analytics", "subscription", "catalog",
        ],
    ),
    (
        "file-upload-api",
        &[
            "upload", "file", "image", "document", "attachment", "media", "photo", "video",
            "pdf", "storage", "cloud",
        ],
    ),
    (
        "search-api",
        &[
            "search", "find", "filter", "query", "lookup", "discover", "browse", "catalog",
            "products",
        ],
    ),
    (
        "payment-webhook",
        &[
            "payment", "stripe", "paypal", "billing", "subscription", "invoice", "transaction",
            "refund", "charge", "card", "checkout", "webhook",
        ],
    ),
    (
        "redis-cache",
        &[
            "cache", "performance", "speed", "fast", "optimize", "memory", "redis", "temporary",
            "quick",
        ],
    ),
];

/// Business intent phrases that suggest specific components.
const BUSINESS_PATTERNS: &[(&str, &[&str])] = &[
    ("user management", &["jwt-authentication", "rest-api-endpoint"]),
    (
        "e-commerce",
        &["rest-api-endpoint", "database-schema", "payment-webhook", "file-upload-api"],
    ),
    ("content management", &["database-schema", "file-upload-api", "search-api"]),
    ("authentication", &["jwt-authentication"]),
    ("file handling", &["file-upload-api"]),
    ("search functionality", &["search-api", "redis-cache"]),
    ("performance", &["redis-cache"]),
    ("security", &["jwt-authentication"]),
    ("payments", &["payment-webhook", "rest-api-endpoint", "database-schema"]),
];

/// Rank the backend catalog items matching the user's intent.
///
/// Returns at most [`MAX_SUGGESTIONS`] items, best score first; ties keep
/// catalog order. Matching is case-insensitive on the intent side.
pub fn find_matching_backend_components<'a>(
    user_intent: &str,
    items: &'a [CatalogItem],
) -> Vec<&'a CatalogItem> {
    let intent = user_intent.to_lowercase();
    let intent_words: Vec<&str> = intent.split_whitespace().collect();

    let mut matches: Vec<(&CatalogItem, usize)> = Vec::new();

    for item in items.iter().filter(|i| i.is_backend()) {
        let mut score = 0usize;

        if let Some((_, keywords)) = COMPONENT_KEYWORDS.iter().find(|(id, _)| *id == item.id) {
            score += keywords.iter().filter(|k| intent.contains(**k)).count() * 2;
        }

        for (pattern, component_ids) in BUSINESS_PATTERNS {
            if intent.contains(pattern) && component_ids.contains(&item.id.as_str()) {
                score += 3;
            }
        }

        for declared in &item.business_intents {
            let declared_lower = declared.to_lowercase();
            score += declared_lower
                .split_whitespace()
                .filter(|word| {
                    intent_words
                        .iter()
                        .any(|iw| iw.contains(*word) || word.contains(*iw))
                })
                .count();
        }

        if score > 0 {
            matches.push((item, score));
        }
    }

    matches.sort_by(|a, b| b.1.cmp(&a.1));
    matches.truncate(MAX_SUGGESTIONS);
    matches.into_iter().map(|(item, _)| item).collect()
}
