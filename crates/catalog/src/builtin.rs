//! The built-in component catalog.
//!
//! A fixed starter set covering the two category families the composer
//! distinguishes. Users can replace it wholesale with a JSON catalog file;
//! ids are stable identifiers and should not be reused across versions.

use promptloom_core::catalog::{BACKEND_CATEGORY, CatalogItem};

const FRONTEND_CATEGORY: &str = "UI / Frontend";

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    title: &str,
    category: &str,
    subcategory: &str,
    description: &str,
    template: &str,
    variables: &[&str],
    business_intents: &[&str],
) -> CatalogItem {
    CatalogItem {
        id: id.into(),
        title: title.into(),
        category: category.into(),
        subcategory: Some(subcategory.into()),
        description: description.into(),
        template: template.into(),
        variables: variables.iter().map(|v| v.to_string()).collect(),
        business_intents: business_intents.iter().map(|v| v.to_string()).collect(),
    }
}

/// All built-in catalog items, in display order.
pub fn items() -> Vec<CatalogItem> {
    vec![
        item(
            "product-card",
            "Product Card",
            FRONTEND_CATEGORY,
            "Components",
            "Responsive product card",
            "Create a responsive [framework] product card with image, title, price, and an 'Add to cart' button. Use [style]. Props: { id, imageUrl, title, price, onAdd }. Make accessible with aria labels.",
            &["framework", "style"],
            &[],
        ),
        item(
            "testimonial-carousel",
            "Testimonial Carousel",
            FRONTEND_CATEGORY,
            "Components",
            "Accessible testimonial carousel",
            "A testimonial carousel component that accepts an array of { name, photo, quote }. Autoplay optional, accessible controls. No external carousel libraries.",
            &[],
            &[],
        ),
        item(
            "pricing-table",
            "Pricing Table",
            FRONTEND_CATEGORY,
            "Components",
            "Three-tier pricing table",
            "A responsive [framework] pricing table with three tiers, feature checklists, and a highlighted recommended plan. Use [style]. Use real table markup with scoped headers.",
            &["framework", "style"],
            &[],
        ),
        item(
            "signup-form",
            "Signup Form",
            FRONTEND_CATEGORY,
            "Forms",
            "Signup form with inline validation",
            "A [framework] signup form with email and password fields, inline validation messages, and an onSubmit handler prop. Use [style]. Label every input and wire aria-describedby for errors.",
            &["framework", "style"],
            &[],
        ),
        item(
            "dashboard-layout",
            "Dashboard Layout",
            FRONTEND_CATEGORY,
            "Layout",
            "App shell with sidebar navigation",
            "A responsive dashboard layout in [framework] with a collapsible sidebar, top navigation, and a main content grid. Use [style]. Keyboard navigable throughout.",
            &["framework", "style"],
            &[],
        ),
        item(
            "rest-api-endpoint",
            "REST API Endpoint",
            BACKEND_CATEGORY,
            "API",
            "Validated JSON endpoint",
            "A REST API endpoint in [language] that validates input, performs the requested action, and returns JSON with proper status codes. Deploy to [platform].",
            &["language", "platform"],
            &["handle form submissions", "process orders", "manage user data"],
        ),
        item(
            "jwt-authentication",
            "JWT Authentication",
            BACKEND_CATEGORY,
            "Auth",
            "Token-based login flow",
            "JWT-based authentication in [language]: issue tokens on login, verify them on protected routes, and support refresh tokens.",
            &["language"],
            &["secure user login", "protect api routes", "manage user sessions"],
        ),
        item(
            "database-schema",
            "Database Schema",
            BACKEND_CATEGORY,
            "Data",
            "Schema and migration script",
            "A [database] schema for the application domain: tables, indexes, and foreign keys, plus a migration script to create them.",
            &["database"],
            &["store application data", "organize product catalog", "track orders and transactions"],
        ),
        item(
            "file-upload-api",
            "File Upload API",
            BACKEND_CATEGORY,
            "API",
            "Upload endpoint with validation",
            "A file upload endpoint in [language] with size and type validation, object storage on [platform], and signed download URLs.",
            &["language", "platform"],
            &["upload user images", "attach documents", "store media files"],
        ),
        item(
            "search-api",
            "Search API",
            BACKEND_CATEGORY,
            "API",
            "Keyword search with filters",
            "A search endpoint backed by [database] with keyword matching, filters, and paginated results.",
            &["database"],
            &["search products", "filter content", "browse catalog"],
        ),
        item(
            "payment-webhook",
            "Payment Webhook",
            BACKEND_CATEGORY,
            "Integrations",
            "Signed payment event handler",
            "A webhook handler in [language] that verifies the payment provider signature, records the event in [database], and acknowledges within the provider timeout.",
            &["language", "database"],
            &["process payments", "handle billing events", "confirm subscriptions"],
        ),
        item(
            "redis-cache",
            "Redis Cache",
            BACKEND_CATEGORY,
            "Performance",
            "Caching layer for hot queries",
            "A Redis caching layer for hot queries: cache keys derived from the request shape, sensible TTLs, and explicit invalidation on writes.",
            &[],
            &["speed up responses", "cache expensive queries", "reduce database load"],
        ),
    ]
}
