//! Fixed text blocks for the composed document.
//!
//! These strings are contract values: downstream tooling and tests match on
//! them verbatim. Edit with care.

/// Character count above which `create_concise_prompt` swaps in the terse
/// boilerplate.
pub const CONCISE_THRESHOLD: usize = 6000;

// ── Full document blocks ──────────────────────────────────────────────────

pub const SYSTEM_PREAMBLE: &str = "System: You are an AI assistant that writes production-ready code. Output only code blocks unless asked otherwise.";

pub const CONSTRAINTS_BACKEND: &str = "Constraints: Follow security best practices; include proper error handling; use environment variables for configuration; add logging and monitoring; implement proper validation";

pub const CONSTRAINTS_FRONTEND: &str = "Constraints: No external animation libraries; keep functions <= 120 lines; use accessible markup; include filenames when outputting files";

pub const OUTPUT_FORMAT_BACKEND: &str = "Output format: Return files and code in code blocks. Provide file names, setup instructions, and deployment notes. Include API documentation and testing examples.";

pub const OUTPUT_FORMAT_FRONTEND: &str = "Output format: \"Return files and code in code blocks. Provide file names and content. For UI components return .tsx components and a small usage snippet.\"";

pub const FINISH: &str = "Finish: \"If you cannot implement an item as specified, explain briefly why and give a minimal alternative.\"";

// ── Concise fallback blocks ───────────────────────────────────────────────

pub const CONCISE_SYSTEM_PREAMBLE: &str = "System: Write production-ready code. Output only code blocks.";

pub const CONCISE_CONSTRAINTS_BACKEND: &str = "Constraints: Security best practices; error handling; environment variables; logging.";

pub const CONCISE_CONSTRAINTS_FRONTEND: &str = "Constraints: No external libraries; accessible markup; include filenames.";

pub const CONCISE_OUTPUT_BACKEND: &str = "Output: Code blocks with file names, setup instructions, and API docs.";

pub const CONCISE_OUTPUT_FRONTEND: &str = "Output: Code blocks with file names and content.";

pub const CONCISE_FINISH: &str = "Finish: Explain briefly if unable to implement, provide minimal alternative.";
