//! Records loaded into a fresh catalog at startup.

use chrono::{DateTime, NaiveDate, Utc};

use super::model::Prompt;

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    tags: &[&str],
    author: &str,
    content: &str,
    upvotes: u64,
    created_at: DateTime<Utc>,
) -> Prompt {
    Prompt {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        author: author.to_string(),
        content: content.to_string(),
        upvotes,
        created_at,
    }
}

/// The five starter prompts, with ids "1" through "5".
pub fn seed_prompts() -> Vec<Prompt> {
    vec![
        seed(
            "1",
            "Professional Email Writer",
            "Generate well-structured professional emails for any business context",
            "writing",
            &["email", "business", "communication"],
            "Sarah Johnson",
            "Write a professional email about {Topic} addressed to {Recipient}. Use a {Tone} tone \
             and ensure clarity, proper formatting, and a clear call-to-action.",
            42,
            seed_date(2025, 2, 10),
        ),
        seed(
            "2",
            "Code Review Assistant",
            "Get comprehensive code reviews with best practices and improvements",
            "coding",
            &["code-review", "best-practices", "refactoring"],
            "Alex Chen",
            "Review the following {Language} code for:\n\
             1. Code quality and readability\n\
             2. Performance optimization\n\
             3. Security vulnerabilities\n\
             4. Best practices adherence\n\n\
             Provide specific suggestions with examples.\n\n\
             Code:\n{Code}",
            87,
            seed_date(2025, 2, 9),
        ),
        seed(
            "3",
            "Social Media Content Creator",
            "Create engaging social media posts for different platforms",
            "marketing",
            &["social-media", "content", "engagement"],
            "Maria Garcia",
            "Create a {Platform} post about {Topic} that:\n\
             - Captures attention in the first line\n\
             - Includes relevant hashtags\n\
             - Has a clear call-to-action\n\
             - Matches {Brand Voice} tone\n\
             - Optimized for {Target Audience}",
            65,
            seed_date(2025, 2, 11),
        ),
        seed(
            "4",
            "Study Notes Generator",
            "Convert complex topics into clear, organized study notes",
            "study",
            &["notes", "learning", "education"],
            "David Kim",
            "Create comprehensive study notes for {Topic} including:\n\
             1. Key concepts and definitions\n\
             2. Important formulas or principles\n\
             3. Real-world examples\n\
             4. Practice questions\n\
             5. Memory aids and mnemonics\n\n\
             Format for easy review and retention.",
            53,
            seed_date(2025, 2, 8),
        ),
        seed(
            "5",
            "Product Description Optimizer",
            "Write SEO-optimized product descriptions that convert",
            "marketing",
            &["seo", "e-commerce", "copywriting"],
            "Emily White",
            "Write an SEO-optimized product description for:\n\n\
             Product: {Product Name}\n\
             Features: {Key Features}\n\
             Target Audience: {Audience}\n\n\
             Include:\n\
             - Compelling headline\n\
             - Benefit-focused bullet points\n\
             - Emotional appeal\n\
             - Strong call-to-action\n\
             - Relevant keywords naturally integrated",
            78,
            seed_date(2025, 2, 7),
        ),
    ]
}
