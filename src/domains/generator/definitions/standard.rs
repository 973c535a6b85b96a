//! Standard brief: the world-class expert layout.

use super::{BriefDefaults, BriefDefinition};

/// Role/domain/objective/audience/style brief with fixed quality rules.
pub struct StandardBrief;

impl BriefDefinition for StandardBrief {
    const NAME: &'static str = "standard";
    const DESCRIPTION: &'static str = "Expert brief with domain, audience, style and rules sections";

    fn template() -> &'static str {
        "
Act as a world-class {{role}}.

DOMAIN:
{{domain}}

OBJECTIVE:
{{objective}}

TARGET AUDIENCE:
{{targetAudience}}

STYLE:
Tone: {{tone}}
Constraints: {{constraints}}

RULES:
- Be clear and structured
- Avoid vague responses
- Follow industry best practices

OUTPUT:
Deliver the final result clearly and professionally.
"
    }

    fn defaults() -> BriefDefaults {
        BriefDefaults {
            role: "Expert",
            domain: "General",
            target_audience: "General",
            tone: "Professional",
            constraints: "None",
            output_format: "Markdown",
        }
    }
}
