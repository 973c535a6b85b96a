//! Senior brief: adds an explicit output format section.

use super::{BriefDefaults, BriefDefinition};

/// Senior-role brief that spells out the expected output format.
pub struct SeniorBrief;

impl BriefDefinition for SeniorBrief {
    const NAME: &'static str = "senior";
    const DESCRIPTION: &'static str = "Senior-role brief with an explicit output format section";

    fn template() -> &'static str {
        "You are a senior {{role}} with deep expertise in {{domain}}.

OBJECTIVE:
{{objective}}

TARGET AUDIENCE:
{{targetAudience}}

TONE:
{{tone}}

CONSTRAINTS:
{{constraints}}

OUTPUT FORMAT:
{{outputFormat}}

INSTRUCTIONS:
- Think through the problem before answering
- State any assumptions explicitly
- Structure the response according to the output format above
"
    }

    fn defaults() -> BriefDefaults {
        BriefDefaults {
            role: "General Assistant",
            domain: "General Knowledge",
            target_audience: "General Audience",
            tone: "Professional",
            constraints: "None specific",
            output_format: "Markdown",
        }
    }
}
