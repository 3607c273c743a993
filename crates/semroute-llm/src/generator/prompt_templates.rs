//! Prompt templates for route generation

use semroute_core::Schema;

/// Number of example utterances requested per route
pub const UTTERANCE_COUNT: usize = 5;

/// Prompt template for generating a route from a function or model schema
///
/// `{schema}` is replaced with the schema's prompt context.
pub const ROUTE_GENERATION_PROMPT: &str = r#"You are tasked to generate a JSON route configuration based on the provided function schema. Follow the template below, no other tokens allowed:

<config>
{
    "name": "<function_name>",
    "utterances": [
        "<example_utterance_1>",
        "<example_utterance_2>",
        "<example_utterance_3>",
        "<example_utterance_4>",
        "<example_utterance_5>"
    ]
}
</config>

Input schema:
{schema}

Requirements:
1. Output exactly one JSON object wrapped in <config></config> tags
2. Only include the "name" and "utterances" keys
3. "name" must match the function name from the schema
4. "utterances" must be a list of exactly 5 example phrases a user could say to invoke the function
5. DO NOT include any text before or after the <config> block

Generate the route configuration now:
"#;

/// Render the route generation prompt for `schema`
pub fn build_route_prompt(schema: &Schema) -> String {
    ROUTE_GENERATION_PROMPT.replace("{schema}", &schema.to_prompt_context())
}
