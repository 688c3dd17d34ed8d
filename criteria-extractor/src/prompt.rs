//! Instruction text for the extraction request.
//!
//! The whole instruction goes out as a single user message: task, required fields,
//! known building and area names, then the request itself.

/// Placeholder used when the store has no names to offer.
pub const NO_NAMES: &str = "(none)";

pub const INSTRUCTIONS: &str = "Your task is to find real estate listings that match the user's request.\n\
Work out the criteria the user is searching by. The minimum required information is the number of \
bedrooms (bedroom_count), the minimum price (min_price), the maximum price (max_price) and the \
property type (type).\n\
If the user has not given one of the required criteria, ask a clarifying question. Once the criteria \
are known, call the database_search function with the matching arguments. Leave optional string \
arguments empty and optional numbers at 0 when the user did not mention them.";

fn name_list(names: &[String]) -> String {
    if names.is_empty() {
        NO_NAMES.to_string()
    } else {
        names.join(", ")
    }
}

/// Builds the extraction prompt for `query`.
pub fn build_prompt(query: &str, areas: &[String], buildings: &[String]) -> String {
    format!(
        "{}\n\nKnown building names:\n{}\n\nKnown area names:\n{}\n\nUser request:\n{}",
        INSTRUCTIONS,
        name_list(buildings),
        name_list(areas),
        query.trim()
    )
}
