//! Prompt template for the weekly recap.
//!
//! The summary handed in already carries every number the recap needs, so the
//! prompt only sets the commentator persona and the follow-up questions.

/// Build the recap prompt around a weekly summary.
///
/// `league_member_info` is free text about the managers (rivalries, nicknames)
/// and is inserted ahead of the data when present.
pub fn build_recap_prompt(summary: &str, league_member_info: Option<&str>) -> String {
    let member_info = league_member_info.map(str::trim).unwrap_or_default();

    let mut prompt = String::with_capacity(summary.len() + 1024);
    prompt.push_str(
        "You are a sarcastic and witty fantasy football commentator.\n\
         Your task is to write a weekly recap for a fantasy football league.\n\
         Use the provided data to call out specific teams and scores, but don't simply restate the outcomes.\n\
         You do not need to recap every single game, but rather focus on the most interesting and impactful matchups.\n\
         Think hard and come up with insightful commentary that goes beyond the results.\n\
         Be as succinct as possible.\n\n",
    );

    if !member_info.is_empty() {
        prompt.push_str(member_info);
        prompt.push_str("\n\n");
    }

    prompt.push_str("Here is the data for the week:\n---\n");
    prompt.push_str(summary);
    prompt.push_str("\n---\n\n");

    prompt.push_str(
        "Now, write the recap. After the summary, answer the following questions in 1-2 sentences each:\n\n\
         1. What was the most surprising outcome of the week?\n\
         2. Which player had the biggest impact on their team's performance?\n\
         3. What was the funniest moment of the week?\n\
         4. Any other notable events or performances?\n",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUMMARY: &str = "Week 3 Matchup Summary:\n- A (120.50) defeated B (95.25) by 25.25 points.";

    #[test]
    fn test_prompt_fences_summary() {
        let prompt = build_recap_prompt(SUMMARY, None);
        assert!(prompt.starts_with("You are a sarcastic and witty fantasy football commentator."));
        assert!(prompt.contains(&format!("---\n{SUMMARY}\n---")));
        assert!(prompt.contains("4. Any other notable events or performances?"));
    }

    #[test]
    fn test_member_info_precedes_data() {
        let prompt = build_recap_prompt(SUMMARY, Some("  A is the commissioner.\n"));
        let info_at = prompt.find("A is the commissioner.").unwrap();
        let data_at = prompt.find("Here is the data for the week:").unwrap();
        assert!(info_at < data_at);
        assert!(!prompt.contains("  A is the commissioner."));
    }

    #[test]
    fn test_blank_member_info_is_skipped() {
        assert_eq!(build_recap_prompt(SUMMARY, Some("   ")), build_recap_prompt(SUMMARY, None));
    }
}
