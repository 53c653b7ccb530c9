//! Terminal rendering of results, the refusal message and the legend.

use crate::flames::{FlamesLetter, FlamesResult, MEANINGS};
use crate::policy::REFUSAL_MESSAGE;
use crate::utils::error::OutputError;
use colored::*;
use reqwest::Url;

/// Base of WhatsApp's click-to-chat links
pub const WHATSAPP_SHARE_BASE: &str = "https://wa.me/";

/// Render a full result: names, count, every round, and the final meaning
pub fn render_result(result: &FlamesResult) -> String {
    let mut out = String::new();

    out.push_str(&render_header(result));
    out.push_str(&render_rounds(result));
    out.push_str(&render_verdict(result));

    out
}

fn render_header(result: &FlamesResult) -> String {
    let mut out = String::new();
    out.push_str("\n🔥 ");
    out.push_str(&"FLAMES Result".bold().to_string());
    out.push_str("\n---------------------------------------------------\n");
    out.push_str(&format!("First name:   {}\n", display_name(&result.name1)));
    out.push_str(&format!("Second name:  {}\n", display_name(&result.name2)));
    out.push_str(&format!("Letter count: {}\n", result.letter_count));
    out.push_str("---------------------------------------------------\n\n");
    out
}

fn render_rounds(result: &FlamesResult) -> String {
    let mut out = String::from("Elimination rounds:\n");

    for round in &result.elimination_rounds {
        out.push_str(&format!(
            "  Round {}  Removed: {:<10} Remaining: {}\n",
            round.round,
            round.eliminated.word().red(),
            join_words(&round.remaining)
        ));
    }

    out
}

fn render_verdict(result: &FlamesResult) -> String {
    format!(
        "\n{} {}\n",
        result.result.icon(),
        result.word().green().bold()
    )
}

/// Normalization can leave a name empty
fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "(no letters)"
    } else {
        name
    }
}

fn join_words(letters: &[FlamesLetter]) -> String {
    letters
        .iter()
        .map(|l| l.word())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Message shown in place of a withheld result
pub fn render_refusal() -> String {
    let mut lines = REFUSAL_MESSAGE.lines();
    let mut out = String::new();

    if let Some(title) = lines.next() {
        out.push_str(&format!("\n{}\n\n", title.bold()));
    }
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }

    out
}

/// The "What does FLAMES stand for?" legend
pub fn render_meanings() -> String {
    let mut out = format!("{}\n", "What does FLAMES stand for?".bold());

    for meaning in MEANINGS.iter() {
        out.push_str(&format!(
            "  {}  {} - {}\n",
            meaning.icon,
            meaning.letter.to_string().bold(),
            meaning.word
        ));
    }

    out
}

/// Text for sharing a result, with an optional link to the app
pub fn share_message(result: &FlamesResult, share_url: Option<&str>) -> String {
    let mut message = format!(
        "🔥 I just tried FLAMES Finder! {} & {} got \"{}\" {}!",
        result.name1,
        result.name2,
        result.word(),
        result.result.icon()
    );

    if let Some(url) = share_url {
        message.push_str(&format!(" Try it yourself: {}", url));
    }

    message
}

/// WhatsApp click-to-chat link carrying the share message
///
/// # Errors
/// * `OutputError::InvalidShareLink` - link base failed to parse
pub fn whatsapp_link(result: &FlamesResult, share_url: Option<&str>) -> Result<String, OutputError> {
    let message = share_message(result, share_url);
    let link = Url::parse_with_params(WHATSAPP_SHARE_BASE, &[("text", message.as_str())])
        .map_err(|e| OutputError::InvalidShareLink(e.to_string()))?;
    Ok(link.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flames::calculate_flames;

    #[test]
    fn test_render_result_lists_every_round() {
        colored::control::set_override(false);
        let rendered = render_result(&calculate_flames("Romeo", "Juliet"));

        assert!(rendered.contains("First name:   romeo"));
        assert!(rendered.contains("Letter count: 9"));
        for n in 1..=5 {
            assert!(rendered.contains(&format!("Round {}", n)));
        }
        assert!(rendered.contains("Remaining: Love, Marriage, Enemy, Siblings"));
        assert!(rendered.trim_end().ends_with("Enemy"));
    }

    #[test]
    fn test_render_result_empty_names() {
        colored::control::set_override(false);
        let rendered = render_result(&calculate_flames("", "123"));
        assert!(rendered.contains("(no letters)"));
    }

    #[test]
    fn test_render_refusal() {
        colored::control::set_override(false);
        let rendered = render_refusal();
        assert!(rendered.contains("I can't continue with this one"));
        assert!(rendered.contains("even if they burn alone."));
    }

    #[test]
    fn test_render_meanings() {
        colored::control::set_override(false);
        let rendered = render_meanings();
        assert!(rendered.contains("F - Friends"));
        assert!(rendered.contains("S - Siblings"));
    }

    #[test]
    fn test_share_message() {
        let result = calculate_flames("Romeo", "Juliet");
        assert_eq!(
            share_message(&result, None),
            "🔥 I just tried FLAMES Finder! romeo & juliet got \"Enemy\" ⚔️!"
        );
        assert!(share_message(&result, Some("https://x.app"))
            .ends_with(" Try it yourself: https://x.app"));
    }

    #[test]
    fn test_whatsapp_link_encodes_message() {
        let result = calculate_flames("Romeo", "Juliet");
        let link = whatsapp_link(&result, Some("https://x.app")).unwrap();

        assert!(link.starts_with("https://wa.me/?text="));
        assert!(!link.contains(' '));
        assert!(!link.contains('"'));

        let parsed = Url::parse(&link).unwrap();
        let (key, text) = parsed.query_pairs().next().unwrap();
        assert_eq!(key, "text");
        assert_eq!(text, share_message(&result, Some("https://x.app")));
    }
}
