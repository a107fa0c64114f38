//! Plain-text result card used for export and sharing.

use std::fmt::Write;

use snap_core::ScoreTally;
use snap_types::{Axis, ResultProfile};

const CARD_HEADING: &str = "MBTI Snap result";

/// File name a card for `code` is saved under.
#[must_use]
pub fn card_file_name(code: &str) -> String {
    let safe: String = code
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("mbti_result_{safe}.txt")
}

/// Render the card. The tally section appears only for results derived in this session.
#[must_use]
pub fn render_card(
    code: &str,
    profile: &ResultProfile,
    tally: Option<&ScoreTally>,
    share_url: &str,
) -> String {
    let mut out = String::new();
    out.push_str(CARD_HEADING);
    out.push('\n');
    out.push_str(&"=".repeat(CARD_HEADING.len()));
    out.push_str("\n\n");

    let _ = writeln!(out, "{code} - {}", profile.title);
    out.push('\n');
    out.push_str(&profile.description);
    out.push('\n');

    if !profile.tags.is_empty() {
        out.push('\n');
        out.push_str(&profile.tags.join(" "));
        out.push('\n');
    }

    if let Some(tally) = tally {
        out.push('\n');
        for axis in Axis::ALL {
            let [primary, secondary] = axis.letters();
            let _ = writeln!(
                out,
                "{:<11} {primary} {} | {secondary} {}",
                axis.display_name(),
                tally.count(primary),
                tally.count(secondary),
            );
        }
    }

    out.push('\n');
    let _ = writeln!(out, "Share: {share_url}");
    out
}
