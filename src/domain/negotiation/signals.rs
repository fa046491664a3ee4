//! Signal extraction from Penny's replies.
//!
//! Replies are free text; the frontend needs two structured signals from
//! them: the current offer amount and whether a deal was struck. Extraction
//! is a deliberately simple pattern match kept behind this module so a
//! structured-output approach can replace it without touching the
//! orchestrator.

/// Phrases that indicate the negotiation closed with agreement.
///
/// Matched case-insensitively as substrings.
const DEAL_KEYWORDS: [&str; 5] = [
    "deal",
    "sold",
    "pleasure doing business",
    "you got yourself",
    "we have a deal",
];

/// Structured signals derived from one assistant reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NegotiationSignals {
    /// The first dollar amount mentioned in the reply, if any.
    pub offer_amount: Option<u64>,
    /// Whether the reply contains a deal-closure phrase.
    pub deal_reached: bool,
}

/// Extracts negotiation signals from a reply.
///
/// The offer amount is the first occurrence of `$` immediately followed by
/// decimal digits. Later dollar figures in the same reply are ignored; that
/// is intentional, not an oversight.
pub fn extract_signals(reply: &str) -> NegotiationSignals {
    NegotiationSignals {
        offer_amount: first_dollar_amount(reply),
        deal_reached: mentions_deal(reply),
    }
}

fn first_dollar_amount(reply: &str) -> Option<u64> {
    let bytes = reply.as_bytes();
    for (i, byte) in bytes.iter().enumerate() {
        if *byte != b'$' {
            continue;
        }
        let start = i + 1;
        let mut end = start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > start {
            // First match only. A digit run too long for u64 yields no offer.
            return reply[start..end].parse().ok();
        }
    }
    None
}

fn mentions_deal(reply: &str) -> bool {
    let lowered = reply.to_lowercase();
    DEAL_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}
