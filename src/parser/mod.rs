/// Heuristic text parser
///
/// Best-effort extraction of a transaction draft from freeform pasted text
/// (a receipt, a banking app screenshot transcription). Pure computation,
/// no storage access. Each field is scanned with an ordered pattern list
/// and the first match wins; the pattern order is load-bearing and must not
/// be collapsed into a single generalized pattern.
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::models::Direction;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("text is required")]
    EmptyInput,
}

/// Draft returned to the client for review; never persisted directly
#[derive(Debug, Clone, Serialize)]
pub struct TransactionDraft {
    pub date: NaiveDateTime,
    /// Magnitude only; a detected leading minus feeds `direction` instead
    pub amount: f64,
    pub direction: Direction,
    pub description: String,
    pub merchant: Option<String>,
}

/// Candidate substrings are tried against these in order; the first
/// successful parse wins regardless of which pattern located the text.
/// Commas are stripped from candidates before parsing.
const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%b %d %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

const MERCHANT_MAX_CHARS: usize = 80;

pub struct DraftParser {
    // Amount: symbol-prefixed first, bare number second
    symbol_amount: Regex,
    bare_amount: Regex,
    leading_minus: Regex,
    // Date: ISO, then slash, then month name
    iso_date: Regex,
    slash_date: Regex,
    month_name_date: Regex,
    // Line filters for the description heuristic
    date_like: Regex,
    money_keyword: Regex,
    income_keyword: Regex,
}

impl DraftParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            symbol_amount: Regex::new(
                r"[-+]?\$\s*([0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]{2})|[0-9]+(?:\.[0-9]{2}))",
            )?,
            bare_amount: Regex::new(
                r"[-+]?([0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]{2})|[0-9]+(?:\.[0-9]{2}))\s*(?:USD|usd|US\$)?",
            )?,
            leading_minus: Regex::new(r"(^|\s)-")?,
            iso_date: Regex::new(r"\d{4}-\d{2}-\d{2}")?,
            slash_date: Regex::new(r"\d{2}/\d{2}/\d{4}")?,
            month_name_date: Regex::new(
                r"(?i)(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{1,2},?\s+\d{4}",
            )?,
            date_like: Regex::new(r"\d{1,2}/\d{1,2}/\d{2,4}|\d{4}-\d{2}-\d{2}")?,
            money_keyword: Regex::new(r"(?i)\$|USD|Total|Amount|Balance")?,
            income_keyword: Regex::new(r"(?i)refund|credit|reversal|deposit|salary|income")?,
        })
    }

    /// Parse freeform text into a draft.
    ///
    /// Rejects only empty/whitespace-only input; any other text produces a
    /// best-effort result, with unmatched fields falling back to defaults.
    pub fn parse(&self, text: &str) -> Result<TransactionDraft, ParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let amount = self.extract_amount(text).unwrap_or(0.0);
        let negative = self.leading_minus.is_match(text);
        let date = self
            .extract_date(text)
            .unwrap_or_else(|| Utc::now().naive_utc());
        let (description, merchant) = self.extract_description(text);

        let direction = if negative || self.income_keyword.is_match(text) {
            Direction::Income
        } else {
            Direction::Expense
        };

        Ok(TransactionDraft {
            date,
            amount,
            direction,
            description,
            merchant,
        })
    }

    fn extract_amount(&self, text: &str) -> Option<f64> {
        for pattern in [&self.symbol_amount, &self.bare_amount] {
            if let Some(caps) = pattern.captures(text) {
                let literal = caps[1].replace(',', "");
                if let Ok(value) = literal.parse::<f64>() {
                    return Some(value.abs());
                }
            }
        }
        None
    }

    fn extract_date(&self, text: &str) -> Option<NaiveDateTime> {
        for pattern in [&self.iso_date, &self.slash_date, &self.month_name_date] {
            if let Some(found) = pattern.find(text) {
                let raw = found.as_str().replace(',', "");
                for format in DATE_FORMATS {
                    if let Ok(date) = NaiveDate::parse_from_str(&raw, format) {
                        return Some(date.and_time(NaiveTime::MIN));
                    }
                }
            }
        }
        None
    }

    /// Description is the first line that is neither date-like nor money
    /// talk; when every line is filtered out, fall back to the first
    /// non-blank line. Merchant is the description up to " - ".
    fn extract_description(&self, text: &str) -> (String, Option<String>) {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let description = lines
            .iter()
            .find(|line| !self.date_like.is_match(line) && !self.money_keyword.is_match(line))
            .or_else(|| lines.first())
            .map(|line| line.to_string())
            .unwrap_or_default();

        let merchant = if description.is_empty() {
            None
        } else {
            let head = description.split(" - ").next().unwrap_or(&description);
            Some(head.chars().take(MERCHANT_MAX_CHARS).collect())
        };

        (description, merchant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parser() -> DraftParser {
        DraftParser::new().expect("patterns compile")
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_time(NaiveTime::MIN)
    }

    #[test]
    fn rejects_empty_and_whitespace_input() {
        assert!(matches!(parser().parse(""), Err(ParseError::EmptyInput)));
        assert!(matches!(parser().parse("   \n\t "), Err(ParseError::EmptyInput)));
    }

    #[test]
    fn parses_receipt_line_with_symbol_amount_and_iso_date() {
        let draft = parser().parse("Groceries $45.67 2025-01-31").unwrap();
        assert_eq!(draft.amount, 45.67);
        assert_eq!(draft.date, date(2025, 1, 31));
        assert_eq!(draft.direction, Direction::Expense);
        assert!(draft.description.contains("Groceries"));
    }

    #[test]
    fn parses_salary_deposit_with_bare_amount_and_slash_date() {
        let draft = parser().parse("Salary deposit 1500.00 03/15/2025").unwrap();
        assert_eq!(draft.amount, 1500.00);
        // 03/15/2025 fails day-first and parses month-first
        assert_eq!(draft.date, date(2025, 3, 15));
        assert_eq!(draft.direction, Direction::Income);
    }

    #[test]
    fn negative_amount_keeps_magnitude_and_flips_direction() {
        let draft = parser().parse("-20.00 refund Jan 5, 2025").unwrap();
        assert_eq!(draft.amount, 20.00);
        assert_eq!(draft.date, date(2025, 1, 5));
        assert_eq!(draft.direction, Direction::Income);
    }

    #[test]
    fn day_first_slash_date_wins_when_valid() {
        let draft = parser().parse("Lunch 9.99 31/01/2025").unwrap();
        assert_eq!(draft.date, date(2025, 1, 31));
    }

    #[test]
    fn full_month_name_parses() {
        let draft = parser().parse("Rent 850.00 January 1, 2025").unwrap();
        assert_eq!(draft.date, date(2025, 1, 1));
    }

    #[test]
    fn missing_date_defaults_to_processing_time() {
        let before = Utc::now().naive_utc();
        let draft = parser().parse("Coffee $4.50").unwrap();
        let after = Utc::now().naive_utc();
        assert!(draft.date >= before && draft.date <= after);
    }

    #[test]
    fn symbol_amount_outranks_earlier_bare_number() {
        let draft = parser().parse("Lunch 9.99 plus tip $2.50").unwrap();
        assert_eq!(draft.amount, 2.50);
    }

    #[test]
    fn thousands_separators_are_stripped() {
        let draft = parser().parse("Invoice $1,234.56").unwrap();
        assert_eq!(draft.amount, 1234.56);
    }

    #[test]
    fn amount_requires_two_decimals_else_defaults_to_zero() {
        let draft = parser().parse("Coffee $5").unwrap();
        assert_eq!(draft.amount, 0.0);
    }

    #[test]
    fn minus_inside_a_word_is_not_negativity() {
        // The dashes in an ISO date are not preceded by whitespace
        let draft = parser().parse("Groceries 45.67 2025-01-31").unwrap();
        assert_eq!(draft.direction, Direction::Expense);
    }

    #[test]
    fn income_keywords_override_default_direction() {
        for text in ["Card credit 10.00", "REFUND 3.00", "Monthly income 99.00"] {
            let draft = parser().parse(text).unwrap();
            assert_eq!(draft.direction, Direction::Income, "text: {text}");
        }
    }

    #[test]
    fn description_skips_date_and_money_lines() {
        let draft = parser()
            .parse("Total: $12.34\nStarbucks - Downtown\n01/31/2025")
            .unwrap();
        assert_eq!(draft.description, "Starbucks - Downtown");
        assert_eq!(draft.merchant.as_deref(), Some("Starbucks"));
        assert_eq!(draft.amount, 12.34);
        assert_eq!(draft.date, date(2025, 1, 31));
    }

    #[test]
    fn description_falls_back_to_first_line_when_all_filtered() {
        let draft = parser().parse("Groceries $45.67 2025-01-31").unwrap();
        assert_eq!(draft.description, "Groceries $45.67 2025-01-31");
    }

    #[test]
    fn merchant_is_truncated_to_eighty_chars() {
        let name = "N".repeat(120);
        let draft = parser().parse(&name).unwrap();
        assert_eq!(draft.description, name);
        assert_eq!(draft.merchant.as_deref().map(|m| m.chars().count()), Some(80));
    }

    #[test]
    fn draft_serializes_with_iso_datetime_and_lowercase_direction() {
        let draft = parser().parse("Groceries $45.67 2025-01-31").unwrap();
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["date"], "2025-01-31T00:00:00");
        assert_eq!(json["direction"], "expense");
        assert_eq!(json["amount"], 45.67);
    }
}
