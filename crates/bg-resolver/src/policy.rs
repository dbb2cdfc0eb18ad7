//! Special-case classification of profession texts.
//!
//! Some profession entries are not plain results. An apprenticeship entry
//! ("Apprentice — Pick a profession from any table") asks for a second,
//! independent profession; entries naming an apprentice, student, or
//! teacher may be disallowed outright. A [`SpecialRule`] recognises such
//! texts by marker words plus optional required phrases and says what to
//! do with them. A [`SpecialCasePolicy`] is an ordered list of rules and
//! the reroll cap.

use regex::Regex;

use crate::error::ResolveResult;

/// Default number of rolls before giving up on disallowed results.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// What a matching rule asks the resolver to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialAction {
    /// Keep the result and add an extra independent roll pair.
    Branch,
    /// Throw the result away and roll again.
    Discard,
}

/// The outcome of classifying a profession text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// An ordinary result, accepted as-is.
    Normal,
    /// Accepted, with a supplementary apprenticeship roll.
    SpecialBranch,
    /// Rejected and resampled.
    SpecialDiscard,
}

impl From<SpecialAction> for Classification {
    fn from(action: SpecialAction) -> Self {
        match action {
            SpecialAction::Branch => Self::SpecialBranch,
            SpecialAction::Discard => Self::SpecialDiscard,
        }
    }
}

/// Marker words plus required phrases, tied to an action.
///
/// A text matches when any marker appears as a whole word and every
/// required phrase appears as a substring, all case-insensitively.
#[derive(Debug, Clone)]
pub struct SpecialRule {
    markers: Vec<String>,
    pattern: Option<Regex>,
    phrases: Vec<String>,
    action: SpecialAction,
}

impl SpecialRule {
    /// Build a rule. With no markers the rule never matches.
    pub fn new<M, P>(markers: M, phrases: P, action: SpecialAction) -> ResolveResult<Self>
    where
        M: IntoIterator,
        M::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let markers: Vec<String> = markers.into_iter().map(Into::into).collect();
        let pattern = if markers.is_empty() {
            None
        } else {
            let alternatives: Vec<String> = markers.iter().map(|m| regex::escape(m)).collect();
            Some(Regex::new(&format!(
                r"(?i)\b(?:{})\b",
                alternatives.join("|")
            ))?)
        };
        let phrases = phrases
            .into_iter()
            .map(|p| Into::<String>::into(p).to_lowercase())
            .collect();
        Ok(Self {
            markers,
            pattern,
            phrases,
            action,
        })
    }

    /// "Apprentice" together with "Pick a profession": branch.
    pub fn apprenticeship() -> ResolveResult<Self> {
        Self::new(["Apprentice"], ["Pick a profession"], SpecialAction::Branch)
    }

    /// "Apprentice", "Student", or "Teacher" anywhere: discard.
    pub fn disallowed() -> ResolveResult<Self> {
        Self::new(
            ["Apprentice", "Student", "Teacher"],
            Vec::<String>::new(),
            SpecialAction::Discard,
        )
    }

    /// The marker words, as given.
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// The required phrases, lowercased.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// What happens to a matching text.
    pub fn action(&self) -> SpecialAction {
        self.action
    }

    /// Whether `text` satisfies this rule.
    pub fn matches(&self, text: &str) -> bool {
        let Some(pattern) = &self.pattern else {
            return false;
        };
        if !pattern.is_match(text) {
            return false;
        }
        let lower = text.to_lowercase();
        self.phrases.iter().all(|p| lower.contains(p.as_str()))
    }
}

/// How special profession results are handled.
#[derive(Debug, Clone)]
pub struct SpecialCasePolicy {
    rules: Vec<SpecialRule>,
    max_attempts: u32,
}

impl SpecialCasePolicy {
    /// A policy from explicit rules. The first matching rule wins.
    pub fn new(rules: Vec<SpecialRule>, max_attempts: u32) -> Self {
        Self {
            rules,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Accept every result as-is.
    pub fn plain() -> Self {
        Self::new(Vec::new(), DEFAULT_MAX_ATTEMPTS)
    }

    /// Keep apprenticeship results and add an extra roll pair.
    pub fn branch() -> ResolveResult<Self> {
        Ok(Self::new(
            vec![SpecialRule::apprenticeship()?],
            DEFAULT_MAX_ATTEMPTS,
        ))
    }

    /// Reroll apprentice, student, and teacher results, at most
    /// `max_attempts` rolls in total.
    pub fn reroll(max_attempts: u32) -> ResolveResult<Self> {
        Ok(Self::new(vec![SpecialRule::disallowed()?], max_attempts))
    }

    /// The rules, in evaluation order.
    pub fn rules(&self) -> &[SpecialRule] {
        &self.rules
    }

    /// Maximum rolls spent on one secondary resolution.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Classify a profession text.
    pub fn classify(&self, text: &str) -> Classification {
        self.rules
            .iter()
            .find(|rule| rule.matches(text))
            .map_or(Classification::Normal, |rule| rule.action().into())
    }
}
