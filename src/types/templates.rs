//! Message templates and the printf-style formatter that fills them.
//!
//! A template holds one placeholder for the field name followed by one per rule
//! parameter. Supported directives:
//!
//! | Directive | Meaning |
//! |---|---|
//! | `%s` | next argument as text |
//! | `%d` | next argument as an integer (non-numeric text renders `0`) |
//! | `%N$s`, `%N$d` | argument `N` (1-based), without advancing |
//! | `%%` | a literal `%` |
//!
//! Unknown directives are copied through unchanged and a missing argument
//! renders empty.
use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::rules::Rule;
use crate::types::validation_error::Param;

pub(crate) static DEFAULT_TEMPLATES: Lazy<MessageTemplates> = Lazy::new(MessageTemplates::default);

/// Rule name → message template table.
///
/// This is the only configurable piece of rendering. A table loaded from
/// configuration may list only the rules it wants to override; lookups for
/// missing rules fall back to [`Rule::default_template`].
///
/// # Examples
///
/// ```
/// use field_rail::{MessageTemplates, Rule};
///
/// let templates: MessageTemplates = serde_json::from_str(
///     r#"{ "templates": { "required": "%s is mandatory" } }"#,
/// )
/// .unwrap();
///
/// assert_eq!(templates.get(Rule::Required), "%s is mandatory");
/// assert_eq!(templates.get(Rule::Slug), Rule::Slug.default_template());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplates {
    #[serde(default)]
    pub templates: BTreeMap<Rule, String>,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            templates: Rule::ALL
                .into_iter()
                .map(|rule| (rule, rule.default_template().to_owned()))
                .collect(),
        }
    }
}

impl MessageTemplates {
    /// French message table.
    pub fn french() -> Self {
        let table = [
            (Rule::Required, "Le champ %s est requis"),
            (Rule::NotEmpty, "Le champ %s ne peut être vide"),
            (Rule::Slug, "Le champ %s n'est pas un slug valide"),
            (Rule::MinLength, "Le champ %s doit contenir plus de %d caractères"),
            (Rule::MaxLength, "Le champ %s doit contenir moins de %d caractères"),
            (Rule::BetweenLength, "Le champ %s doit contenir entre %d et %d caractères"),
            (Rule::Min, "Le champ %s doit être supérieur à %d"),
            (Rule::Max, "Le champ %s doit être inférieur à %d"),
            (Rule::Between, "Le champ %s doit être compris entre %d et %d"),
            (Rule::DateTime, "Le champ %s doit être une date valide au format (%s)"),
            (Rule::Phone, "Le champ %s n'est pas un numéro de téléphone valide"),
            (Rule::Email, "Le champ %s n'est pas un email valide"),
            (Rule::Number, "Le champ %s n'est pas un nombre valide"),
            (Rule::Enum, "Le champ %s doit être parmi %s"),
            (Rule::Match, "Le champ %s n'est pas valide"),
        ];
        Self {
            templates: table.into_iter().map(|(rule, tpl)| (rule, tpl.to_owned())).collect(),
        }
    }

    /// Replaces the template for one rule.
    #[must_use]
    pub fn with_template(mut self, rule: Rule, template: impl Into<String>) -> Self {
        self.templates.insert(rule, template.into());
        self
    }

    /// Template for `rule`, falling back to the built-in English one.
    pub fn get(&self, rule: Rule) -> &str {
        self.templates
            .get(&rule)
            .map_or(rule.default_template(), String::as_str)
    }

    /// Renders `rule`'s template with `field` followed by `params`.
    pub fn render(&self, rule: Rule, field: &str, params: &[Param]) -> String {
        format_template(self.get(rule), field, params)
    }
}

enum Arg<'a> {
    Field(&'a str),
    Param(&'a Param),
}

impl Arg<'_> {
    fn push_text(&self, out: &mut String) {
        match self {
            Arg::Field(field) => out.push_str(field),
            Arg::Param(param) => out.push_str(&param.to_string()),
        }
    }

    fn push_int(&self, out: &mut String) {
        let text = match self {
            Arg::Field(field) => *field,
            Arg::Param(Param::Int(n)) => {
                out.push_str(&n.to_string());
                return;
            }
            Arg::Param(Param::Text(text)) => text.as_str(),
        };
        out.push_str(&leading_int(text).to_string());
    }
}

// Integer prefix of `text`, 0 when there is none.
fn leading_int(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let end = trimmed
        .char_indices()
        .take_while(|&(i, c)| c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+')))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);
    trimmed[..end].parse().unwrap_or(0)
}

/// Fills `template` with `field` as the first argument and `params` after it.
pub(crate) fn format_template(template: &str, field: &str, params: &[Param]) -> String {
    let args: Vec<Arg<'_>> = core::iter::once(Arg::Field(field))
        .chain(params.iter().map(Arg::Param))
        .collect();

    let mut out = String::with_capacity(template.len() + field.len() + params.len() * 8);
    let mut next = 0;
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let directive = &rest[pos + 1..];

        if let Some(after) = directive.strip_prefix('%') {
            out.push('%');
            rest = after;
            continue;
        }

        // %N$s / %N$d
        let digits = directive.bytes().take_while(u8::is_ascii_digit).count();
        let (index, conv_at) = if digits > 0 && directive[digits..].starts_with('$') {
            let n: usize = directive[..digits].parse().unwrap_or(0);
            (n.checked_sub(1), digits + 1)
        } else {
            (None, 0)
        };

        match directive[conv_at..].chars().next() {
            Some(conv @ ('s' | 'd')) => {
                let arg = match index {
                    Some(i) => args.get(i),
                    None if conv_at == 0 => {
                        next += 1;
                        args.get(next - 1)
                    }
                    None => None,
                };
                if let Some(arg) = arg {
                    if conv == 's' {
                        arg.push_text(&mut out);
                    } else {
                        arg.push_int(&mut out);
                    }
                }
                rest = &directive[conv_at + 1..];
            }
            _ => {
                out.push('%');
                rest = directive;
            }
        }
    }
    out.push_str(rest);
    out
}
