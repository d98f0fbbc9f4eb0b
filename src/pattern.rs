//! Flag-aware regular expressions.
//!
//! Patterns and flags arrive as query-time values, so every call compiles its
//! own [`CompiledPattern`]. A compiled pattern is bound to the haystack it was
//! checked against: compilation fails if the pattern matches a zero-length
//! substring anywhere in that haystack, and the lifetime keeps the pattern from
//! being used on any other input.
use std::{borrow::Cow, iter};

use log::{debug, trace};
use regex::{Captures, Regex, RegexBuilder, Replacer};
use regex_automata::{meta, util::syntax, Anchored, Input};

use crate::errors::FunctionError;

/// A parsed set of flags drawn from `i`, `m`, `s` and `q`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagSet {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    pub literal: bool,
}

impl FlagSet {
    pub fn parse(flags: &str) -> Result<Self, FunctionError> {
        let mut set = FlagSet::default();

        for c in flags.chars() {
            let flag = match c {
                'i' => &mut set.case_insensitive,
                'm' => &mut set.multi_line,
                's' => &mut set.dot_matches_new_line,
                'q' => &mut set.literal,
                _ => return Err(FunctionError::pattern(format!("invalid flag '{}'", c), "")),
            };

            if *flag {
                return Err(FunctionError::pattern(format!("duplicate flag '{}'", c), ""));
            }

            *flag = true;
        }

        Ok(set)
    }

    fn source<'p>(&self, pattern: &'p str) -> Cow<'p, str> {
        if self.literal {
            Cow::Owned(regex::escape(pattern))
        } else {
            Cow::Borrowed(pattern)
        }
    }

    // `builder` and `syntax` must map the same flags onto the same options.

    fn builder(&self, pattern: &str) -> RegexBuilder {
        let mut builder = RegexBuilder::new(&self.source(pattern));
        builder
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line);
        builder
    }

    fn syntax(&self) -> syntax::Config {
        syntax::Config::new()
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
    }
}

/// Resource limits forwarded to the regex compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternConfig {
    pub size_limit: usize,
    pub dfa_size_limit: usize,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            size_limit: 10 * (1 << 20),
            dfa_size_limit: 2 * (1 << 20),
        }
    }
}

/// Compile `pattern` with `flags` without checking it against any input.
pub fn compile(pattern: &str, flags: &str, config: &PatternConfig) -> Result<Regex, FunctionError> {
    compile_with(pattern, &FlagSet::parse(flags)?, config)
}

fn compile_with(
    pattern: &str,
    flag_set: &FlagSet,
    config: &PatternConfig,
) -> Result<Regex, FunctionError> {
    let re = flag_set
        .builder(pattern)
        .size_limit(config.size_limit)
        .dfa_size_limit(config.dfa_size_limit)
        .build()
        .map_err(|err| FunctionError::pattern(err.to_string(), ""))?;

    trace!("compiled pattern {:?} with flags {:?}", pattern, flag_set);
    Ok(re)
}

#[derive(Debug)]
pub struct CompiledPattern<'h> {
    regex: Regex,
    haystack: &'h str,
}

impl<'h> CompiledPattern<'h> {
    /// Compile `pattern` for use against `haystack`.
    pub fn new(
        pattern: &str,
        flags: &str,
        haystack: &'h str,
        config: &PatternConfig,
    ) -> Result<Self, FunctionError> {
        let flag_set = FlagSet::parse(flags)?;
        let regex = compile_with(pattern, &flag_set, config)?;

        if matches_zero_length(pattern, &flag_set, haystack, config)? {
            debug!("pattern {:?} matches a zero-length string", pattern);
            return Err(FunctionError::pattern(
                "pattern matches zero-length string".to_owned(),
                "",
            ));
        }

        Ok(Self { regex, haystack })
    }

    /// Unanchored: true if any substring matches.
    pub fn is_match(&self) -> bool {
        self.regex.is_match(self.haystack)
    }

    /// Segments between matches, keeping leading and trailing empty segments.
    pub fn split(&self) -> Vec<&'h str> {
        self.regex.split(self.haystack).collect()
    }

    /// Parse a replacement string against this pattern's capture groups.
    pub fn template(&self, replacement: &str) -> Result<Template, FunctionError> {
        Template::parse(replacement, &self.regex)
    }

    pub fn replace_all(&self, template: &Template) -> String {
        self.regex.replace_all(self.haystack, template).into_owned()
    }
}

/// True if the pattern can match the empty string at any character boundary
/// of `haystack`, look-around context included.
///
/// Iterating matches is not enough: an empty match right after a non-empty one
/// is never reported (`a*` on `"aaa"`), so each boundary gets its own anchored
/// search confined to an empty span.
fn matches_zero_length(
    pattern: &str,
    flag_set: &FlagSet,
    haystack: &str,
    config: &PatternConfig,
) -> Result<bool, FunctionError> {
    let re = meta::Regex::builder()
        .syntax(flag_set.syntax())
        .configure(
            meta::Config::new()
                .nfa_size_limit(Some(config.size_limit))
                .hybrid_cache_capacity(config.dfa_size_limit),
        )
        .build(&flag_set.source(pattern))
        .map_err(|err| FunctionError::pattern(err.to_string(), ""))?;

    let mut boundaries = haystack
        .char_indices()
        .map(|(i, _)| i)
        .chain(iter::once(haystack.len()));

    Ok(boundaries.any(|i| {
        re.is_match(
            Input::new(haystack)
                .range(i..i)
                .anchored(Anchored::Yes),
        )
    }))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TemplatePart {
    Literal(String),
    Group(usize),
}

/// A parsed replacement string.
///
/// `$N` refers to capture group N. Digits after the first are consumed only
/// while they still name an existing group, so with two groups `$12` is group
/// 1 followed by a literal `2`. `${name}` refers to a named group and `\`
/// escapes the next character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    parts: Vec<TemplatePart>,
}

impl Template {
    pub(crate) fn parse(template: &str, re: &Regex) -> Result<Self, FunctionError> {
        let group_count = re.captures_len() - 1;
        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut it = template.chars().peekable();

        while let Some(c) = it.next() {
            match c {
                '\\' => match it.next() {
                    Some(escaped) => literal.push(escaped),
                    None => return Err(template_error("character to be escaped is missing")),
                },
                '$' => {
                    let group = match it.next() {
                        Some('{') => {
                            let mut name = String::new();
                            loop {
                                match it.next() {
                                    Some('}') => break,
                                    Some(ch) => name.push(ch),
                                    None => {
                                        return Err(template_error("unclosed group name"));
                                    }
                                }
                            }
                            re.capture_names()
                                .position(|n| n == Some(name.as_str()))
                                .ok_or_else(|| {
                                    template_error(&format!("no group with name {{{}}}", name))
                                })?
                        }
                        Some(d) if d.is_ascii_digit() => {
                            let mut group = d.to_digit(10).unwrap_or_default() as usize;
                            if group > group_count {
                                return Err(template_error(&format!("no group {}", group)));
                            }

                            while let Some(next) = it.peek().and_then(|ch| ch.to_digit(10)) {
                                let candidate = group * 10 + next as usize;
                                if candidate > group_count {
                                    break;
                                }
                                group = candidate;
                                it.next();
                            }

                            group
                        }
                        _ => return Err(template_error("illegal group reference")),
                    };

                    if !literal.is_empty() {
                        parts.push(TemplatePart::Literal(std::mem::take(&mut literal)));
                    }
                    parts.push(TemplatePart::Group(group));
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            parts.push(TemplatePart::Literal(literal));
        }

        Ok(Self { parts })
    }
}

impl Replacer for &Template {
    fn replace_append(&mut self, caps: &Captures<'_>, dst: &mut String) {
        for part in self.parts.iter() {
            match part {
                TemplatePart::Literal(s) => dst.push_str(s),
                TemplatePart::Group(idx) => {
                    if let Some(m) = caps.get(*idx) {
                        dst.push_str(m.as_str());
                    }
                }
            }
        }
    }
}

fn template_error(msg: &str) -> FunctionError {
    FunctionError::pattern(format!("invalid replacement template: {}", msg), "")
}
