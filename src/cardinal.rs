//! Cardinal numbers in Portuguese words.
//!
//! Numbers are spelled out group by group, most significant first:
//! - below one million, a thousands group ("mil", "dois mil") and a units group
//! - above that, one scale noun per group ("milhão", "bilião", ...)
//!
//! European Portuguese uses the long scale, so each scale noun covers six
//! digits and 10^9 reads "mil milhões". Brazilian Portuguese uses the short
//! scale with a new noun every three digits ("bilhão" = 10^9).
//!
//! The conjunction "e" joins the last non-zero group when that group is
//! below 100 or a round hundred ("mil e cem", "um milhão e duzentos");
//! every other join is a plain space ("mil duzentos e trinta e quatro").

use crate::locale::{vocabulary, Vocabulary};
use crate::options::Lang;

/// One spelled-out group and the numeric value (1-999) that decides its joiner.
struct Term {
    text: String,
    group: u64,
}

/// Spell out an integer in Portuguese words.
///
/// # Examples
/// ```
/// use ptfmt::{cardinal, Lang};
///
/// assert_eq!(cardinal::to_words(1234, Lang::PtPt), "mil duzentos e trinta e quatro");
/// assert_eq!(cardinal::to_words(-7, Lang::PtPt), "menos sete");
/// assert_eq!(cardinal::to_words(1_000_000_000, Lang::PtBr), "um bilhão");
/// ```
pub fn to_words(n: i64, lang: Lang) -> String {
    let vocab = vocabulary(lang);

    if n == 0 {
        return vocab.zero.to_string();
    }

    let words = positive_to_words(n.unsigned_abs(), vocab);
    if n < 0 {
        format!("{} {}", vocab.negative, words)
    } else {
        words
    }
}

fn positive_to_words(n: u64, vocab: &Vocabulary) -> String {
    let mut terms = Vec::new();

    // Groups above one million, each worth one scale noun
    let base = 10_u64.pow(vocab.scale_step);
    let mut blocks = Vec::new();
    let mut rest = n / 1_000_000;
    while rest > 0 {
        blocks.push(rest % base);
        rest /= base;
    }

    for (index, block) in blocks.iter().enumerate().rev() {
        if *block == 0 {
            continue;
        }
        let (one, many) = match vocab.scales.get(index) {
            Some(nouns) => *nouns,
            None => unreachable!("u64 never exceeds the largest scale noun"),
        };
        let noun = if *block == 1 { one } else { many };
        push_block(&mut terms, *block, Some(noun), vocab);
    }

    push_block(&mut terms, n % 1_000_000, None, vocab);

    join_terms(&terms, vocab)
}

/// Push the terms for a block below one million, tagging the last one with `noun`.
fn push_block(terms: &mut Vec<Term>, block: u64, noun: Option<&str>, vocab: &Vocabulary) {
    let thousands = block / 1000;
    let units = block % 1000;

    if thousands > 0 {
        let mut text = if thousands == 1 {
            vocab.thousand.to_string()
        } else {
            format!("{} {}", below_thousand(thousands, vocab), vocab.thousand)
        };
        if units == 0 {
            if let Some(noun) = noun {
                text.push(' ');
                text.push_str(noun);
            }
        }
        terms.push(Term {
            text,
            group: thousands,
        });
    }

    if units > 0 {
        let mut text = below_thousand(units, vocab);
        if let Some(noun) = noun {
            text.push(' ');
            text.push_str(noun);
        }
        terms.push(Term { text, group: units });
    }
}

fn join_terms(terms: &[Term], vocab: &Vocabulary) -> String {
    let mut result = String::new();
    let last = terms.len().saturating_sub(1);

    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            if i == last && (term.group < 100 || term.group % 100 == 0) {
                result.push(' ');
                result.push_str(vocab.conjunction);
            }
            result.push(' ');
        }
        result.push_str(&term.text);
    }

    result
}

/// Spell out 1-999.
fn below_thousand(n: u64, vocab: &Vocabulary) -> String {
    if n == 100 {
        return vocab.hundred.to_string();
    }

    let hundreds = (n / 100) as usize;
    let rest = (n % 100) as usize;

    let mut parts = Vec::with_capacity(2);
    if hundreds > 0 {
        parts.push(vocab.hundreds[hundreds].to_string());
    }
    if rest > 0 {
        parts.push(below_hundred(rest, vocab));
    }

    parts.join(&format!(" {} ", vocab.conjunction))
}

/// Spell out 1-99.
fn below_hundred(n: usize, vocab: &Vocabulary) -> String {
    match n {
        0..=9 => vocab.units[n].to_string(),
        10..=19 => vocab.teens[n - 10].to_string(),
        _ if n % 10 == 0 => vocab.tens[n / 10].to_string(),
        _ => format!(
            "{} {} {}",
            vocab.tens[n / 10],
            vocab.conjunction,
            vocab.units[n % 10]
        ),
    }
}
