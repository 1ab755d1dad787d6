/*! HTML entity decoding

WikiExtractor escapes text that was already escaped (`&amp;nbsp;` instead of `&nbsp;`),
so dumps are decoded exactly twice with [decode_twice].
Decoding until the text is stable would also decode legitimately escaped text
(an article about `&amp;` for instance), so no loop is done here.

Decoding follows the HTML5 rules closely enough for dump content:
- numeric references (`&#233;`, `&#xE9;`), with or without the trailing `;`,
- named references from the HTML5 table (`&eacute;`),
- the HTML5 legacy names, also recognized without `;` (`&nbsp`, `&eacute`...).

Anything else (`AT&T`, `&unknown;`) is kept as is.
!*/
use std::borrow::Cow;

use lazy_static::lazy_static;
use quick_xml::escape::resolve_html5_entity;
use regex::{Captures, Regex};

lazy_static! {
    static ref ENTITY: Regex =
        Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]*)(;?)").unwrap();
}

/// Names that browsers decode even when the `;` is missing (the HTML5 legacy set).
const LEGACY_NAMES: &[&str] = &[
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml", "COPY", "Ccedil",
    "ETH", "Eacute", "Ecirc", "Egrave", "Euml", "GT", "Iacute", "Icirc", "Igrave", "Iuml", "LT",
    "Ntilde", "Oacute", "Ocirc", "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN",
    "Uacute", "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig", "agrave",
    "amp", "aring", "atilde", "auml", "brvbar", "ccedil", "cedil", "cent", "copy", "curren", "deg",
    "divide", "eacute", "ecirc", "egrave", "eth", "euml", "frac12", "frac14", "frac34", "gt",
    "iacute", "icirc", "iexcl", "igrave", "iquest", "iuml", "laquo", "lt", "macr", "micro",
    "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf", "ordm", "oslash",
    "otilde", "ouml", "para", "plusmn", "pound", "quot", "raquo", "reg", "sect", "shy", "sup1",
    "sup2", "sup3", "szlig", "thorn", "times", "uacute", "ucirc", "ugrave", "uml", "uuml",
    "yacute", "yen", "yuml",
];

/// Decode a numeric reference body (`#233` or `#xE9`).
fn decode_numeric(reference: &str) -> String {
    let code = if let Some(hex) = reference
        .strip_prefix("#x")
        .or_else(|| reference.strip_prefix("#X"))
    {
        u32::from_str_radix(hex, 16).ok()
    } else {
        reference[1..].parse::<u32>().ok()
    };

    match code.filter(|c| *c != 0).and_then(char::from_u32) {
        Some(c) => c.to_string(),
        None => char::REPLACEMENT_CHARACTER.to_string(),
    }
}

/// Longest legacy name that prefixes `name`, with its replacement.
fn legacy_prefix(name: &str) -> Option<(&'static str, &'static str)> {
    LEGACY_NAMES
        .iter()
        .filter(|legacy| name.starts_with(**legacy))
        .max_by_key(|legacy| legacy.len())
        .and_then(|legacy| resolve_html5_entity(legacy).map(|decoded| (*legacy, decoded)))
}

fn replace(caps: &Captures) -> String {
    let name = &caps[1];
    let terminated = !caps[2].is_empty();

    if name.starts_with('#') {
        return decode_numeric(name);
    }

    if terminated {
        if let Some(decoded) = resolve_html5_entity(name) {
            return decoded.to_string();
        }
    }

    match legacy_prefix(name) {
        Some((legacy, decoded)) => format!("{}{}{}", decoded, &name[legacy.len()..], &caps[2]),
        None => caps[0].to_string(),
    }
}

/// Decodes entities once.
pub fn decode(text: &str) -> Cow<str> {
    ENTITY.replace_all(text, replace)
}

/// Decodes entities twice, undoing the double escaping of the dumps.
pub fn decode_twice(text: &str) -> String {
    decode(&decode(text)).into_owned()
}
