//! Translation of POSIX pattern text into the syntax the matching engine
//! understands.
//!
//! Extended syntax is already close to the engine's: only bracket
//! expressions need rewriting, because POSIX treats a backslash inside
//! brackets as a literal and has no class set operations. Basic syntax
//! swaps the meaning of escaped and bare grouping characters.

use regex_syntax::escape_into;

/// Rewrites `text` so that the engine reads it the way POSIX `regcomp`
/// would, in extended or basic syntax.
pub fn translate(text: &str, extended: bool) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    let mut pos = 0;
    if extended {
        translate_extended(&chars, &mut pos, &mut out);
    } else {
        translate_basic(&chars, &mut pos, &mut out);
    }
    out
}

fn translate_extended(chars: &[char], pos: &mut usize, out: &mut String) {
    while *pos < chars.len() {
        match chars[*pos] {
            '\\' => {
                out.push('\\');
                *pos += 1;
                if let Some(&c) = chars.get(*pos) {
                    out.push(c);
                    *pos += 1;
                }
            }
            '[' => bracket(chars, pos, out),
            c => {
                out.push(c);
                *pos += 1;
            }
        }
    }
}

fn translate_basic(chars: &[char], pos: &mut usize, out: &mut String) {
    // True where `*` is a literal and `^` is an anchor.
    let mut at_start = true;
    while *pos < chars.len() {
        let c = chars[*pos];
        *pos += 1;
        match c {
            '\\' => {
                let Some(&next) = chars.get(*pos) else {
                    out.push('\\');
                    break;
                };
                *pos += 1;
                match next {
                    '(' | '|' => {
                        out.push(next);
                        at_start = true;
                        continue;
                    }
                    ')' | '{' | '}' | '+' | '?' => out.push(next),
                    _ => {
                        out.push('\\');
                        out.push(next);
                    }
                }
            }
            '[' => {
                *pos -= 1;
                bracket(chars, pos, out);
            }
            '*' if at_start => literal('*', out),
            '^' if at_start => {
                out.push('^');
                continue;
            }
            '^' => literal('^', out),
            '$' if ends_expression(chars, *pos) => out.push('$'),
            '$' | '(' | ')' | '{' | '}' | '|' | '+' | '?' => literal(c, out),
            _ => out.push(c),
        }
        at_start = false;
    }
}

/// `$` is an anchor in basic syntax only at the end of the text or of a
/// group or alternative.
fn ends_expression(chars: &[char], pos: usize) -> bool {
    match chars.get(pos) {
        None => true,
        Some('\\') => matches!(chars.get(pos + 1), Some(')') | Some('|')),
        Some(_) => false,
    }
}

/// Copies a bracket expression starting at `chars[*pos] == '['`.
fn bracket(chars: &[char], pos: &mut usize, out: &mut String) {
    out.push('[');
    *pos += 1;
    if chars.get(*pos) == Some(&'^') {
        out.push('^');
        *pos += 1;
    }
    if chars.get(*pos) == Some(&']') {
        out.push_str("\\]");
        *pos += 1;
    }
    // True when the last element copied can start a range.
    let mut endpoint = false;
    while *pos < chars.len() {
        let c = chars[*pos];
        *pos += 1;
        match c {
            ']' => {
                out.push(']');
                return;
            }
            '[' => match chars.get(*pos) {
                Some(&delim @ (':' | '=' | '.')) => {
                    out.push('[');
                    out.push(delim);
                    *pos += 1;
                    while *pos < chars.len() {
                        let d = chars[*pos];
                        out.push(d);
                        *pos += 1;
                        if d == delim && chars.get(*pos) == Some(&']') {
                            out.push(']');
                            *pos += 1;
                            break;
                        }
                    }
                    endpoint = false;
                    continue;
                }
                _ => literal('[', out),
            },
            '-' if endpoint && chars.get(*pos).map_or(false, |&next| next != ']') => {
                // A range; its end is copied as a plain character so that
                // `[+--]` does not read as a set difference.
                out.push('-');
                member(chars[*pos], out);
                *pos += 1;
                endpoint = false;
                continue;
            }
            _ => member(c, out),
        }
        endpoint = true;
    }
    // Unterminated; the engine reports the error.
}

/// Copies one bracket member, escaping what the engine would read as a
/// class operator.
fn member(c: char, out: &mut String) {
    match c {
        '\\' | '&' | '~' | '-' | '[' | ']' => literal(c, out),
        _ => out.push(c),
    }
}

fn literal(c: char, out: &mut String) {
    escape_into(c.encode_utf8(&mut [0; 4]), out);
}
