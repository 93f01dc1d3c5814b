//! Positional `{}` message templates
//!
//! `{{` and `}}` stand for literal braces. Any other brace is copied
//! through unchanged.

/// Number of `{}` slots in a template
pub fn placeholder_count(template: &str) -> usize {
    segments(template)
        .filter(|s| matches!(s, Segment::Slot))
        .count()
}

/// Fill the slots of `template` in order
///
/// Callers check the argument count first; surplus slots render empty and
/// surplus arguments are ignored.
pub fn fill(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len() + args.iter().map(String::len).sum::<usize>());
    let mut args = args.iter();

    for segment in segments(template) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Brace(c) => out.push(c),
            Segment::Slot => {
                if let Some(arg) = args.next() {
                    out.push_str(arg);
                }
            }
        }
    }

    out
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Brace(char),
    Slot,
}

fn segments(template: &str) -> impl Iterator<Item = Segment<'_>> {
    let bytes = template.as_bytes();
    let mut pos = 0;

    std::iter::from_fn(move || {
        if pos >= bytes.len() {
            return None;
        }

        let pair = bytes.get(pos..pos + 2);
        let segment = match pair {
            Some(b"{}") => Segment::Slot,
            Some(b"{{") => Segment::Brace('{'),
            Some(b"}}") => Segment::Brace('}'),
            _ => {
                // Run of text up to the next brace pair (a lone brace is text).
                let start = pos;
                pos += 1;
                while pos < bytes.len() && !matches!(bytes[pos], b'{' | b'}') {
                    pos += 1;
                }
                return Some(Segment::Text(&template[start..pos]));
            }
        };
        pos += 2;
        Some(segment)
    })
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
