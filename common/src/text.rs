//! String helpers.

/// Upper-cases the first character of `input` and leaves the rest untouched.
///
/// This is not title-casing: `"jOHN"` becomes `"JOHN"`, not `"John"`.
///
/// The mapping is locale-independent and one character wide. If the Unicode
/// uppercase of the first character expands to several characters (`ß` is
/// `SS`), the character is kept as is, so the output always has as many
/// `char`s as the input.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut output = String::with_capacity(input.len());
    output.push(uppercase_char(first));
    output.push_str(chars.as_str());
    output
}

fn uppercase_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
