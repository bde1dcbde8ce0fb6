/// Reassembles the raw comma-split tokens of one data line into logical
/// fields.
///
/// The dataset's quoting rule is deliberately narrow (one quoted span per
/// field, no quote escaping): a token whose first character is `"` opens a
/// span that runs until the assembled value ends with `"`, and the commas
/// between the span's tokens are literal content. Both quotes are stripped.
/// Any other token is copied verbatim.
pub fn assemble_fields<'a, I>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tokens = tokens.into_iter();
    let mut fields = Vec::new();

    while let Some(token) = tokens.next() {
        match token.strip_prefix('"') {
            Some(opened) => fields.push(assemble_quoted(opened, &mut tokens)),
            None => fields.push(token.to_string()),
        }
    }

    fields
}

/// Consumes tokens until the running value ends with a closing quote. A span
/// that never closes runs to the end of the line and yields the assembled
/// remainder as-is.
fn assemble_quoted<'a, I>(opened: &str, tokens: &mut I) -> String
where
    I: Iterator<Item = &'a str>,
{
    let mut value = opened.to_string();

    loop {
        if let Some(content) = value.strip_suffix('"') {
            return content.to_string();
        }

        match tokens.next() {
            Some(token) => {
                value.push(',');
                value.push_str(token);
            }
            None => return value,
        }
    }
}
