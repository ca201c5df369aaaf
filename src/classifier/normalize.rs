// Text normalization for rule matching.
//
// Comments are only lowercased; their accents are kept. Accent tolerance
// lives on the pattern side instead: keywords that Spanish writers spell
// both with and without a tilde are authored once without accents and
// widened by accent_insensitive(), so "búlgaros" and "bulgaros" hit the same
// rule. Plain alternatives stay literal, which keeps "tomará" from looking
// like "ara" and "mí" from looking like "mi".

/// Lowercase a comment for rule matching.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Every lowercase spelling a Spanish writer may use for a bare vowel.
fn vowel_variants(ch: char) -> Option<&'static str> {
    match ch {
        'a' => Some("aáàâä"),
        'e' => Some("eéèêë"),
        'i' => Some("iíìîï"),
        'o' => Some("oóòôö"),
        'u' => Some("uúùûü"),
        _ => None,
    }
}

/// Rewrite a pattern written with bare vowels so each vowel also accepts
/// its accented forms. Vowels inside an existing `[...]` class are widened
/// in place; escaped characters are left alone.
pub fn accent_insensitive(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 3);
    let mut in_class = false;
    let mut escaped = false;

    for ch in pattern.chars() {
        if escaped {
            out.push(ch);
            escaped = false;
            continue;
        }
        match ch {
            '\\' => {
                escaped = true;
                out.push(ch);
            }
            '[' if !in_class => {
                in_class = true;
                out.push(ch);
            }
            ']' if in_class => {
                in_class = false;
                out.push(ch);
            }
            _ => match vowel_variants(ch) {
                Some(variants) if in_class => out.push_str(variants),
                Some(variants) => {
                    out.push('[');
                    out.push_str(variants);
                    out.push(']');
                }
                None => out.push(ch),
            },
        }
    }
    out
}
