use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Derive a URL-safe identifier from a human-readable name: lowercase, accents
/// folded to ASCII, runs of anything non-alphanumeric collapsed to a single
/// hyphen, no leading or trailing hyphen.
pub fn slugify(name: &str) -> String {
    let folded: String = name
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    let mut out = String::with_capacity(folded.len());
    let mut prev_hyphen = true; // start true to trim leading
    for c in folded.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            out.push('-');
            prev_hyphen = true;
        }
    }
    if out.ends_with('-') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_slugify_accents() {
        assert_eq!(slugify("Gestão Financeira"), "gestao-financeira");
    }

    #[test]
    fn test_slugify_punctuation_runs() {
        assert_eq!(slugify("Fluxo de Caixa -- o guia!"), "fluxo-de-caixa-o-guia");
    }

    #[test]
    fn test_slugify_leading_trailing() {
        assert_eq!(slugify("  Consultoria  "), "consultoria");
    }

    #[test]
    fn test_slugify_numbers() {
        assert_eq!(slugify("Planejamento 2025"), "planejamento-2025");
    }

    #[test]
    fn test_slugify_idempotent() {
        let once = slugify("Crédito & Cobrança");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_slugify_cedilla() {
        assert_eq!(slugify("Negociação de Dívidas"), "negociacao-de-dividas");
    }
}
