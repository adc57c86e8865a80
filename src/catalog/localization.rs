//! Translation fallback for a movie's text fields.

use super::models::{ProviderMovie, Translation};

/// Title, overview and tagline after translation fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText {
    pub title: String,
    pub overview: String,
    pub tagline: String,
}

impl LocalizedText {
    /// The provider's own values, untouched.
    pub fn base(movie: &ProviderMovie) -> Self {
        Self {
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            tagline: movie.tagline.clone(),
        }
    }
}

/// Resolve the text fields of `movie` for a target language and country.
///
/// The first translation, in provider order, whose language equals
/// `language` or whose country equals `country` is used; later entries are
/// never consulted even when they are more complete. Each field takes the
/// translated value only when it is non-empty.
pub fn resolve(movie: &ProviderMovie, language: &str, country: Option<&str>) -> LocalizedText {
    let base = LocalizedText::base(movie);

    let Some(translation) = movie
        .translations
        .as_ref()
        .and_then(|set| set.translations.iter().find(|t| matches(t, language, country)))
    else {
        return base;
    };

    LocalizedText {
        title: or_base(&translation.data.title, base.title),
        overview: or_base(&translation.data.overview, base.overview),
        tagline: or_base(&translation.data.tagline, base.tagline),
    }
}

fn matches(translation: &Translation, language: &str, country: Option<&str>) -> bool {
    let language_match =
        !language.is_empty() && translation.iso_639_1.eq_ignore_ascii_case(language);
    let country_match = country
        .filter(|c| !c.is_empty())
        .is_some_and(|c| translation.iso_3166_1.eq_ignore_ascii_case(c));
    language_match || country_match
}

fn or_base(localized: &str, base: String) -> String {
    if localized.is_empty() {
        base
    } else {
        localized.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::{TranslationData, TranslationSet};

    fn translation(language: &str, country: &str, title: &str, overview: &str) -> Translation {
        Translation {
            iso_3166_1: country.into(),
            iso_639_1: language.into(),
            data: TranslationData {
                title: title.into(),
                overview: overview.into(),
                tagline: String::new(),
            },
            ..Default::default()
        }
    }

    fn movie(translations: Option<Vec<Translation>>) -> ProviderMovie {
        ProviderMovie {
            id: 10,
            title: "Original".into(),
            overview: "Base overview".into(),
            tagline: "Base tagline".into(),
            translations: translations.map(|translations| TranslationSet { translations }),
            ..Default::default()
        }
    }

    #[test]
    fn language_match_replaces_title() {
        let m = movie(Some(vec![translation("pt", "BR", "Traduzido", "")]));
        let text = resolve(&m, "pt", None);
        assert_eq!(text.title, "Traduzido");
        assert_eq!(text.overview, "Base overview");
        assert_eq!(text.tagline, "Base tagline");
    }

    #[test]
    fn empty_translated_title_falls_back() {
        let m = movie(Some(vec![translation("pt", "BR", "", "Sinopse")]));
        let text = resolve(&m, "pt", Some("BR"));
        assert_eq!(text.title, "Original");
        assert_eq!(text.overview, "Sinopse");
    }

    #[test]
    fn country_match_is_enough() {
        let m = movie(Some(vec![translation("es", "BR", "Por país", "")]));
        let text = resolve(&m, "pt", Some("BR"));
        assert_eq!(text.title, "Por país");
    }

    #[test]
    fn first_match_wins_even_if_incomplete() {
        let m = movie(Some(vec![
            translation("en", "US", "English", "English overview"),
            translation("pt", "PT", "", ""),
            translation("pt", "BR", "Completo", "Sinopse completa"),
        ]));
        let text = resolve(&m, "pt", Some("BR"));
        assert_eq!(text, LocalizedText::base(&m));
    }

    #[test]
    fn no_translations_keeps_base() {
        let m = movie(None);
        assert_eq!(resolve(&m, "pt", Some("BR")), LocalizedText::base(&m));
    }

    #[test]
    fn no_matching_entry_keeps_base() {
        let m = movie(Some(vec![translation("fr", "FR", "Titre", "")]));
        assert_eq!(resolve(&m, "pt", Some("BR")), LocalizedText::base(&m));
    }

    #[test]
    fn empty_target_codes_never_match() {
        let m = movie(Some(vec![translation("", "", "Ghost", "")]));
        assert_eq!(resolve(&m, "", None).title, "Original");
    }
}
