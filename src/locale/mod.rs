//! Fixed UI string tables per language.
//!
//! The status template carries `{FROM}`, `{TO}` and `{SIZE}` placeholders
//! substituted by [`format_status`]. Unknown language codes are rejected at
//! grid construction; nothing here falls back silently.

use crate::error::ConfigError;

/// UI strings for one language.
#[derive(Debug)]
pub struct LocaleStrings {
    pub code: &'static str,
    /// Placeholder text for the search box.
    pub search_placeholder: &'static str,
    /// Label next to the page-size selector.
    pub per_page: &'static str,
    /// Range-status template with `{FROM}`, `{TO}`, `{SIZE}` placeholders.
    pub status: &'static str,
    pub first: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub last: &'static str,
    /// Accessible sort-state labels attached to each header.
    pub sort_none: &'static str,
    pub sort_ascending: &'static str,
    pub sort_descending: &'static str,
    /// Full-width message shown instead of an empty table body.
    pub no_result: &'static str,
}

static EN: LocaleStrings = LocaleStrings {
    code: "en",
    search_placeholder: "Search...",
    per_page: "per page",
    status: "Showing {FROM} to {TO} of {SIZE} entries",
    first: "First",
    previous: "Previous",
    next: "Next",
    last: "Last",
    sort_none: "not sorted",
    sort_ascending: "sorted ascending",
    sort_descending: "sorted descending",
    no_result: "No results found",
};

static IT: LocaleStrings = LocaleStrings {
    code: "it",
    search_placeholder: "Cerca...",
    per_page: "per pagina",
    status: "Da {FROM} a {TO} di {SIZE} risultati",
    first: "Prima",
    previous: "Precedente",
    next: "Successiva",
    last: "Ultima",
    sort_none: "non ordinato",
    sort_ascending: "ordinato in modo crescente",
    sort_descending: "ordinato in modo decrescente",
    no_result: "Nessun risultato trovato",
};

static DE: LocaleStrings = LocaleStrings {
    code: "de",
    search_placeholder: "Suchen...",
    per_page: "pro Seite",
    status: "Zeige {FROM} bis {TO} von {SIZE} Einträgen",
    first: "Erste",
    previous: "Zurück",
    next: "Weiter",
    last: "Letzte",
    sort_none: "unsortiert",
    sort_ascending: "aufsteigend sortiert",
    sort_descending: "absteigend sortiert",
    no_result: "Keine Einträge gefunden",
};

static FR: LocaleStrings = LocaleStrings {
    code: "fr",
    search_placeholder: "Rechercher...",
    per_page: "par page",
    status: "Affichage de {FROM} à {TO} sur {SIZE} entrées",
    first: "Première",
    previous: "Précédente",
    next: "Suivante",
    last: "Dernière",
    sort_none: "non trié",
    sort_ascending: "tri croissant",
    sort_descending: "tri décroissant",
    no_result: "Aucun résultat trouvé",
};

static ES: LocaleStrings = LocaleStrings {
    code: "es",
    search_placeholder: "Buscar...",
    per_page: "por página",
    status: "Mostrando {FROM} a {TO} de {SIZE} registros",
    first: "Primera",
    previous: "Anterior",
    next: "Siguiente",
    last: "Última",
    sort_none: "sin ordenar",
    sort_ascending: "orden ascendente",
    sort_descending: "orden descendente",
    no_result: "No se encontraron resultados",
};

/// All shipped string tables.
static SUPPORTED: [&LocaleStrings; 5] = [&EN, &IT, &DE, &FR, &ES];

/// Resolves a two-letter language code to its string table.
pub fn strings(code: &str) -> Result<&'static LocaleStrings, ConfigError> {
    SUPPORTED
        .iter()
        .find(|l| l.code == code)
        .copied()
        .ok_or_else(|| ConfigError::UnknownLocale {
            code: code.to_string(),
            supported: SUPPORTED
                .iter()
                .map(|l| l.code)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Substitutes `{FROM}`, `{TO}` and `{SIZE}` in a status template.
pub fn format_status(template: &str, from: usize, to: usize, size: usize) -> String {
    template
        .replace("{FROM}", &from.to_string())
        .replace("{TO}", &to.to_string())
        .replace("{SIZE}", &size.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        for code in ["en", "it", "de", "fr", "es"] {
            assert_eq!(strings(code).unwrap().code, code);
        }
    }

    #[test]
    fn unknown_code_is_an_error() {
        let err = strings("xx").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("xx"), "got: {message}");
        assert!(message.contains("en"), "got: {message}");
    }

    #[test]
    fn status_substitution() {
        assert_eq!(
            format_status(EN.status, 1, 10, 25),
            "Showing 1 to 10 of 25 entries"
        );
        assert_eq!(format_status(IT.status, 11, 20, 25), "Da 11 a 20 di 25 risultati");
    }

    #[test]
    fn status_substitution_empty_result() {
        assert_eq!(
            format_status(EN.status, 0, 0, 0),
            "Showing 0 to 0 of 0 entries"
        );
    }

    #[test]
    fn every_locale_carries_all_placeholders() {
        for locale in SUPPORTED {
            for placeholder in ["{FROM}", "{TO}", "{SIZE}"] {
                assert!(
                    locale.status.contains(placeholder),
                    "{} is missing {}",
                    locale.code,
                    placeholder
                );
            }
        }
    }
}
