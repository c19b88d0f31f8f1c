use std::collections::{HashMap, HashSet};

use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a fuzzy dictionary hit.
const FUZZY_THRESHOLD: f64 = 0.90;

/// Words that open a wrapped country cell's first line, or a spelling
/// variant's first word, beyond what the primary names already cover.
const EXTRA_START_TOKENS: [&str; 6] = ["Democratic", "Central", "Republic", "West", "Cote", "Sao"];

#[derive(Debug, Clone, Copy)]
pub struct Country {
    pub name: &'static str,
    pub iso3: &'static str,
    pub aliases: &'static [&'static str],
}

/// WHO African Region member states, plus the neighbouring states the
/// bulletins name in cross-border event rows. Names follow the
/// bulletins' own usage; aliases cover common spelling variants.
const TABLE: &[Country] = &[
    Country { name: "Algeria", iso3: "DZA", aliases: &[] },
    Country { name: "Angola", iso3: "AGO", aliases: &[] },
    Country { name: "Benin", iso3: "BEN", aliases: &[] },
    Country { name: "Botswana", iso3: "BWA", aliases: &[] },
    Country { name: "Burkina Faso", iso3: "BFA", aliases: &[] },
    Country { name: "Burundi", iso3: "BDI", aliases: &[] },
    Country { name: "Cabo Verde", iso3: "CPV", aliases: &["Cape Verde"] },
    Country { name: "Cameroon", iso3: "CMR", aliases: &[] },
    Country { name: "Central African Republic", iso3: "CAF", aliases: &[] },
    Country { name: "Chad", iso3: "TCD", aliases: &[] },
    Country { name: "Comoros", iso3: "COM", aliases: &[] },
    Country { name: "Congo", iso3: "COG", aliases: &["Republic of the Congo"] },
    Country { name: "Côte d'Ivoire", iso3: "CIV", aliases: &["Cote d'Ivoire", "Ivory Coast"] },
    Country {
        name: "Democratic Republic of the Congo",
        iso3: "COD",
        aliases: &["DR Congo"],
    },
    Country { name: "Equatorial Guinea", iso3: "GNQ", aliases: &[] },
    Country { name: "Eritrea", iso3: "ERI", aliases: &[] },
    Country { name: "Eswatini", iso3: "SWZ", aliases: &["Swaziland"] },
    Country { name: "Ethiopia", iso3: "ETH", aliases: &[] },
    Country { name: "Gabon", iso3: "GAB", aliases: &[] },
    Country { name: "Gambia", iso3: "GMB", aliases: &["The Gambia"] },
    Country { name: "Ghana", iso3: "GHA", aliases: &[] },
    Country { name: "Guinea", iso3: "GIN", aliases: &[] },
    Country { name: "Guinea-Bissau", iso3: "GNB", aliases: &[] },
    Country { name: "Kenya", iso3: "KEN", aliases: &[] },
    Country { name: "Lesotho", iso3: "LSO", aliases: &[] },
    Country { name: "Liberia", iso3: "LBR", aliases: &[] },
    Country { name: "Madagascar", iso3: "MDG", aliases: &[] },
    Country { name: "Malawi", iso3: "MWI", aliases: &[] },
    Country { name: "Mali", iso3: "MLI", aliases: &[] },
    Country { name: "Mauritania", iso3: "MRT", aliases: &[] },
    Country { name: "Mauritius", iso3: "MUS", aliases: &[] },
    Country { name: "Mozambique", iso3: "MOZ", aliases: &[] },
    Country { name: "Namibia", iso3: "NAM", aliases: &[] },
    Country { name: "Niger", iso3: "NER", aliases: &[] },
    Country { name: "Nigeria", iso3: "NGA", aliases: &[] },
    Country { name: "Rwanda", iso3: "RWA", aliases: &[] },
    Country {
        name: "Sao Tome and Principe",
        iso3: "STP",
        aliases: &["São Tomé and Príncipe"],
    },
    Country { name: "Senegal", iso3: "SEN", aliases: &[] },
    Country { name: "Seychelles", iso3: "SYC", aliases: &[] },
    Country { name: "Sierra Leone", iso3: "SLE", aliases: &[] },
    Country { name: "South Africa", iso3: "ZAF", aliases: &[] },
    Country { name: "South Sudan", iso3: "SSD", aliases: &[] },
    Country { name: "Togo", iso3: "TGO", aliases: &[] },
    Country { name: "Uganda", iso3: "UGA", aliases: &[] },
    Country {
        name: "United Republic of Tanzania",
        iso3: "TZA",
        aliases: &["Tanzania"],
    },
    Country { name: "Zambia", iso3: "ZMB", aliases: &[] },
    Country { name: "Zimbabwe", iso3: "ZWE", aliases: &[] },
    // Non-AFRO neighbours that appear in cross-border event rows.
    Country { name: "Djibouti", iso3: "DJI", aliases: &[] },
    Country { name: "Egypt", iso3: "EGY", aliases: &[] },
    Country { name: "Libya", iso3: "LBY", aliases: &[] },
    Country { name: "Morocco", iso3: "MAR", aliases: &[] },
    Country { name: "Somalia", iso3: "SOM", aliases: &[] },
    Country { name: "Sudan", iso3: "SDN", aliases: &[] },
    Country { name: "Tunisia", iso3: "TUN", aliases: &[] },
    Country { name: "Yemen", iso3: "YEM", aliases: &[] },
];

/// Country-name dictionary backing the parser's line heuristics and the
/// ISO3 column of the output.
pub struct CountryTable {
    countries: &'static [Country],
    start_tokens: HashSet<&'static str>,
    names: HashSet<&'static str>,
    iso3_by_name: HashMap<String, &'static str>,
}

impl CountryTable {
    #[must_use]
    pub fn afro() -> Self {
        let mut start_tokens: HashSet<&'static str> =
            EXTRA_START_TOKENS.iter().copied().collect();
        let mut names = HashSet::new();
        let mut iso3_by_name = HashMap::new();

        for country in TABLE {
            for name in std::iter::once(country.name).chain(country.aliases.iter().copied()) {
                names.insert(name);
                iso3_by_name.insert(name.to_lowercase(), country.iso3);
            }
            // Start tokens come from primary names only; aliases like
            // "The Gambia" would poison the set with ordinary words.
            if let Some(first) = country.name.split_whitespace().next() {
                start_tokens.insert(first);
            }
        }

        Self {
            countries: TABLE,
            start_tokens,
            names,
            iso3_by_name,
        }
    }

    pub fn all(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Whether a line of bulletin text looks like the start of a
    /// country cell: either a known name outright, or a first word that
    /// opens one (country cells wrap across lines in the extracted
    /// text, so only the first word is reliable).
    #[must_use]
    pub fn is_country_line(&self, line: &str) -> bool {
        let line = line.trim();
        if self.names.contains(line) {
            return true;
        }
        line.split_whitespace()
            .next()
            .is_some_and(|first| self.start_tokens.contains(first))
    }

    /// ISO 3166-1 alpha-3 code for a country name. Exact lookup over
    /// names and aliases first, then a fuzzy fallback for the spelling
    /// drift the bulletins exhibit between issues.
    #[must_use]
    pub fn iso3(&self, name: &str) -> Option<&'static str> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        if let Some(&code) = self.iso3_by_name.get(&needle) {
            return Some(code);
        }
        self.fuzzy_match(&needle)
    }

    fn fuzzy_match(&self, needle: &str) -> Option<&'static str> {
        let mut best: Option<(f64, &'static str)> = None;
        for (name, &code) in &self.iso3_by_name {
            let score = jaro_winkler(needle, name);
            if score >= FUZZY_THRESHOLD && best.is_none_or(|(top, _)| score > top) {
                best = Some((score, code));
            }
        }
        best.map(|(_, code)| code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_lookup() {
        let table = CountryTable::afro();

        assert_eq!(table.iso3("Kenya"), Some("KEN"));
        assert_eq!(table.iso3("Democratic Republic of the Congo"), Some("COD"));
        assert_eq!(table.iso3("South Sudan"), Some("SSD"));
    }

    #[test]
    fn test_lookup_is_case_and_whitespace_insensitive() {
        let table = CountryTable::afro();

        assert_eq!(table.iso3("  kenya  "), Some("KEN"));
        assert_eq!(table.iso3("UNITED REPUBLIC OF TANZANIA"), Some("TZA"));
    }

    #[test]
    fn test_alias_lookup() {
        let table = CountryTable::afro();

        assert_eq!(table.iso3("Tanzania"), Some("TZA"));
        assert_eq!(table.iso3("Cape Verde"), Some("CPV"));
        assert_eq!(table.iso3("Swaziland"), Some("SWZ"));
        assert_eq!(table.iso3("Cote d'Ivoire"), Some("CIV"));
    }

    #[test]
    fn test_empty_and_unknown_yield_none() {
        let table = CountryTable::afro();

        assert_eq!(table.iso3(""), None);
        assert_eq!(table.iso3("   "), None);
        assert_eq!(table.iso3("Atlantis"), None);
    }

    #[test]
    fn test_fuzzy_lookup() {
        let table = CountryTable::afro();

        // Missing hyphen, as extracted text sometimes renders it.
        assert_eq!(table.iso3("Guinea Bissau"), Some("GNB"));
        assert_eq!(table.iso3("Sierra Leonne"), Some("SLE"));
    }

    #[test]
    fn test_fuzzy_never_overrides_exact() {
        let table = CountryTable::afro();

        // "Niger" scores high against "Nigeria" but must stay exact.
        assert_eq!(table.iso3("Niger"), Some("NER"));
        assert_eq!(table.iso3("Guinea"), Some("GIN"));
    }

    #[test]
    fn test_country_line_detection() {
        let table = CountryTable::afro();

        assert!(table.is_country_line("Kenya"));
        assert!(table.is_country_line("Democratic Republic of the"));
        assert!(table.is_country_line("Central African"));
        assert!(!table.is_country_line("Total cases"));
        assert!(!table.is_country_line("An outbreak of cholera"));
        assert!(!table.is_country_line(""));
    }

    #[test]
    fn test_alias_first_words_do_not_leak_into_start_tokens() {
        let table = CountryTable::afro();

        // "The Gambia" is an alias; "The ..." lines are ordinary prose.
        assert!(!table.is_country_line("The Ministry of Health reported"));
    }

    #[test]
    fn test_table_covers_afro_membership() {
        let table = CountryTable::afro();
        assert!(table.len() >= 47);
    }
}
