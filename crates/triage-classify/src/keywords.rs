//! Keyword tables used by the heuristic classifier.
//!
//! The built-in lists mix Portuguese and English signal words. Order matters:
//! matched keywords are reported in table order.

/// Signal words for work-related email.
pub const PRODUCTIVE_KEYWORDS: &[&str] = &[
    "reunião",
    "projeto",
    "prazo",
    "entrega",
    "relatório",
    "apresentação",
    "meeting",
    "project",
    "deadline",
    "delivery",
    "report",
    "presentation",
    "trabalho",
    "tarefa",
    "responsabilidade",
    "objetivo",
    "meta",
    "agenda",
    "cronograma",
    "planejamento",
    "estratégia",
    "desenvolvimento",
    "análise",
];

/// Signal words for promotional or spam email.
pub const UNPRODUCTIVE_KEYWORDS: &[&str] = &[
    "spam",
    "promoção",
    "desconto",
    "oferta",
    "grátis",
    "ganhe",
    "prêmio",
    "promotion",
    "discount",
    "offer",
    "free",
    "win",
    "prize",
    "lottery",
    "clique aqui",
    "click here",
    "urgente",
    "urgent",
    "limitado",
    "exclusivo",
];

/// Immutable pair of keyword lists consulted by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    productive: Vec<String>,
    unproductive: Vec<String>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KeywordTable {
    /// The built-in Portuguese/English tables.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            productive: PRODUCTIVE_KEYWORDS.iter().map(|k| (*k).to_string()).collect(),
            unproductive: UNPRODUCTIVE_KEYWORDS
                .iter()
                .map(|k| (*k).to_string())
                .collect(),
        }
    }

    /// Built-in tables extended with extra keywords.
    ///
    /// Extras are trimmed and lower-cased; blanks and duplicates are skipped
    /// and built-in order is preserved.
    #[must_use]
    pub fn with_extra(extra_productive: &[String], extra_unproductive: &[String]) -> Self {
        let mut table = Self::builtin();
        extend_unique(&mut table.productive, extra_productive);
        extend_unique(&mut table.unproductive, extra_unproductive);
        table
    }

    #[must_use]
    pub fn productive(&self) -> &[String] {
        &self.productive
    }

    #[must_use]
    pub fn unproductive(&self) -> &[String] {
        &self.unproductive
    }
}

fn extend_unique(list: &mut Vec<String>, extra: &[String]) {
    for keyword in extra {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() || list.contains(&keyword) {
            continue;
        }
        list.push(keyword);
    }
}
