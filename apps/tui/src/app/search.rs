use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Fuzzy search over the names of rendered markers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    /// Marker indices, best match first.
    pub matches: Vec<usize>,
}

impl SearchState {
    pub fn clear(&mut self) {
        self.query.clear();
        self.matches.clear();
    }

    pub fn refresh<'a, I>(&mut self, names: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.matches = rank_matches(&self.query, names);
    }

    pub fn best(&self) -> Option<usize> {
        self.matches.first().copied()
    }
}

/// Indices of `names` matching `query`, best score first. Ties keep marker
/// order. An empty query matches everything.
pub fn rank_matches<'a, I>(query: &str, names: I) -> Vec<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = query.trim();
    if query.is_empty() {
        return names.into_iter().enumerate().map(|(index, _)| index).collect();
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    let mut scored: Vec<(i64, usize)> = names
        .into_iter()
        .enumerate()
        .filter_map(|(index, name)| matcher.fuzzy_match(name, query).map(|score| (score, index)))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    scored.into_iter().map(|(_, index)| index).collect()
}
