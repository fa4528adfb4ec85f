//! Binding of browse request parameters.
//!
//! The page form submits:
//!
//! | key        | meaning                          |
//! |------------|----------------------------------|
//! | `search`   | title search terms               |
//! | `mpaa`     | allowed MPAA rating (repeatable) |
//! | `genre`    | allowed major genre (repeatable) |
//! | `imdb_min` / `imdb_max` | IMDB bounds         |
//! | `rt_min` / `rt_max`     | Rotten Tomatoes bounds |
//!
//! Parameters are read from the raw key/value pairs so repeated keys work.
//! Nothing here can fail: unknown keys are ignored and values that do not
//! parse are treated as absent. When a bound key repeats, the last value
//! that parses wins; a blank or malformed repeat never clears a bound.

use pipeline::{ScoreRange, SearchCriteria};

/// Browse parameters as submitted, kept so the page can echo them back
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowseParams {
    pub search: String,
    pub mpaa: Vec<String>,
    pub genre: Vec<String>,
    pub imdb_min: Option<f64>,
    pub imdb_max: Option<f64>,
    pub rt_min: Option<f64>,
    pub rt_max: Option<f64>,
}

impl BrowseParams {
    /// Bind parameters from decoded query-string pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "search" => params.search = value.to_string(),
                "mpaa" => push_choice(&mut params.mpaa, value),
                "genre" => push_choice(&mut params.genre, value),
                "imdb_min" => set_bound(&mut params.imdb_min, value),
                "imdb_max" => set_bound(&mut params.imdb_max, value),
                "rt_min" => set_bound(&mut params.rt_min, value),
                "rt_max" => set_bound(&mut params.rt_max, value),
                _ => {}
            }
        }
        params
    }

    /// Turn the submitted form into pipeline criteria
    pub fn to_criteria(&self) -> SearchCriteria {
        SearchCriteria {
            terms: (!self.search.is_empty()).then(|| self.search.clone()),
            mpaa_ratings: self.mpaa.clone(),
            genres: self.genre.clone(),
            imdb: ScoreRange::new(self.imdb_min, self.imdb_max),
            rotten_tomatoes: ScoreRange::new(self.rt_min, self.rt_max),
        }
    }
}

/// Record a checkbox value once, ignoring blanks
fn push_choice(choices: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !choices.iter().any(|c| c == value) {
        choices.push(value.to_string());
    }
}

/// Overwrite a bound only with a usable value
fn set_bound(bound: &mut Option<f64>, value: &str) {
    if let Some(parsed) = parse_bound(value) {
        *bound = Some(parsed);
    }
}

/// Blank, non-numeric and non-finite input all mean "no bound"
fn parse_bound(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|bound| bound.is_finite())
}
