//! Wire-format records and their mapping into the canonical schema.
//!
//! Deserialization is deliberately split from validation: serde gets the
//! bytes into shape, then the `into_*` mappings apply the envelope rules and
//! number parsing and produce either domain values or a
//! [`KinologError`](crate::domain::KinologError).

use serde::Deserialize;

use crate::domain::{KinologError, MovieDetail, MovieSummary, Result};

/// Envelope of a search response.
///
/// The catalog reports "no matches" as `Response: "False"` with an `Error`
/// string, still under HTTP 200. `Search` is absent in that case.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchEnvelope {
    pub response: String,
    pub search: Option<Vec<SummaryRecord>>,
    pub error: Option<String>,
}

/// One search hit as the catalog encodes it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SummaryRecord {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
}

/// A full detail record as the catalog encodes it.
///
/// Detail lookups share the envelope convention: an unknown id comes back as
/// `Response: "False"` with every other field absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetailRecord {
    pub response: Option<String>,
    pub error: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub poster: String,
    #[serde(default)]
    pub runtime: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(default)]
    pub plot: String,
    #[serde(default)]
    pub released: String,
    #[serde(default)]
    pub actors: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub genre: String,
}

impl SearchEnvelope {
    /// Applies the envelope rule and maps the hits into the canonical schema.
    ///
    /// A `False` envelope always maps to the same user-facing message, no
    /// matter what the catalog put in `Error`; the raw reason goes to the
    /// trace log instead.
    pub fn into_summaries(self) -> Result<Vec<MovieSummary>> {
        if self.response != "True" {
            tracing::debug!(reason = ?self.error, "catalog returned a false envelope");
            return Err(KinologError::NotFound("movies not found".to_string()));
        }
        let records = self.search.unwrap_or_default();
        Ok(records.into_iter().map(SummaryRecord::into_summary).collect())
    }
}

impl SummaryRecord {
    fn into_summary(self) -> MovieSummary {
        MovieSummary {
            id: self.imdb_id,
            title: self.title,
            year: self.year,
            poster_url: self.poster,
        }
    }
}

impl DetailRecord {
    /// Applies the envelope rule, then parses the stringly-typed numbers.
    pub fn into_detail(self) -> Result<MovieDetail> {
        if self.response.as_deref() == Some("False") {
            tracing::debug!(reason = ?self.error, "catalog returned a false envelope");
            return Err(KinologError::NotFound("movies not found".to_string()));
        }

        let runtime_minutes = parse_runtime(&self.runtime)?;
        let imdb_rating = parse_rating(&self.imdb_rating)?;

        Ok(MovieDetail {
            id: self.imdb_id,
            title: self.title,
            year: self.year,
            poster_url: self.poster,
            runtime_minutes,
            imdb_rating,
            plot: self.plot,
            released: self.released,
            actors: self.actors,
            director: self.director,
            genre: self.genre,
        })
    }
}

/// Extracts the whole-minute count from the catalog's `"148 min"` form.
///
/// Only the leading token is parsed; anything after the first space is
/// ignored. `"N/A"` and other non-numeric forms are mapping errors.
fn parse_runtime(raw: &str) -> Result<u32> {
    let leading = raw.split_whitespace().next().unwrap_or_default();
    leading
        .parse()
        .map_err(|_| KinologError::Parse(format!("runtime {raw:?}")))
}

/// Parses the catalog's string-encoded 0-10 rating.
fn parse_rating(raw: &str) -> Result<f64> {
    raw.parse()
        .map_err(|_| KinologError::Parse(format!("imdb rating {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_envelope_maps_hits() {
        let body = r#"{
            "Search": [
                {"Title": "Inception", "Year": "2010", "imdbID": "tt1375666", "Type": "movie", "Poster": "https://m.media-amazon.com/inception.jpg"}
            ],
            "totalResults": "1",
            "Response": "True"
        }"#;
        let envelope: SearchEnvelope = serde_json::from_str(body).unwrap();
        let summaries = envelope.into_summaries().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, "tt1375666");
        assert_eq!(summaries[0].title, "Inception");
        assert_eq!(summaries[0].year, "2010");
    }

    #[test]
    fn false_envelope_maps_to_canonical_message() {
        let body = r#"{"Response": "False", "Error": "Too many results."}"#;
        let envelope: SearchEnvelope = serde_json::from_str(body).unwrap();
        let err = envelope.into_summaries().unwrap_err();
        assert_eq!(err.to_string(), "movies not found");
    }

    #[test]
    fn detail_record_parses_runtime_and_rating() {
        let body = r#"{
            "Title": "Inception",
            "Year": "2010",
            "Released": "16 Jul 2010",
            "Runtime": "148 min",
            "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan",
            "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
            "Plot": "A thief who steals corporate secrets.",
            "Poster": "https://m.media-amazon.com/inception.jpg",
            "imdbRating": "8.8",
            "imdbID": "tt1375666",
            "Response": "True"
        }"#;
        let record: DetailRecord = serde_json::from_str(body).unwrap();
        let detail = record.into_detail().unwrap();
        assert_eq!(detail.runtime_minutes, 148);
        assert!((detail.imdb_rating - 8.8).abs() < 1e-9);
        assert_eq!(detail.director, "Christopher Nolan");
    }

    #[test]
    fn false_detail_envelope_is_not_found() {
        let body = r#"{"Response": "False", "Error": "Incorrect IMDb ID."}"#;
        let record: DetailRecord = serde_json::from_str(body).unwrap();
        let err = record.into_detail().unwrap_err();
        assert_eq!(err.to_string(), "movies not found");
    }

    #[test]
    fn non_numeric_runtime_is_a_parse_error() {
        assert!(parse_runtime("N/A").is_err());
        assert!(parse_runtime("").is_err());
        assert_eq!(parse_runtime("90 min").unwrap(), 90);
    }

    #[test]
    fn rating_parses_plain_decimal() {
        assert!((parse_rating("8.8").unwrap() - 8.8).abs() < 1e-9);
        assert!(parse_rating("N/A").is_err());
    }
}
