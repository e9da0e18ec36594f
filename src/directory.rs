// src/directory.rs
//
// Search side of the app: talk to the show directory and turn its wrapper
// objects into `Show` records.

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::{
    Error, Result, Show,
    config::{consts::{PLACEHOLDER_IMAGE, USER_AGENT}, options::ApiOptions},
    favorites::Favorites,
};

/// Raw `show` object as the directory sends it. Unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DirectoryShow {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub image: Option<ImageLinks>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ImageLinks {
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
}

/// One element of the search response array.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub score: Option<f64>,
    pub show: DirectoryShow,
}

/// Anything that can answer a free-text show search.
pub trait Directory: Send + Sync {
    fn search(&self, query: &str) -> Result<Vec<SearchHit>>;
}

/// HTTP client for `GET {base}/search/shows?q=...`
pub struct TvMaze {
    client: Client,
    search_url: String,
}

impl TvMaze {
    pub fn new(api: &ApiOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(api.timeout())
            .build()?;
        Ok(Self { client, search_url: api.search_url() })
    }
}

impl Directory for TvMaze {
    fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }

        logd!("Directory: GET {}?q={}", self.search_url, query);
        let resp = self.client
            .get(&self.search_url)
            .query(&[("q", query)])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                url: resp.url().to_string(),
            });
        }

        let body = resp.text()?;
        parse_search_response(&body)
    }
}

/// Parse a search response body. `null` or an empty body means no hits.
pub fn parse_search_response(body: &str) -> Result<Vec<SearchHit>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let hits: Option<Vec<SearchHit>> = serde_json::from_str(body)?;
    Ok(hits.unwrap_or_default())
}

/// Medium poster if present, else the placeholder.
pub fn image_or_placeholder(image: Option<&ImageLinks>) -> String {
    image
        .and_then(|links| links.medium.as_deref())
        .filter(|url| !url.trim().is_empty())
        .map(String::from)
        .unwrap_or_else(|| s!(PLACEHOLDER_IMAGE))
}

/// One `Show` per hit, same order, `favorite` checked against `favorites`.
pub fn normalize(hits: Vec<SearchHit>, favorites: &Favorites) -> Vec<Show> {
    hits.into_iter()
        .map(|hit| {
            let DirectoryShow { id, name, image } = hit.show;
            Show {
                id,
                name,
                image: image_or_placeholder(image.as_ref()),
                favorite: favorites.is_favorite(id),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_blank_bodies_are_empty() {
        assert!(parse_search_response("null").unwrap().is_empty());
        assert!(parse_search_response("  ").unwrap().is_empty());
        assert!(parse_search_response("[]").unwrap().is_empty());
    }

    #[test]
    fn garbage_body_is_json_error() {
        let err = parse_search_response("<html>").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn blank_medium_falls_back() {
        let links = ImageLinks { medium: Some(s!(" ")), original: None };
        assert_eq!(image_or_placeholder(Some(&links)), PLACEHOLDER_IMAGE);
        assert_eq!(image_or_placeholder(None), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn empty_query_is_rejected_before_sending() {
        let tv = TvMaze::new(&ApiOptions::default()).unwrap();
        assert!(matches!(tv.search("   "), Err(Error::EmptyQuery)));
    }
}
