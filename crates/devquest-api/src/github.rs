//! Handlers for `/github` endpoints — live GitHub data dressed up as quests.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/github/repos` | Quest list; canned fallback when offline |
//! | `GET`  | `/github/repos/{owner}/{repo}` | Detail with language breakdown |
//! | `POST` | `/github/repos/{owner}/{repo}/analyze` | Mock review |
//! | `GET`  | `/github/quest-stats` | Aggregates over the quest list |
//! | `GET`  | `/github/profile` | User profile; canned fallback |
//!
//! Every payload carries a `source` field (`"github"` or `"fallback"`) so the
//! client can tell live data from the canned set.

use std::{collections::HashMap, time::Duration};

use axum::{
  Json,
  extract::{Path, State},
};
use devquest_core::store::GameStore;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{AppState, error::ApiError};

const GITHUB_API: &str = "https://api.github.com";
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

// ─── Client ──────────────────────────────────────────────────────────────────

/// Data plus where it came from. Fallback payloads are served with a 200 and
/// an explicit marker rather than an error, so the client always renders.
pub enum Fetched<T> {
  Live(T),
  Fallback(T),
}

impl<T> Fetched<T> {
  pub fn source(&self) -> &'static str {
    match self {
      Self::Live(_) => "github",
      Self::Fallback(_) => "fallback",
    }
  }

  pub fn into_inner(self) -> T {
    match self {
      Self::Live(v) | Self::Fallback(v) => v,
    }
  }
}

/// Thin GitHub REST client. All fetches share one pooled connection and a
/// hard upstream timeout.
pub struct GithubClient {
  http: reqwest::Client,
  user: String,
}

impl GithubClient {
  pub fn new(user: impl Into<String>) -> reqwest::Result<Self> {
    let http = reqwest::Client::builder()
      .timeout(UPSTREAM_TIMEOUT)
      .user_agent("devquest-server")
      .build()?;
    Ok(Self { http, user: user.into() })
  }

  pub fn user(&self) -> &str {
    &self.user
  }

  /// The user's repositories as quests, or the canned set when the API is
  /// unreachable or unhappy.
  pub async fn quests(&self) -> Fetched<Vec<Quest>> {
    match self.try_repos().await {
      Ok(repos) => Fetched::Live(
        repos
          .into_iter()
          .filter(|r| !r.fork)
          .map(|r| r.into_quest(&self.user))
          .collect(),
      ),
      Err(e) => {
        tracing::warn!(error = %e, "github repos fetch failed, using fallback");
        Fetched::Fallback(fallback_quests(&self.user))
      }
    }
  }

  async fn try_repos(&self) -> reqwest::Result<Vec<RawRepo>> {
    self
      .http
      .get(format!("{GITHUB_API}/users/{}/repos", self.user))
      .query(&[("sort", "updated"), ("per_page", "30")])
      .header("Accept", "application/vnd.github.v3+json")
      .send()
      .await?
      .error_for_status()?
      .json()
      .await
  }

  /// Single-repo detail plus its byte-per-language breakdown.
  pub async fn repo_detail(
    &self,
    owner: &str,
    repo: &str,
  ) -> Result<RepoDetail, ApiError> {
    let resp = self
      .http
      .get(format!("{GITHUB_API}/repos/{owner}/{repo}"))
      .header("Accept", "application/vnd.github.v3+json")
      .send()
      .await
      .map_err(|e| ApiError::Upstream(e.to_string()))?;

    if resp.status() == reqwest::StatusCode::NOT_FOUND {
      return Err(ApiError::NotFound(format!(
        "repository {owner}/{repo} not found"
      )));
    }
    let raw: RawRepo = resp
      .error_for_status()
      .map_err(|e| ApiError::Upstream(e.to_string()))?
      .json()
      .await
      .map_err(|e| ApiError::Upstream(e.to_string()))?;

    // Breakdown failures are tolerated; the detail is still useful.
    let languages = self.languages(owner, repo).await.unwrap_or_default();

    Ok(RepoDetail {
      name:                raw.name,
      description:         raw.description,
      language:            raw.language,
      stars:               raw.stargazers_count,
      forks:               raw.forks_count,
      html_url:            raw.html_url,
      languages_breakdown: languages,
    })
  }

  async fn languages(
    &self,
    owner: &str,
    repo: &str,
  ) -> reqwest::Result<HashMap<String, i64>> {
    self
      .http
      .get(format!("{GITHUB_API}/repos/{owner}/{repo}/languages"))
      .header("Accept", "application/vnd.github.v3+json")
      .send()
      .await?
      .error_for_status()?
      .json()
      .await
  }

  /// The user's profile card, or a canned one when offline.
  pub async fn profile(&self) -> Fetched<GithubProfile> {
    match self.try_profile().await {
      Ok(profile) => Fetched::Live(profile),
      Err(e) => {
        tracing::warn!(error = %e, "github profile fetch failed, using fallback");
        Fetched::Fallback(fallback_profile(&self.user))
      }
    }
  }

  async fn try_profile(&self) -> reqwest::Result<GithubProfile> {
    let raw: RawUser = self
      .http
      .get(format!("{GITHUB_API}/users/{}", self.user))
      .header("Accept", "application/vnd.github.v3+json")
      .send()
      .await?
      .error_for_status()?
      .json()
      .await?;

    Ok(GithubProfile {
      login:        raw.login,
      name:         raw.name,
      avatar_url:   raw.avatar_url,
      bio:          raw.bio,
      public_repos: raw.public_repos,
      followers:    raw.followers,
      following:    raw.following,
      html_url:     raw.html_url,
    })
  }
}

// ─── Wire types ──────────────────────────────────────────────────────────────

/// What the GitHub list/detail endpoints return. Everything optional is
/// defaulted so schema drift upstream cannot break deserialisation.
#[derive(Debug, Deserialize)]
pub struct RawRepo {
  pub name:              String,
  #[serde(default)]
  pub description:       Option<String>,
  #[serde(default)]
  pub language:          Option<String>,
  #[serde(default)]
  pub stargazers_count:  i64,
  #[serde(default)]
  pub forks_count:       i64,
  #[serde(default)]
  pub archived:          bool,
  #[serde(default)]
  pub fork:              bool,
  #[serde(default)]
  pub has_wiki:          bool,
  #[serde(default)]
  pub html_url:          String,
  #[serde(default)]
  pub updated_at:        String,
  #[serde(default)]
  pub homepage:          Option<String>,
  #[serde(default)]
  pub topics:            Vec<String>,
  #[serde(default)]
  pub created_at:        String,
  #[serde(default)]
  pub size:              i64,
  #[serde(default)]
  pub open_issues_count: i64,
  #[serde(default)]
  pub has_pages:         bool,
  #[serde(default)]
  pub owner:             RawOwner,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawOwner {
  #[serde(default)]
  pub login: String,
}

#[derive(Debug, Deserialize)]
struct RawUser {
  login:        String,
  #[serde(default)]
  name:         Option<String>,
  #[serde(default)]
  avatar_url:   String,
  #[serde(default)]
  bio:          Option<String>,
  #[serde(default)]
  public_repos: i64,
  #[serde(default)]
  followers:    i64,
  #[serde(default)]
  following:    i64,
  #[serde(default)]
  html_url:     String,
}

/// A repository dressed in RPG metadata for the Quest Log.
#[derive(Debug, Clone, Serialize)]
pub struct Quest {
  pub name:              String,
  pub description:       String,
  pub language:          String,
  pub stars:             i64,
  pub forks:             i64,
  pub status:            String,
  pub rarity:            String,
  pub xp:                i64,
  pub html_url:          String,
  pub updated_at:        String,
  pub homepage:          String,
  pub topics:            Vec<String>,
  pub created_at:        String,
  pub size:              i64,
  pub open_issues_count: i64,
  pub has_pages:         bool,
  pub owner:             String,
}

#[derive(Debug, Serialize)]
pub struct RepoDetail {
  pub name:                String,
  pub description:         Option<String>,
  pub language:            Option<String>,
  pub stars:               i64,
  pub forks:               i64,
  pub html_url:            String,
  pub languages_breakdown: HashMap<String, i64>,
}

#[derive(Debug, Serialize)]
pub struct GithubProfile {
  pub login:        String,
  pub name:         Option<String>,
  pub avatar_url:   String,
  pub bio:          Option<String>,
  pub public_repos: i64,
  pub followers:    i64,
  pub following:    i64,
  pub html_url:     String,
}

// ─── Quest math ──────────────────────────────────────────────────────────────

fn rarity(stars: i64) -> &'static str {
  match stars {
    s if s >= 50 => "Legendary",
    s if s >= 20 => "Epic",
    s if s >= 5 => "Rare",
    _ => "Common",
  }
}

fn quest_xp(stars: i64, forks: i64, has_wiki: bool) -> i64 {
  let base = 100 + stars * 10 + forks * 15 + if has_wiki { 25 } else { 0 };
  base.min(500)
}

impl RawRepo {
  fn into_quest(self, fallback_owner: &str) -> Quest {
    let owner = if self.owner.login.is_empty() {
      fallback_owner.to_string()
    } else {
      self.owner.login
    };
    Quest {
      xp: quest_xp(self.stargazers_count, self.forks_count, self.has_wiki),
      rarity: rarity(self.stargazers_count).to_string(),
      status: if self.archived { "Completed" } else { "Active" }.to_string(),
      name: self.name,
      description: self
        .description
        .unwrap_or_else(|| "No description".to_string()),
      language: self.language.unwrap_or_else(|| "Unknown".to_string()),
      stars: self.stargazers_count,
      forks: self.forks_count,
      html_url: self.html_url,
      updated_at: self.updated_at,
      homepage: self.homepage.unwrap_or_default(),
      topics: self.topics,
      created_at: self.created_at,
      size: self.size,
      open_issues_count: self.open_issues_count,
      has_pages: self.has_pages,
      owner,
    }
  }
}

// ─── Fallback data ───────────────────────────────────────────────────────────

/// The canned quest list served when GitHub is unreachable. Mirrors the
/// frontend's hardcoded Quest Log.
fn fallback_quests(user: &str) -> Vec<Quest> {
  let quest = |name: &str,
               description: &str,
               language: &str,
               stars: i64,
               forks: i64,
               status: &str,
               rarity: &str,
               xp: i64,
               updated_at: &str,
               topics: &[&str],
               created_at: &str,
               size: i64,
               open_issues: i64,
               has_pages: bool| Quest {
    name: name.to_string(),
    description: description.to_string(),
    language: language.to_string(),
    stars,
    forks,
    status: status.to_string(),
    rarity: rarity.to_string(),
    xp,
    html_url: format!("https://github.com/{user}/{name}"),
    updated_at: updated_at.to_string(),
    homepage: String::new(),
    topics: topics.iter().map(|t| t.to_string()).collect(),
    created_at: created_at.to_string(),
    size,
    open_issues_count: open_issues,
    has_pages,
    owner: user.to_string(),
  };

  vec![
    quest(
      "DevQuest", "Gamified career intelligence platform", "TypeScript",
      42, 5, "Active", "Epic", 320, "2024-11-15",
      &["react", "typescript", "fastapi", "gamification"],
      "2024-06-01", 2400, 3, false,
    ),
    quest(
      "ML-Pipeline", "End-to-end ML pipeline with FastAPI", "Python",
      28, 8, "Completed", "Epic", 280, "2024-08-20",
      &["python", "machine-learning", "fastapi"],
      "2024-01-15", 1800, 0, false,
    ),
    quest(
      "React-Dashboard", "Analytics dashboard with charts", "TypeScript",
      15, 3, "Completed", "Rare", 200, "2024-06-10",
      &["react", "dashboard", "charts"],
      "2024-02-10", 1200, 1, false,
    ),
    quest(
      "Chat-API", "Real-time chat backend with WebSockets", "JavaScript",
      8, 2, "Completed", "Rare", 180, "2024-03-15",
      &["nodejs", "websockets", "api"],
      "2023-11-01", 800, 0, false,
    ),
    quest(
      "Portfolio-v1", "First portfolio website", "HTML",
      3, 1, "Completed", "Common", 120, "2023-12-01",
      &["html", "css", "portfolio"],
      "2023-06-15", 450, 0, true,
    ),
    quest(
      "CLI-Tools", "Collection of utility scripts", "Python",
      5, 0, "Active", "Rare", 150, "2024-10-05",
      &["python", "cli", "automation"],
      "2024-04-20", 320, 2, false,
    ),
  ]
}

fn fallback_profile(user: &str) -> GithubProfile {
  GithubProfile {
    login:        user.to_string(),
    name:         None,
    avatar_url:   String::new(),
    bio:          None,
    public_repos: 0,
    followers:    0,
    following:    0,
    html_url:     format!("https://github.com/{user}"),
  }
}

// ─── Handlers ────────────────────────────────────────────────────────────────

/// `GET /github/repos`
pub async fn repos<S>(State(state): State<AppState<S>>) -> Json<Value>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  let fetched = state.github.quests().await;
  let source = fetched.source();
  Json(json!({ "repos": fetched.into_inner(), "source": source }))
}

/// `GET /github/repos/{owner}/{repo}`
pub async fn repo_detail<S>(
  State(state): State<AppState<S>>,
  Path((owner, repo)): Path<(String, String)>,
) -> Result<Json<RepoDetail>, ApiError>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  let detail = state.github.repo_detail(&owner, &repo).await?;
  Ok(Json(detail))
}

/// `POST /github/repos/{owner}/{repo}/analyze` — mock review, no upstream call.
pub async fn analyze<S>(
  State(_state): State<AppState<S>>,
  Path((owner, repo)): Path<(String, String)>,
) -> Json<devquest_oracle::RepoReview>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  Json(devquest_oracle::analyze_repo(&format!("{owner}/{repo}")))
}

/// `GET /github/quest-stats`
pub async fn quest_stats<S>(State(state): State<AppState<S>>) -> Json<Value>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  let fetched = state.github.quests().await;
  let source = fetched.source();
  let quests = fetched.into_inner();

  let total_stars: i64 = quests.iter().map(|q| q.stars).sum();
  let total_xp: i64 = quests.iter().map(|q| q.xp).sum();
  let mut languages: Vec<&str> =
    quests.iter().map(|q| q.language.as_str()).collect();
  languages.sort_unstable();
  languages.dedup();
  let active = quests.iter().filter(|q| q.status == "Active").count();
  let completed = quests.iter().filter(|q| q.status == "Completed").count();

  Json(json!({
    "total_repos": quests.len(),
    "total_stars": total_stars,
    "total_xp": total_xp,
    "languages": languages,
    "active_quests": active,
    "completed_quests": completed,
    "source": source,
  }))
}

/// A payload tagged with where it came from.
#[derive(Debug, Serialize)]
pub struct Sourced<T> {
  #[serde(flatten)]
  pub data:   T,
  pub source: &'static str,
}

/// `GET /github/profile`
pub async fn profile<S>(
  State(state): State<AppState<S>>,
) -> Json<Sourced<GithubProfile>>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  let fetched = state.github.profile().await;
  let source = fetched.source();
  Json(Sourced { data: fetched.into_inner(), source })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rarity_tiers() {
    assert_eq!(rarity(0), "Common");
    assert_eq!(rarity(4), "Common");
    assert_eq!(rarity(5), "Rare");
    assert_eq!(rarity(19), "Rare");
    assert_eq!(rarity(20), "Epic");
    assert_eq!(rarity(49), "Epic");
    assert_eq!(rarity(50), "Legendary");
  }

  #[test]
  fn quest_xp_formula_and_cap() {
    assert_eq!(quest_xp(0, 0, false), 100);
    assert_eq!(quest_xp(2, 1, true), 100 + 20 + 15 + 25);
    assert_eq!(quest_xp(1000, 0, false), 500);
  }

  #[test]
  fn forkless_fallback_set_is_complete() {
    let quests = fallback_quests("HiRenan");
    assert_eq!(quests.len(), 6);
    assert!(quests.iter().all(|q| q.owner == "HiRenan"));
    assert_eq!(quests[0].name, "DevQuest");
    assert_eq!(quests[0].rarity, "Epic");
  }
}
