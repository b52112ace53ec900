//! GitHub user profiles and trending repositories.

use reqwest::Client;
use serde::Deserialize;

use crate::client::fetch_json;

const TRENDING_URL: &str = "https://ghapi.huchen.dev/repositories?since=daily";
const TRENDING_LIMIT: usize = 5;

/// A GitHub user profile.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubUser {
    /// Display name, when set.
    pub name: Option<String>,
    /// Profile bio, when set.
    pub bio: Option<String>,
    /// Public repository count.
    pub public_repos: u64,
    /// Follower count.
    pub followers: u64,
    /// Following count.
    pub following: u64,
    /// Avatar image URL.
    pub avatar_url: String,
}

/// A trending repository entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingRepo {
    /// Repository name.
    pub name: String,
    /// Repository owner.
    pub author: String,
    /// Repository URL.
    pub url: String,
}

/// Fetches a user profile by login.
pub async fn fetch_github_user(client: &Client, username: &str) -> Option<GithubUser> {
    let url = format!("https://api.github.com/users/{username}");
    fetch_json(client.get(url)).await
}

/// Fetches today's trending repositories, capped at five entries.
pub async fn fetch_trending_repositories(client: &Client) -> Option<Vec<TrendingRepo>> {
    fetch_json::<Vec<TrendingRepo>>(client.get(TRENDING_URL))
        .await
        .filter(|repos| !repos.is_empty())
        .map(|mut repos| {
            repos.truncate(TRENDING_LIMIT);
            repos
        })
}
