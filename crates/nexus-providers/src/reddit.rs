//! Random posts from a subreddit.

use reqwest::Client;
use serde::Deserialize;

use crate::client::fetch_json;

/// A fetched post.
#[derive(Debug, Clone)]
pub struct RedditPost {
    /// Post title.
    pub title: String,
    /// Link target of the post.
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    data: PostData,
}

#[derive(Debug, Deserialize)]
struct PostData {
    title: String,
    #[serde(default)]
    url: String,
}

fn first_post(listings: Vec<Listing>) -> Option<RedditPost> {
    let post = listings
        .into_iter()
        .next()?
        .data
        .children
        .into_iter()
        .next()?
        .data;
    if post.url.is_empty() {
        return None;
    }
    Some(RedditPost {
        title: post.title,
        url: post.url,
    })
}

/// Fetches a random post from `subreddit`.
pub async fn fetch_subreddit_post(client: &Client, subreddit: &str) -> Option<RedditPost> {
    let url = format!("https://www.reddit.com/r/{subreddit}/random.json");
    // Reddit rejects default bot user agents.
    let request = client.get(url).header("User-Agent", "Mozilla/5.0");
    fetch_json::<Vec<Listing>>(request).await.and_then(first_post)
}
