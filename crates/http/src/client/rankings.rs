//! Leaderboard and class endpoints (bearer required)

use super::{ApiClient, error::ClientError};
use crate::types::{CharacterClass, ClassRankings, RankingPage, RankingsQuery};
use reqwest::Method;

impl ApiClient {
    /// One page of the overall leaderboard
    pub async fn rankings(&self, query: &RankingsQuery) -> Result<RankingPage, ClientError> {
        let request = self.request(Method::GET, "/api/rankings").query(query);
        self.execute(request).await
    }

    /// Leaderboard of a single class
    pub async fn class_rankings(
        &self,
        class_id: i64,
        limit: u32,
    ) -> Result<ClassRankings, ClientError> {
        let request = self
            .request(Method::GET, &format!("/api/rankings/{class_id}"))
            .query(&[("page", 1), ("limit", limit)]);
        self.execute(request).await
    }

    pub async fn classes(&self) -> Result<Vec<CharacterClass>, ClientError> {
        let request = self.request(Method::GET, "/api/classes");
        let classes: Option<Vec<CharacterClass>> = self.execute(request).await?;
        Ok(classes.unwrap_or_default())
    }
}
