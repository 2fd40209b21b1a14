use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use credible_common::{AnalysisInput, AnalysisOutcome, CredibleError, Verdict};

use crate::traits::AnalysisRepository;

/// A finished analysis as a calling service would keep it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub user_id: String,
    pub input: AnalysisInput,
    pub outcome: AnalysisOutcome,
    pub created_at: DateTime<Utc>,
}

impl AnalysisRecord {
    pub fn new(user_id: &str, input: AnalysisInput, outcome: AnalysisOutcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            input,
            outcome,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPage {
    pub records: Vec<AnalysisRecord>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VerdictCounts {
    pub real: usize,
    pub uncertain: usize,
    pub fake: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisStats {
    pub total: usize,
    pub verdicts: VerdictCounts,
    pub average_score: f64,
}

/// Process-local repository. History is lost on restart.
#[derive(Default)]
pub struct InMemoryRepository {
    records: RwLock<Vec<AnalysisRecord>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalysisRepository for InMemoryRepository {
    async fn save(&self, record: AnalysisRecord) -> Result<Uuid, CredibleError> {
        let id = record.id;
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id == id) {
            return Err(CredibleError::Repository(format!("record {id} already exists")));
        }
        records.push(record);
        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AnalysisRecord>, CredibleError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_user(
        &self,
        user_id: &str,
        page: usize,
        limit: usize,
    ) -> Result<RecordPage, CredibleError> {
        if page == 0 || limit == 0 {
            return Err(CredibleError::Repository(format!(
                "page and limit must be at least 1 (page={page}, limit={limit})"
            )));
        }

        let records = self.records.read().await;
        let mut owned: Vec<&AnalysisRecord> =
            records.iter().filter(|r| r.user_id == user_id).collect();
        // Reverse first so equal timestamps list the latest insert first.
        owned.reverse();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = owned.len();
        let start = (page - 1).saturating_mul(limit);
        let records = owned
            .into_iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect();

        Ok(RecordPage {
            records,
            total,
            page,
            limit,
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool, CredibleError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() != before)
    }

    async fn stats(&self, user_id: &str) -> Result<AnalysisStats, CredibleError> {
        let records = self.records.read().await;
        let mut stats = AnalysisStats::default();
        let mut score_sum = 0u64;

        for record in records.iter().filter(|r| r.user_id == user_id) {
            stats.total += 1;
            score_sum += u64::from(record.outcome.score);
            match record.outcome.verdict {
                Verdict::Real => stats.verdicts.real += 1,
                Verdict::Uncertain => stats.verdicts.uncertain += 1,
                Verdict::Fake => stats.verdicts.fake += 1,
            }
        }

        if stats.total > 0 {
            stats.average_score = score_sum as f64 / stats.total as f64;
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use credible_common::AnalysisKind;

    fn outcome(score: u8) -> AnalysisOutcome {
        AnalysisOutcome {
            kind: AnalysisKind::Url,
            score,
            verdict: Verdict::from_score(score),
            signals: vec![],
            confidence: 0.0,
            elapsed_millis: 3,
            related_articles: vec![],
        }
    }

    fn record(user: &str, score: u8, minutes_ago: i64) -> AnalysisRecord {
        let mut record = AnalysisRecord::new(
            user,
            AnalysisInput::Url {
                url: format!("https://example.com/{score}"),
            },
            outcome(score),
        );
        record.created_at = Utc::now() - Duration::minutes(minutes_ago);
        record
    }

    #[tokio::test]
    async fn save_then_find_by_id() {
        let repo = InMemoryRepository::new();
        let saved = record("alice", 80, 0);
        let id = repo.save(saved.clone()).await.unwrap();

        assert_eq!(repo.find_by_id(id).await.unwrap(), Some(saved));
        assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let repo = InMemoryRepository::new();
        let saved = record("alice", 80, 0);
        repo.save(saved.clone()).await.unwrap();
        assert!(matches!(
            repo.save(saved).await,
            Err(CredibleError::Repository(_))
        ));
    }

    #[tokio::test]
    async fn find_by_user_pages_newest_first() {
        let repo = InMemoryRepository::new();
        for (score, minutes_ago) in [(10, 30), (20, 20), (30, 10)] {
            repo.save(record("alice", score, minutes_ago)).await.unwrap();
        }
        repo.save(record("bob", 99, 0)).await.unwrap();

        let first = repo.find_by_user("alice", 1, 2).await.unwrap();
        assert_eq!(first.total, 3);
        let scores: Vec<u8> = first.records.iter().map(|r| r.outcome.score).collect();
        assert_eq!(scores, vec![30, 20]);

        let second = repo.find_by_user("alice", 2, 2).await.unwrap();
        assert_eq!(second.records.len(), 1);
        assert_eq!(second.records[0].outcome.score, 10);

        let past_end = repo.find_by_user("alice", 5, 2).await.unwrap();
        assert!(past_end.records.is_empty());
    }

    #[tokio::test]
    async fn zero_page_is_rejected() {
        let repo = InMemoryRepository::new();
        assert!(repo.find_by_user("alice", 0, 10).await.is_err());
        assert!(repo.find_by_user("alice", 1, 0).await.is_err());
    }

    #[tokio::test]
    async fn delete_reports_whether_removed() {
        let repo = InMemoryRepository::new();
        let id = repo.save(record("alice", 50, 0)).await.unwrap();
        assert!(repo.delete(id).await.unwrap());
        assert!(!repo.delete(id).await.unwrap());
        assert_eq!(repo.find_by_id(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn stats_summarize_one_user() {
        let repo = InMemoryRepository::new();
        for score in [90, 75, 50, 20] {
            repo.save(record("alice", score, 0)).await.unwrap();
        }
        repo.save(record("bob", 0, 0)).await.unwrap();

        let stats = repo.stats("alice").await.unwrap();
        assert_eq!(stats.total, 4);
        assert_eq!(
            stats.verdicts,
            VerdictCounts {
                real: 2,
                uncertain: 1,
                fake: 1
            }
        );
        assert_eq!(stats.average_score, 58.75);

        let empty = repo.stats("carol").await.unwrap();
        assert_eq!(empty.total, 0);
        assert_eq!(empty.average_score, 0.0);
    }
}
