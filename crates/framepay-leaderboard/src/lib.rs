//! In-memory leaderboard store for the framepay system.
//!
//! Entries live in a HashMap keyed by identity, giving O(1) upserts; the
//! sorted view is materialized only at read time. The store is
//! single-process and non-durable; it resets on restart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A stored score. At most one entry exists per fid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
	pub fid: u64,
	pub username: String,
	pub score: u64,
	#[serde(rename = "lastPlayed")]
	pub last_played: DateTime<Utc>,
}

/// A leaderboard entry with its 1-based rank, as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
	pub rank: usize,
	pub fid: u64,
	pub username: String,
	pub score: u64,
	#[serde(rename = "lastPlayed")]
	pub last_played: DateTime<Utc>,
}

/// Result of a score submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOutcome {
	pub success: bool,
	/// The submitter's current rank after the submission.
	pub rank: usize,
	/// The score that was submitted (not necessarily the one stored).
	pub score: u64,
}

/// In-memory leaderboard keyed by fid.
///
/// Each submission runs as one atomic find-or-replace step under the
/// write lock. Concurrent submissions for different identities are
/// independent; same-identity submissions serialize on the lock.
pub struct Leaderboard {
	entries: RwLock<HashMap<u64, LeaderboardEntry>>,
}

impl Leaderboard {
	/// Creates an empty leaderboard.
	pub fn new() -> Self {
		Self {
			entries: RwLock::new(HashMap::new()),
		}
	}

	/// Submits a score, keeping the higher of the stored and submitted
	/// scores. The timestamp refreshes only when the entry is replaced.
	pub async fn submit(&self, fid: u64, username: String, score: u64) -> SubmitOutcome {
		let mut entries = self.entries.write().await;

		match entries.get(&fid) {
			Some(existing) if existing.score >= score => {}
			_ => {
				entries.insert(
					fid,
					LeaderboardEntry {
						fid,
						username,
						score,
						last_played: Utc::now(),
					},
				);
			}
		}

		let rank = Self::rank_of(&entries, fid);
		SubmitOutcome {
			success: true,
			rank,
			score,
		}
	}

	/// Returns the top `limit` entries sorted by descending score, with
	/// 1-based ranks.
	pub async fn top(&self, limit: usize) -> Vec<RankedEntry> {
		let entries = self.entries.read().await;

		let mut sorted: Vec<&LeaderboardEntry> = entries.values().collect();
		sorted.sort_by(|a, b| b.score.cmp(&a.score).then(a.fid.cmp(&b.fid)));

		sorted
			.into_iter()
			.take(limit)
			.enumerate()
			.map(|(index, entry)| RankedEntry {
				rank: index + 1,
				fid: entry.fid,
				username: entry.username.clone(),
				score: entry.score,
				last_played: entry.last_played,
			})
			.collect()
	}

	/// Computes the 1-based rank of an identity within the full store.
	fn rank_of(entries: &HashMap<u64, LeaderboardEntry>, fid: u64) -> usize {
		let mut sorted: Vec<&LeaderboardEntry> = entries.values().collect();
		sorted.sort_by(|a, b| b.score.cmp(&a.score).then(a.fid.cmp(&b.fid)));
		sorted
			.iter()
			.position(|entry| entry.fid == fid)
			.map(|index| index + 1)
			.unwrap_or(0)
	}
}

impl Default for Leaderboard {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn lower_score_leaves_the_entry_unchanged() {
		let board = Leaderboard::new();
		board.submit(1, "alice".to_string(), 100).await;
		let before = board.top(10).await;

		board.submit(1, "alice".to_string(), 50).await;
		let after = board.top(10).await;

		assert_eq!(before, after);
		assert_eq!(after[0].score, 100);
	}

	#[tokio::test]
	async fn higher_score_replaces_and_refreshes_timestamp() {
		let board = Leaderboard::new();
		board.submit(1, "alice".to_string(), 100).await;
		let first = board.top(10).await[0].last_played;

		board.submit(1, "alice".to_string(), 200).await;
		let entries = board.top(10).await;

		assert_eq!(entries.len(), 1);
		assert_eq!(entries[0].score, 200);
		assert!(entries[0].last_played >= first);
	}

	#[tokio::test]
	async fn top_is_sorted_descending_with_ranks_from_one() {
		let board = Leaderboard::new();
		board.submit(1, "alice".to_string(), 100).await;
		board.submit(2, "bob".to_string(), 300).await;
		board.submit(3, "carol".to_string(), 200).await;

		let top = board.top(10).await;
		let scores: Vec<u64> = top.iter().map(|e| e.score).collect();
		let ranks: Vec<usize> = top.iter().map(|e| e.rank).collect();

		assert_eq!(scores, vec![300, 200, 100]);
		assert_eq!(ranks, vec![1, 2, 3]);
	}

	#[tokio::test]
	async fn top_truncates_to_the_limit() {
		let board = Leaderboard::new();
		for fid in 0..15u64 {
			board.submit(fid, format!("player{}", fid), fid * 10).await;
		}

		let top = board.top(10).await;
		assert_eq!(top.len(), 10);
		assert_eq!(top[0].score, 140);
	}

	#[tokio::test]
	async fn submission_reports_current_rank() {
		let board = Leaderboard::new();
		board.submit(1, "alice".to_string(), 300).await;
		let outcome = board.submit(2, "bob".to_string(), 100).await;

		assert!(outcome.success);
		assert_eq!(outcome.rank, 2);
		assert_eq!(outcome.score, 100);
	}
}
