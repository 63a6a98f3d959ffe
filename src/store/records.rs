// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{DesignSnapshot, DiagramId, ProblemId, SubmissionId, UserId};

use super::{read_json, write_json, StoreError, WriteDurability};

/// Submissions scoring at least this much mark their problem as solved.
pub const PASSING_SCORE: u32 = 70;

const DEFAULT_DIAGRAM_NAME: &str = "Untitled Diagram";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramRecord {
    pub id: DiagramId,
    pub user_id: UserId,
    pub name: String,
    #[serde(default)]
    pub problem_id: Option<ProblemId>,
    pub diagram_data: DesignSnapshot,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewDiagram {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub problem_id: Option<ProblemId>,
    #[serde(default)]
    pub diagram_data: Option<DesignSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DiagramPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub problem_id: Option<ProblemId>,
    #[serde(default)]
    pub diagram_data: Option<DesignSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub user_id: UserId,
    pub problem_id: ProblemId,
    pub solution: String,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub diagram_data: Option<DesignSnapshot>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewSubmission {
    #[serde(default)]
    pub problem_id: Option<ProblemId>,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub diagram_data: Option<DesignSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubmissionPatch {
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub diagram_data: Option<DesignSnapshot>,
}

/// One solved problem. At most one per `(user_id, question_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    pub user_id: UserId,
    pub question_id: ProblemId,
    pub solved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub solved_questions: Vec<ProblemId>,
    /// `question id -> YYYY-MM-DD`.
    pub solved_dates: BTreeMap<String, String>,
    pub total_solved: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("{0}")]
    MissingField(&'static str),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RecordSet {
    #[serde(default)]
    diagrams: Vec<DiagramRecord>,
    #[serde(default)]
    submissions: Vec<SubmissionRecord>,
    #[serde(default)]
    progress: Vec<UserProgress>,
}

impl RecordSet {
    fn is_solved(&self, user_id: &UserId, question_id: &ProblemId) -> bool {
        self.progress
            .iter()
            .any(|entry| &entry.user_id == user_id && &entry.question_id == question_id)
    }

    fn record_solved(
        &mut self,
        user_id: &UserId,
        question_id: &ProblemId,
        at: DateTime<Utc>,
    ) -> bool {
        if self.is_solved(user_id, question_id) {
            return false;
        }
        log::info!("user {user_id} solved {question_id}");
        self.progress.push(UserProgress {
            user_id: user_id.clone(),
            question_id: question_id.clone(),
            solved_at: at,
        });
        true
    }
}

#[derive(Debug, Clone)]
struct RecordFile {
    path: PathBuf,
    durability: WriteDurability,
}

/// Saved diagrams, submissions and solved problems for every user.
///
/// Every read and write is scoped to one owner; another user's record is indistinguishable
/// from a missing one. When opened from a file, each successful mutation rewrites the file.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: RecordSet,
    file: Option<RecordFile>,
    last_stamp: Option<DateTime<Utc>>,
}

impl RecordStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads `path` if it exists; later mutations are written back to it.
    pub fn open(
        path: impl Into<PathBuf>,
        durability: WriteDurability,
    ) -> Result<Self, StoreError> {
        let path = path.into();
        let records = read_json::<RecordSet>(&path)?.unwrap_or_default();
        log::info!(
            "loaded {} diagrams, {} submissions from {path:?}",
            records.diagrams.len(),
            records.submissions.len()
        );
        Ok(Self { records, file: Some(RecordFile { path, durability }), last_stamp: None })
    }

    pub fn path(&self) -> Option<&Path> {
        self.file.as_ref().map(|file| file.path.as_path())
    }

    /// Newest `updated_at` first.
    pub fn list_diagrams(&self, user_id: &UserId) -> Vec<DiagramRecord> {
        let mut out = self
            .records
            .diagrams
            .iter()
            .rev()
            .filter(|record| &record.user_id == user_id)
            .cloned()
            .collect::<Vec<_>>();
        out.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        out
    }

    pub fn diagram(&self, user_id: &UserId, id: &DiagramId) -> Result<DiagramRecord, RecordError> {
        self.records
            .diagrams
            .iter()
            .find(|record| &record.id == id && &record.user_id == user_id)
            .cloned()
            .ok_or_else(|| not_found("diagram", id.as_str()))
    }

    pub fn create_diagram(
        &mut self,
        user_id: &UserId,
        new: NewDiagram,
    ) -> Result<DiagramRecord, RecordError> {
        let diagram_data =
            new.diagram_data.ok_or(RecordError::MissingField("Diagram data is required"))?;
        let now = self.stamp();
        let record = DiagramRecord {
            id: DiagramId::generate(),
            user_id: user_id.clone(),
            name: new
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_DIAGRAM_NAME.to_owned()),
            problem_id: new.problem_id,
            diagram_data,
            created_at: now,
            updated_at: now,
        };
        self.commit(|records| {
            records.diagrams.push(record.clone());
            Ok(record)
        })
    }

    pub fn update_diagram(
        &mut self,
        user_id: &UserId,
        id: &DiagramId,
        patch: DiagramPatch,
    ) -> Result<DiagramRecord, RecordError> {
        let now = self.stamp();
        self.commit(|records| {
            let record = records
                .diagrams
                .iter_mut()
                .find(|record| &record.id == id && &record.user_id == user_id)
                .ok_or_else(|| not_found("diagram", id.as_str()))?;

            if let Some(name) = patch.name {
                record.name = name;
            }
            if let Some(problem_id) = patch.problem_id {
                record.problem_id = Some(problem_id);
            }
            if let Some(diagram_data) = patch.diagram_data {
                record.diagram_data = diagram_data;
            }
            record.updated_at = now;
            Ok(record.clone())
        })
    }

    /// Returns whether a record was removed; deleting a missing diagram is not an error.
    pub fn delete_diagram(
        &mut self,
        user_id: &UserId,
        id: &DiagramId,
    ) -> Result<bool, RecordError> {
        let owned = |record: &DiagramRecord| &record.id == id && &record.user_id == user_id;
        if !self.records.diagrams.iter().any(owned) {
            return Ok(false);
        }
        self.commit(|records| {
            records.diagrams.retain(|record| !owned(record));
            Ok(true)
        })
    }

    /// Newest `created_at` first.
    pub fn list_submissions(&self, user_id: &UserId) -> Vec<SubmissionRecord> {
        let mut out = self
            .records
            .submissions
            .iter()
            .rev()
            .filter(|record| &record.user_id == user_id)
            .cloned()
            .collect::<Vec<_>>();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        out
    }

    pub fn submission(
        &self,
        user_id: &UserId,
        id: &SubmissionId,
    ) -> Result<SubmissionRecord, RecordError> {
        self.records
            .submissions
            .iter()
            .find(|record| &record.id == id && &record.user_id == user_id)
            .cloned()
            .ok_or_else(|| not_found("submission", id.as_str()))
    }

    pub fn create_submission(
        &mut self,
        user_id: &UserId,
        new: NewSubmission,
    ) -> Result<SubmissionRecord, RecordError> {
        let (Some(problem_id), Some(solution)) =
            (new.problem_id, new.solution.filter(|solution| !solution.is_empty()))
        else {
            return Err(RecordError::MissingField("Problem ID and solution are required"));
        };

        let now = self.stamp();
        let record = SubmissionRecord {
            id: SubmissionId::generate(),
            user_id: user_id.clone(),
            problem_id,
            solution,
            score: new.score.unwrap_or(0),
            diagram_data: new.diagram_data,
            created_at: now,
            updated_at: now,
        };
        self.commit(|records| {
            records.submissions.push(record.clone());
            if record.score >= PASSING_SCORE {
                records.record_solved(user_id, &record.problem_id, now);
            }
            Ok(record)
        })
    }

    pub fn update_submission(
        &mut self,
        user_id: &UserId,
        id: &SubmissionId,
        patch: SubmissionPatch,
    ) -> Result<SubmissionRecord, RecordError> {
        let now = self.stamp();
        self.commit(|records| {
            let record = records
                .submissions
                .iter_mut()
                .find(|record| &record.id == id && &record.user_id == user_id)
                .ok_or_else(|| not_found("submission", id.as_str()))?;

            if let Some(solution) = patch.solution {
                record.solution = solution;
            }
            if let Some(score) = patch.score {
                record.score = score;
            }
            if let Some(diagram_data) = patch.diagram_data {
                record.diagram_data = Some(diagram_data);
            }
            record.updated_at = now;
            let updated = record.clone();

            if patch.score.is_some_and(|score| score >= PASSING_SCORE) {
                records.record_solved(user_id, &updated.problem_id, now);
            }
            Ok(updated)
        })
    }

    pub fn delete_submission(
        &mut self,
        user_id: &UserId,
        id: &SubmissionId,
    ) -> Result<bool, RecordError> {
        let owned = |record: &SubmissionRecord| &record.id == id && &record.user_id == user_id;
        if !self.records.submissions.iter().any(owned) {
            return Ok(false);
        }
        self.commit(|records| {
            records.submissions.retain(|record| !owned(record));
            Ok(true)
        })
    }

    /// Marks `question_id` solved for `user_id`. Returns `false` if it already was.
    pub fn mark_solved(
        &mut self,
        user_id: &UserId,
        question_id: &ProblemId,
    ) -> Result<bool, RecordError> {
        if self.records.is_solved(user_id, question_id) {
            return Ok(false);
        }
        let now = self.stamp();
        self.commit(|records| Ok(records.record_solved(user_id, question_id, now)))
    }

    /// Solved problems in the order they were solved.
    pub fn progress(&self, user_id: &UserId) -> ProgressSummary {
        let solved = self
            .records
            .progress
            .iter()
            .filter(|entry| &entry.user_id == user_id)
            .collect::<Vec<_>>();
        ProgressSummary {
            solved_questions: solved.iter().map(|entry| entry.question_id.clone()).collect(),
            solved_dates: solved
                .iter()
                .map(|entry| {
                    let day = entry.solved_at.format("%Y-%m-%d").to_string();
                    (entry.question_id.to_string(), day)
                })
                .collect(),
            total_solved: solved.len(),
        }
    }

    /// Strictly increasing timestamps so listings have a total order.
    fn stamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let next = match self.last_stamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_stamp = Some(next);
        next
    }

    /// Applies `change` to a copy of the record set and swaps it in once it is on disk.
    ///
    /// A failed change or a failed write leaves the store exactly as it was.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut RecordSet) -> Result<T, RecordError>,
    ) -> Result<T, RecordError> {
        let mut next = self.records.clone();
        let out = change(&mut next)?;
        if let Some(file) = &self.file {
            write_json(&file.path, &next, file.durability).inspect_err(|err| {
                log::error!("failed to persist records: {err}");
            })?;
        }
        self.records = next;
        Ok(out)
    }
}

fn not_found(kind: &'static str, id: &str) -> RecordError {
    RecordError::NotFound { kind, id: id.to_owned() }
}
