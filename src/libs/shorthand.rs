//! Shorthand resolution for work log lines.
//!
//! A line names its work item with a short token (`pto`, `meeting`, `foo`) or a
//! literal issue key (`FOO-1`). The [`AliasTable`] turns such a token into the
//! issue, activity and default summary to log against.
//!
//! The table is assembled from ordered layers, each one overriding identically
//! keyed entries of the layers before it:
//!
//! ```text
//! issues.json  ->  activity.json  ->  work.json  ->  ./work-custom.json
//! ```
//!
//! Overrides replace the whole value; fields are never merged across layers.
//! Unknown tokens are not an error: they are taken as literal issue keys so any
//! valid Jira issue can be logged without a config entry.

use super::error::{Result, TempiError};
use regex::Regex;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const ISSUE_SUMMARY_FILE: &str = "issues.json";
pub const ACTIVITY_FILE: &str = "activity.json";
pub const WORK_FILE: &str = "work.json";
pub const WORK_CUSTOM_FILE: &str = "work-custom.json";
pub const COMMENT_TO_ACTIVITY_FILE: &str = "comment-to-act.json";

/// Value of a work shorthand entry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Shorthand {
    pub issue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Outcome of resolving a work item token.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    pub issue: String,
    /// Full activity name, when the shorthand pins one.
    pub activity: Option<String>,
    /// Default summary; when absent the trailing text of the line is the summary.
    pub summary: Option<String>,
}

/// One source of aliases, applied in order by [`AliasTable::from_layers`].
#[derive(Clone, Debug)]
pub enum AliasLayer {
    /// Issue key to default summary.
    IssueSummaries(HashMap<String, String>),
    /// Short activity token to full activity name.
    Activities(HashMap<String, String>),
    /// Work token to issue/activity/summary.
    Work(HashMap<String, Shorthand>),
}

#[derive(Deserialize, Clone, Debug, Default)]
struct ActivityRulesFile {
    #[serde(default)]
    same: Vec<String>,
    #[serde(default)]
    map: Vec<(String, String)>,
}

/// Rules inferring an activity token from the free text of a line.
#[derive(Clone, Debug, Default)]
pub struct ActivityRules {
    same: Vec<String>,
    map: Vec<(Regex, String)>,
}

impl ActivityRules {
    pub fn new(same: Vec<String>, map: Vec<(String, String)>) -> Result<Self> {
        let map = map
            .into_iter()
            .map(|(pattern, activity)| {
                Regex::new(&pattern)
                    .map(|regex| (regex, activity))
                    .map_err(|e| TempiError::config(format!("invalid activity rule '{}': {}", pattern, e)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { same, map })
    }

    /// First `same` token contained in the text, else the first matching regex rule.
    pub fn infer(&self, text: &str) -> Option<&str> {
        self.same
            .iter()
            .find(|token| text.contains(token.as_str()))
            .map(String::as_str)
            .or_else(|| self.map.iter().find(|(regex, _)| regex.is_match(text)).map(|(_, activity)| activity.as_str()))
    }
}

/// Merged, read-only alias lookup built once per invocation.
#[derive(Clone, Debug, Default)]
pub struct AliasTable {
    work: HashMap<String, Shorthand>,
    activities: HashMap<String, String>,
    issue_summaries: HashMap<String, String>,
    rules: ActivityRules,
}

impl AliasTable {
    /// Folds the layers left to right; later keys replace earlier ones.
    pub fn from_layers(layers: impl IntoIterator<Item = AliasLayer>) -> Self {
        layers.into_iter().fold(Self::default(), |mut table, layer| {
            match layer {
                AliasLayer::IssueSummaries(summaries) => {
                    for (issue, summary) in summaries {
                        table.work.insert(
                            issue.clone(),
                            Shorthand {
                                issue: issue.clone(),
                                activity: None,
                                summary: Some(summary.clone()),
                            },
                        );
                        table.issue_summaries.insert(issue, summary);
                    }
                }
                AliasLayer::Activities(activities) => table.activities.extend(activities),
                AliasLayer::Work(work) => table.work.extend(work),
            }
            table
        })
    }

    pub fn with_rules(mut self, rules: ActivityRules) -> Self {
        self.rules = rules;
        self
    }

    /// Loads the built-in tiers from `config_dir` and the custom tier from `work_dir`.
    ///
    /// Missing files contribute an empty layer.
    /// Summaries spanning several lines are rejected.
    pub fn load(config_dir: &Path, work_dir: &Path) -> Result<Self> {
        let issues_path = config_dir.join(ISSUE_SUMMARY_FILE);
        let issues: HashMap<String, String> = read_layer(&issues_path)?;
        check_summaries(&issues_path, issues.iter().map(|(issue, summary)| (issue, Some(summary))))?;

        let mut layers = vec![
            AliasLayer::IssueSummaries(issues),
            AliasLayer::Activities(read_layer(&config_dir.join(ACTIVITY_FILE))?),
        ];
        for path in [config_dir.join(WORK_FILE), work_dir.join(WORK_CUSTOM_FILE)] {
            let work: HashMap<String, Shorthand> = read_layer(&path)?;
            check_summaries(&path, work.iter().map(|(token, shorthand)| (token, shorthand.summary.as_ref())))?;
            layers.push(AliasLayer::Work(work));
        }
        let rules: ActivityRulesFile = read_layer(&config_dir.join(COMMENT_TO_ACTIVITY_FILE))?;
        Ok(Self::from_layers(layers).with_rules(ActivityRules::new(rules.same, rules.map)?))
    }

    /// Resolves a work item token.
    ///
    /// A shorthand without its own summary falls back to the default summary of
    /// its issue. Unknown tokens resolve to themselves as literal issue keys with
    /// no activity and no default summary.
    pub fn resolve(&self, token: &str) -> Resolved {
        match self.work.get(token) {
            Some(shorthand) => Resolved {
                issue: shorthand.issue.clone(),
                activity: shorthand.activity.as_deref().map(|activity| self.resolve_activity(activity)),
                summary: shorthand.summary.clone().or_else(|| self.issue_summaries.get(&shorthand.issue).cloned()),
            },
            None => Resolved {
                issue: token.to_string(),
                activity: None,
                summary: None,
            },
        }
    }

    /// Expands a short activity token; unknown tokens pass through as literal names.
    pub fn resolve_activity(&self, token: &str) -> String {
        self.activities.get(token).cloned().unwrap_or_else(|| token.to_string())
    }

    /// Activity inferred from free text, expanded through the activity table.
    pub fn infer_activity(&self, text: &str) -> Option<String> {
        self.rules.infer(text).map(|token| self.resolve_activity(token))
    }

    pub fn issue_summary(&self, issue: &str) -> Option<&str> {
        self.issue_summaries.get(issue).map(String::as_str)
    }
}

/// The summary and the free text of a line share the worklog comment field,
/// separated by the first newline, so a summary must stay on one line.
fn check_summaries<'a>(path: &Path, summaries: impl IntoIterator<Item = (&'a String, Option<&'a String>)>) -> Result<()> {
    for (key, summary) in summaries {
        if summary.is_some_and(|summary| summary.contains(['\n', '\r'])) {
            return Err(TempiError::config(format!(
                "{}: summary of '{}' must fit on a single line",
                path.display(),
                key
            )));
        }
    }
    Ok(())
}

fn read_layer<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        debug!(path = %path.display(), "alias file not found, using an empty layer");
        return Ok(T::default());
    }
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|e| TempiError::config(format!("failed to parse {}: {}", path.display(), e)))
}
