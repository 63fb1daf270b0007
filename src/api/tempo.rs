use super::Tempo;
use crate::libs::config::{JiraConfig, REQUEST_TIMEOUT_SECS};
use crate::libs::entry::{Hours, LogEntry, RemoteId};
use crate::libs::error::{Result, TempiError};
use crate::libs::parser::DATE_FORMAT;
use crate::libs::tempo_data::TempoData;
use chrono::NaiveDate;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, RequestBuilder, StatusCode,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;
use tracing::{debug, info};

const WORKLOGS_URL: &str = "rest/tempo-timesheets/4/worklogs";
const SEARCH_URL: &str = "rest/tempo-timesheets/4/worklogs/search";
const ACTIVITY_ATTRIBUTE: &str = "_ActivityType_";

/// Body fragments Tempo uses when refusing changes to an approved timesheet.
const APPROVED_PERIOD_MARKERS: [&str; 3] = ["approv", "period", "locked"];

#[derive(Serialize, Debug)]
struct SearchRequest<'a> {
    from: String,
    to: String,
    worker: Vec<&'a str>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Worklog {
    pub tempo_worklog_id: u64,
    pub started: String,
    pub time_spent_seconds: u32,
    #[serde(default)]
    pub comment: Option<String>,
    pub issue: WorklogIssue,
    #[serde(default)]
    pub attributes: HashMap<String, WorklogAttribute>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WorklogIssue {
    pub key: String,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WorklogAttribute {
    pub value: String,
}

/// Payload of a worklog creation request.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorklog {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    pub billable_seconds: u32,
    pub end_date: String,
    pub origin_task_id: String,
    pub started: String,
    pub time_spent_seconds: u32,
    pub worker: String,
    pub comment: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CreatedWorklog {
    tempo_worklog_id: u64,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum CreateResponse {
    Many(Vec<CreatedWorklog>),
    One(CreatedWorklog),
}

/// Tempo Timesheets client authenticated with a bearer token.
#[derive(Debug)]
pub struct TempoClient {
    client: Client,
    api_url: String,
    activity_codes: HashMap<String, String>,
    activity_names: HashMap<String, String>,
}

impl TempoClient {
    pub fn new(config: &JiraConfig) -> Result<Self> {
        let token = config.require_token()?;
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| TempiError::config("JIRA_TOKEN contains characters not allowed in a header"))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &JiraConfig) -> Self {
        let activity_names = config
            .activity_codes
            .iter()
            .map(|(name, code)| (code.clone(), name.clone()))
            .collect();
        Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            activity_codes: config.activity_codes.clone(),
            activity_names,
        }
    }

    /// Converts a worklog returned by the search endpoint into an entry.
    pub fn to_entry(&self, worklog: &Worklog) -> Result<LogEntry> {
        let date = worklog
            .started
            .get(..10)
            .and_then(|day| NaiveDate::parse_from_str(day, DATE_FORMAT).ok())
            .ok_or_else(|| TempiError::UnexpectedResponse(format!("worklog {} has start '{}'", worklog.tempo_worklog_id, worklog.started)))?;
        let activity = worklog
            .attributes
            .get(ACTIVITY_ATTRIBUTE)
            .map(|attribute| self.activity_names.get(&attribute.value).unwrap_or(&attribute.value).clone())
            .unwrap_or_default();
        let (summary, comment) = LogEntry::split_description(worklog.comment.as_deref().unwrap_or_default());

        Ok(LogEntry {
            date,
            issue: worklog.issue.key.clone(),
            activity,
            hours: Hours::from_seconds(worklog.time_spent_seconds),
            summary,
            comment,
            remote_id: Some(RemoteId(worklog.tempo_worklog_id)),
        })
    }

    /// Builds the creation payload, rejecting entries Tempo could not accept.
    pub fn create_payload(&self, worker: &str, entry: &LogEntry) -> Result<CreateWorklog> {
        entry.validate_for_remote()?;
        let mut attributes = BTreeMap::new();
        if !entry.activity.is_empty() {
            let code = self.activity_codes.get(&entry.activity).unwrap_or(&entry.activity);
            attributes.insert(ACTIVITY_ATTRIBUTE.to_string(), code.clone());
        }
        let day = entry.date.format(DATE_FORMAT).to_string();
        let seconds = entry.hours.seconds();

        Ok(CreateWorklog {
            attributes,
            billable_seconds: seconds,
            end_date: day.clone(),
            origin_task_id: entry.issue.clone(),
            started: day,
            time_spent_seconds: seconds,
            worker: worker.to_string(),
            comment: entry.description(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    async fn send(&self, request: RequestBuilder, date: Option<NaiveDate>) -> Result<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        check_status(status, body, date)
    }
}

/// Maps a Tempo response status onto the error taxonomy, returning the body on success.
pub fn check_status(status: StatusCode, body: String, date: Option<NaiveDate>) -> Result<String> {
    if status.is_success() {
        return Ok(body);
    }
    if status == StatusCode::FORBIDDEN {
        let lowered = body.to_lowercase();
        if APPROVED_PERIOD_MARKERS.iter().any(|marker| lowered.contains(marker)) {
            return Err(TempiError::ApprovedPeriod { date, body });
        }
    }
    Err(TempiError::Remote {
        status: status.as_u16(),
        body,
    })
}

impl Tempo for TempoClient {
    async fn fetch(&self, worker: &str, from: NaiveDate, to: NaiveDate) -> Result<TempoData> {
        let search = SearchRequest {
            from: from.format(DATE_FORMAT).to_string(),
            to: to.format(DATE_FORMAT).to_string(),
            worker: vec![worker],
        };
        debug!(worker, %from, %to, "searching worklogs");
        let body = self.send(self.client.post(self.url(SEARCH_URL)).json(&search), None).await?;
        let worklogs: Vec<Worklog> = serde_json::from_str(&body)?;
        debug!(count = worklogs.len(), "worklogs received");

        worklogs.iter().map(|worklog| self.to_entry(worklog)).collect()
    }

    async fn create(&self, worker: &str, entry: &LogEntry, dry_run: bool) -> Result<RemoteId> {
        let payload = self.create_payload(worker, entry)?;
        if dry_run {
            info!(issue = %payload.origin_task_id, date = %payload.started, "dry run, worklog not created");
            return Ok(RemoteId(0));
        }
        debug!(?payload, "creating worklog");
        let body = self.send(self.client.post(self.url(WORKLOGS_URL)).json(&payload), Some(entry.date)).await?;
        let created: CreateResponse = serde_json::from_str(&body)?;
        let id = match created {
            CreateResponse::One(worklog) => Some(worklog.tempo_worklog_id),
            CreateResponse::Many(worklogs) => worklogs.first().map(|worklog| worklog.tempo_worklog_id),
        };
        id.map(RemoteId)
            .ok_or_else(|| TempiError::UnexpectedResponse("worklog creation returned no worklog".to_string()))
    }

    async fn delete(&self, remote_id: RemoteId, dry_run: bool) -> Result<()> {
        if dry_run {
            info!(%remote_id, "dry run, worklog not deleted");
            return Ok(());
        }
        debug!(%remote_id, "deleting worklog");
        self.send(self.client.delete(self.url(&format!("{}/{}", WORKLOGS_URL, remote_id))), None).await?;
        Ok(())
    }
}
