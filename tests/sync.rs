#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use tempi::api::Tempo;
    use tempi::libs::entry::{Hours, LogEntry, RemoteId};
    use tempi::libs::error::{Result, TempiError};
    use tempi::libs::parser::{Declaration, LogParser};
    use tempi::libs::reconcile::diff;
    use tempi::libs::shorthand::{AliasLayer, AliasTable, Shorthand};
    use tempi::libs::sync::{SyncExecutor, SyncMode};
    use tempi::libs::tempo_data::TempoData;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(NaiveDate, String, bool),
        Delete(RemoteId, bool),
    }

    /// In-memory Tempo that records every call it receives.
    #[derive(Default)]
    struct FakeTempo {
        worklogs: RefCell<Vec<LogEntry>>,
        calls: RefCell<Vec<Call>>,
        next_id: Cell<u64>,
        locked: Option<NaiveDate>,
    }

    impl FakeTempo {
        fn with_worklogs(worklogs: Vec<LogEntry>) -> Self {
            let next_id = worklogs.iter().filter_map(|e| e.remote_id).map(|id| id.0).max().unwrap_or(0);
            Self {
                worklogs: RefCell::new(worklogs),
                next_id: Cell::new(next_id),
                ..Default::default()
            }
        }

        fn locked_on(mut self, day: NaiveDate) -> Self {
            self.locked = Some(day);
            self
        }

        fn check_lock(&self, day: NaiveDate) -> Result<()> {
            if self.locked == Some(day) {
                return Err(TempiError::ApprovedPeriod {
                    date: None,
                    body: "Period is approved".to_string(),
                });
            }
            Ok(())
        }
    }

    impl Tempo for FakeTempo {
        async fn fetch(&self, _worker: &str, from: NaiveDate, to: NaiveDate) -> Result<TempoData> {
            Ok(self
                .worklogs
                .borrow()
                .iter()
                .filter(|e| e.date >= from && e.date <= to)
                .cloned()
                .collect())
        }

        async fn create(&self, _worker: &str, entry: &LogEntry, dry_run: bool) -> Result<RemoteId> {
            entry.validate_for_remote()?;
            self.calls.borrow_mut().push(Call::Create(entry.date, entry.issue.clone(), dry_run));
            if dry_run {
                return Ok(RemoteId(0));
            }
            self.check_lock(entry.date)?;
            let id = RemoteId(self.next_id.get() + 1);
            self.next_id.set(id.0);
            self.worklogs.borrow_mut().push(entry.clone().with_remote_id(id));
            Ok(id)
        }

        async fn delete(&self, remote_id: RemoteId, dry_run: bool) -> Result<()> {
            self.calls.borrow_mut().push(Call::Delete(remote_id, dry_run));
            if dry_run {
                return Ok(());
            }
            let day = self
                .worklogs
                .borrow()
                .iter()
                .find(|e| e.remote_id == Some(remote_id))
                .map(|e| e.date)
                .ok_or(TempiError::Remote {
                    status: 404,
                    body: "worklog not found".to_string(),
                })?;
            self.check_lock(day)?;
            self.worklogs.borrow_mut().retain(|e| e.remote_id != Some(remote_id));
            Ok(())
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(day: &str, issue: &str, hours: &str, summary: &str) -> LogEntry {
        LogEntry::new(date(day), issue, "", Hours::parse(hours).unwrap(), summary, "")
    }

    fn aliases() -> AliasTable {
        let issues: HashMap<String, String> = [("MEET-1".to_string(), "Meetings".to_string())].into_iter().collect();
        let work: HashMap<String, Shorthand> = [
            (
                "meeting".to_string(),
                Shorthand {
                    issue: "MEET-1".to_string(),
                    activity: Some("Non-Project meeting".to_string()),
                    summary: None,
                },
            ),
            (
                "foo".to_string(),
                Shorthand {
                    issue: "FOO-1".to_string(),
                    activity: Some("Development".to_string()),
                    summary: None,
                },
            ),
        ]
        .into_iter()
        .collect();
        AliasTable::from_layers(vec![AliasLayer::IssueSummaries(issues), AliasLayer::Work(work)])
    }

    fn declared_week() -> TempoData {
        let declaration: Declaration = [(
            "2023-02-21".to_string(),
            Some(vec![
                "1.0 meeting stupid dumb meeting".to_string(),
                "5.0 foo implementing feature".to_string(),
            ]),
        )]
        .into_iter()
        .collect();
        LogParser::new(&aliases()).parse(&declaration).unwrap()
    }

    #[tokio::test]
    async fn test_new_day_creates_two_worklogs() {
        let tempo = FakeTempo::default();
        let local = declared_week();
        let remote = tempo.fetch("jdoe", date("2023-02-21"), date("2023-02-21")).await.unwrap();

        let changes = diff(&local, &remote);
        let count = SyncExecutor::commit(&tempo, "jdoe").apply(&changes).await.unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            *tempo.calls.borrow(),
            vec![
                Call::Create(date("2023-02-21"), "MEET-1".to_string(), false),
                Call::Create(date("2023-02-21"), "FOO-1".to_string(), false),
            ]
        );
        assert_eq!(tempo.worklogs.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_deletes_run_before_creates_and_dates_ascend() {
        let tempo = FakeTempo::with_worklogs(vec![
            entry("2023-02-22", "OLD-2", "1", "gone").with_remote_id(RemoteId(11)),
            entry("2023-02-21", "OLD-1", "1", "gone").with_remote_id(RemoteId(10)),
        ]);
        let local: TempoData = vec![entry("2023-02-22", "NEW-2", "2", "new"), entry("2023-02-21", "NEW-1", "2", "new")]
            .into_iter()
            .collect();
        let remote = tempo.fetch("jdoe", date("2023-02-21"), date("2023-02-22")).await.unwrap();

        let count = SyncExecutor::commit(&tempo, "jdoe").apply(&diff(&local, &remote)).await.unwrap();

        assert_eq!(count, 4);
        assert_eq!(
            *tempo.calls.borrow(),
            vec![
                Call::Delete(RemoteId(10), false),
                Call::Create(date("2023-02-21"), "NEW-1".to_string(), false),
                Call::Delete(RemoteId(11), false),
                Call::Create(date("2023-02-22"), "NEW-2".to_string(), false),
            ]
        );
    }

    #[tokio::test]
    async fn test_preview_leaves_remote_untouched() {
        let tempo = FakeTempo::with_worklogs(vec![entry("2023-02-21", "OLD-1", "1", "gone").with_remote_id(RemoteId(10))]);
        let local = declared_week();
        let remote = tempo.fetch("jdoe", date("2023-02-21"), date("2023-02-21")).await.unwrap();
        let changes = diff(&local, &remote);

        let first = SyncExecutor::preview(&tempo, "jdoe").apply(&changes).await.unwrap();
        let second = SyncExecutor::new(&tempo, "jdoe", SyncMode::Preview).apply(&changes).await.unwrap();

        assert_eq!(first, 3);
        assert_eq!(second, first);
        assert_eq!(tempo.worklogs.borrow().len(), 1);
        assert!(tempo.calls.borrow().iter().all(|call| match call {
            Call::Create(_, _, dry_run) => *dry_run,
            Call::Delete(_, dry_run) => *dry_run,
        }));

        let refetched = tempo.fetch("jdoe", date("2023-02-21"), date("2023-02-21")).await.unwrap();
        assert_eq!(diff(&local, &refetched), changes);
    }

    #[tokio::test]
    async fn test_commit_then_refetch_is_clean() {
        let tempo = FakeTempo::with_worklogs(vec![
            entry("2023-02-21", "OLD-1", "1", "gone").with_remote_id(RemoteId(10)),
            entry("2023-02-24", "OLD-2", "1", "outside the declaration").with_remote_id(RemoteId(11)),
        ]);
        let local = declared_week();
        let (from, to) = local.date_range().unwrap();

        let remote = tempo.fetch("jdoe", from, to).await.unwrap();
        let count = SyncExecutor::commit(&tempo, "jdoe").apply(&diff(&local, &remote)).await.unwrap();
        assert_eq!(count, 3);

        let remote = tempo.fetch("jdoe", from, to).await.unwrap();
        let again = diff(&local, &remote);
        assert!(again.is_empty());
        assert_eq!(SyncExecutor::commit(&tempo, "jdoe").apply(&again).await.unwrap(), 0);
        assert_eq!(tempo.worklogs.borrow().len(), 3);
    }

    #[tokio::test]
    async fn test_approved_period_aborts_and_keeps_earlier_changes() {
        let tempo = FakeTempo::default().locked_on(date("2023-02-22"));
        let local: TempoData = vec![
            entry("2023-02-21", "FOO-1", "1", "open day"),
            entry("2023-02-22", "FOO-1", "1", "locked day"),
            entry("2023-02-23", "FOO-1", "1", "never reached"),
        ]
        .into_iter()
        .collect();

        let err = SyncExecutor::commit(&tempo, "jdoe")
            .apply(&diff(&local, &TempoData::new()))
            .await
            .unwrap_err();

        assert!(err.is_approved_period());
        assert!(err.is_remote());
        assert!(matches!(err, TempiError::ApprovedPeriod { date: Some(d), .. } if d == date("2023-02-22")));
        assert_eq!(tempo.worklogs.borrow().len(), 1);
        assert_eq!(tempo.calls.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_without_remote_id_is_rejected() {
        let tempo = FakeTempo::default();
        let local = TempoData::new();
        let remote: TempoData = vec![entry("2023-02-21", "FOO-1", "1", "no id")].into_iter().collect();

        let err = SyncExecutor::commit(&tempo, "jdoe").apply(&diff(&local, &remote)).await.unwrap_err();
        assert!(matches!(err, TempiError::Validation { .. }));
        assert!(tempo.calls.borrow().is_empty());
    }
}
