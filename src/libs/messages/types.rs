#[derive(Debug, Clone)]
pub enum Message {
    // === SYNC MESSAGES ===
    WorklogCreated {
        date: String,
        issue: String,
        hours: String,
        remote_id: String,
    },
    WorklogDeleted {
        date: String,
        issue: String,
        hours: String,
        remote_id: String,
    },
    WorklogWouldCreate {
        date: String,
        issue: String,
        hours: String,
    },
    WorklogWouldDelete {
        date: String,
        issue: String,
        hours: String,
        remote_id: String,
    },
    NoChangesNeeded,
    ChangesApplied(usize),   // count
    ChangesPreviewed(usize), // count
    PendingChangesHeader,
    ConfirmCommit(usize), // count
    CommitCancelled,
    ApprovedPeriodHint,

    // === FETCH MESSAGES ===
    FetchingWorklogs {
        worker: String,
        from: String,
        to: String,
    },
    WorklogsHeader(String, String), // from, to
    NoWorklogsFound,
    NoEntriesDeclared(String), // path

    // === TEMPLATE MESSAGES ===
    TemplateCreated(String),       // path
    TemplateAlreadyExists(String), // path

    // === CONFIGURATION MESSAGES ===
    DefaultFileSet(String), // path
    DefaultFile(String),    // path
    DefaultFileNotSet,
    AliasTablesLoaded(String), // config dir

    // === EDITOR MESSAGES ===
    EditorFailed(String), // status
}
