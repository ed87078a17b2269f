/// Every user-facing text taskboard prints, logs or returns in an error body.
///
/// Variants carry the dynamic parts of the message; the wording lives in
/// the `Display` implementation in `display.rs`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskCreateFailed,
    TaskUpdated(i64),
    TaskUpdateFailed(i64),
    TaskDeleted(i64),
    TaskDeleteFailed(i64),
    TaskNotFound(i64),
    TasksFetchFailed,
    TasksNotFound,
    TaskEditCancelled,
    TaskDeleteCancelled,
    TaskToggled(i64, bool), // id, completed

    // === VALIDATION MESSAGES ===
    TaskTitleRequired,
    TaskTitleEmpty,
    NoFieldsToUpdate,
    InvalidPriority(String),
    InvalidDueDate(String),
    InvalidEstimatedTime(i64),
    InvalidRequestBody(String),
    InvalidQuery(String),

    // === STORE MESSAGES ===
    DatabaseOpened(String), // path
    DatabaseError,
    StoreOperationFailed(String), // detail, logged only

    // === SERVER MESSAGES ===
    ServerListening(String), // address
    ServerStopped,

    // === CLIENT MESSAGES ===
    RequestFailed(String),         // transport error
    UnexpectedStatus(u16, String), // status, body

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError(String),
    InvalidEnvValue(String, String), // variable, value

    // === SEED / EXPORT / STATS MESSAGES ===
    SeedCompleted(usize),
    ExportCompleted(String),
    StatsHeader,
    OverdueTimelineHeader,

    // === PROMPTS ===
    PromptTaskTitle,
    PromptConfirmDelete,
    PromptServerHost,
    PromptServerPort,
    PromptApiUrl,
    PromptPageSize,
}
