//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the navigator's action set to Dart via FRB.
//! - Own the process-wide navigator (and through it, the record store).
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every call runs to completion under one lock; calls never interleave.
//! - The navigator exists only between `app_start` and `app_reset`; actions
//!   outside a session return a `not_started` envelope.

use std::sync::{Mutex, MutexGuard, OnceLock};
use uuid::Uuid;
use workout_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, parse_form_field,
    ping as ping_inner, FormField, FormInput, NavError, NavOutcome, NavigatorConfig, RecordId,
    Screen, WorkoutNavigator, WorkoutRecord,
};

static NAVIGATOR: OnceLock<Mutex<Option<WorkoutNavigator>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One record row as rendered by the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordItem {
    pub id: String,
    pub name: String,
    pub repetitions: String,
}

/// Form field state for the create/edit screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub name: String,
    pub repetitions: String,
    /// `None` when the field is valid.
    pub name_error: Option<String>,
    pub repetitions_error: Option<String>,
}

/// Full render state for the UI shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStateView {
    /// Active route string (`list|create|edit/{id}`).
    pub route: String,
    /// Records in insertion order.
    pub records: Vec<RecordItem>,
    /// Present on create/edit screens.
    pub form: Option<FormView>,
    /// Record ID awaiting delete confirmation.
    pub pending_delete_id: Option<String>,
    /// Whether the list screen should show its empty state.
    pub show_empty_state: bool,
    /// Store mutation counter; changes whenever `records` changes.
    pub revision: u64,
}

/// Action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavResponse {
    /// Whether the action was applied.
    pub ok: bool,
    /// Route after the action.
    pub route: String,
    /// Outcome label (`moved|stayed|created|updated|deleted|confirm_delete|delete_cancelled`)
    /// or error kind (`invalid_action|validation|not_found|invalid_route|invalid_input|not_started`).
    pub outcome: String,
    /// Record touched by the action, if any.
    pub record_id: Option<String>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

/// Creates the process-wide navigator.
///
/// `confirm_before_delete` overrides `WORKOUT_CONFIRM_DELETE` when set.
/// Calling again keeps the existing session, unless the call asks for a
/// different delete policy, which is rejected (`app_reset` first).
///
/// # FFI contract
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn app_start(confirm_before_delete: Option<bool>) -> String {
    let mut slot = lock_navigator();
    if let Some(navigator) = slot.as_ref() {
        let active = navigator.config().confirm_before_delete;
        return match confirm_before_delete {
            Some(requested) if requested != active => format!(
                "session already started with confirm_before_delete={active}; \
                 call app_reset before switching to {requested}"
            ),
            _ => String::new(),
        };
    }
    match resolve_config(confirm_before_delete) {
        Ok(config) => {
            *slot = Some(WorkoutNavigator::in_memory(config));
            String::new()
        }
        Err(err) => err,
    }
}

/// Drops the current session (records included).
#[flutter_rust_bridge::frb(sync)]
pub fn app_reset() {
    lock_navigator().take();
    log::info!("event=app_reset module=ffi status=ok");
}

/// Returns the full render state, or `None` outside a session.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_state() -> Option<NavStateView> {
    with_navigator(|navigator| state_view(navigator))
}

/// Add tapped on the list screen.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_on_add() -> NavResponse {
    with_session(|navigator| respond(navigator, |nav| nav.on_add()))
}

/// Edit tapped on one list row.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_on_edit(id: String) -> NavResponse {
    with_record_id(&id, |navigator, id| respond(navigator, |nav| nav.on_edit(id)))
}

/// Delete tapped on one list row.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_on_delete_requested(id: String) -> NavResponse {
    with_record_id(&id, |navigator, id| {
        respond(navigator, |nav| nav.on_delete_requested(id))
    })
}

/// Delete confirmed.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_on_delete_confirmed(id: String) -> NavResponse {
    with_record_id(&id, |navigator, id| {
        respond(navigator, |nav| nav.on_delete_confirmed(id))
    })
}

/// Delete dialog dismissed.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_on_delete_cancelled() -> NavResponse {
    with_session(|navigator| respond(navigator, |nav| nav.on_delete_cancelled()))
}

/// Text changed in one form field (`name|repetitions`).
#[flutter_rust_bridge::frb(sync)]
pub fn nav_on_field_changed(field: String, value: String) -> NavResponse {
    with_session(|navigator| match parse_form_field(&field) {
        Some(field) => respond(navigator, |nav| nav.on_field_changed(field, value)),
        None => input_failure(navigator, format!("unknown form field `{field}`")),
    })
}

/// Save tapped on the form.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_on_save(name: String, repetitions: String) -> NavResponse {
    with_session(|navigator| {
        respond(navigator, |nav| {
            nav.on_save(FormInput::new(name, repetitions))
        })
    })
}

/// Back tapped.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_on_back() -> NavResponse {
    with_session(|navigator| respond(navigator, |nav| nav.on_back()))
}

/// Navigates to a route string (`list|create|edit/{id}`).
#[flutter_rust_bridge::frb(sync)]
pub fn nav_navigate(route: String) -> NavResponse {
    with_session(|navigator| respond(navigator, |nav| nav.navigate(&route)))
}

fn lock_navigator() -> MutexGuard<'static, Option<WorkoutNavigator>> {
    NAVIGATOR
        .get_or_init(|| Mutex::new(None))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn resolve_config(confirm_before_delete: Option<bool>) -> Result<NavigatorConfig, String> {
    let mut config = NavigatorConfig::from_env().map_err(|err| err.to_string())?;
    if let Some(confirm) = confirm_before_delete {
        config.confirm_before_delete = confirm;
    }
    Ok(config)
}

fn with_navigator<T>(f: impl FnOnce(&mut WorkoutNavigator) -> T) -> Option<T> {
    let mut slot = lock_navigator();
    let result = slot.as_mut().map(f);
    result
}

fn with_session(f: impl FnOnce(&mut WorkoutNavigator) -> NavResponse) -> NavResponse {
    with_navigator(f).unwrap_or_else(|| {
        log::warn!("event=nav_action module=ffi status=rejected reason=not_started");
        NavResponse {
            ok: false,
            route: String::new(),
            outcome: "not_started".to_string(),
            record_id: None,
            message: "no active session; call app_start first".to_string(),
        }
    })
}

fn with_record_id(
    raw_id: &str,
    f: impl FnOnce(&mut WorkoutNavigator, RecordId) -> NavResponse,
) -> NavResponse {
    with_session(|navigator| match Uuid::parse_str(raw_id.trim()) {
        Ok(id) => f(navigator, id),
        Err(_) => input_failure(navigator, format!("invalid record id `{}`", raw_id.trim())),
    })
}

fn respond(
    navigator: &mut WorkoutNavigator,
    action: impl FnOnce(&mut WorkoutNavigator) -> Result<NavOutcome, NavError>,
) -> NavResponse {
    match action(navigator) {
        Ok(outcome) => {
            let (label, record_id) = outcome_parts(outcome);
            NavResponse {
                ok: true,
                route: navigator.route().path(),
                outcome: label.to_string(),
                record_id: record_id.map(|id| id.to_string()),
                message: String::new(),
            }
        }
        Err(err) => NavResponse {
            ok: false,
            route: navigator.route().path(),
            outcome: error_label(&err).to_string(),
            record_id: None,
            message: err.to_string(),
        },
    }
}

fn input_failure(navigator: &WorkoutNavigator, message: String) -> NavResponse {
    NavResponse {
        ok: false,
        route: navigator.route().path(),
        outcome: "invalid_input".to_string(),
        record_id: None,
        message,
    }
}

fn outcome_parts(outcome: NavOutcome) -> (&'static str, Option<RecordId>) {
    match outcome {
        NavOutcome::Moved(_) => ("moved", None),
        NavOutcome::Stayed => ("stayed", None),
        NavOutcome::Created(id) => ("created", Some(id)),
        NavOutcome::Updated(id) => ("updated", Some(id)),
        NavOutcome::Deleted(id) => ("deleted", Some(id)),
        NavOutcome::ConfirmDelete(id) => ("confirm_delete", Some(id)),
        NavOutcome::DeleteCancelled => ("delete_cancelled", None),
    }
}

fn error_label(err: &NavError) -> &'static str {
    match err {
        NavError::InvalidAction { .. } => "invalid_action",
        NavError::Validation(_) => "validation",
        NavError::Store(workout_core::RepoError::NotFound(_)) => "not_found",
        NavError::Store(_) => "store",
        NavError::Route(_) => "invalid_route",
    }
}

fn state_view(navigator: &WorkoutNavigator) -> NavStateView {
    let screen = navigator.screen();
    NavStateView {
        route: navigator.route().path(),
        records: navigator.records().iter().map(to_record_item).collect(),
        form: screen.draft().map(|draft| FormView {
            name: draft.name().to_string(),
            repetitions: draft.repetitions().to_string(),
            name_error: draft.error_message(FormField::Name).map(str::to_string),
            repetitions_error: draft
                .error_message(FormField::Repetitions)
                .map(str::to_string),
        }),
        pending_delete_id: match screen {
            Screen::List { pending_delete } => pending_delete.map(|id| id.to_string()),
            Screen::Create { .. } | Screen::Edit { .. } => None,
        },
        show_empty_state: navigator.shows_empty_state(),
        revision: navigator.store().revision(),
    }
}

fn to_record_item(record: &WorkoutRecord) -> RecordItem {
    RecordItem {
        id: record.id.to_string(),
        name: record.name.clone(),
        repetitions: record.repetitions.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        app_reset, app_start, core_version, init_logging, nav_navigate, nav_on_add,
        nav_on_delete_cancelled, nav_on_delete_confirmed, nav_on_delete_requested, nav_on_edit,
        nav_on_field_changed, nav_on_save, nav_state, ping, NavStateView,
    };
    use std::sync::{Mutex, MutexGuard};

    // The navigator is process-wide; tests that touch it run one at a time.
    static SESSION_LOCK: Mutex<()> = Mutex::new(());

    fn fresh_session(confirm_before_delete: bool) -> MutexGuard<'static, ()> {
        let guard = SESSION_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        app_reset();
        assert_eq!(app_start(Some(confirm_before_delete)), "");
        guard
    }

    fn session_state() -> NavStateView {
        nav_state().expect("session should be started")
    }

    fn created_id(name: &str, repetitions: &str) -> String {
        let moved = nav_on_add();
        assert!(moved.ok, "{}", moved.message);
        let saved = nav_on_save(name.to_string(), repetitions.to_string());
        assert!(saved.ok, "{}", saved.message);
        assert_eq!(saved.outcome, "created");
        saved.record_id.expect("create should return record_id")
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn create_edit_flow_updates_state_view() {
        let _session = fresh_session(true);
        let state = session_state();
        assert_eq!(state.route, "list");
        assert!(state.show_empty_state);

        let id = created_id("Squat", "3x10");
        let edit = nav_on_edit(id.clone());
        assert!(edit.ok, "{}", edit.message);
        assert_eq!(edit.route, format!("edit/{id}"));

        let form = session_state().form.expect("edit screen has a form");
        assert_eq!(form.name, "Squat");

        let saved = nav_on_save("Back squat".to_string(), "5x5".to_string());
        assert_eq!(saved.outcome, "updated");

        let state = session_state();
        assert_eq!(state.route, "list");
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.records[0].id, id);
        assert_eq!(state.records[0].name, "Back squat");
        assert_eq!(state.revision, 2);
    }

    #[test]
    fn invalid_save_surfaces_field_errors() {
        let _session = fresh_session(true);
        nav_on_add();

        let response = nav_on_save("  ".to_string(), "3x10".to_string());
        assert!(!response.ok);
        assert_eq!(response.outcome, "validation");
        assert_eq!(response.route, "create");

        let form = session_state().form.expect("create screen has a form");
        assert_eq!(form.name_error.as_deref(), Some("Name is required"));
        assert_eq!(form.repetitions_error, None);

        let changed = nav_on_field_changed("name".to_string(), "Plank".to_string());
        assert!(changed.ok, "{}", changed.message);
        assert_eq!(session_state().form.unwrap().name_error, None);
    }

    #[test]
    fn delete_runs_through_confirm_dialog() {
        let _session = fresh_session(true);
        let id = created_id("Row", "4x12");

        let requested = nav_on_delete_requested(id.clone());
        assert_eq!(requested.outcome, "confirm_delete");
        assert_eq!(session_state().pending_delete_id.as_deref(), Some(id.as_str()));

        assert_eq!(nav_on_delete_cancelled().outcome, "delete_cancelled");
        assert_eq!(session_state().records.len(), 1);

        nav_on_delete_requested(id.clone());
        assert_eq!(nav_on_delete_confirmed(id.clone()).outcome, "deleted");
        assert!(session_state().records.is_empty());

        let again = nav_on_delete_confirmed(id);
        assert!(!again.ok);
        assert_eq!(again.outcome, "invalid_action");
    }

    #[test]
    fn actions_before_app_start_report_not_started() {
        let _guard = SESSION_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        app_reset();

        assert_eq!(nav_state(), None);
        let response = nav_on_add();
        assert!(!response.ok);
        assert_eq!(response.outcome, "not_started");
        assert_eq!(nav_on_edit("not-a-uuid".to_string()).outcome, "not_started");
        assert_eq!(nav_state(), None);

        assert_eq!(app_start(Some(false)), "");
        let id = created_id("Squat", "3x10");
        assert_eq!(nav_on_delete_requested(id).outcome, "deleted");
    }

    #[test]
    fn app_start_rejects_switching_policy_of_live_session() {
        let _session = fresh_session(true);
        let id = created_id("Row", "4x12");

        assert_eq!(app_start(Some(true)), "");
        assert_eq!(app_start(None), "");
        let error = app_start(Some(false));
        assert!(error.contains("app_reset"), "{error}");

        assert_eq!(nav_on_delete_requested(id).outcome, "confirm_delete");
        assert_eq!(session_state().records.len(), 1);
    }

    #[test]
    fn malformed_input_is_rejected_without_panicking() {
        let _session = fresh_session(false);

        let bad_id = nav_on_edit("not-a-uuid".to_string());
        assert!(!bad_id.ok);
        assert_eq!(bad_id.outcome, "invalid_input");

        let bad_field = nav_on_field_changed("weight".to_string(), "80".to_string());
        assert_eq!(bad_field.outcome, "invalid_input");

        let bad_route = nav_navigate("settings".to_string());
        assert_eq!(bad_route.outcome, "invalid_route");

        let wrong_screen = nav_on_save("Squat".to_string(), "3x10".to_string());
        assert_eq!(wrong_screen.outcome, "invalid_action");
        assert_eq!(wrong_screen.route, "list");
    }
}
