//! Screen state machine driving the record store.
//!
//! # Responsibility
//! - Own the record store for the lifetime of the app session.
//! - Apply user actions (`add`, `edit`, `delete`, `save`, `back`) as screen
//!   transitions plus store side effects.
//!
//! # Invariants
//! - The initial screen is the list; there is no terminal screen.
//! - Every action runs to completion; a failed action leaves the screen and
//!   the store exactly as they were, except that the submitted draft and its
//!   error flags are kept so the form can show them.
//! - A save that hits a stale record ID stays on the edit screen.
//! - Actions that do not apply to the active screen are rejected with
//!   `NavError::InvalidAction`.

use crate::config::NavigatorConfig;
use crate::model::record::{RecordId, WorkoutRecord};
use crate::nav::form::{FieldErrors, FormDraft, FormField, FormInput};
use crate::nav::route::{parse_route, Route, RouteParseError};
use crate::repo::record_repo::{InMemoryRecordRepository, RecordRepository, RepoError};
use crate::service::record_service::RecordService;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type NavResult<T> = Result<T, NavError>;

/// Navigator over the in-memory store used by the app shells.
pub type WorkoutNavigator = Navigator<InMemoryRecordRepository>;

/// Active screen plus its transient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Record list; `pending_delete` is the open confirm dialog, if any.
    List { pending_delete: Option<RecordId> },
    /// Form for a new record.
    Create { draft: FormDraft },
    /// Form for an existing record.
    Edit { id: RecordId, draft: FormDraft },
}

impl Screen {
    fn list() -> Self {
        Self::List {
            pending_delete: None,
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Self::List { .. } => Route::List,
            Self::Create { .. } => Route::Create,
            Self::Edit { id, .. } => Route::Edit(*id),
        }
    }

    /// Form draft of the create/edit screens.
    pub fn draft(&self) -> Option<&FormDraft> {
        match self {
            Self::Create { draft } | Self::Edit { draft, .. } => Some(draft),
            Self::List { .. } => None,
        }
    }

    /// Record awaiting delete confirmation on the list screen.
    pub fn pending_delete(&self) -> Option<RecordId> {
        match self {
            Self::List { pending_delete } => *pending_delete,
            Self::Create { .. } | Self::Edit { .. } => None,
        }
    }
}

/// User action delivered by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    Add,
    Edit(RecordId),
    DeleteRequested(RecordId),
    DeleteConfirmed(RecordId),
    DeleteCancelled,
    FieldChanged { field: FormField, value: String },
    Save(FormInput),
    Back,
}

impl NavAction {
    /// Stable action label used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Edit(_) => "edit",
            Self::DeleteRequested(_) => "delete_requested",
            Self::DeleteConfirmed(_) => "delete_confirmed",
            Self::DeleteCancelled => "delete_cancelled",
            Self::FieldChanged { .. } => "field_changed",
            Self::Save(_) => "save",
            Self::Back => "back",
        }
    }
}

/// Result of one applied action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Screen changed without a store mutation.
    Moved(Route),
    /// Screen unchanged and store untouched.
    Stayed,
    /// Record created; list screen is active.
    Created(RecordId),
    /// Record updated; list screen is active.
    Updated(RecordId),
    /// Record removed; list screen is active.
    Deleted(RecordId),
    /// Confirm dialog opened for this record.
    ConfirmDelete(RecordId),
    /// Confirm dialog dismissed without deleting.
    DeleteCancelled,
}

/// Navigation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// Action does not apply to the active screen.
    InvalidAction { action: &'static str, route: Route },
    /// Form input failed validation; the form stays open.
    Validation(FieldErrors),
    /// Store rejected the operation (for example a stale record ID).
    Store(RepoError),
    /// Route string could not be parsed.
    Route(RouteParseError),
}

impl Display for NavError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAction { action, route } => {
                write!(f, "action `{action}` is not available on route `{route}`")
            }
            Self::Validation(errors) => write!(f, "invalid form input: {errors}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Route(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NavError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidAction { .. } => None,
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Route(err) => Some(err),
        }
    }
}

impl From<RepoError> for NavError {
    fn from(value: RepoError) -> Self {
        Self::Store(value)
    }
}

impl From<RouteParseError> for NavError {
    fn from(value: RouteParseError) -> Self {
        Self::Route(value)
    }
}

impl From<FieldErrors> for NavError {
    fn from(value: FieldErrors) -> Self {
        Self::Validation(value)
    }
}

/// Screen state machine that exclusively owns the record store.
#[derive(Debug)]
pub struct Navigator<R: RecordRepository> {
    store: RecordService<R>,
    config: NavigatorConfig,
    screen: Screen,
}

impl WorkoutNavigator {
    /// Creates a navigator over a fresh in-memory store.
    pub fn in_memory(config: NavigatorConfig) -> Self {
        Self::new(RecordService::new(InMemoryRecordRepository::new()), config)
    }
}

impl<R: RecordRepository> Navigator<R> {
    /// Creates a navigator on the list screen, taking ownership of `store`.
    pub fn new(store: RecordService<R>, config: NavigatorConfig) -> Self {
        info!(
            "event=nav_init module=nav status=ok confirm_before_delete={} count={}",
            config.confirm_before_delete,
            store.len()
        );
        Self {
            store,
            config,
            screen: Screen::list(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn route(&self) -> Route {
        self.screen.route()
    }

    pub fn config(&self) -> NavigatorConfig {
        self.config
    }

    /// Read-only access to the owned store.
    pub fn store(&self) -> &RecordService<R> {
        &self.store
    }

    /// Snapshot of the records shown by the list screen.
    pub fn records(&self) -> Vec<WorkoutRecord> {
        self.store.list()
    }

    /// Whether the list screen should render its empty state.
    pub fn shows_empty_state(&self) -> bool {
        matches!(self.screen, Screen::List { .. }) && self.store.is_empty()
    }

    /// Applies one action.
    pub fn dispatch(&mut self, action: NavAction) -> NavResult<NavOutcome> {
        match action {
            NavAction::Add => self.on_add(),
            NavAction::Edit(id) => self.on_edit(id),
            NavAction::DeleteRequested(id) => self.on_delete_requested(id),
            NavAction::DeleteConfirmed(id) => self.on_delete_confirmed(id),
            NavAction::DeleteCancelled => self.on_delete_cancelled(),
            NavAction::FieldChanged { field, value } => self.on_field_changed(field, value),
            NavAction::Save(input) => self.on_save(input),
            NavAction::Back => self.on_back(),
        }
    }

    /// Navigates to a route string as if the matching action was tapped.
    ///
    /// `list` behaves like back, `create` like add, `edit/{id}` like edit.
    pub fn navigate(&mut self, path: &str) -> NavResult<NavOutcome> {
        match parse_route(path)? {
            Route::List => self.on_back(),
            Route::Create => self.on_add(),
            Route::Edit(id) => self.on_edit(id),
        }
    }

    /// List → create form.
    pub fn on_add(&mut self) -> NavResult<NavOutcome> {
        self.require_list("add")?;
        Ok(self.transition(Screen::Create {
            draft: FormDraft::new(),
        }))
    }

    /// List → edit form prefilled from the record.
    pub fn on_edit(&mut self, id: RecordId) -> NavResult<NavOutcome> {
        self.require_list("edit")?;
        let record = self.store.find(id).ok_or(RepoError::NotFound(id))?;
        Ok(self.transition(Screen::Edit {
            id,
            draft: FormDraft::from_record(&record),
        }))
    }

    /// Delete tapped on a list row.
    ///
    /// Opens the confirm dialog when `confirm_before_delete` is set,
    /// otherwise removes the record right away.
    pub fn on_delete_requested(&mut self, id: RecordId) -> NavResult<NavOutcome> {
        self.require_list("delete_requested")?;
        if !self.config.confirm_before_delete {
            return self.remove_now(id);
        }

        if self.store.find(id).is_none() {
            return Err(RepoError::NotFound(id).into());
        }
        self.screen = Screen::List {
            pending_delete: Some(id),
        };
        debug!("event=nav_confirm_delete module=nav status=open record_id={id}");
        Ok(NavOutcome::ConfirmDelete(id))
    }

    /// Confirmed delete.
    ///
    /// With `confirm_before_delete` set, only the record named by the open
    /// confirm dialog can be removed; anything else is an invalid action and
    /// leaves the dialog as it was. Without the policy this removes directly.
    pub fn on_delete_confirmed(&mut self, id: RecordId) -> NavResult<NavOutcome> {
        self.require_list("delete_confirmed")?;
        if self.config.confirm_before_delete && self.screen.pending_delete() != Some(id) {
            return Err(NavError::InvalidAction {
                action: "delete_confirmed",
                route: self.route(),
            });
        }
        self.remove_now(id)
    }

    /// Dismisses the confirm dialog without deleting.
    pub fn on_delete_cancelled(&mut self) -> NavResult<NavOutcome> {
        self.require_list("delete_cancelled")?;
        match self.screen.pending_delete() {
            Some(id) => {
                self.screen = Screen::list();
                debug!("event=nav_confirm_delete module=nav status=cancelled record_id={id}");
                Ok(NavOutcome::DeleteCancelled)
            }
            None => Ok(NavOutcome::Stayed),
        }
    }

    /// Text edit in one form field.
    pub fn on_field_changed(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> NavResult<NavOutcome> {
        let route = self.route();
        match &mut self.screen {
            Screen::Create { draft } | Screen::Edit { draft, .. } => {
                draft.set_field(field, value);
                Ok(NavOutcome::Stayed)
            }
            Screen::List { .. } => Err(NavError::InvalidAction {
                action: "field_changed",
                route,
            }),
        }
    }

    /// Save tapped on the form.
    ///
    /// Valid input creates (create screen) or updates (edit screen) the
    /// record and returns to the list. Invalid input keeps the form open with
    /// per-field errors and never reaches the store.
    pub fn on_save(&mut self, input: FormInput) -> NavResult<NavOutcome> {
        let route = self.route();
        let (edit_id, draft) = match &mut self.screen {
            Screen::Create { draft } => (None, draft),
            Screen::Edit { id, draft } => (Some(*id), draft),
            Screen::List { .. } => {
                return Err(NavError::InvalidAction {
                    action: "save",
                    route,
                })
            }
        };

        draft.apply_input(input);
        let validated = draft.validate().map_err(|errors| {
            debug!(
                "event=nav_save module=nav status=invalid route={} fields={}",
                route.name(),
                errors
                    .fields()
                    .into_iter()
                    .map(FormField::as_str)
                    .collect::<Vec<_>>()
                    .join(",")
            );
            NavError::Validation(errors)
        })?;

        let outcome = match edit_id {
            None => {
                let id = self.store.add(validated.name, validated.repetitions)?;
                NavOutcome::Created(id)
            }
            Some(id) => {
                self.store
                    .update(id, validated.name, validated.repetitions)?;
                NavOutcome::Updated(id)
            }
        };
        self.transition(Screen::list());
        Ok(outcome)
    }

    /// Back tapped.
    ///
    /// Forms return to the list discarding the draft. On the list, an open
    /// confirm dialog is dismissed; otherwise nothing happens.
    pub fn on_back(&mut self) -> NavResult<NavOutcome> {
        match self.screen {
            Screen::Create { .. } | Screen::Edit { .. } => Ok(self.transition(Screen::list())),
            Screen::List { .. } => self.on_delete_cancelled(),
        }
    }

    fn remove_now(&mut self, id: RecordId) -> NavResult<NavOutcome> {
        self.screen = Screen::list();
        self.store.remove(id)?;
        Ok(NavOutcome::Deleted(id))
    }

    fn require_list(&self, action: &'static str) -> NavResult<()> {
        match self.screen {
            Screen::List { .. } => Ok(()),
            _ => Err(NavError::InvalidAction {
                action,
                route: self.route(),
            }),
        }
    }

    fn transition(&mut self, next: Screen) -> NavOutcome {
        let from = self.route();
        self.screen = next;
        let to = self.route();
        debug!(
            "event=nav_transition module=nav status=ok from={} to={}",
            from.name(),
            to.name()
        );
        NavOutcome::Moved(to)
    }
}

#[cfg(test)]
mod tests {
    use super::{NavAction, NavError, NavOutcome, Screen, WorkoutNavigator};
    use crate::config::NavigatorConfig;
    use crate::nav::form::{FormField, FormInput};
    use crate::nav::route::Route;

    fn navigator(confirm_before_delete: bool) -> WorkoutNavigator {
        WorkoutNavigator::in_memory(NavigatorConfig {
            confirm_before_delete,
        })
    }

    #[test]
    fn starts_on_empty_list() {
        let nav = navigator(true);
        assert_eq!(nav.route(), Route::List);
        assert_eq!(nav.screen().pending_delete(), None);
        assert!(nav.shows_empty_state());
    }

    #[test]
    fn form_actions_are_rejected_on_list() {
        let mut nav = navigator(true);
        let err = nav
            .on_save(FormInput::new("Squat", "3x10"))
            .expect_err("save on list must fail");
        assert_eq!(
            err,
            NavError::InvalidAction {
                action: "save",
                route: Route::List
            }
        );
        assert!(nav.store().is_empty());
    }

    #[test]
    fn list_actions_are_rejected_on_form() {
        let mut nav = navigator(true);
        nav.on_add().unwrap();
        let err = nav.on_add().expect_err("add on create form must fail");
        assert!(matches!(err, NavError::InvalidAction { action: "add", .. }));
        assert_eq!(nav.route(), Route::Create);
    }

    #[test]
    fn field_changes_land_in_the_active_draft() {
        let mut nav = navigator(true);
        nav.dispatch(NavAction::Add).unwrap();
        nav.dispatch(NavAction::FieldChanged {
            field: FormField::Name,
            value: "Burpee".to_string(),
        })
        .unwrap();

        let draft = nav.screen().draft().expect("create screen has a draft");
        assert_eq!(draft.name(), "Burpee");
        assert_eq!(draft.repetitions(), "");
    }

    #[test]
    fn back_on_list_dismisses_confirm_dialog() {
        let mut nav = navigator(true);
        nav.on_add().unwrap();
        let id = match nav.on_save(FormInput::new("Row", "4x12")).unwrap() {
            NavOutcome::Created(id) => id,
            other => panic!("unexpected outcome: {other:?}"),
        };

        assert_eq!(
            nav.on_delete_requested(id).unwrap(),
            NavOutcome::ConfirmDelete(id)
        );
        assert_eq!(nav.on_back().unwrap(), NavOutcome::DeleteCancelled);
        assert_eq!(
            nav.screen(),
            &Screen::List {
                pending_delete: None
            }
        );
        assert_eq!(nav.on_back().unwrap(), NavOutcome::Stayed);
        assert_eq!(nav.store().len(), 1);
    }
}
