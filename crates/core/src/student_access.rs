//! Authorization policy for the student profile endpoints.
//!
//! The policy runs in two stages. [`has_permission`] gates the action before
//! any lookup; [`can_view_student`] is the per-record identity check applied
//! by retrieve once the record is loaded.

use crate::types::DbId;

/// Actions exposed by the student endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentAction {
    List,
    Create,
    Retrieve,
    Update,
    PartialUpdate,
    Destroy,
}

impl StudentAction {
    pub fn as_str(self) -> &'static str {
        match self {
            StudentAction::List => "list",
            StudentAction::Create => "create",
            StudentAction::Retrieve => "retrieve",
            StudentAction::Update => "update",
            StudentAction::PartialUpdate => "partial_update",
            StudentAction::Destroy => "destroy",
        }
    }
}

/// Whether a caller may attempt `action` at all.
///
/// - `list` / `destroy`: staff only.
/// - `create`: always allowed here; the handler itself refuses it.
/// - `retrieve` / `update` / `partial_update`: any authenticated caller.
pub fn has_permission(action: StudentAction, caller_is_staff: bool) -> bool {
    match action {
        StudentAction::List | StudentAction::Destroy => caller_is_staff,
        StudentAction::Create => true,
        StudentAction::Retrieve | StudentAction::Update | StudentAction::PartialUpdate => true,
    }
}

/// Whether a caller may read a specific student record.
///
/// The caller must be the record's own identity or hold staff privilege.
pub fn can_view_student(caller_user_id: DbId, caller_is_staff: bool, subject_user_id: DbId) -> bool {
    caller_is_staff || caller_user_id == subject_user_id
}
