use soroban_sdk::{contracttype, Address, String, Vec};

pub const MAX_HASH_LEN: u32 = 46;
pub const MAX_TITLE_LEN: u32 = 100;
pub const MAX_DESCRIPTION_LEN: u32 = 500;
pub const MAX_NOTES_LEN: u32 = 200;
pub const MAX_STATUS_LEN: u32 = 20;
pub const MAX_CATEGORY_LEN: u32 = 50;
pub const MAX_TAG_LEN: u32 = 20;
pub const MAX_TAGS: u32 = 20;
pub const MAX_ROLE_LEN: u32 = 50;
pub const MAX_PERMISSION_LEN: u32 = 20;
pub const MAX_PERMISSIONS: u32 = 5;
pub const MAX_COURSES_PER_OWNER: u32 = 1000;

pub const INITIAL_VERSION_NOTES: &str = "Initial version";
pub const INITIAL_STATUS: &str = "draft";

/// Head record of a course. `content_hash` always mirrors the newest version.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Course {
    pub owner: Address,
    pub content_hash: String,
    pub title: String,
    pub description: String,
    pub created_at: u32,
    pub version_count: u32,
}

/// Immutable snapshot written once per published revision.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CourseVersion {
    pub content_hash: String,
    pub notes: String,
    pub recorded_at: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CourseStatus {
    pub status: String,
    pub visible: bool,
    pub updated_at: u32,
}

/// Write-once classification of a course.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CourseCategory {
    pub category: String,
    pub tags: Vec<String>,
}

/// Informational grant. Collaborators never gate registry mutations;
/// other contracts consume it through `has_permission`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CourseCollaborator {
    pub role: String,
    pub permissions: Vec<String>,
    pub added_at: u32,
}
