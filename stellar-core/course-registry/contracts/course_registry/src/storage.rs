use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{Course, CourseCategory, CourseCollaborator, CourseStatus, CourseVersion};

const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VersionKey {
    pub course_id: u64,
    pub version: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollaboratorKey {
    pub course_id: u64,
    pub collaborator: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    CourseCount,
    Course(u64),
    Version(VersionKey),
    Status(u64),
    Category(u64),
    Collaborator(CollaboratorKey),
    OwnerCourses(Address),
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn bump_if_present(env: &Env, key: &DataKey) {
    if env.storage().persistent().has(key) {
        bump_persistent(env, key);
    }
}

/// Extends the head record together with its status, category and every
/// version, so write-once entries live as long as the course is maintained.
/// Collaborator grants are only extended when written.
pub fn bump_course(env: &Env, course_id: u64) {
    let Some(course) = get_course(env, course_id) else {
        return;
    };
    bump_persistent(env, &DataKey::Course(course_id));
    bump_if_present(env, &DataKey::Status(course_id));
    bump_if_present(env, &DataKey::Category(course_id));
    for version in 1..=course.version_count {
        bump_if_present(env, &DataKey::Version(VersionKey { course_id, version }));
    }
}

// ============================================================================
// Counter
// ============================================================================

pub fn get_course_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CourseCount)
        .unwrap_or(0)
}

pub fn set_course_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::CourseCount, &count);
}

// ============================================================================
// Courses
// ============================================================================

pub fn get_course(env: &Env, course_id: u64) -> Option<Course> {
    env.storage().persistent().get(&DataKey::Course(course_id))
}

pub fn set_course(env: &Env, course_id: u64, course: &Course) {
    let key = DataKey::Course(course_id);
    env.storage().persistent().set(&key, course);
    bump_persistent(env, &key);
}

// ============================================================================
// Versions
// ============================================================================

pub fn get_version(env: &Env, course_id: u64, version: u32) -> Option<CourseVersion> {
    env.storage()
        .persistent()
        .get(&DataKey::Version(VersionKey { course_id, version }))
}

pub fn set_version(env: &Env, course_id: u64, version: u32, record: &CourseVersion) {
    let key = DataKey::Version(VersionKey { course_id, version });
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}

// ============================================================================
// Status
// ============================================================================

pub fn get_status(env: &Env, course_id: u64) -> Option<CourseStatus> {
    env.storage().persistent().get(&DataKey::Status(course_id))
}

pub fn set_status(env: &Env, course_id: u64, status: &CourseStatus) {
    let key = DataKey::Status(course_id);
    env.storage().persistent().set(&key, status);
    bump_persistent(env, &key);
}

// ============================================================================
// Categories
// ============================================================================

pub fn get_category(env: &Env, course_id: u64) -> Option<CourseCategory> {
    env.storage().persistent().get(&DataKey::Category(course_id))
}

pub fn has_category(env: &Env, course_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Category(course_id))
}

pub fn set_category(env: &Env, course_id: u64, category: &CourseCategory) {
    let key = DataKey::Category(course_id);
    env.storage().persistent().set(&key, category);
    bump_persistent(env, &key);
}

// ============================================================================
// Collaborators
// ============================================================================

fn collaborator_key(course_id: u64, collaborator: &Address) -> DataKey {
    DataKey::Collaborator(CollaboratorKey {
        course_id,
        collaborator: collaborator.clone(),
    })
}

pub fn get_collaborator(
    env: &Env,
    course_id: u64,
    collaborator: &Address,
) -> Option<CourseCollaborator> {
    env.storage()
        .persistent()
        .get(&collaborator_key(course_id, collaborator))
}

pub fn has_collaborator(env: &Env, course_id: u64, collaborator: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&collaborator_key(course_id, collaborator))
}

pub fn set_collaborator(
    env: &Env,
    course_id: u64,
    collaborator: &Address,
    record: &CourseCollaborator,
) {
    let key = collaborator_key(course_id, collaborator);
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}

pub fn remove_collaborator(env: &Env, course_id: u64, collaborator: &Address) {
    env.storage()
        .persistent()
        .remove(&collaborator_key(course_id, collaborator));
}

// ============================================================================
// Per-owner course lists
// ============================================================================

pub fn get_owner_courses(env: &Env, owner: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::OwnerCourses(owner.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn set_owner_courses(env: &Env, owner: &Address, courses: &Vec<u64>) {
    let key = DataKey::OwnerCourses(owner.clone());
    env.storage().persistent().set(&key, courses);
    bump_persistent(env, &key);
}
