#![no_std]

//! Course registry contract.
//!
//! Records courses, their version history, category metadata, collaborator
//! grants and publication status. Every mutation is authorized against the
//! owner stored on the course record and is fully validated before the first
//! write, so a failing call leaves no trace.

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String, Vec};

mod events;
mod storage;
mod types;

pub use types::*;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotOwner = 1,
    InvalidHash = 2,
    InvalidParam = 3,
    AlreadyRegistered = 4,
    NotFound = 5,
    MaxListLimit = 6,
}

const CONTRACT_VERSION: u32 = 1;

#[contract]
pub struct CourseRegistry;

#[contractimpl]
impl CourseRegistry {
    /// Interface version of the deployed registry
    pub fn version(_env: Env) -> u32 {
        CONTRACT_VERSION
    }

    // ========================================================================
    // Course Lifecycle
    // ========================================================================

    /// Register a new course owned by `caller`. Returns the allocated id.
    pub fn register_course(
        env: Env,
        caller: Address,
        content_hash: String,
        title: String,
        description: String,
    ) -> Result<u64, Error> {
        caller.require_auth();

        Self::check_hash(&content_hash)?;
        Self::check_required(&title, MAX_TITLE_LEN)?;
        Self::check_optional(&description, MAX_DESCRIPTION_LEN)?;

        let mut owned = storage::get_owner_courses(&env, &caller);
        if owned.len() >= MAX_COURSES_PER_OWNER {
            return Err(Error::MaxListLimit);
        }

        let course_id = storage::get_course_count(&env) + 1;
        let now = env.ledger().sequence();

        let course = Course {
            owner: caller.clone(),
            content_hash: content_hash.clone(),
            title,
            description,
            created_at: now,
            version_count: 1,
        };
        storage::set_course(&env, course_id, &course);

        storage::set_version(
            &env,
            course_id,
            1,
            &CourseVersion {
                content_hash: content_hash.clone(),
                notes: String::from_str(&env, INITIAL_VERSION_NOTES),
                recorded_at: now,
            },
        );

        storage::set_status(
            &env,
            course_id,
            &CourseStatus {
                status: String::from_str(&env, INITIAL_STATUS),
                visible: false,
                updated_at: now,
            },
        );

        owned.push_back(course_id);
        storage::set_owner_courses(&env, &caller, &owned);

        storage::set_course_count(&env, course_id);
        storage::bump_course(&env, course_id);
        storage::bump_instance(&env);

        events::course_registered(&env, course_id, &caller, &content_hash);
        Ok(course_id)
    }

    /// Replace title and/or description. An empty value leaves that field unchanged.
    pub fn update_course_details(
        env: Env,
        caller: Address,
        course_id: u64,
        new_title: String,
        new_description: String,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut course = Self::load_owned_course(&env, &caller, course_id)?;

        if new_title.len() == 0 && new_description.len() == 0 {
            return Err(Error::InvalidParam);
        }
        Self::check_optional(&new_title, MAX_TITLE_LEN)?;
        Self::check_optional(&new_description, MAX_DESCRIPTION_LEN)?;

        if new_title.len() > 0 {
            course.title = new_title;
        }
        if new_description.len() > 0 {
            course.description = new_description;
        }
        storage::set_course(&env, course_id, &course);
        storage::bump_course(&env, course_id);
        storage::bump_instance(&env);

        events::details_updated(&env, course_id, &caller);
        Ok(())
    }

    /// Append a new version and make its hash the course's current content.
    pub fn register_new_version(
        env: Env,
        caller: Address,
        course_id: u64,
        new_hash: String,
        notes: String,
    ) -> Result<u32, Error> {
        caller.require_auth();

        let mut course = Self::load_owned_course(&env, &caller, course_id)?;

        Self::check_hash(&new_hash)?;
        Self::check_optional(&notes, MAX_NOTES_LEN)?;

        let now = env.ledger().sequence();
        let version = course.version_count + 1;

        storage::set_version(
            &env,
            course_id,
            version,
            &CourseVersion {
                content_hash: new_hash.clone(),
                notes,
                recorded_at: now,
            },
        );

        course.version_count = version;
        course.content_hash = new_hash.clone();
        storage::set_course(&env, course_id, &course);

        if let Some(mut status) = storage::get_status(&env, course_id) {
            status.updated_at = now;
            storage::set_status(&env, course_id, &status);
        }
        storage::bump_course(&env, course_id);
        storage::bump_instance(&env);

        events::version_registered(&env, course_id, version, &new_hash);
        Ok(version)
    }

    /// Hand a course to `new_owner`. Sub-records stay attached to the course id.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        course_id: u64,
        new_owner: Address,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut course = Self::load_owned_course(&env, &caller, course_id)?;

        if new_owner == caller {
            return Err(Error::InvalidParam);
        }

        let mut receiving = storage::get_owner_courses(&env, &new_owner);
        if receiving.len() >= MAX_COURSES_PER_OWNER {
            return Err(Error::MaxListLimit);
        }

        let owned = storage::get_owner_courses(&env, &caller);
        let mut remaining = Vec::new(&env);
        for id in owned.iter() {
            if id != course_id {
                remaining.push_back(id);
            }
        }
        storage::set_owner_courses(&env, &caller, &remaining);

        receiving.push_back(course_id);
        storage::set_owner_courses(&env, &new_owner, &receiving);

        course.owner = new_owner.clone();
        storage::set_course(&env, course_id, &course);
        storage::bump_course(&env, course_id);
        storage::bump_instance(&env);

        events::ownership_transferred(&env, course_id, &caller, &new_owner);
        Ok(())
    }

    // ========================================================================
    // Metadata
    // ========================================================================

    /// Attach a category and tags. Each course may be categorised once.
    pub fn add_category(
        env: Env,
        caller: Address,
        course_id: u64,
        category: String,
        tags: Vec<String>,
    ) -> Result<(), Error> {
        caller.require_auth();

        Self::load_owned_course(&env, &caller, course_id)?;

        if storage::has_category(&env, course_id) {
            return Err(Error::AlreadyRegistered);
        }

        Self::check_required(&category, MAX_CATEGORY_LEN)?;
        Self::check_lengths(&tags, MAX_TAG_LEN)?;
        if tags.len() > MAX_TAGS {
            return Err(Error::MaxListLimit);
        }

        storage::set_category(&env, course_id, &CourseCategory {
            category: category.clone(),
            tags,
        });
        storage::bump_course(&env, course_id);
        storage::bump_instance(&env);

        events::category_added(&env, course_id, &category);
        Ok(())
    }

    /// Record a collaborator grant for `collaborator`.
    pub fn add_collaborator(
        env: Env,
        caller: Address,
        course_id: u64,
        collaborator: Address,
        role: String,
        permissions: Vec<String>,
    ) -> Result<(), Error> {
        caller.require_auth();

        Self::load_owned_course(&env, &caller, course_id)?;

        if storage::has_collaborator(&env, course_id, &collaborator) {
            return Err(Error::AlreadyRegistered);
        }

        Self::check_required(&role, MAX_ROLE_LEN)?;
        if permissions.is_empty() {
            return Err(Error::InvalidParam);
        }
        Self::check_entries(&permissions, MAX_PERMISSION_LEN)?;
        Self::check_distinct(&permissions)?;
        if permissions.len() > MAX_PERMISSIONS {
            return Err(Error::MaxListLimit);
        }

        storage::set_collaborator(
            &env,
            course_id,
            &collaborator,
            &CourseCollaborator {
                role: role.clone(),
                permissions,
                added_at: env.ledger().sequence(),
            },
        );
        storage::bump_course(&env, course_id);
        storage::bump_instance(&env);

        events::collaborator_added(&env, course_id, &collaborator, &role);
        Ok(())
    }

    /// Drop the collaborator grant for `collaborator`.
    pub fn remove_collaborator(
        env: Env,
        caller: Address,
        course_id: u64,
        collaborator: Address,
    ) -> Result<(), Error> {
        caller.require_auth();

        Self::load_owned_course(&env, &caller, course_id)?;

        if !storage::has_collaborator(&env, course_id, &collaborator) {
            return Err(Error::NotFound);
        }

        storage::remove_collaborator(&env, course_id, &collaborator);
        storage::bump_course(&env, course_id);
        storage::bump_instance(&env);

        events::collaborator_removed(&env, course_id, &collaborator);
        Ok(())
    }

    /// Overwrite the publication status record.
    pub fn update_status(
        env: Env,
        caller: Address,
        course_id: u64,
        new_status: String,
        new_visible: bool,
    ) -> Result<(), Error> {
        caller.require_auth();

        Self::load_owned_course(&env, &caller, course_id)?;

        Self::check_required(&new_status, MAX_STATUS_LEN)?;

        storage::set_status(
            &env,
            course_id,
            &CourseStatus {
                status: new_status.clone(),
                visible: new_visible,
                updated_at: env.ledger().sequence(),
            },
        );
        storage::bump_course(&env, course_id);
        storage::bump_instance(&env);

        events::status_updated(&env, course_id, &new_status, new_visible);
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn get_course(env: Env, course_id: u64) -> Option<Course> {
        storage::get_course(&env, course_id)
    }

    pub fn get_course_version(env: Env, course_id: u64, version: u32) -> Option<CourseVersion> {
        storage::get_version(&env, course_id, version)
    }

    pub fn get_course_category(env: Env, course_id: u64) -> Option<CourseCategory> {
        storage::get_category(&env, course_id)
    }

    pub fn get_course_collaborator(
        env: Env,
        course_id: u64,
        collaborator: Address,
    ) -> Option<CourseCollaborator> {
        storage::get_collaborator(&env, course_id, &collaborator)
    }

    pub fn get_course_status(env: Env, course_id: u64) -> Option<CourseStatus> {
        storage::get_status(&env, course_id)
    }

    /// Course ids currently owned by `educator`, in the order they were acquired.
    pub fn get_courses_by_educator(env: Env, educator: Address) -> Vec<u64> {
        storage::get_owner_courses(&env, &educator)
    }

    /// Last allocated course id
    pub fn get_course_count(env: Env) -> u64 {
        storage::get_course_count(&env)
    }

    /// False both for unknown courses and for a different owner.
    pub fn is_owner(env: Env, course_id: u64, identity: Address) -> bool {
        match storage::get_course(&env, course_id) {
            Some(course) => course.owner == identity,
            None => false,
        }
    }

    /// Whether `identity` holds `permission` on the course as a collaborator.
    /// Owners hold no implicit permissions here.
    pub fn has_permission(
        env: Env,
        course_id: u64,
        identity: Address,
        permission: String,
    ) -> bool {
        match storage::get_collaborator(&env, course_id, &identity) {
            Some(record) => record.permissions.iter().any(|p| p == permission),
            None => false,
        }
    }

    // ========================================================================
    // Helper Functions
    // ========================================================================

    fn load_owned_course(env: &Env, caller: &Address, course_id: u64) -> Result<Course, Error> {
        let course = storage::get_course(env, course_id).ok_or(Error::NotFound)?;
        if course.owner != *caller {
            return Err(Error::NotOwner);
        }
        Ok(course)
    }

    fn check_hash(hash: &String) -> Result<(), Error> {
        if hash.len() == 0 || hash.len() > MAX_HASH_LEN {
            return Err(Error::InvalidHash);
        }
        Ok(())
    }

    fn check_required(value: &String, max_len: u32) -> Result<(), Error> {
        if value.len() == 0 {
            return Err(Error::InvalidParam);
        }
        Self::check_optional(value, max_len)
    }

    fn check_optional(value: &String, max_len: u32) -> Result<(), Error> {
        if value.len() > max_len {
            return Err(Error::InvalidParam);
        }
        Ok(())
    }

    fn check_entries(values: &Vec<String>, max_len: u32) -> Result<(), Error> {
        for value in values.iter() {
            Self::check_required(&value, max_len)?;
        }
        Ok(())
    }

    fn check_lengths(values: &Vec<String>, max_len: u32) -> Result<(), Error> {
        for value in values.iter() {
            Self::check_optional(&value, max_len)?;
        }
        Ok(())
    }

    // Permissions behave as a set; a repeated entry is rejected.
    fn check_distinct(values: &Vec<String>) -> Result<(), Error> {
        for i in 0..values.len() {
            for j in (i + 1)..values.len() {
                if values.get_unchecked(i) == values.get_unchecked(j) {
                    return Err(Error::InvalidParam);
                }
            }
        }
        Ok(())
    }
}
