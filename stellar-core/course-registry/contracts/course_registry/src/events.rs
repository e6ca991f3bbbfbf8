//! Events published after each committed mutation, for off-chain indexers.
//!
//! Topics are always `("course", <action>)`; the data tuple leads with the
//! course id. Failed invocations publish nothing.

use soroban_sdk::{log, symbol_short, Address, Env, String, Symbol};

const COURSE: Symbol = symbol_short!("course");

pub fn course_registered(env: &Env, course_id: u64, owner: &Address, content_hash: &String) {
    log!(env, "course registered", course_id, owner.clone());
    env.events().publish(
        (COURSE, symbol_short!("register")),
        (course_id, owner.clone(), content_hash.clone()),
    );
}

pub fn details_updated(env: &Env, course_id: u64, owner: &Address) {
    log!(env, "course details updated", course_id);
    env.events()
        .publish((COURSE, symbol_short!("details")), (course_id, owner.clone()));
}

pub fn version_registered(env: &Env, course_id: u64, version: u32, content_hash: &String) {
    log!(env, "course version registered", course_id, version);
    env.events().publish(
        (COURSE, symbol_short!("version")),
        (course_id, version, content_hash.clone()),
    );
}

pub fn ownership_transferred(env: &Env, course_id: u64, from: &Address, to: &Address) {
    log!(env, "course ownership transferred", course_id, to.clone());
    env.events().publish(
        (COURSE, symbol_short!("transfer")),
        (course_id, from.clone(), to.clone()),
    );
}

pub fn category_added(env: &Env, course_id: u64, category: &String) {
    log!(env, "course category added", course_id);
    env.events().publish(
        (COURSE, symbol_short!("category")),
        (course_id, category.clone()),
    );
}

pub fn collaborator_added(env: &Env, course_id: u64, collaborator: &Address, role: &String) {
    log!(env, "collaborator added", course_id, collaborator.clone());
    env.events().publish(
        (COURSE, symbol_short!("collab")),
        (course_id, collaborator.clone(), role.clone()),
    );
}

pub fn collaborator_removed(env: &Env, course_id: u64, collaborator: &Address) {
    log!(env, "collaborator removed", course_id, collaborator.clone());
    env.events().publish(
        (COURSE, symbol_short!("uncollab")),
        (course_id, collaborator.clone()),
    );
}

pub fn status_updated(env: &Env, course_id: u64, status: &String, visible: bool) {
    log!(env, "course status updated", course_id, visible);
    env.events().publish(
        (COURSE, symbol_short!("status")),
        (course_id, status.clone(), visible),
    );
}
