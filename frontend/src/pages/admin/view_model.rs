use leptos::*;

use super::components::OrganizationFields;
use crate::{
    api::{ApiError, Organization, OrganizationPayload},
    state::{
        analytics::{use_task_stats, StatsScope, TaskStatsHook},
        organizations::{use_organizations, OrganizationScope, OrganizationsHook},
        users::{use_users, UserQuery, UsersHook},
    },
};

/// Form submission: `None` creates, `Some(id)` edits.
pub type SaveOrganization = (Option<i64>, OrganizationPayload);

#[derive(Clone, Copy)]
pub struct AdminViewModel {
    pub organizations: OrganizationsHook,
    pub users: UsersHook,
    pub stats: TaskStatsHook,
    pub form: OrganizationFields,
    pub form_open: RwSignal<bool>,
    pub editing: RwSignal<Option<i64>>,
    pub pending_delete: RwSignal<Option<Organization>>,
    pub message: RwSignal<Option<String>>,
    pub action_error: RwSignal<Option<ApiError>>,
    pub save_action: Action<SaveOrganization, Result<Organization, ApiError>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
}

impl AdminViewModel {
    pub fn open_create(&self) {
        self.form.clear();
        self.editing.set(None);
        self.action_error.set(None);
        self.form_open.set(true);
    }

    pub fn open_edit(&self, org: &Organization) {
        self.form.load(org);
        self.editing.set(Some(org.id));
        self.action_error.set(None);
        self.form_open.set(true);
    }

    pub fn close_form(&self) {
        self.form_open.set(false);
        self.editing.set(None);
    }

    pub fn save(&self, payload: OrganizationPayload) {
        self.message.set(None);
        self.action_error.set(None);
        self.save_action.dispatch((self.editing.get_untracked(), payload));
    }

    pub fn confirm_delete(&self) {
        if let Some(org) = self.pending_delete.get_untracked() {
            self.delete_action.dispatch(org.id);
        }
    }
}

pub fn use_admin_view_model() -> AdminViewModel {
    let organizations = use_organizations();
    let users = use_users();
    let stats = use_task_stats();

    create_effect(move |prev: Option<()>| {
        if prev.is_none() {
            organizations.spawn_fetch(OrganizationScope::All);
            users.spawn_fetch(UserQuery::All);
            stats.spawn_fetch(StatsScope::Admin);
        }
    });

    let save_action = create_action(move |(id, payload): &SaveOrganization| {
        let (id, payload) = (*id, payload.clone());
        async move {
            match id {
                Some(id) => organizations.edit(id, payload).await,
                None => organizations.add(payload).await,
            }
        }
    });
    let delete_action = create_action(move |id: &i64| {
        let id = *id;
        async move { organizations.remove(id).await }
    });

    let vm = AdminViewModel {
        organizations,
        users,
        stats,
        form: OrganizationFields::default(),
        form_open: create_rw_signal(false),
        editing: create_rw_signal(None),
        pending_delete: create_rw_signal(None),
        message: create_rw_signal(None),
        action_error: create_rw_signal(None),
        save_action,
        delete_action,
    };

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(org) => {
                    vm.message.set(Some(format!("Saved {}", org.name)));
                    vm.close_form();
                }
                Err(err) => vm.action_error.set(Some(err)),
            }
        }
    });
    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => {
                    vm.message.set(Some("Organization deleted".into()));
                    vm.pending_delete.set(None);
                }
                Err(err) => {
                    vm.pending_delete.set(None);
                    vm.action_error.set(Some(err));
                }
            }
        }
    });

    vm
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{admin_user, provide_auth},
        ssr::with_runtime,
    };

    #[test]
    fn edit_then_create_resets_the_form() {
        with_runtime(|| {
            provide_auth(Some(admin_user()));
            let vm = use_admin_view_model();
            vm.open_edit(&Organization {
                id: 8,
                name: "Acme".into(),
                ..Default::default()
            });
            assert_eq!(vm.editing.get_untracked(), Some(8));
            assert_eq!(vm.form.name.get_untracked(), "Acme");

            vm.open_create();
            assert_eq!(vm.editing.get_untracked(), None);
            assert!(vm.form.name.get_untracked().is_empty());
            assert!(vm.form_open.get_untracked());
        });
    }
}
