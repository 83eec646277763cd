use leptos::*;

use crate::{
    api::Organization,
    state::{
        analytics::{use_task_stats, StatsScope, TaskStatsHook},
        billing::{use_billing, BillingHook},
        clients::{use_clients, ClientQuery, ClientsHook},
        organizations::{use_organizations, OrganizationScope, OrganizationsHook},
        tasks::{use_tasks, TaskQuery, TasksHook},
        users::{use_users, UserQuery, UsersHook},
    },
};

/// The requested organization when the manager belongs to it, otherwise the
/// first one listed.
pub fn pick_organization(orgs: &[Organization], requested: Option<i64>) -> Option<i64> {
    requested
        .filter(|id| orgs.iter().any(|org| org.id == *id))
        .or_else(|| orgs.first().map(|org| org.id))
}

#[derive(Clone, Copy)]
pub struct ManagerViewModel {
    pub organizations: OrganizationsHook,
    pub selected: RwSignal<Option<i64>>,
    pub clients: ClientsHook,
    pub members: UsersHook,
    pub tasks: TasksHook,
    pub billing: BillingHook,
    pub stats: TaskStatsHook,
}

impl ManagerViewModel {
    pub fn selected_organization(&self) -> Option<Organization> {
        let id = self.selected.get()?;
        self.organizations
            .state()
            .with(|s| s.items().into_iter().find(|org| org.id == id))
    }
}

pub fn use_manager_view_model() -> ManagerViewModel {
    let vm = ManagerViewModel {
        organizations: use_organizations(),
        selected: create_rw_signal(None),
        clients: use_clients(),
        members: use_users(),
        tasks: use_tasks(),
        billing: use_billing(),
        stats: use_task_stats(),
    };

    create_effect(move |prev: Option<()>| {
        if prev.is_none() {
            vm.organizations.spawn_fetch(OrganizationScope::Mine);
            vm.tasks.spawn_fetch(TaskQuery::All);
            vm.billing.plans.spawn_fetch(());
        }
    });

    create_effect(move |_| {
        let orgs = vm.organizations.state().with(|s| s.items());
        if vm.selected.get_untracked().is_none() {
            if let Some(first) = pick_organization(&orgs, None) {
                vm.selected.set(Some(first));
            }
        }
    });

    create_effect(move |_| {
        if let Some(id) = vm.selected.get() {
            log::debug!("Loading organization {}", id);
            vm.clients.spawn_fetch(ClientQuery::ByOrganization(id));
            vm.members.spawn_fetch(UserQuery::MembersOf(id));
            vm.stats.spawn_fetch(StatsScope::Manager(id));
        }
    });

    vm
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(id: i64) -> Organization {
        Organization {
            id,
            name: format!("Org {}", id),
            ..Default::default()
        }
    }

    #[test]
    fn picks_requested_member_organization() {
        let orgs = vec![org(4), org(9)];
        assert_eq!(pick_organization(&orgs, Some(9)), Some(9));
        assert_eq!(pick_organization(&orgs, Some(77)), Some(4));
        assert_eq!(pick_organization(&orgs, None), Some(4));
        assert_eq!(pick_organization(&[], Some(4)), None);
    }
}
