//! Roster to manager name resolution

use sleeper_fetcher::{SleeperRoster, SleeperUser};
use std::collections::HashMap;

/// Map of roster id to the owning user's display name
pub type ManagerNames = HashMap<u32, String>;

/// Build the roster id to display name map from league users and rosters.
///
/// Rosters whose owner is null or not among `users` are left out.
pub fn manager_names(users: &[SleeperUser], rosters: &[SleeperRoster]) -> ManagerNames {
    let user_map: HashMap<&str, &str> =
        users.iter().map(|u| (u.user_id.as_str(), u.display_name.as_str())).collect();

    rosters
        .iter()
        .filter_map(|roster| {
            let owner_id = roster.owner_id.as_deref()?;
            let display_name = user_map.get(owner_id)?;
            Some((roster.roster_id, display_name.to_string()))
        })
        .collect()
}

/// Display name for a roster, or `Manager {roster_id}` when it has no known owner
pub fn manager_label(names: &ManagerNames, roster_id: u32) -> String {
    names.get(&roster_id).cloned().unwrap_or_else(|| format!("Manager {roster_id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str) -> SleeperUser {
        SleeperUser { user_id: id.to_string(), display_name: name.to_string() }
    }

    fn roster(roster_id: u32, owner: Option<&str>) -> SleeperRoster {
        SleeperRoster { roster_id, owner_id: owner.map(str::to_string) }
    }

    #[test]
    fn test_rosters_map_to_owner_display_names() {
        let users = vec![user("u1", "Alice"), user("u2", "Bob")];
        let rosters = vec![roster(1, Some("u2")), roster(2, Some("u1"))];

        let names = manager_names(&users, &rosters);

        assert_eq!(names.len(), 2);
        assert_eq!(names[&1], "Bob");
        assert_eq!(names[&2], "Alice");
    }

    #[test]
    fn test_unknown_and_orphaned_rosters_fall_back_to_label() {
        let users = vec![user("u1", "Alice")];
        let rosters = vec![roster(1, Some("u1")), roster(2, Some("ghost")), roster(3, None)];

        let names = manager_names(&users, &rosters);

        assert_eq!(names.len(), 1);
        assert_eq!(manager_label(&names, 1), "Alice");
        assert_eq!(manager_label(&names, 2), "Manager 2");
        assert_eq!(manager_label(&names, 3), "Manager 3");
    }
}
