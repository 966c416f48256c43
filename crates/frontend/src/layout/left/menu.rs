//! Navigation model: menu groups and the roles allowed to see each item.

use crate::layout::tabs::tab_label_for_key;
use contracts::system::auth::UserRole;

const ALL: &[UserRole] = &[UserRole::Admin, UserRole::Staff, UserRole::Coach, UserRole::Unknown];
const OFFICE: &[UserRole] = &[UserRole::Admin, UserRole::Staff];
const FIELD: &[UserRole] = &[UserRole::Admin, UserRole::Staff, UserRole::Coach];
const ADMIN: &[UserRole] = &[UserRole::Admin];

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    roles: &'static [UserRole],
}

impl MenuItem {
    fn new(key: &'static str, icon: &'static str, roles: &'static [UserRole]) -> Self {
        Self {
            key,
            label: tab_label_for_key(key),
            icon,
            roles,
        }
    }

    pub fn allows(&self, role: UserRole) -> bool {
        self.roles.contains(&role)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub items: Vec<MenuItem>,
}

pub fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboard",
            icon: "layout-dashboard",
            items: vec![MenuItem::new("d400_overview", "layout-dashboard", ALL)],
        },
        MenuGroup {
            id: "academy",
            label: "Academy",
            icon: "database",
            items: vec![
                MenuItem::new("a001_branch", "building", OFFICE),
                MenuItem::new("a002_category", "tag", OFFICE),
                MenuItem::new("a003_sport", "activity", OFFICE),
                MenuItem::new("a004_class", "book", OFFICE),
                MenuItem::new("a005_coach", "user-check", OFFICE),
                MenuItem::new("a006_play_kid", "smile", OFFICE),
                MenuItem::new("a007_product", "package", OFFICE),
                MenuItem::new("a008_venue", "map-pin", OFFICE),
            ],
        },
        MenuGroup {
            id: "sessions",
            label: "Sessions",
            icon: "calendar",
            items: vec![
                MenuItem::new("a009_schedule", "calendar", FIELD),
                MenuItem::new("a010_roster", "clipboard-list", FIELD),
                MenuItem::new("a011_attendance_report", "check-square", FIELD),
            ],
        },
        MenuGroup {
            id: "reports",
            label: "Reports",
            icon: "bar-chart",
            items: vec![
                MenuItem::new("d401_attendance_report", "file-text", FIELD),
                MenuItem::new("d402_monthly_report", "bar-chart", FIELD),
            ],
        },
        MenuGroup {
            id: "settings",
            label: "Settings",
            icon: "settings",
            items: vec![MenuItem::new("sys_users", "users", ADMIN)],
        },
    ]
}

/// Groups with only the items `role` may open; empty groups are dropped.
pub fn visible_groups(role: UserRole) -> Vec<MenuGroup> {
    menu_groups()
        .into_iter()
        .filter_map(|mut group| {
            group.items.retain(|item| item.allows(role));
            (!group.items.is_empty()).then_some(group)
        })
        .collect()
}

/// Whether a tab key is reachable for `role`. Unknown keys are refused.
pub fn can_open(key: &str, role: UserRole) -> bool {
    menu_groups()
        .iter()
        .flat_map(|g| g.items.iter())
        .any(|item| item.key == key && item.allows(role))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_keys(role: UserRole) -> Vec<&'static str> {
        visible_groups(role)
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|i| i.key))
            .collect()
    }

    #[test]
    fn test_admin_sees_everything() {
        let all: Vec<_> = menu_groups()
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|i| i.key))
            .collect();
        assert_eq!(visible_keys(UserRole::Admin), all);
        assert!(all.contains(&"sys_users"));
    }

    #[test]
    fn test_staff_sees_everything_but_users() {
        let keys = visible_keys(UserRole::Staff);
        assert!(!keys.contains(&"sys_users"));
        assert!(keys.contains(&"a001_branch"));
        assert!(keys.contains(&"d402_monthly_report"));
        assert_eq!(keys.len(), visible_keys(UserRole::Admin).len() - 1);
        assert!(visible_groups(UserRole::Staff).iter().all(|g| g.id != "settings"));
    }

    #[test]
    fn test_coach_menu() {
        assert_eq!(
            visible_keys(UserRole::Coach),
            vec![
                "d400_overview",
                "a009_schedule",
                "a010_roster",
                "a011_attendance_report",
                "d401_attendance_report",
                "d402_monthly_report",
            ]
        );
    }

    #[test]
    fn test_unknown_role_sees_only_dashboard() {
        assert_eq!(visible_keys(UserRole::Unknown), vec!["d400_overview"]);
        assert!(!can_open("a010_roster", UserRole::Unknown));
    }

    #[test]
    fn test_can_open() {
        assert!(can_open("sys_users", UserRole::Admin));
        assert!(!can_open("sys_users", UserRole::Staff));
        assert!(can_open("a011_attendance_report", UserRole::Coach));
        assert!(!can_open("a001_branch", UserRole::Coach));
        assert!(!can_open("no_such_page", UserRole::Admin));
    }

    #[test]
    fn test_labels_come_from_tab_labels() {
        let groups = menu_groups();
        let branch = groups
            .iter()
            .flat_map(|g| g.items.iter())
            .find(|i| i.key == "a001_branch")
            .unwrap();
        assert_eq!(branch.label, "Branches");
    }
}
