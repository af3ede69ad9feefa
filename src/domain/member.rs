use serde::{Deserialize, Serialize};

/// Display name returned when no member matches.
pub const UNASSIGNED: &str = "Unassigned";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Member {
    pub fn new(id: &str, name: &str, role: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            email: None,
        }
    }
}

/// Read-only roster of the people questionnaires can be assigned to.
#[derive(Debug, Clone)]
pub struct MemberDirectory {
    members: Vec<Member>,
}

impl MemberDirectory {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.id.as_str())
    }

    pub fn member_details(&self, id: Option<&str>) -> Option<&Member> {
        let id = id?;
        self.members.iter().find(|m| m.id == id)
    }

    pub fn member_name(&self, id: Option<&str>) -> String {
        self.member_details(id)
            .map(|m| m.name.clone())
            .unwrap_or_else(|| UNASSIGNED.to_string())
    }
}

impl Default for MemberDirectory {
    fn default() -> Self {
        Self::new(default_members())
    }
}

pub fn default_members() -> Vec<Member> {
    vec![
        Member::new("john", "John Smith", "Security Analyst"),
        Member::new("emma", "Emma Wilson", "Compliance Officer"),
        Member::new("michael", "Michael Brown", "Legal Counsel"),
    ]
}
