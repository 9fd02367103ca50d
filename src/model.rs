//! Data Model
//!
//! Wire-shaped records from the GraphQL layer plus the client-side merge of
//! the two independently fetched entity relations (membership and
//! administration).

use serde::{Deserialize, Serialize};

/// Current user, as returned by the sign-in mutation and mirrored verbatim
/// into durable storage. No client-side validation or normalization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    #[serde(rename = "globalEntities", default)]
    pub global_entities: Vec<EntityRef>,
}

/// Entity as seen through the membership relation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: String,
    pub name: String,
}

/// Entity as seen through the administration relation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlobalEntity {
    pub id: String,
    pub name: String,
    #[serde(rename = "administeredByUsers", default)]
    pub administered_by_users: Vec<UserRef>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub email: String,
}

/// One dashboard row per entity, with the user's roles resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityListing {
    pub id: String,
    pub name: String,
    pub is_member: bool,
    pub is_admin: bool,
}

/// The membership action a listing offers. A listing never offers both
/// membership actions at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MembershipAction {
    /// Member of the entity.
    EditMembership,
    /// Administers the entity without being a member.
    ApplyForMembership,
    /// No relationship yet.
    Join,
}

impl EntityListing {
    pub fn membership_action(&self) -> MembershipAction {
        if self.is_member {
            MembershipAction::EditMembership
        } else if self.is_admin {
            MembershipAction::ApplyForMembership
        } else {
            MembershipAction::Join
        }
    }
}

/// Merge the administration and membership lists into one listing per entity
/// id. The relations are fetched independently and may overlap; duplicates
/// collapse to a single row, with the later occurrence winning on non-key
/// fields.
pub fn merge_entities(admin: &[GlobalEntity], member: &[EntityRef]) -> Vec<EntityListing> {
    let mut listings: Vec<EntityListing> = Vec::new();

    for entity in admin {
        listings.push(EntityListing {
            id: entity.id.clone(),
            name: entity.name.clone(),
            is_member: false,
            is_admin: true,
        });
    }

    for entity in member {
        if let Some(existing) = listings.iter_mut().find(|l| l.id == entity.id) {
            existing.name = entity.name.clone();
            existing.is_member = true;
        } else {
            listings.push(EntityListing {
                id: entity.id.clone(),
                name: entity.name.clone(),
                is_member: true,
                is_admin: false,
            });
        }
    }

    listings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_entity(id: &str, name: &str) -> GlobalEntity {
        GlobalEntity {
            id: id.to_string(),
            name: name.to_string(),
            administered_by_users: vec![],
        }
    }

    fn member_entity(id: &str, name: &str) -> EntityRef {
        EntityRef {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_merge_dedupes_by_id() {
        let admin = vec![admin_entity("e-1", "Acme"), admin_entity("e-2", "Forge Co")];
        let member = vec![member_entity("e-1", "Acme"), member_entity("e-3", "Kiln Lab")];

        let merged = merge_entities(&admin, &member);
        assert_eq!(merged.len(), 3);

        let mut ids: Vec<&str> = merged.iter().map(|l| l.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_merge_last_write_wins_on_name() {
        // The two relations never disagree in practice, but if they do the
        // membership copy is the later write.
        let admin = vec![admin_entity("e-1", "Old Name")];
        let member = vec![member_entity("e-1", "New Name")];

        let merged = merge_entities(&admin, &member);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "New Name");
        assert!(merged[0].is_admin);
        assert!(merged[0].is_member);
    }

    #[test]
    fn test_admin_non_member_applies_for_membership() {
        let merged = merge_entities(&[admin_entity("e-1", "Acme")], &[]);
        assert_eq!(merged[0].membership_action(), MembershipAction::ApplyForMembership);
    }

    #[test]
    fn test_member_edits_membership_even_when_admin() {
        let merged = merge_entities(
            &[admin_entity("e-1", "Acme")],
            &[member_entity("e-1", "Acme")],
        );
        assert_eq!(merged[0].membership_action(), MembershipAction::EditMembership);
    }

    #[test]
    fn test_stranger_entity_offers_plain_join() {
        let merged = merge_entities(&[], &[]);
        assert!(merged.is_empty());

        let listing = EntityListing {
            id: "e-9".to_string(),
            name: "Elsewhere".to_string(),
            is_member: false,
            is_admin: false,
        };
        assert_eq!(listing.membership_action(), MembershipAction::Join);
    }
}
