use std::collections::BTreeMap;

use dashmap::DashMap;
use mergington_core::{Activity, SignupError};

/// In-memory store mapping activity name -> activity metadata. The activity
/// set is fixed after seeding; only participant lists mutate.
#[derive(Debug, Default)]
pub struct ActivityRegistry {
    activities: DashMap<String, Activity>,
}

impl ActivityRegistry {
    pub fn new() -> Self {
        Self {
            activities: DashMap::new(),
        }
    }

    pub fn insert(&self, name: impl Into<String>, activity: Activity) {
        self.activities.insert(name.into(), activity);
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.get(name).map(|entry| entry.value().clone())
    }

    /// Snapshot of the whole registry, ordered by name so responses are
    /// deterministic.
    pub fn list(&self) -> BTreeMap<String, Activity> {
        self.activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Append `email` to the activity's participant list.
    pub fn signup(&self, name: &str, email: &str) -> Result<(), SignupError> {
        let mut entry = self
            .activities
            .get_mut(name)
            .ok_or_else(|| SignupError::UnknownActivity(name.to_string()))?;

        if entry.is_signed_up(email) {
            return Err(SignupError::AlreadySignedUp {
                email: email.to_string(),
                activity: name.to_string(),
            });
        }

        entry.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the activity's participant list, keeping the
    /// order of the remaining participants.
    pub fn unregister(&self, name: &str, email: &str) -> Result<(), SignupError> {
        let mut entry = self
            .activities
            .get_mut(name)
            .ok_or_else(|| SignupError::UnknownActivity(name.to_string()))?;

        let Some(position) = entry.participants.iter().position(|p| p == email) else {
            return Err(SignupError::NotSignedUp {
                email: email.to_string(),
                activity: name.to_string(),
            });
        };

        entry.participants.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_registry() -> ActivityRegistry {
        let registry = ActivityRegistry::new();
        registry.insert(
            "Chess Club",
            Activity::new("Learn chess", "Fridays, 3:30 PM", 12)
                .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        );
        registry.insert(
            "Art Club",
            Activity::new("Painting and drawing", "Thursdays, 3:30 PM", 15),
        );
        registry
    }

    #[test]
    fn test_signup_appends_in_order() {
        let registry = test_registry();

        registry
            .signup("Chess Club", "newstudent@mergington.edu")
            .expect("Signup should succeed");

        let activity = registry.get("Chess Club").unwrap();
        assert_eq!(
            activity.participants,
            vec![
                "michael@mergington.edu",
                "daniel@mergington.edu",
                "newstudent@mergington.edu"
            ],
            "New participant should be appended at the end"
        );
    }

    #[test]
    fn test_duplicate_signup_rejected_and_list_unchanged() {
        let registry = test_registry();
        let before = registry.get("Chess Club").unwrap();

        let err = registry
            .signup("Chess Club", "michael@mergington.edu")
            .unwrap_err();

        assert_eq!(
            err,
            SignupError::AlreadySignedUp {
                email: "michael@mergington.edu".to_string(),
                activity: "Chess Club".to_string(),
            }
        );
        assert_eq!(registry.get("Chess Club").unwrap(), before);
    }

    #[test]
    fn test_signup_unknown_activity() {
        let registry = test_registry();
        let snapshot = registry.list();

        let err = registry
            .signup("Quidditch", "harry@mergington.edu")
            .unwrap_err();

        assert_eq!(err, SignupError::UnknownActivity("Quidditch".to_string()));
        assert_eq!(registry.list(), snapshot, "Failed signup should not mutate");
    }

    #[test]
    fn test_unregister_preserves_order_of_rest() {
        let registry = test_registry();

        registry
            .unregister("Chess Club", "michael@mergington.edu")
            .expect("Unregister should succeed");

        let activity = registry.get("Chess Club").unwrap();
        assert_eq!(activity.participants, vec!["daniel@mergington.edu"]);

        // A second removal of the same email is an error
        let err = registry
            .unregister("Chess Club", "michael@mergington.edu")
            .unwrap_err();
        assert!(matches!(err, SignupError::NotSignedUp { .. }));
    }

    #[test]
    fn test_unregister_unknown_activity() {
        let registry = test_registry();

        let err = registry
            .unregister("Quidditch", "harry@mergington.edu")
            .unwrap_err();

        assert_eq!(err, SignupError::UnknownActivity("Quidditch".to_string()));
    }

    #[test]
    fn test_list_contains_every_activity() {
        let registry = test_registry();
        let listing = registry.list();

        assert_eq!(listing.len(), 2);
        assert!(listing.contains_key("Chess Club"));
        assert!(listing.contains_key("Art Club"));
    }
}
