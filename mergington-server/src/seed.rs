use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use mergington_core::Activity;

use crate::errors::ServerError;
use crate::registry::ActivityRegistry;

/// The built-in activity roster, matching the school's published schedule.
pub fn default_registry() -> ActivityRegistry {
    let registry = ActivityRegistry::new();

    registry.insert(
        "Chess Club",
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
    );
    registry.insert(
        "Programming Class",
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
    );
    registry.insert(
        "Gym Class",
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
    );
    registry.insert(
        "Soccer Team",
        Activity::new(
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
        )
        .with_participants(["liam@mergington.edu", "noah@mergington.edu"]),
    );
    registry.insert(
        "Basketball Team",
        Activity::new(
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(["ava@mergington.edu", "mia@mergington.edu"]),
    );
    registry.insert(
        "Art Club",
        Activity::new(
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(["amelia@mergington.edu", "harper@mergington.edu"]),
    );
    registry.insert(
        "Drama Club",
        Activity::new(
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
        )
        .with_participants(["ella@mergington.edu", "scarlett@mergington.edu"]),
    );
    registry.insert(
        "Math Club",
        Activity::new(
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
        )
        .with_participants(["james@mergington.edu", "benjamin@mergington.edu"]),
    );
    registry.insert(
        "Debate Team",
        Activity::new(
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
        )
        .with_participants(["charlotte@mergington.edu", "henry@mergington.edu"]),
    );

    registry
}

/// Load a roster from a JSON file shaped like the `GET /activities` response:
/// an object keyed by activity name.
pub fn load_roster(path: impl AsRef<Path>) -> Result<ActivityRegistry, ServerError> {
    let raw = fs::read_to_string(path)?;
    let activities: BTreeMap<String, Activity> = serde_json::from_str(&raw)?;

    let registry = ActivityRegistry::new();
    for (name, activity) in activities {
        registry.insert(name, activity);
    }
    Ok(registry)
}
