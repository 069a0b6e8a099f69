use super::model::{CENTER_ID, Person, Project, Relationship};

pub fn sample_project() -> Project {
    let person = |id: &str, name: &str, relation: Option<&str>, mentions: Option<u32>| Person {
        id: id.to_string(),
        name: name.to_string(),
        relationship_to_user: relation.map(str::to_string),
        importance_score: mentions,
        avatar_url: None,
    };

    let tie = |id: &str, a: &str, b: &str, kind: &str, label: Option<&str>, mutual: bool| {
        Relationship {
            id: id.to_string(),
            person_a_id: a.to_string(),
            person_b_id: b.to_string(),
            relationship_type: kind.to_string(),
            custom_label: label.map(str::to_string),
            bidirectional: mutual,
        }
    };

    Project {
        subject: "June Hartley".to_string(),
        people: vec![
            person("miriam", "Miriam Hartley", Some("mother"), Some(31)),
            person("theo", "Theo Hartley", Some("father"), Some(24)),
            person("carla", "Carla Mendes", Some("oldest friend"), Some(17)),
            person("sam", "Sam Okafor", Some("husband"), Some(42)),
            person("nadia", "Nadia Okafor", Some("daughter"), Some(28)),
            person("gus", "Gus Leray", Some("mentor"), Some(9)),
            person("imani", "Imani Cole", None, Some(5)),
            Person {
                id: "petra".to_string(),
                name: "Petra Voss".to_string(),
                relationship_to_user: Some("neighbor".to_string()),
                importance_score: None,
                avatar_url: Some("https://example.org/avatars/petra.png".to_string()),
            },
        ],
        relationships: vec![
            tie("rel-1", "miriam", "theo", "married", None, true),
            tie("rel-2", CENTER_ID, "sam", "married", Some("met in 1998"), true),
            tie("rel-3", "sam", "nadia", "parent", None, false),
            tie("rel-4", CENTER_ID, "nadia", "parent", None, false),
            tie("rel-5", "carla", "imani", "cousins", None, true),
        ],
    }
}
