use serde::{Deserialize, Serialize};

pub const CENTER_ID: &str = "center";

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub relationship_to_user: Option<String>,
    #[serde(default)]
    pub importance_score: Option<u32>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Relationship {
    pub id: String,
    pub person_a_id: String,
    pub person_b_id: String,
    pub relationship_type: String,
    #[serde(default)]
    pub custom_label: Option<String>,
    #[serde(default)]
    pub bidirectional: bool,
}

impl Relationship {
    pub fn touches(&self, person_id: &str) -> bool {
        self.person_a_id == person_id || self.person_b_id == person_id
    }

    pub fn other_end(&self, person_id: &str) -> Option<&str> {
        if self.person_a_id == person_id {
            Some(self.person_b_id.as_str())
        } else if self.person_b_id == person_id {
            Some(self.person_a_id.as_str())
        } else {
            None
        }
    }

    pub fn label(&self) -> &str {
        self.custom_label
            .as_deref()
            .filter(|label| !label.trim().is_empty())
            .unwrap_or(&self.relationship_type)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Project {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl Project {
    pub fn person(&self, person_id: &str) -> Option<&Person> {
        self.people.iter().find(|person| person.id == person_id)
    }

    pub fn center_person(&self) -> Person {
        let name = if self.subject.trim().is_empty() {
            "Self".to_string()
        } else {
            self.subject.clone()
        };

        Person {
            id: CENTER_ID.to_string(),
            name,
            relationship_to_user: None,
            importance_score: None,
            avatar_url: None,
        }
    }

    pub fn display_name(&self, person_id: &str) -> String {
        if person_id == CENTER_ID {
            return self.center_person().name;
        }
        self.person(person_id)
            .map(|person| person.name.clone())
            .unwrap_or_else(|| person_id.to_string())
    }

    pub fn relationships_touching(&self, person_id: &str) -> Vec<&Relationship> {
        self.relationships
            .iter()
            .filter(|relationship| relationship.touches(person_id))
            .collect()
    }

    pub fn add_relationship(
        &mut self,
        person_a_id: &str,
        person_b_id: &str,
        relationship_type: &str,
        bidirectional: bool,
    ) {
        let id = self.next_relationship_id();
        self.relationships.push(Relationship {
            id,
            person_a_id: person_a_id.to_string(),
            person_b_id: person_b_id.to_string(),
            relationship_type: relationship_type.to_string(),
            custom_label: None,
            bidirectional,
        });
    }

    fn next_relationship_id(&self) -> String {
        let mut counter = self.relationships.len() + 1;
        loop {
            let candidate = format!("rel-{counter}");
            if !self
                .relationships
                .iter()
                .any(|relationship| relationship.id == candidate)
            {
                return candidate;
            }
            counter += 1;
        }
    }
}
