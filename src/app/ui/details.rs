use eframe::egui::{RichText, Ui};

use crate::util::count_label;

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.heading("Person Details");
        ui.add_space(6.0);

        let Some(selected_id) = self.selected.clone() else {
            ui.label("Click a node in the web or a roster entry.");
            return;
        };

        let Some(person) = self.project.person(&selected_id) else {
            ui.label("The selected person is no longer part of this project.");
            ui.add_space(6.0);
            if ui.button("Clear selection").clicked() {
                self.set_selected(None);
            }
            return;
        };

        let name = person.name.clone();
        let relation = person
            .relationship_to_user
            .as_deref()
            .map(str::trim)
            .filter(|relation| !relation.is_empty())
            .unwrap_or("unknown")
            .to_string();
        let mentions = person.importance_score.unwrap_or(0);
        let avatar_url = person.avatar_url.clone();
        let ties = self.tie_rows(&selected_id);

        ui.label(RichText::new(name).strong());
        ui.small(selected_id.as_str());
        ui.add_space(6.0);

        ui.label(format!("Relation to subject: {relation}"));
        if mentions > 0 {
            ui.label(format!(
                "Mentioned {} across the memoir",
                count_label(mentions as usize, "time", "times")
            ));
        }
        if let Some(url) = &avatar_url {
            ui.hyperlink_to("Avatar", url);
        }

        ui.separator();
        ui.label(RichText::new("Ties").strong());
        if ties.is_empty() {
            ui.label("No recorded ties. Ctrl+click two nodes to add one.");
        } else {
            for (label, other, direction) in &ties {
                ui.label(format!("{label} with {other} ({direction})"));
            }
        }

        ui.add_space(8.0);
        if ui.button("Clear selection").clicked() {
            self.set_selected(None);
        }
    }

    fn tie_rows(&self, person_id: &str) -> Vec<(String, String, &'static str)> {
        self.project
            .relationships_touching(person_id)
            .into_iter()
            .filter_map(|relationship| {
                let other = self
                    .project
                    .display_name(relationship.other_end(person_id)?);
                let direction = if relationship.bidirectional {
                    "mutual"
                } else {
                    "one-way"
                };
                Some((relationship.label().to_string(), other, direction))
            })
            .collect()
    }
}
