use eframe::egui::{self, Align, Layout, Ui};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::super::ViewModel;

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase()))
}

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Web Controls");
        ui.separator();
        ui.add_space(4.0);

        ui.checkbox(&mut self.web.running, "Run layout simulation")
            .on_hover_text("Continuously settle the web with spring and repulsion forces.");

        if ui.button("Reset layout").clicked() {
            self.web_dirty = true;
        }

        ui.separator();

        ui.checkbox(&mut self.web.connect_enabled, "Connect on Ctrl+click")
            .on_hover_text("Ctrl+click two nodes to record a new tie between them.");

        ui.label("New tie type");
        ui.text_edit_singleline(&mut self.connect_kind)
            .on_hover_text("Relationship type written onto the next recorded tie.");
        ui.checkbox(&mut self.connect_mutual, "Mutual")
            .on_hover_text("Record the next tie as going both ways.");

        if !self.web.connect_buffer.is_empty() {
            let names = self
                .web
                .connect_buffer
                .iter()
                .map(|id| self.project.display_name(id))
                .collect::<Vec<_>>()
                .join(", ");
            ui.small(format!("Connecting: {names}"));
        }

        ui.separator();

        ui.label("Search people")
            .on_hover_text("Fuzzy-filter the roster by name.");
        ui.text_edit_singleline(&mut self.search);

        ui.add_space(6.0);
        self.draw_roster(ui);
    }

    fn roster_entries(&self) -> Vec<(usize, i64)> {
        let query = self.search.trim();
        if query.is_empty() {
            return (0..self.project.people.len())
                .map(|index| (index, 0))
                .collect();
        }

        let matcher = SkimMatcherV2::default();
        let mut entries = self
            .project
            .people
            .iter()
            .enumerate()
            .filter_map(|(index, person)| {
                fuzzy_match_score(&matcher, &person.name, query).map(|score| (index, score))
            })
            .collect::<Vec<_>>();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    fn draw_roster(&mut self, ui: &mut Ui) {
        let entries = self.roster_entries();
        let entries_len = entries.len();
        let row_count = entries_len.min(self.roster_rows_visible);
        let mut should_load_more = false;
        let mut selected_id = None;

        egui::ScrollArea::vertical()
            .id_salt("roster_scroll")
            .max_height(260.0)
            .auto_shrink([false, false])
            .show_rows(ui, 22.0, row_count, |ui, row_range| {
                if row_range.end + Self::ROSTER_PREFETCH_MARGIN >= row_count {
                    should_load_more = true;
                }

                for index in row_range {
                    let Some(&(person_index, _)) = entries.get(index) else {
                        continue;
                    };
                    let Some(person) = self.project.people.get(person_index) else {
                        continue;
                    };

                    let is_selected = self.selected.as_deref() == Some(person.id.as_str());

                    let row_response = ui
                        .horizontal(|ui| {
                            let clicked = ui
                                .selectable_label(is_selected, person.name.as_str())
                                .clicked();
                            if let Some(score) = person.importance_score {
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    ui.label(format!("{score} mentions"));
                                });
                            }
                            clicked
                        })
                        .inner;

                    if row_response {
                        selected_id = Some(person.id.clone());
                    }
                }
            });

        if let Some(id) = selected_id {
            self.set_selected(Some(id));
        }

        if should_load_more && row_count < entries_len {
            self.roster_rows_visible = (row_count + Self::ROSTER_PAGE_ROWS).min(entries_len);
        }
    }
}
