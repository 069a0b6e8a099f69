use eframe::egui::{self, Align, Context, Layout};

use crate::people::{Project, save_project};
use crate::util::count_label;

use super::super::{ProjectSource, RelationshipWeb, ViewModel};

impl ViewModel {
    pub(in crate::app) const INITIAL_ROSTER_ROWS: usize = 24;
    pub(in crate::app) const ROSTER_PAGE_ROWS: usize = 24;
    pub(in crate::app) const ROSTER_PREFETCH_MARGIN: usize = 4;

    pub(in crate::app) fn new(project: Project) -> Self {
        let web = RelationshipWeb::new(&project);

        Self {
            project,
            web,
            web_dirty: false,
            selected: None,
            search: String::new(),
            connect_kind: "connection".to_string(),
            connect_mutual: true,
            status: None,
            unsaved_changes: false,
            roster_rows_visible: Self::INITIAL_ROSTER_ROWS,
        }
    }

    pub(in crate::app) fn rebuild_web(&mut self) {
        self.web.rebuild(&self.project);
        self.web_dirty = false;
    }

    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        source: &ProjectSource,
        reload_requested: &mut bool,
        is_loading: bool,
    ) {
        if self.web_dirty {
            self.rebuild_web();
        }

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("kinweb");
                    ui.separator();
                    ui.label(format!("subject: {}", self.project.center_person().name));
                    ui.label(format!("project: {}", source.label()));
                    ui.label(count_label(self.project.people.len(), "person", "people"));
                    ui.label(count_label(self.project.relationships.len(), "tie", "ties"));
                    let reload_button =
                        ui.add_enabled(!is_loading, egui::Button::new("Reload project"));
                    if reload_button.clicked() {
                        *reload_requested = true;
                    }
                    if let ProjectSource::File(path) = source {
                        let save_button =
                            ui.add_enabled(self.unsaved_changes, egui::Button::new("Save"));
                        if save_button.clicked() {
                            match save_project(path, &self.project) {
                                Ok(()) => {
                                    self.status = Some(format!("Saved {}", path.display()));
                                    self.unsaved_changes = false;
                                }
                                Err(error) => {
                                    log::warn!("saving project failed: {error:#}");
                                    self.status = Some(format!("Save failed: {error:#}"));
                                }
                            }
                        }
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if self.unsaved_changes {
                            ui.label("unsaved changes");
                        }
                        if let Some(status) = &self.status {
                            ui.label(status.as_str());
                        }
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| self.draw_details(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            if is_loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.heading("Reloading project...");
                    ui.add_space(8.0);
                    ui.spinner();
                });
            } else {
                self.draw_web_canvas(ui);
            }
        });
    }

    pub(in crate::app) fn set_selected(&mut self, selected: Option<String>) {
        self.selected = selected;
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::ViewModel;
    use crate::people::sample_project;

    fn sample_model() -> ViewModel {
        ViewModel::new(sample_project())
    }

    #[test]
    fn new_model_starts_clean() {
        let model = sample_model();

        assert!(model.selected.is_none());
        assert!(!model.unsaved_changes);
        assert!(!model.web_dirty);
        assert_eq!(model.connect_kind, "connection");
        assert!(model.connect_mutual);
        assert_eq!(model.web.nodes.len(), model.project.people.len() + 1);
    }

    #[test]
    fn set_selected_overwrites_the_previous_choice() {
        let mut model = sample_model();

        model.set_selected(Some("miriam".to_string()));
        assert_eq!(model.selected.as_deref(), Some("miriam"));

        model.set_selected(Some("sam".to_string()));
        assert_eq!(model.selected.as_deref(), Some("sam"));

        model.set_selected(None);
        assert!(model.selected.is_none());
    }

    #[test]
    fn rebuild_clears_the_dirty_flag_and_tracks_the_project() {
        let mut model = sample_model();
        model.project.people.retain(|person| person.id != "petra");
        model.web_dirty = true;

        model.rebuild_web();

        assert!(!model.web_dirty);
        assert_eq!(model.web.nodes.len(), model.project.people.len() + 1);
        assert!(!model.web.index_by_id.contains_key("petra"));
    }
}
