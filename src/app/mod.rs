use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context, Pos2, Vec2};

use crate::people::{Person, Project, load_project, sample_project};

mod geometry;
mod physics;
mod render_utils;
mod ui;
mod web;

pub struct KinwebApp {
    source: ProjectSource,
    state: AppState,
    reload_rx: Option<Receiver<Result<Project, String>>>,
}

#[derive(Clone, Debug)]
pub enum ProjectSource {
    File(PathBuf),
    Sample,
}

impl ProjectSource {
    fn label(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Sample => "built-in sample".to_string(),
        }
    }
}

enum AppState {
    Loading {
        rx: Receiver<Result<Project, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    project: Project,
    web: RelationshipWeb,
    web_dirty: bool,
    selected: Option<String>,
    search: String,
    connect_kind: String,
    connect_mutual: bool,
    status: Option<String>,
    unsaved_changes: bool,
    roster_rows_visible: usize,
}

struct RelationshipWeb {
    nodes: Vec<WebNode>,
    index_by_id: HashMap<String, usize>,
    center_index: usize,
    geometry: WebGeometry,
    running: bool,
    connect_enabled: bool,
    gesture: Gesture,
    connect_buffer: Vec<String>,
    last_pointer: Pos2,
    forces_scratch: Vec<Vec2>,
}

struct WebNode {
    person: Person,
    pos: Pos2,
    velocity: Vec2,
    is_center: bool,
    pinned: bool,
}

#[derive(Clone, Copy)]
enum Gesture {
    Idle,
    Miss,
    Connect,
    Drag { index: usize, press: Pos2, moved: bool },
}

enum WebEvent {
    PersonClicked(Person),
    AddRelationship { first: String, second: String },
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct WebGeometry {
    node_radius: f32,
    center_radius: f32,
    repulsion_distance: f32,
    spread_fraction: f32,
    font_size: f32,
    center_font_size: f32,
}

impl KinwebApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, source: ProjectSource) -> Self {
        let state = Self::start_load(&source);
        Self {
            source,
            state,
            reload_rx: None,
        }
    }

    fn spawn_load(source: &ProjectSource) -> Receiver<Result<Project, String>> {
        let (tx, rx) = mpsc::channel();
        let source = source.clone();

        thread::spawn(move || {
            let result = match source {
                ProjectSource::File(path) => {
                    load_project(&path).map_err(|error| format!("{error:#}"))
                }
                ProjectSource::Sample => Ok(sample_project()),
            };
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(source: &ProjectSource) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(source),
        }
    }
}

impl eframe::App for KinwebApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                if let Ok(result) = rx.try_recv() {
                    transition = Some(match result {
                        Ok(project) => AppState::Ready(Box::new(ViewModel::new(project))),
                        Err(error) => AppState::Error(error),
                    });
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading relationship web...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Failed to load the project");
                        ui.add_space(6.0);
                        ui.label(error.as_str());
                        ui.add_space(10.0);
                        if ui.button("Retry").clicked() {
                            transition = Some(Self::start_load(&self.source));
                        }
                    });
                });
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                let is_reloading = self.reload_rx.is_some();
                model.show(ctx, &self.source, &mut reload_requested, is_reloading);

                if reload_requested && self.reload_rx.is_none() {
                    self.reload_rx = Some(Self::spawn_load(&self.source));
                }

                if let Some(rx) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(result) => {
                            transition = Some(match result {
                                Ok(project) => AppState::Ready(Box::new(ViewModel::new(project))),
                                Err(error) => AppState::Error(error),
                            });
                        }
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some(rx);
                        }
                        Err(TryRecvError::Disconnected) => {
                            transition = Some(AppState::Error(
                                "Background load worker disconnected".to_owned(),
                            ));
                        }
                    }
                }
            }
        }

        if let Some(next_state) = transition {
            self.reload_rx = None;
            self.state = next_state;
        }
    }
}
