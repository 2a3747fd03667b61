use eframe::egui::{self, Color32, Context};
use tracing::warn;

use crate::catalog::{ProgramEvent, ReceivingUnit, load_builtin};
use crate::radius::RadiusFilter;
use crate::survey::SurveyDialog;

mod ui;

use ui::ListingCard;

const ROSE_ACCENT: Color32 = Color32::from_rgb(176, 69, 112);
const BLUE_ACCENT: Color32 = Color32::from_rgb(80, 140, 203);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Screen {
    #[default]
    Home,
    Volunteering,
    Workshops,
    DropOff,
}

impl Screen {
    pub const ALL: [Self; 4] = [
        Self::Home,
        Self::Volunteering,
        Self::Workshops,
        Self::DropOff,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Inicio",
            Self::Volunteering => "Voluntariados",
            Self::Workshops => "Talleres",
            Self::DropOff => "Unidades receptoras",
        }
    }
}

pub struct ConexionApp {
    state: AppState,
}

enum AppState {
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    current: Screen,
    survey: SurveyDialog,
    volunteering: ListingScreen<ProgramEvent>,
    workshops: ListingScreen<ProgramEvent>,
    drop_off: ListingScreen<ReceivingUnit>,
}

struct ListingScreen<T> {
    title: &'static str,
    accent: Color32,
    filter: RadiusFilter<T>,
    selected: Option<String>,
}

impl<T: ListingCard> ListingScreen<T> {
    fn new(title: &'static str, accent: Color32, filter: RadiusFilter<T>) -> Self {
        Self {
            title,
            accent,
            filter,
            selected: None,
        }
    }

    fn selected_item(&self) -> Option<&T> {
        let id = self.selected.as_deref()?;
        self.filter.catalog().get(id)
    }
}

impl ConexionApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, initial: Screen) -> Self {
        Self {
            state: Self::start(initial),
        }
    }

    fn start(initial: Screen) -> AppState {
        match load_builtin() {
            Ok(catalogs) => AppState::Ready(Box::new(ViewModel {
                current: initial,
                survey: SurveyDialog::default(),
                volunteering: ListingScreen::new(
                    Screen::Volunteering.label(),
                    ROSE_ACCENT,
                    RadiusFilter::new("volunteering", catalogs.volunteering),
                ),
                workshops: ListingScreen::new(
                    Screen::Workshops.label(),
                    BLUE_ACCENT,
                    RadiusFilter::new("workshops", catalogs.workshops),
                ),
                drop_off: ListingScreen::new(
                    Screen::DropOff.label(),
                    ROSE_ACCENT,
                    RadiusFilter::new("drop-off", catalogs.drop_off),
                ),
            })),
            Err(error) => {
                warn!("failed to load catalogs: {error:#}");
                AppState::Error(format!("{error:#}"))
            }
        }
    }
}

impl eframe::App for ConexionApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        match &mut self.state {
            AppState::Ready(model) => model.show(ctx),
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("No se pudieron cargar los programas");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                });
            }
        }
    }
}
