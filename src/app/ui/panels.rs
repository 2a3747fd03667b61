use eframe::egui::{self, Align, Context, Layout, RichText};

use super::super::{Screen, ViewModel};

impl ViewModel {
    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Conexión Social").strong());
                    ui.separator();
                    for screen in Screen::ALL {
                        if ui
                            .selectable_label(self.current == screen, screen.label())
                            .clicked()
                        {
                            self.current = screen;
                        }
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(radius_text) = self.radius_text() {
                            ui.label(radius_text);
                        }
                    });
                });
            });

        match self.current {
            Screen::Home => self.draw_home(ctx),
            Screen::Volunteering => self.volunteering.show(ctx),
            Screen::Workshops => self.workshops.show(ctx),
            Screen::DropOff => self.drop_off.show(ctx),
        }
    }

    fn radius_text(&self) -> Option<String> {
        let (radius_km, visible) = match self.current {
            Screen::Home => return None,
            Screen::Volunteering => self.volunteering.result_summary(),
            Screen::Workshops => self.workshops.result_summary(),
            Screen::DropOff => self.drop_off.result_summary(),
        };

        Some(format!("radio: {radius_km} km | resultados: {visible}"))
    }
}
