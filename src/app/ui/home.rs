use eframe::egui::{self, Context, RichText, Ui};

use crate::survey::{Channel, InterestArea, Schedule};

use super::super::{Screen, ViewModel};

impl ViewModel {
    pub(in crate::app) fn draw_home(&mut self, ctx: &Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.heading("Bienvenido a Conexión Social");
                ui.label("Encuentra voluntariados, talleres y unidades receptoras cerca de ti.");
                ui.add_space(16.0);

                ui.horizontal_wrapped(|ui| {
                    for screen in [Screen::Volunteering, Screen::Workshops, Screen::DropOff] {
                        if ui
                            .button(RichText::new(screen.label()).size(16.0))
                            .on_hover_text(format!("Ir a la sección {}", screen.label()))
                            .clicked()
                        {
                            self.current = screen;
                        }
                    }
                });

                ui.add_space(24.0);
                ui.separator();
                ui.label(RichText::new("¿Qué tipo de proyectos te interesan?").strong());
                ui.label("Responde unas preguntas rápidas para personalizar tus recomendaciones.");
                if ui.button("Responder preguntas").clicked() {
                    self.survey.open();
                }
            });
        });

        self.draw_survey_window(ctx);
    }

    fn draw_survey_window(&mut self, ctx: &Context) {
        if !self.survey.is_open() {
            return;
        }

        let mut window_open = true;
        let mut finished = false;
        let mut cleared = false;

        egui::Window::new("Cuéntanos de tus intereses")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut window_open)
            .show(ctx, |ui| {
                self.draw_survey_questions(ui);

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    cleared = ui.button("Limpiar").clicked();
                    finished = ui.button("Listo").clicked();
                });
            });

        if cleared {
            self.survey.clear();
        }
        if finished {
            self.survey.close(true);
        } else if !window_open {
            self.survey.close(false);
        }
    }

    fn draw_survey_questions(&mut self, ui: &mut Ui) {
        let survey = &mut self.survey.survey;

        ui.label(RichText::new("¿En qué áreas te gustaría participar?").strong());
        ui.horizontal_wrapped(|ui| {
            for area in InterestArea::ALL {
                if ui
                    .selectable_label(survey.is_selected(area), area.label())
                    .clicked()
                {
                    survey.toggle_area(area);
                }
            }
        });

        ui.add_space(6.0);
        ui.label(RichText::new("¿Qué horarios se adaptan mejor a ti?").strong());
        for schedule in Schedule::ALL {
            if ui
                .radio(survey.schedule == Some(schedule), schedule.label())
                .clicked()
            {
                survey.choose_schedule(schedule);
            }
        }

        ui.add_space(6.0);
        ui.label(RichText::new("¿Cómo prefieres recibir novedades?").strong());
        for channel in Channel::ALL {
            if ui
                .radio(survey.channel == Some(channel), channel.label())
                .clicked()
            {
                survey.choose_channel(channel);
            }
        }

        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(RichText::new("Tu selección hasta ahora").strong());
            ui.label(format!("Áreas favoritas: {}", survey.areas_summary()));
            ui.label(format!("Horario ideal: {}", survey.schedule_summary()));
            ui.label(format!("Canal de contacto: {}", survey.channel_summary()));
            ui.small("Puedes ajustar tus respuestas cuando quieras.");
        });
    }
}
