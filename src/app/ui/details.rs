use eframe::egui::{self, RichText, Ui};

use crate::catalog::{PROGRAM_DISCLAIMER, ProgramEvent, ReceivingUnit};
use crate::radius::Located;
use crate::util::format_distance_km;

use super::super::ListingScreen;

pub(in crate::app) trait ListingCard: Located {
    fn heading(&self) -> &str;

    fn verified(&self) -> bool {
        false
    }

    fn draw_card_meta(&self, ui: &mut Ui);

    fn draw_details_body(&self, ui: &mut Ui);
}

impl ListingCard for ProgramEvent {
    fn heading(&self) -> &str {
        &self.title
    }

    fn verified(&self) -> bool {
        self.verified
    }

    fn draw_card_meta(&self, ui: &mut Ui) {
        ui.label(self.organization.as_str());
        ui.horizontal(|ui| {
            ui.label(format!("Fecha: {}", self.date));
            ui.separator();
            ui.label(format_distance_km(self.distance_km));
        });
    }

    fn draw_details_body(&self, ui: &mut Ui) {
        ui.label(format!("Organiza: {}", self.organization));
        ui.label(format!("Fecha: {}", self.date));
        ui.label(format!("Distancia: {}", format_distance_km(self.distance_km)));
        ui.add_space(6.0);

        ui.label(self.summary.as_str());
        ui.add_space(6.0);
        ui.label(self.meetup_point.as_str());
        ui.label(self.contact.as_str());

        if self.show_disclaimer {
            ui.separator();
            ui.small(PROGRAM_DISCLAIMER);
        }
    }
}

impl ListingCard for ReceivingUnit {
    fn heading(&self) -> &str {
        &self.name
    }

    fn draw_card_meta(&self, ui: &mut Ui) {
        ui.label(self.address.as_str());
        ui.horizontal(|ui| {
            ui.label(format_distance_km(self.distance_km));
            ui.separator();
            ui.label(self.contact.as_str());
        });
    }

    fn draw_details_body(&self, ui: &mut Ui) {
        ui.label(format!("Dirección: {}", self.address));
        ui.label(format!("Distancia: {}", format_distance_km(self.distance_km)));
        ui.label(format!("Contacto: {}", self.contact));
        ui.add_space(6.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(self.notes.as_str());
        });

        ui.separator();
        ui.label(RichText::new("Programas").strong());
        if self.programs.is_empty() {
            ui.label("Esta unidad no tiene programas registrados.");
        }
        for program in &self.programs {
            ui.add_space(4.0);
            ui.label(RichText::new(program.title.as_str()).strong());
            ui.label(program.coordinator.as_str());
            ui.small(program.schedule.as_str());
        }
    }
}

impl<T: ListingCard> ListingScreen<T> {
    pub(in crate::app) fn draw_details(&self, ui: &mut Ui) -> bool {
        ui.heading("Detalles");
        ui.add_space(6.0);

        if self.selected.is_none() {
            ui.label("Selecciona un programa para ver sus detalles.");
            return false;
        }

        let mut close = false;
        match self.selected_item() {
            Some(item) => {
                ui.label(RichText::new(item.heading()).strong().size(16.0));
                if item.verified() {
                    ui.small("Organización verificada");
                }
                ui.add_space(6.0);

                egui::ScrollArea::vertical()
                    .id_salt("details_scroll")
                    .auto_shrink([false, true])
                    .show(ui, |ui| item.draw_details_body(ui));

                ui.add_space(8.0);
                close = ui.button("Cerrar").clicked();
            }
            None => {
                ui.label("El elemento seleccionado ya no existe en el catálogo.");
            }
        }

        close
    }
}
