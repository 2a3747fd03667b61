use eframe::egui::{self, Align, Context, Layout, RichText, Ui};

use crate::util::format_radius;

use super::super::ListingScreen;
use super::details::ListingCard;

#[derive(Clone, Copy)]
enum FilterAction {
    Increment,
    Decrement,
    Dismiss,
    Expand,
}

impl<T: ListingCard> ListingScreen<T> {
    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        let view = self.filter.view();
        let mut action = None;
        let mut selected_id = None;
        let mut close_details = false;

        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| close_details = self.draw_details(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new(self.title).color(self.accent).strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    action = action.or(Self::draw_radius_controls(ui, view.radius_km));
                });
            });
            ui.separator();

            if view.visible_items.is_empty() {
                action = action.or(Self::draw_empty_state(ui, view.radius_km));
            } else {
                selected_id = self.draw_results(ui, &view.visible_items);
            }
        });

        if view.show_prompt {
            action = action.or(self.draw_expand_prompt(ctx, view.radius_km));
        }

        if close_details {
            self.selected = None;
        }
        if selected_id.is_some() {
            self.selected = selected_id;
        }
        if let Some(action) = action {
            self.apply(action);
        }
    }

    pub(in crate::app) fn result_summary(&self) -> (u32, usize) {
        let view = self.filter.view();
        (view.radius_km, view.visible_items.len())
    }

    fn apply(&mut self, action: FilterAction) {
        match action {
            FilterAction::Increment => self.filter.increment(),
            FilterAction::Decrement => self.filter.decrement(),
            FilterAction::Dismiss => self.filter.dismiss(),
            FilterAction::Expand => self.filter.expand(),
        }
    }

    fn draw_radius_controls(ui: &mut Ui, radius_km: u32) -> Option<FilterAction> {
        let mut action = None;

        if ui
            .button(RichText::new("+").strong())
            .on_hover_text("Ampliar radio")
            .clicked()
        {
            action = Some(FilterAction::Increment);
        }
        if ui
            .button(RichText::new("-").strong())
            .on_hover_text("Reducir radio")
            .clicked()
        {
            action = Some(FilterAction::Decrement);
        }
        ui.label("km");
        ui.label(RichText::new(format_radius(radius_km)).size(20.0).strong());

        action
    }

    fn draw_empty_state(ui: &mut Ui, radius_km: u32) -> Option<FilterAction> {
        let mut action = None;
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(format!(
                "No se encontró ningún programa en el radio seleccionado [ {radius_km} km ]."
            ));
            ui.label(RichText::new("¿Desea ampliar rango de búsqueda?").strong());
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Aceptar").clicked() {
                    action = Some(FilterAction::Expand);
                }
                if ui.button("Regresar").clicked() {
                    action = Some(FilterAction::Dismiss);
                }
            });
        });
        action
    }

    fn draw_results(&self, ui: &mut Ui, visible_items: &[&T]) -> Option<String> {
        let mut selected_id = None;
        egui::ScrollArea::vertical()
            .id_salt(self.title)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for item in visible_items {
                    let is_selected = self.selected.as_deref() == Some(item.id());
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            let mut heading = RichText::new(item.heading()).strong();
                            if is_selected {
                                heading = heading.color(self.accent);
                            }
                            ui.label(heading);
                            if item.verified() {
                                ui.label(RichText::new("✔").color(self.accent))
                                    .on_hover_text("Organización verificada");
                            }
                        });
                        item.draw_card_meta(ui);
                        if ui.button("Detalles").clicked() {
                            selected_id = Some(item.id().to_owned());
                        }
                    });
                    ui.add_space(4.0);
                }
            });
        selected_id
    }

    fn draw_expand_prompt(&self, ctx: &Context, radius_km: u32) -> Option<FilterAction> {
        let mut window_open = true;
        let mut action = None;

        egui::Window::new("Sin resultados")
            .id(egui::Id::new(("expand_prompt", self.title)))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut window_open)
            .show(ctx, |ui| {
                ui.label(format!(
                    "No se encontró ningún programa dentro del radio seleccionado [ {radius_km} km ]."
                ));
                ui.label("¿Desea ampliar rango de búsqueda?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Aceptar").clicked() {
                        action = Some(FilterAction::Expand);
                    }
                    if ui.button("Regresar").clicked() {
                        action = Some(FilterAction::Dismiss);
                    }
                });
            });

        if !window_open {
            action = action.or(Some(FilterAction::Dismiss));
        }
        action
    }
}
