use egui::Ui;
use octofit_business::Resource;

/// One selectable tab per resource. Returns `true` if the selection changed.
pub fn resource_tabs(ui: &mut Ui, active: &mut Resource) -> bool {
    let before = *active;

    ui.horizontal(|ui| {
        ui.strong("OctoFit");
        ui.separator();
        for resource in Resource::ALL {
            ui.selectable_value(active, resource, resource.title());
        }
    });

    *active != before
}
