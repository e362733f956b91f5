use crate::WhiteboardApp;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            app.input.set_canvas_rect(canvas_rect);
            let events = app.input.process_input(ctx);
            app.handle_events(events);

            let mut surface =
                PainterSurface::new(&painter, canvas_rect, app.settings.theme.canvas_background());
            app.scene.render(&mut surface);

            if response.hovered() {
                ctx.set_cursor_icon(app.controller.cursor());
            }
        });
}
